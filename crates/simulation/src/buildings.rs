//! Civic building catalog and the construction/demolition flow.
//!
//! Construction is the canonical caller of the ledger's guarded decrease
//! path: an order is checked against the stockpile and the treasury before
//! either is deducted, so a denied order never leaves a partial deduction.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::departments::{Department, DepartmentId, LawDepartment};
use crate::ledger::CityLedger;
use crate::public_services::PublicServicesDepartment;
use crate::SimulationSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingKind {
    CityHall,
    PoliceStation,
    FireStation,
    Courthouse,
    WaterTower,
    PowerPlant,
    Warehouse,
    Park,
}

/// What a construction order deducts from the city ledger.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstructionCost {
    pub water: u32,
    pub energy: u32,
    pub wood: u32,
    pub steel: u32,
    pub materials: u32,
    pub funds: f64,
}

impl BuildingKind {
    pub fn name(self) -> &'static str {
        match self {
            BuildingKind::CityHall => "City Hall",
            BuildingKind::PoliceStation => "Police Station",
            BuildingKind::FireStation => "Fire Station",
            BuildingKind::Courthouse => "Courthouse",
            BuildingKind::WaterTower => "Water Tower",
            BuildingKind::PowerPlant => "Power Plant",
            BuildingKind::Warehouse => "Warehouse",
            BuildingKind::Park => "Park",
        }
    }

    pub fn construction_cost(self) -> ConstructionCost {
        let (water, energy, wood, steel, materials, funds) = match self {
            BuildingKind::CityHall => (20, 30, 40, 60, 80, 900.0),
            BuildingKind::PoliceStation => (10, 15, 20, 30, 40, 450.0),
            BuildingKind::FireStation => (15, 15, 20, 30, 40, 450.0),
            BuildingKind::Courthouse => (10, 20, 30, 40, 60, 600.0),
            BuildingKind::WaterTower => (0, 10, 10, 40, 30, 350.0),
            BuildingKind::PowerPlant => (10, 0, 10, 80, 50, 800.0),
            BuildingKind::Warehouse => (0, 5, 40, 20, 30, 250.0),
            BuildingKind::Park => (10, 0, 20, 0, 10, 120.0),
        };
        ConstructionCost {
            water,
            energy,
            wood,
            steel,
            materials,
            funds,
        }
    }
}

#[derive(Component, Debug, Clone, Copy)]
pub struct Building {
    pub kind: BuildingKind,
}

/// Order a new building for a department.
#[derive(Event, Debug, Clone, Copy)]
pub struct ConstructBuildingEvent {
    pub kind: BuildingKind,
    pub department: DepartmentId,
}

/// Tear a building down and drop it from its department's roster.
#[derive(Event, Debug, Clone, Copy)]
pub struct DemolishBuildingEvent {
    pub entity: Entity,
    pub department: DepartmentId,
}

fn roster_mut<'a>(
    id: DepartmentId,
    services: &'a mut PublicServicesDepartment,
    law: &'a mut LawDepartment,
) -> &'a mut Department {
    match id {
        DepartmentId::PublicServices => &mut services.department,
        DepartmentId::Law => &mut law.department,
    }
}

pub fn process_construction(
    mut commands: Commands,
    mut events: EventReader<ConstructBuildingEvent>,
    mut ledger: ResMut<CityLedger>,
    mut services: ResMut<PublicServicesDepartment>,
    mut law: ResMut<LawDepartment>,
) {
    for event in events.read() {
        let cost = event.kind.construction_cost();

        // Check the whole order before deducting anything, so a denied
        // order cannot leave a partial deduction across stockpile and
        // treasury.
        let payable = ledger.has_resources(cost.water, cost.energy, cost.wood, cost.steel, cost.materials)
            && ledger.has_funds(cost.funds);
        if !payable {
            warn!(
                "Construction of {} for {} denied: insufficient resources or funds",
                event.kind.name(),
                event.department.name()
            );
            continue;
        }

        ledger.decrease_resources(cost.water, cost.energy, cost.wood, cost.steel, cost.materials);
        ledger.decrease_treasury(cost.funds);

        let entity = commands.spawn(Building { kind: event.kind }).id();
        roster_mut(event.department, &mut services, &mut law).add_building(entity);
        info!(
            "Constructed {} for the {} department",
            event.kind.name(),
            event.department.name()
        );
    }
}

pub fn process_demolition(
    mut commands: Commands,
    mut events: EventReader<DemolishBuildingEvent>,
    mut services: ResMut<PublicServicesDepartment>,
    mut law: ResMut<LawDepartment>,
) {
    for event in events.read() {
        roster_mut(event.department, &mut services, &mut law).remove_building(event.entity);
        if let Some(mut entity) = commands.get_entity(event.entity) {
            entity.despawn();
            info!("Demolished building for the {} department", event.department.name());
        }
    }
}

pub struct BuildingsPlugin;

impl Plugin for BuildingsPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ConstructBuildingEvent>()
            .add_event::<DemolishBuildingEvent>()
            .add_systems(
                FixedUpdate,
                (process_construction, process_demolition)
                    .chain()
                    .in_set(SimulationSet::Simulation),
            );
    }
}
