//! # TestCity — headless integration test harness
//!
//! A fluent builder wrapping `bevy::app::App` + `SimulationPlugin` for
//! running integration tests without a window or renderer.

use bevy::app::App;
use bevy::prelude::*;

use crate::buildings::{Building, BuildingKind, ConstructBuildingEvent, DemolishBuildingEvent};
use crate::config::TICKS_PER_DAY;
use crate::departments::{DepartmentId, LawDepartment};
use crate::ledger::CityLedger;
use crate::public_services::{CollectTaxEvent, PublicServicesDepartment};
use crate::taxes::TaxKind;
use crate::time_of_day::GameClock;
use crate::SimulationPlugin;

/// A headless Bevy App wrapping `SimulationPlugin`.
///
/// Use builder methods to set up city state, then `tick()` to advance the
/// simulation and assert on the resulting resources.
pub struct TestCity {
    app: App,
}

impl TestCity {
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(SimulationPlugin);

        // Run one update so Startup systems execute.
        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // World setup (builder pattern — consumes and returns Self)
    // -----------------------------------------------------------------------

    /// Deposit `amount` into the city treasury.
    pub fn with_treasury(mut self, amount: f64) -> Self {
        self.app
            .world_mut()
            .resource_mut::<CityLedger>()
            .increase_treasury(amount);
        self
    }

    /// Stock the five resource levels.
    pub fn with_resources(
        mut self,
        water: u32,
        energy: u32,
        wood: u32,
        steel: u32,
        materials: u32,
    ) -> Self {
        self.app
            .world_mut()
            .resource_mut::<CityLedger>()
            .increase_resources(water, energy, wood, steel, materials);
        self
    }

    // -----------------------------------------------------------------------
    // Simulation driving
    // -----------------------------------------------------------------------

    /// Advance the simulation by `n` fixed ticks (100 ms each at 10 Hz).
    pub fn tick(&mut self, n: u32) {
        let dt = std::time::Duration::from_millis(100);
        // Under MinimalPlugins the default `TimeUpdateStrategy::Automatic`
        // recomputes the virtual delta from the real wall clock each update,
        // which would overwrite a manual `advance_by`. Pin the per-update
        // advance to exactly one fixed timestep so each `update()` runs
        // `FixedUpdate` exactly once.
        self.app
            .world_mut()
            .insert_resource(bevy::time::TimeUpdateStrategy::ManualDuration(dt));
        for _ in 0..n {
            self.app.update();
        }
    }

    /// Advance the simulation by whole game days.
    pub fn tick_days(&mut self, days: u32) {
        self.tick(days * TICKS_PER_DAY);
    }

    /// Request an on-demand collection of one tax kind and process it.
    pub fn request_tax(&mut self, kind: TaxKind) {
        self.app.world_mut().send_event(CollectTaxEvent { kind });
        self.tick(1);
    }

    /// Collect by external name, bypassing the event queue. Returns whether
    /// the name mapped to a configured kind.
    pub fn collect_tax_named(&mut self, name: &str) -> bool {
        self.app.world_mut().resource_scope(
            |world, department: Mut<PublicServicesDepartment>| {
                let mut ledger = world.resource_mut::<CityLedger>();
                department.collect_tax_named(name, &mut ledger)
            },
        )
    }

    /// Order a building for a department and process the order.
    pub fn construct(&mut self, kind: BuildingKind, department: DepartmentId) {
        self.app
            .world_mut()
            .send_event(ConstructBuildingEvent { kind, department });
        self.tick(1);
    }

    /// Demolish a building and process the order.
    pub fn demolish(&mut self, entity: Entity, department: DepartmentId) {
        self.app
            .world_mut()
            .send_event(DemolishBuildingEvent { entity, department });
        self.tick(1);
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn ledger(&self) -> &CityLedger {
        self.app.world().resource::<CityLedger>()
    }

    pub fn clock(&self) -> &GameClock {
        self.app.world().resource::<GameClock>()
    }

    pub fn services(&self) -> &PublicServicesDepartment {
        self.app.world().resource::<PublicServicesDepartment>()
    }

    pub fn law(&self) -> &LawDepartment {
        self.app.world().resource::<LawDepartment>()
    }

    /// Count all building entities in the world.
    pub fn building_count(&mut self) -> usize {
        let world = self.app.world_mut();
        let mut query = world.query::<&Building>();
        query.iter(world).count()
    }
}
