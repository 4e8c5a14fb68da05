//! Civica demo runner: a headless city that stocks its ledger, constructs
//! civic buildings, and collects taxes on the monthly cadence, reporting a
//! JSON snapshot every 30 game days.

use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use rand::seq::SliceRandom;

use simulation::buildings::{BuildingKind, ConstructBuildingEvent};
use simulation::city_observation::CityObservation;
use simulation::departments::{DepartmentId, LawDepartment};
use simulation::ledger::CityLedger;
use simulation::public_services::{CollectTaxEvent, PublicServicesDepartment};
use simulation::taxes::TaxKind;
use simulation::time_of_day::GameClock;
use simulation::{SimulationPlugin, SimulationSet, TickCounter};

/// Game days the demo runs before exiting.
const DEMO_DAYS: u32 = 120;

/// Game time runs well above real time so the demo finishes in seconds.
const DEMO_TIME_SCALE: f32 = 600.0;

fn main() {
    App::new()
        .add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::ZERO)))
        .add_plugins(LogPlugin::default())
        .add_plugins(SimulationPlugin)
        .add_systems(Startup, seed_city)
        .add_systems(FixedUpdate, drive_demo.in_set(SimulationSet::PostSim))
        .run();
}

fn seed_city(
    mut time: ResMut<Time<Virtual>>,
    mut ledger: ResMut<CityLedger>,
    mut law: ResMut<LawDepartment>,
) {
    time.set_relative_speed(DEMO_TIME_SCALE);

    ledger.increase_resources(500, 500, 600, 700, 800);
    ledger.increase_treasury(2_500.0);

    law.add_law("Noise curfew after 22:00");
    law.add_law("No open fires in the dry season");
}

#[allow(clippy::too_many_arguments)]
fn drive_demo(
    mut last_day: Local<u32>,
    clock: Res<GameClock>,
    tick: Res<TickCounter>,
    ledger: Res<CityLedger>,
    services: Res<PublicServicesDepartment>,
    law: Res<LawDepartment>,
    mut constructions: EventWriter<ConstructBuildingEvent>,
    mut tax_requests: EventWriter<CollectTaxEvent>,
    mut exit: EventWriter<AppExit>,
) {
    // Act once per game day.
    if clock.day == *last_day {
        return;
    }
    *last_day = clock.day;

    // A weekly construction order for public services.
    if clock.day.is_multiple_of(7) {
        let catalog = [
            BuildingKind::PoliceStation,
            BuildingKind::FireStation,
            BuildingKind::WaterTower,
            BuildingKind::Warehouse,
            BuildingKind::Park,
        ];
        let mut rng = rand::thread_rng();
        if let Some(kind) = catalog.choose(&mut rng) {
            constructions.send(ConstructBuildingEvent {
                kind: *kind,
                department: DepartmentId::PublicServices,
            });
        }
    }

    // The law department gets its courthouse early on.
    if clock.day == 10 {
        constructions.send(ConstructBuildingEvent {
            kind: BuildingKind::Courthouse,
            department: DepartmentId::Law,
        });
    }

    // An out-of-cycle sales collection mid-month.
    if clock.day % 30 == 15 {
        tax_requests.send(CollectTaxEvent {
            kind: TaxKind::Sales,
        });
    }

    // Monthly city report, the day after scheduled collection.
    if clock.day % 30 == 1 && clock.day > 1 {
        let observation = CityObservation::capture(tick.0, &clock, &ledger, &services, &law);
        info!("City report, {}:\n{}", clock.formatted(), observation.to_json());
    }

    if clock.day > DEMO_DAYS {
        info!("Demo complete after {} game days", DEMO_DAYS);
        exit.send(AppExit::Success);
    }
}
