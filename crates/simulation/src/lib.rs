use bevy::prelude::*;

pub mod buildings;
pub mod city_observation;
pub mod config;
pub mod departments;
pub mod ledger;
pub mod public_services;
pub mod simulation_sets;
pub mod taxes;
pub mod time_of_day;

#[cfg(test)]
pub mod test_harness;

pub use simulation_sets::SimulationSet;

/// Global tick counter incremented each FixedUpdate.
#[derive(Resource, Default)]
pub struct TickCounter(pub u64);

pub fn advance_tick_counter(mut tick: ResMut<TickCounter>) {
    tick.0 = tick.0.wrapping_add(1);
}

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // 10 Hz fixed tick; the clock constants in `config` assume this rate.
        app.insert_resource(Time::<Fixed>::from_hz(10.0));

        app.init_resource::<TickCounter>();
        app.configure_sets(
            FixedUpdate,
            (
                SimulationSet::PreSim,
                SimulationSet::Simulation,
                SimulationSet::PostSim,
            )
                .chain(),
        );
        app.add_systems(
            FixedUpdate,
            advance_tick_counter.in_set(SimulationSet::PreSim),
        );

        app.add_plugins((
            time_of_day::TimeOfDayPlugin,
            ledger::LedgerPlugin,
            departments::DepartmentsPlugin,
            public_services::PublicServicesPlugin,
            buildings::BuildingsPlugin,
        ));
    }
}
