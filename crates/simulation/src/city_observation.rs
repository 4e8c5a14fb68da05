//! Compact, typed, serializable snapshot of the city state.
//!
//! `CityObservation` captures the ledger, clock, and department rosters
//! into a single struct so an external caller (the demo runner, a log
//! consumer) can inspect the city without touching the ECS.

use serde::{Deserialize, Serialize};

use crate::departments::LawDepartment;
use crate::ledger::CityLedger;
use crate::public_services::PublicServicesDepartment;
use crate::time_of_day::GameClock;

/// A point-in-time snapshot of the city.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CityObservation {
    // -- Time ---------------------------------------------------------------
    pub tick: u64,
    pub day: u32,
    pub hour: f32,

    // -- Ledger -------------------------------------------------------------
    pub treasury: f64,
    pub water: u32,
    pub energy: u32,
    pub wood: u32,
    pub steel: u32,
    pub materials: u32,

    // -- Departments --------------------------------------------------------
    pub public_services_buildings: usize,
    pub law_buildings: usize,
    pub laws_in_force: usize,
}

impl CityObservation {
    pub fn capture(
        tick: u64,
        clock: &GameClock,
        ledger: &CityLedger,
        services: &PublicServicesDepartment,
        law: &LawDepartment,
    ) -> Self {
        Self {
            tick,
            day: clock.day,
            hour: clock.hour,
            treasury: ledger.treasury(),
            water: ledger.water(),
            energy: ledger.energy(),
            wood: ledger.wood(),
            steel: ledger.steel(),
            materials: ledger.materials(),
            public_services_buildings: services.department.building_count(),
            law_buildings: law.department.building_count(),
            laws_in_force: law.laws().len(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
