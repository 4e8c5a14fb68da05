//! Deterministic simulation ordering via `SystemSet` phases.
//!
//! Configured as a chain in `FixedUpdate`: `PreSim` → `Simulation` →
//! `PostSim`. Plugins place their systems into the appropriate set so that
//! inter-plugin ordering is explicit rather than relying on implicit timing
//! assumptions.

use bevy::prelude::*;

/// Ordered phases for systems running in the `FixedUpdate` schedule.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Per-tick setup: tick counter, game clock.
    PreSim,
    /// Core simulation: tax collection, construction, demolition.
    Simulation,
    /// Aggregation and reporting. Systems here only read simulation state.
    PostSim,
}
