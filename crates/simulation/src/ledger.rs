//! The city ledger: five resource stockpiles plus the treasury.
//!
//! All mutation goes through guarded methods. Decreases are atomic
//! all-or-nothing: every constraint is checked before any field is touched,
//! so a rejected call leaves the ledger exactly as it was. "Not enough" is a
//! normal outcome reported through the return value, never an error that
//! stops the simulation.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// City-wide stockpile and treasury. Inserted once by `SimulationPlugin`
/// and owned by the `World`; systems borrow it via `Res`/`ResMut`.
///
/// Invariant: every stockpile and the treasury are >= 0 at every externally
/// observable point.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct CityLedger {
    water: u32,
    energy: u32,
    wood: u32,
    steel: u32,
    materials: u32,
    treasury: f64,
}

impl CityLedger {
    pub fn water(&self) -> u32 {
        self.water
    }

    pub fn energy(&self) -> u32 {
        self.energy
    }

    pub fn wood(&self) -> u32 {
        self.wood
    }

    pub fn steel(&self) -> u32 {
        self.steel
    }

    pub fn materials(&self) -> u32 {
        self.materials
    }

    pub fn treasury(&self) -> f64 {
        self.treasury
    }

    /// Whether every stockpile covers the corresponding requested deduction.
    pub fn has_resources(
        &self,
        water: u32,
        energy: u32,
        wood: u32,
        steel: u32,
        materials: u32,
    ) -> bool {
        self.water >= water
            && self.energy >= energy
            && self.wood >= wood
            && self.steel >= steel
            && self.materials >= materials
    }

    /// Whether the treasury covers `amount`.
    pub fn has_funds(&self, amount: f64) -> bool {
        self.treasury - amount >= 0.0
    }

    /// Deduct from all five stockpiles at once.
    ///
    /// Every constraint is checked before any field is mutated: if a single
    /// stockpile falls short the whole call is rejected and nothing changes.
    pub fn decrease_resources(
        &mut self,
        water: u32,
        energy: u32,
        wood: u32,
        steel: u32,
        materials: u32,
    ) -> bool {
        if !self.has_resources(water, energy, wood, steel, materials) {
            warn!(
                "Not enough resources: requested water {}, energy {}, wood {}, steel {}, materials {} against {}",
                water, energy, wood, steel, materials,
                self.stockpile_summary()
            );
            return false;
        }

        self.water -= water;
        self.energy -= energy;
        self.wood -= wood;
        self.steel -= steel;
        self.materials -= materials;

        info!("Updated city stockpile: {}", self.stockpile_summary());
        true
    }

    /// Add to all five stockpiles. Always succeeds; there is no storage cap.
    pub fn increase_resources(
        &mut self,
        water: u32,
        energy: u32,
        wood: u32,
        steel: u32,
        materials: u32,
    ) {
        self.water = self.water.saturating_add(water);
        self.energy = self.energy.saturating_add(energy);
        self.wood = self.wood.saturating_add(wood);
        self.steel = self.steel.saturating_add(steel);
        self.materials = self.materials.saturating_add(materials);

        info!("Updated city stockpile: {}", self.stockpile_summary());
    }

    /// Deduct `amount` from the treasury; rejected with no mutation when the
    /// treasury would go negative.
    pub fn decrease_treasury(&mut self, amount: f64) -> bool {
        debug_assert!(amount >= 0.0, "deduction amounts are non-negative");
        if !self.has_funds(amount) {
            warn!(
                "Not enough funds: requested {:.2}, treasury holds {:.2}",
                amount, self.treasury
            );
            return false;
        }

        self.treasury -= amount;
        info!("Updated city treasury: {:.2}", self.treasury);
        true
    }

    /// Deposit `amount` into the treasury. Always succeeds; no cap.
    pub fn increase_treasury(&mut self, amount: f64) {
        debug_assert!(amount >= 0.0, "deposit amounts are non-negative");
        self.treasury += amount;
        info!("Updated city treasury: {:.2}", self.treasury);
    }

    /// One-line stockpile description for status lines.
    pub fn stockpile_summary(&self) -> String {
        format!(
            "water: {}, energy: {}, wood: {}, steel: {}, materials: {}",
            self.water, self.energy, self.wood, self.steel, self.materials
        )
    }
}

pub struct LedgerPlugin;

impl Plugin for LedgerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CityLedger>();
    }
}
