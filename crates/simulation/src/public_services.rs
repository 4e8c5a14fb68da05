//! The public-services department: owns one tax policy per tax kind and
//! dispatches collection requests to the matching policy.

use std::collections::BTreeMap;

use bevy::prelude::*;

use crate::config::TAX_COLLECTION_INTERVAL_DAYS;
use crate::departments::Department;
use crate::ledger::CityLedger;
use crate::taxes::{IncomeTax, PropertyTax, SalesTax, TaxKind, TaxPolicy};
use crate::time_of_day::GameClock;
use crate::SimulationSet;

/// Owns the three tax policies, keyed by kind so dispatch never relies on
/// positional coupling. Policies are installed at construction and live as
/// long as the department.
#[derive(Resource)]
pub struct PublicServicesDepartment {
    pub department: Department,
    policies: BTreeMap<TaxKind, Box<dyn TaxPolicy>>,
    last_collection_day: u32,
}

impl Default for PublicServicesDepartment {
    fn default() -> Self {
        let mut policies: BTreeMap<TaxKind, Box<dyn TaxPolicy>> = BTreeMap::new();
        policies.insert(TaxKind::Income, Box::new(IncomeTax::default()));
        policies.insert(TaxKind::Property, Box::new(PropertyTax::default()));
        policies.insert(TaxKind::Sales, Box::new(SalesTax::default()));

        Self {
            department: Department::new("Public Services"),
            policies,
            last_collection_day: 0,
        }
    }
}

impl PublicServicesDepartment {
    /// Collect one tax kind, depositing into the ledger. Returns the amount.
    pub fn collect_tax(&self, kind: TaxKind, ledger: &mut CityLedger) -> f64 {
        match self.policies.get(&kind) {
            Some(policy) => {
                let levy = policy.collect(ledger);
                info!("Collected {:.2} in {} tax", levy, kind.name());
                levy
            }
            None => {
                warn!("No tax policy configured for {} tax", kind.name());
                0.0
            }
        }
    }

    /// String-facing collection entry point. An unrecognized kind is an
    /// explicitly reported failure: the ledger is untouched and the call
    /// returns `false`.
    pub fn collect_tax_named(&self, name: &str, ledger: &mut CityLedger) -> bool {
        match TaxKind::parse(name) {
            Some(kind) => {
                self.collect_tax(kind, ledger);
                true
            }
            None => {
                warn!("Unrecognized tax kind '{}'", name);
                false
            }
        }
    }

    pub fn policy_count(&self) -> usize {
        self.policies.len()
    }

    pub fn last_collection_day(&self) -> u32 {
        self.last_collection_day
    }
}

/// On-demand request to collect one tax kind.
#[derive(Event, Debug, Clone, Copy)]
pub struct CollectTaxEvent {
    pub kind: TaxKind,
}

pub fn collect_requested_taxes(
    mut events: EventReader<CollectTaxEvent>,
    department: Res<PublicServicesDepartment>,
    mut ledger: ResMut<CityLedger>,
) {
    for event in events.read() {
        department.collect_tax(event.kind, &mut ledger);
    }
}

/// Scheduled city-wide collection: every `TAX_COLLECTION_INTERVAL_DAYS`
/// game days, all three kinds are collected in `TaxKind::ALL` order.
pub fn collect_monthly_taxes(
    clock: Res<GameClock>,
    mut department: ResMut<PublicServicesDepartment>,
    mut ledger: ResMut<CityLedger>,
) {
    if clock.day < department.last_collection_day + TAX_COLLECTION_INTERVAL_DAYS {
        return;
    }
    department.last_collection_day = clock.day;

    let mut total = 0.0;
    for kind in TaxKind::ALL {
        total += department.collect_tax(kind, &mut ledger);
    }
    info!(
        "Tax collection on day {}: {:.2} deposited",
        clock.day, total
    );
}

pub struct PublicServicesPlugin;

impl Plugin for PublicServicesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PublicServicesDepartment>()
            .add_event::<CollectTaxEvent>()
            .add_systems(
                FixedUpdate,
                (collect_monthly_taxes, collect_requested_taxes)
                    .chain()
                    .in_set(SimulationSet::Simulation),
            );
    }
}
