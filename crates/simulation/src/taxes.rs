//! Tax kinds and the pluggable tax-policy interface.
//!
//! Each `TaxKind` maps to exactly one `TaxPolicy` for the lifetime of the
//! public-services department. A policy computes its levy from the current
//! ledger plus its own configured parameters and deposits it into the
//! treasury; policies never touch the stockpiles.

use serde::{Deserialize, Serialize};

use crate::config::{
    CITY_WAGE_BASE, INCOME_TAX_RATE, PROPERTY_TAX_BASE, PROPERTY_TAX_RATE, SALES_TAX_RATE,
    SALES_VOLUME_BASE,
};
use crate::ledger::CityLedger;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TaxKind {
    Income,
    Property,
    Sales,
}

impl TaxKind {
    pub const ALL: [TaxKind; 3] = [TaxKind::Income, TaxKind::Property, TaxKind::Sales];

    pub fn name(self) -> &'static str {
        match self {
            TaxKind::Income => "income",
            TaxKind::Property => "property",
            TaxKind::Sales => "sales",
        }
    }

    /// Parse a kind from its external name. Case-insensitive; returns `None`
    /// for anything that is not a configured tax category.
    pub fn parse(name: &str) -> Option<TaxKind> {
        TaxKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
    }
}

/// A single collection capability: compute a levy against the current ledger
/// and deposit it. Implementations carry only their configured parameters.
pub trait TaxPolicy: Send + Sync {
    /// Collect this tax, depositing into the treasury. Returns the amount.
    fn collect(&self, ledger: &mut CityLedger) -> f64;
}

/// Flat levy on the city-wide wage base.
#[derive(Debug, Clone, Copy)]
pub struct IncomeTax {
    pub rate: f64,
}

impl Default for IncomeTax {
    fn default() -> Self {
        Self {
            rate: INCOME_TAX_RATE,
        }
    }
}

impl TaxPolicy for IncomeTax {
    fn collect(&self, ledger: &mut CityLedger) -> f64 {
        let levy = CITY_WAGE_BASE * self.rate;
        ledger.increase_treasury(levy);
        levy
    }
}

/// Flat base levy plus a percentage of the current treasury.
#[derive(Debug, Clone, Copy)]
pub struct PropertyTax {
    pub base: f64,
    pub rate: f64,
}

impl Default for PropertyTax {
    fn default() -> Self {
        Self {
            base: PROPERTY_TAX_BASE,
            rate: PROPERTY_TAX_RATE,
        }
    }
}

impl TaxPolicy for PropertyTax {
    fn collect(&self, ledger: &mut CityLedger) -> f64 {
        let levy = self.base + ledger.treasury() * self.rate;
        ledger.increase_treasury(levy);
        levy
    }
}

/// Levy on the city-wide sales volume.
#[derive(Debug, Clone, Copy)]
pub struct SalesTax {
    pub rate: f64,
}

impl Default for SalesTax {
    fn default() -> Self {
        Self {
            rate: SALES_TAX_RATE,
        }
    }
}

impl TaxPolicy for SalesTax {
    fn collect(&self, ledger: &mut CityLedger) -> f64 {
        let levy = SALES_VOLUME_BASE * self.rate;
        ledger.increase_treasury(levy);
        levy
    }
}
