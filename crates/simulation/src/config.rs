/// Game-minutes that pass per fixed simulation tick (10 Hz).
pub const MINUTES_PER_TICK: f32 = 15.0;

/// Fixed ticks that make up one full game day (24h * 60min / MINUTES_PER_TICK).
pub const TICKS_PER_DAY: u32 = (24 * 60) / 15;

/// Days between scheduled city-wide tax collections.
pub const TAX_COLLECTION_INTERVAL_DAYS: u32 = 30;

/// Aggregate taxable wages across the city per collection period.
pub const CITY_WAGE_BASE: f64 = 12_000.0;

/// Aggregate taxable sales volume across the city per collection period.
pub const SALES_VOLUME_BASE: f64 = 8_000.0;

pub const INCOME_TAX_RATE: f64 = 0.15;
pub const PROPERTY_TAX_BASE: f64 = 250.0;
pub const PROPERTY_TAX_RATE: f64 = 0.02;
pub const SALES_TAX_RATE: f64 = 0.08;
