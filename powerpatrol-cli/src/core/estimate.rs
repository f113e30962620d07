use powerpatrol_quantities::cost::Cost;

use crate::core::{
    tariff::{SlabBill, Tariff},
    usage::{DAYS_PER_MONTH, Usage},
};

/// Daily and monthly bills for the aggregated usage.
///
/// The tariff tiers are defined in monthly terms, and yet the daily usage is billed on its own
/// against the same tiers to produce the «daily portion».
#[must_use]
pub struct Estimate {
    pub usage: Usage,
    pub daily: SlabBill,
    pub monthly: SlabBill,
}

impl Estimate {
    pub fn new(usage: Usage, tariff: &Tariff) -> Self {
        Self { usage, daily: tariff.bill(usage.daily), monthly: tariff.bill(usage.monthly) }
    }

    pub fn daily_cost(&self) -> Cost {
        self.daily.total() + Tariff::BUFFER / DAYS_PER_MONTH
    }

    pub fn monthly_cost(&self) -> Cost {
        self.monthly.total() + Tariff::BUFFER
    }
}
