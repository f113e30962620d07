use enumset::EnumSet;
use powerpatrol_quantities::energy::KilowattHours;
use serde::{Deserialize, Serialize};

use crate::core::usage::Usage;

/// Limit a warning refers to, also the key under which it gets dismissed.
#[derive(Debug, Hash, clap::ValueEnum, derive_more::Display, enumset::EnumSetType)]
pub enum Period {
    #[display("daily")]
    Daily,

    #[display("monthly")]
    Monthly,
}

/// User-configured usage limits.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    #[serde(default = "Limits::default_daily")]
    pub daily: KilowattHours,

    #[serde(default = "Limits::default_monthly")]
    pub monthly: KilowattHours,
}

impl Limits {
    const fn default_daily() -> KilowattHours {
        KilowattHours::new(20.0)
    }

    const fn default_monthly() -> KilowattHours {
        KilowattHours::new(500.0)
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self { daily: Self::default_daily(), monthly: Self::default_monthly() }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[must_use]
pub struct Breaches {
    pub daily: bool,
    pub monthly: bool,
}

impl Breaches {
    /// Flag every limit the usage strictly exceeds, unless the warning has been dismissed.
    pub fn evaluate(usage: Usage, limits: Limits, dismissed: EnumSet<Period>) -> Self {
        Self {
            daily: usage.daily > limits.daily && !dismissed.contains(Period::Daily),
            monthly: usage.monthly > limits.monthly && !dismissed.contains(Period::Monthly),
        }
    }

    #[must_use]
    pub const fn any(self) -> bool {
        self.daily || self.monthly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usage(daily: f64) -> Usage {
        Usage::from_daily(KilowattHours::from(daily))
    }

    #[test]
    fn test_daily_breach() {
        let breaches = Breaches::evaluate(usage(21.0), Limits::default(), EnumSet::empty());
        assert_eq!(breaches, Breaches { daily: true, monthly: true });
    }

    #[test]
    fn test_dismissed() {
        let breaches = Breaches::evaluate(usage(21.0), Limits::default(), Period::Daily.into());
        assert_eq!(breaches, Breaches { daily: false, monthly: true });
        let breaches = Breaches::evaluate(usage(21.0), Limits::default(), EnumSet::all());
        assert!(!breaches.any());
    }

    #[test]
    fn test_equal_is_not_a_breach() {
        let limits = Limits { daily: KilowattHours::from(20), monthly: KilowattHours::from(600) };
        let breaches = Breaches::evaluate(usage(20.0), limits, EnumSet::empty());
        assert_eq!(breaches, Breaches::default());
    }

    #[test]
    fn test_monthly_only() {
        // 17 units a day is fine, but 510 units a month is not.
        let breaches = Breaches::evaluate(usage(17.0), Limits::default(), EnumSet::empty());
        assert_eq!(breaches, Breaches { daily: false, monthly: true });
    }
}
