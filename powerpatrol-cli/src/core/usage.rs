use powerpatrol_quantities::{energy::KilowattHours, power::Watts};

use crate::core::{appliance::Appliance, month::Month};

/// Fixed month length used for every daily-to-monthly conversion.
///
/// This is a simplification, not calendar-accurate.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Point-in-time inputs of the aggregation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct UsageContext {
    /// Global reduction multiplier, `0 < multiplier <= 1`.
    pub multiplier: f64,

    /// Month against which seasonal appliances are checked.
    pub month: Month,
}

impl UsageContext {
    pub const NORMAL_MULTIPLIER: f64 = 1.0;

    /// Vacation mode: 80% less usage across the board.
    pub const VACATION_MULTIPLIER: f64 = 0.2;

    #[must_use]
    pub const fn new(month: Month, is_vacation: bool) -> Self {
        Self {
            multiplier: if is_vacation { Self::VACATION_MULTIPLIER } else { Self::NORMAL_MULTIPLIER },
            month,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct Usage {
    pub daily: KilowattHours,
    pub monthly: KilowattHours,
}

impl Usage {
    pub fn from_daily(daily: KilowattHours) -> Self {
        Self { daily, monthly: daily * DAYS_PER_MONTH }
    }

    /// Sum up the daily contributions of the switched-on appliances.
    ///
    /// No rounding and no clamping: whatever the appliances say, gets summed.
    pub fn aggregate<'a>(
        appliances: impl IntoIterator<Item = &'a Appliance>,
        context: &UsageContext,
    ) -> Self {
        Self::from_daily(appliances.into_iter().map(|appliance| appliance.daily_units(context)).sum())
    }
}

/// Headline device counters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ActivitySummary {
    pub n_devices: usize,
    pub n_active: usize,

    /// Nameplate power of the switched-on appliances.
    pub active_wattage: Watts,
}

impl<'a> FromIterator<&'a Appliance> for ActivitySummary {
    fn from_iter<T: IntoIterator<Item = &'a Appliance>>(iter: T) -> Self {
        let mut summary = Self { n_devices: 0, n_active: 0, active_wattage: Watts::ZERO };
        for appliance in iter {
            summary.n_devices += 1;
            if appliance.is_on {
                summary.n_active += 1;
                summary.active_wattage = summary.active_wattage + appliance.wattage;
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use enumset::enum_set;
    use powerpatrol_quantities::time::Hours;

    use super::*;
    use crate::core::appliance::UsageType;

    fn appliances() -> Vec<Appliance> {
        vec![
            Appliance::builder()
                .name("LED TV")
                .category("Entertainment")
                .wattage(Watts(80.0))
                .hours_per_day(Hours::from(5))
                .build(),
            Appliance::builder()
                .name("Ceiling Fan")
                .category("Cooling")
                .wattage(Watts(75.0))
                .hours_per_day(Hours::from(8))
                .build(),
            Appliance::builder()
                .name("Iron Box")
                .category("Appliances")
                .wattage(Watts(1000.0))
                .hours_per_day(Hours::from(0.5))
                .usage_type(UsageType::Occasional)
                .build(),
            Appliance::builder()
                .name("Air Conditioner")
                .category("Cooling")
                .wattage(Watts(1500.0))
                .hours_per_day(Hours::from(6))
                .usage_type(UsageType::Seasonal)
                .seasonal_months(enum_set!(Month::Apr | Month::May | Month::Jun))
                .build(),
            Appliance::builder()
                .name("Desktop Computer")
                .category("Electronics")
                .wattage(Watts(200.0))
                .hours_per_day(Hours::from(5))
                .is_on(false)
                .build(),
        ]
    }

    #[test]
    fn test_single_regular_appliance() {
        let usage = Usage::aggregate(&appliances()[..1], &UsageContext::new(Month::Oct, false));
        assert_eq!(usage.daily, KilowattHours::from(0.4));
        assert_abs_diff_eq!(usage.monthly.into_inner(), 12.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mixed_appliances_out_of_season() {
        let usage = Usage::aggregate(&appliances(), &UsageContext::new(Month::Oct, false));
        // 0.4 (TV) + 0.6 (fan) + 0.5 × 2/30 (iron), the air conditioner is out of season:
        assert_abs_diff_eq!(usage.daily.into_inner(), 1.0 + 0.5 / 15.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mixed_appliances_in_season() {
        let usage = Usage::aggregate(&appliances(), &UsageContext::new(Month::May, false));
        assert_abs_diff_eq!(usage.daily.into_inner(), 10.0 + 0.5 / 15.0, epsilon = 1e-12);
    }

    #[test]
    fn test_monthly_is_exactly_thirty_days() {
        for month in [Month::Jan, Month::May, Month::Oct] {
            for is_vacation in [false, true] {
                let usage =
                    Usage::aggregate(&appliances(), &UsageContext::new(month, is_vacation));
                assert_eq!(usage.monthly, usage.daily * 30.0);
            }
        }
    }

    #[test]
    fn test_vacation_mode_scales_by_one_fifth() {
        let normal = Usage::aggregate(&appliances(), &UsageContext::new(Month::May, false));
        let vacation = Usage::aggregate(&appliances(), &UsageContext::new(Month::May, true));
        assert_abs_diff_eq!(
            vacation.daily.into_inner(),
            normal.daily.into_inner() * 0.2,
            epsilon = 1e-12
        );
        for appliance in appliances() {
            assert_abs_diff_eq!(
                appliance.daily_units(&UsageContext::new(Month::May, true)).into_inner() * 5.0,
                appliance.daily_units(&UsageContext::new(Month::May, false)).into_inner(),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_empty() {
        let usage = Usage::aggregate(&[], &UsageContext::new(Month::Jan, false));
        assert_eq!(usage.daily, KilowattHours::ZERO);
        assert_eq!(usage.monthly, KilowattHours::ZERO);
    }

    #[test]
    fn test_negative_wattage_is_summed_as_is() {
        let broken = Appliance { wattage: Watts(-80.0), ..appliances()[0].clone() };
        let usage = Usage::aggregate([&broken], &UsageContext::new(Month::Jan, false));
        assert_eq!(usage.daily, KilowattHours::from(-0.4));
    }

    #[test]
    fn test_activity_summary() {
        let summary: ActivitySummary = appliances().iter().collect();
        assert_eq!(summary.n_devices, 5);
        assert_eq!(summary.n_active, 4);
        assert_eq!(summary.active_wattage, Watts(2655.0));
    }
}
