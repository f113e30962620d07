use bon::Builder;
use enumset::EnumSet;
use powerpatrol_quantities::{energy::KilowattHours, power::Watts, time::Hours};
use serde::{Deserialize, Serialize};

use crate::core::{month::Month, usage::UsageContext};

#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
    derive_more::FromStr,
)]
#[serde(transparent)]
pub struct ApplianceId(pub u32);

impl ApplianceId {
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// How often an appliance is actually used.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum UsageType {
    /// Every day, for the configured hours.
    #[default]
    #[display("regular")]
    Regular,

    /// About two days per month, amortized over the month.
    #[display("occasional")]
    Occasional,

    /// Every day, but only during the seasonal months.
    #[display("seasonal")]
    Seasonal,
}

impl UsageType {
    /// Share of days an occasional appliance is in use: 2 days out of a 30-day month.
    pub const OCCASIONAL_DUTY: f64 = 2.0 / 30.0;
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Builder)]
pub struct Appliance {
    /// Assigned by [`crate::household::Household::add`].
    #[builder(default)]
    pub id: ApplianceId,

    #[builder(into)]
    pub name: String,

    /// Free-text grouping, only used for display.
    #[builder(into)]
    pub category: String,

    pub wattage: Watts,

    pub hours_per_day: Hours,

    #[serde(default = "Appliance::default_is_on")]
    #[builder(default = true)]
    pub is_on: bool,

    #[serde(default)]
    #[builder(default)]
    pub usage_type: UsageType,

    /// Only meaningful for [`UsageType::Seasonal`], ignored otherwise.
    #[serde(default, skip_serializing_if = "EnumSet::is_empty")]
    #[builder(default)]
    pub seasonal_months: EnumSet<Month>,
}

impl Appliance {
    const fn default_is_on() -> bool {
        true
    }

    /// Daily hours after discounting for the usage frequency.
    pub fn effective_hours(&self, month: Month) -> Hours {
        match self.usage_type {
            UsageType::Regular => self.hours_per_day,
            UsageType::Occasional => self.hours_per_day * UsageType::OCCASIONAL_DUTY,
            UsageType::Seasonal if self.seasonal_months.contains(month) => self.hours_per_day,
            UsageType::Seasonal => Hours::ZERO,
        }
    }

    /// Energy this appliance adds to the daily total.
    ///
    /// Switched-off appliances contribute nothing. The values are not validated here:
    /// a negative wattage yields a negative contribution.
    pub fn daily_units(&self, context: &UsageContext) -> KilowattHours {
        if !self.is_on {
            return KilowattHours::ZERO;
        }
        let hours = self.effective_hours(context.month).into_inner();
        KilowattHours::from_watt_hours(self.wattage.0 * hours * context.multiplier)
    }

    /// Data-entry problems the appliance form is supposed to catch.
    pub fn issues(&self) -> Vec<ApplianceIssue> {
        let mut issues = Vec::new();
        if self.name.trim().is_empty() {
            issues.push(ApplianceIssue::EmptyName);
        }
        if self.wattage.0.is_nan() || self.wattage <= Watts::ZERO {
            issues.push(ApplianceIssue::NonPositiveWattage(self.wattage));
        }
        if !(Hours::ZERO..=Hours::ONE_DAY).contains(&self.hours_per_day) {
            issues.push(ApplianceIssue::HoursOutOfRange(self.hours_per_day));
        }
        if self.usage_type == UsageType::Seasonal && self.seasonal_months.is_empty() {
            issues.push(ApplianceIssue::NoSeasonalMonths);
        }
        issues
    }

    /// Apply the edited fields in place.
    pub fn apply(&mut self, update: ApplianceUpdate) {
        let ApplianceUpdate {
            name,
            category,
            wattage,
            hours_per_day,
            is_on,
            usage_type,
            seasonal_months,
        } = update;
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(wattage) = wattage {
            self.wattage = wattage;
        }
        if let Some(hours_per_day) = hours_per_day {
            self.hours_per_day = hours_per_day;
        }
        if let Some(is_on) = is_on {
            self.is_on = is_on;
        }
        if let Some(usage_type) = usage_type {
            self.usage_type = usage_type;
        }
        if let Some(seasonal_months) = seasonal_months {
            self.seasonal_months = seasonal_months;
        }
    }
}

/// Partial edit of an [`Appliance`], `None` keeps the current value.
#[derive(Clone, Debug, Default, Builder)]
pub struct ApplianceUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub wattage: Option<Watts>,
    pub hours_per_day: Option<Hours>,
    pub is_on: Option<bool>,
    pub usage_type: Option<UsageType>,
    pub seasonal_months: Option<EnumSet<Month>>,
}

#[derive(Copy, Clone, Debug, PartialEq, derive_more::Display)]
pub enum ApplianceIssue {
    #[display("name is empty")]
    EmptyName,

    #[display("wattage must be positive, got {_0}")]
    NonPositiveWattage(Watts),

    #[display("hours per day must be within 0..=24, got {_0}")]
    HoursOutOfRange(Hours),

    #[display("seasonal appliance has no seasonal months and never contributes")]
    NoSeasonalMonths,
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use enumset::enum_set;

    use super::*;

    fn tv() -> Appliance {
        Appliance::builder()
            .name("LED TV")
            .category("Entertainment")
            .wattage(Watts(80.0))
            .hours_per_day(Hours::from(5))
            .build()
    }

    #[test]
    fn test_regular_daily_units() {
        let context = UsageContext::new(Month::Oct, false);
        assert_eq!(tv().daily_units(&context), KilowattHours::from(0.4));
    }

    #[test]
    fn test_switched_off_contributes_nothing() {
        let context = UsageContext::new(Month::Oct, false);
        let appliance = Appliance { is_on: false, wattage: Watts(-500.0), ..tv() };
        assert_eq!(appliance.daily_units(&context), KilowattHours::ZERO);
    }

    #[test]
    fn test_occasional_equals_discounted_regular() {
        let context = UsageContext::new(Month::Oct, false);
        let occasional = Appliance { usage_type: UsageType::Occasional, ..tv() };
        let regular = Appliance { hours_per_day: Hours::from(5) * (2.0 / 30.0), ..tv() };
        assert_eq!(occasional.daily_units(&context), regular.daily_units(&context));
        assert_abs_diff_eq!(
            occasional.daily_units(&context).into_inner(),
            0.4 / 15.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_seasonal_in_and_out_of_season() {
        let heater = Appliance::builder()
            .name("Room Heater")
            .category("Appliances")
            .wattage(Watts(2000.0))
            .hours_per_day(Hours::from(4))
            .usage_type(UsageType::Seasonal)
            .seasonal_months(enum_set!(Month::Dec | Month::Jan | Month::Feb))
            .build();
        assert_eq!(
            heater.daily_units(&UsageContext::new(Month::Jan, false)),
            KilowattHours::from(8)
        );
        assert_eq!(heater.daily_units(&UsageContext::new(Month::Jul, false)), KilowattHours::ZERO);
    }

    #[test]
    fn test_seasonal_without_months_never_contributes() {
        let appliance = Appliance { usage_type: UsageType::Seasonal, ..tv() };
        assert_eq!(appliance.effective_hours(Month::Jan), Hours::ZERO);
        assert_eq!(appliance.issues(), vec![ApplianceIssue::NoSeasonalMonths]);
    }

    #[test]
    fn test_seasonal_months_ignored_for_regular() {
        let appliance = Appliance { seasonal_months: enum_set!(Month::Jan), ..tv() };
        assert_eq!(appliance.effective_hours(Month::Jul), Hours::from(5));
    }

    #[test]
    fn test_issues() {
        let appliance = Appliance {
            name: " ".to_owned(),
            wattage: Watts::ZERO,
            hours_per_day: Hours::from(25),
            ..tv()
        };
        assert_eq!(
            appliance.issues(),
            vec![
                ApplianceIssue::EmptyName,
                ApplianceIssue::NonPositiveWattage(Watts::ZERO),
                ApplianceIssue::HoursOutOfRange(Hours::from(25)),
            ]
        );
        assert!(tv().issues().is_empty());
    }

    #[test]
    fn test_apply_update() {
        let mut appliance = tv();
        appliance
            .apply(ApplianceUpdate::builder().hours_per_day(Hours::from(2)).is_on(false).build());
        assert_eq!(appliance.hours_per_day, Hours::from(2));
        assert!(!appliance.is_on);
        assert_eq!(appliance.name, "LED TV");
    }
}
