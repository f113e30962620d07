use enumset::{EnumSet, enum_set};
use powerpatrol_quantities::{power::Watts, time::Hours};

use crate::core::{
    appliance::{Appliance, UsageType},
    month::Month,
};

/// Typical appliance to start from when adding one.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub category: &'static str,
    pub wattage: Watts,

    /// Average daily hours of use.
    pub hours_per_day: Hours,

    pub usage_type: UsageType,
    pub seasonal_months: EnumSet<Month>,
}

impl Preset {
    const fn regular(name: &'static str, category: &'static str, wattage: f64, hours: f64) -> Self {
        Self {
            name,
            category,
            wattage: Watts(wattage),
            hours_per_day: Hours::new(hours),
            usage_type: UsageType::Regular,
            seasonal_months: EnumSet::empty(),
        }
    }

    const fn occasional(self) -> Self {
        Self { usage_type: UsageType::Occasional, ..self }
    }

    const fn seasonal(self, months: EnumSet<Month>) -> Self {
        Self { usage_type: UsageType::Seasonal, seasonal_months: months, ..self }
    }

    /// Look the preset up by its name, ignoring the case.
    #[must_use]
    pub fn find(name: &str) -> Option<&'static Self> {
        PRESETS.iter().find(|preset| preset.name.eq_ignore_ascii_case(name.trim()))
    }

    /// New switched-on appliance, the identifier is assigned when it gets added to the household.
    pub fn to_appliance(&self) -> Appliance {
        Appliance::builder()
            .name(self.name)
            .category(self.category)
            .wattage(self.wattage)
            .hours_per_day(self.hours_per_day)
            .usage_type(self.usage_type)
            .seasonal_months(self.seasonal_months)
            .build()
    }
}

pub static PRESETS: [Preset; 20] = [
    Preset::regular("LED Bulb", "Lighting", 10.0, 5.0),
    Preset::regular("Incandescent Bulb", "Lighting", 60.0, 4.0),
    Preset::regular("Tube Light", "Lighting", 40.0, 6.0),
    Preset::regular("LED TV", "Entertainment", 80.0, 5.0),
    Preset::regular("LCD TV", "Entertainment", 150.0, 4.0),
    Preset::regular("Ceiling Fan", "Cooling", 75.0, 8.0),
    Preset::regular("Table Fan", "Cooling", 50.0, 6.0),
    Preset::regular("Laptop", "Electronics", 50.0, 6.0),
    Preset::regular("Desktop Computer", "Electronics", 200.0, 5.0),
    Preset::regular("Phone Charger", "Electronics", 5.0, 3.0),
    Preset::regular("Refrigerator", "Appliances", 150.0, 24.0),
    Preset::regular("Washing Machine", "Appliances", 500.0, 1.0),
    Preset::regular("Air Conditioner", "Cooling", 1500.0, 6.0).seasonal(enum_set!(
        Month::Apr | Month::May | Month::Jun | Month::Jul | Month::Aug | Month::Sep
    )),
    Preset::regular("Room Heater", "Appliances", 2000.0, 4.0)
        .seasonal(enum_set!(Month::Dec | Month::Jan | Month::Feb)),
    Preset::regular("Microwave", "Appliances", 1000.0, 0.5),
    Preset::regular("Water Heater (Geyser)", "Appliances", 2000.0, 1.0)
        .seasonal(enum_set!(Month::Nov | Month::Dec | Month::Jan | Month::Feb | Month::Mar)),
    Preset::regular("Iron Box", "Appliances", 1000.0, 0.5).occasional(),
    Preset::regular("Vacuum Cleaner", "Appliances", 1400.0, 0.5).occasional(),
    Preset::regular("Mixer Grinder", "Appliances", 500.0, 0.5),
    Preset::regular("Water Pump", "Appliances", 750.0, 1.0),
];

#[cfg(test)]
mod tests {
    use powerpatrol_quantities::energy::KilowattHours;

    use super::*;
    use crate::core::usage::UsageContext;

    #[test]
    fn test_room_heater_is_seasonal_in_winter() {
        let heater = Preset::find("room heater").unwrap().to_appliance();
        assert_eq!(heater.usage_type, UsageType::Seasonal);
        assert_eq!(heater.seasonal_months, enum_set!(Month::Dec | Month::Jan | Month::Feb));
        let january = UsageContext::new(Month::Jan, false);
        assert_eq!(heater.daily_units(&january), KilowattHours::from(8));
        assert_eq!(heater.daily_units(&UsageContext::new(Month::Jun, false)), KilowattHours::ZERO);
    }

    #[test]
    fn test_find() {
        assert_eq!(Preset::find(" Iron Box ").unwrap().usage_type, UsageType::Occasional);
        assert!(Preset::find("Toaster").is_none());
    }

    #[test]
    fn test_presets_are_valid() {
        for preset in &PRESETS {
            assert!(preset.to_appliance().issues().is_empty(), "{}", preset.name);
        }
    }
}
