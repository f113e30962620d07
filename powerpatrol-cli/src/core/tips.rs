use comfy_table::Color;
use powerpatrol_quantities::{energy::KilowattHours, power::Watts, rate::KilowattHourRate};

use crate::core::appliance::Appliance;

/// Rate assumed when pricing the savings of a tip.
const TIP_RATE: KilowattHourRate = KilowattHourRate::new(5.0);

/// Power of an LED bulb replacing an incandescent one.
const LED_BULB: Watts = Watts(10.0);

#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Display)]
pub enum Impact {
    High,
    Medium,
}

impl Impact {
    pub const fn color(self) -> Color {
        match self {
            Self::High => Color::Red,
            Self::Medium => Color::DarkYellow,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tip {
    pub title: &'static str,
    pub description: String,
    pub impact: Impact,
    pub savings: String,
}

/// Personalised saving tips for the appliance list.
#[must_use]
pub fn personalised(appliances: &[Appliance]) -> Vec<Tip> {
    [incandescent_bulbs(appliances), air_conditioner(appliances), always_on(appliances)]
        .into_iter()
        .flatten()
        .collect()
}

fn incandescent_bulbs(appliances: &[Appliance]) -> Option<Tip> {
    let bulbs: Vec<&Appliance> = appliances
        .iter()
        .filter(|appliance| appliance.name.to_lowercase().contains("incandescent"))
        .collect();
    if bulbs.is_empty() {
        return None;
    }
    let daily_savings: KilowattHours = bulbs
        .iter()
        .map(|bulb| Watts(bulb.wattage.0 - LED_BULB.0) * bulb.hours_per_day)
        .sum();
    let yearly_savings = daily_savings * TIP_RATE * 365.0;
    Some(Tip {
        title: "Switch to LED bulbs",
        description: format!(
            "You have {} incandescent bulb(s). LED bulbs use 80% less energy.",
            bulbs.len()
        ),
        impact: Impact::High,
        savings: format!("Save ~₹{:.0}/year", yearly_savings.into_inner()),
    })
}

fn air_conditioner(appliances: &[Appliance]) -> Option<Tip> {
    appliances
        .iter()
        .find(|appliance| is_air_conditioner(&appliance.name))
        .filter(|appliance| appliance.hours_per_day.into_inner() > 8.0)
        .map(|_| Tip {
            title: "Optimize AC usage",
            description: "Set your thermostat to 25°C when home. \
                          Each degree lower increases energy use by 6-8%."
                .to_owned(),
            impact: Impact::High,
            savings: "Save up to ₹10,000/year".to_owned(),
        })
}

/// Matches «Air Conditioner» and a standalone «AC» word, but not «Vacuum Cleaner».
fn is_air_conditioner(name: &str) -> bool {
    let name = name.to_lowercase();
    name.contains("air conditioner")
        || name.split(|c: char| !c.is_alphanumeric()).any(|word| word == "ac")
}

fn always_on(appliances: &[Appliance]) -> Option<Tip> {
    let n_always_on =
        appliances.iter().filter(|appliance| appliance.hours_per_day.into_inner() >= 20.0).count();
    (n_always_on > 2).then(|| Tip {
        title: "Unplug vampire devices",
        description: format!(
            "{n_always_on} devices are on 20+ hours/day. \
             Unplug chargers and electronics when not in use."
        ),
        impact: Impact::Medium,
        savings: "Save up to ₹5,000/year".to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use powerpatrol_quantities::time::Hours;

    use super::*;

    fn appliance(name: &str, wattage: f64, hours_per_day: f64) -> Appliance {
        Appliance::builder()
            .name(name)
            .category("Test")
            .wattage(Watts(wattage))
            .hours_per_day(Hours::from(hours_per_day))
            .build()
    }

    #[test]
    fn test_incandescent_bulbs() {
        let tips = personalised(&[
            appliance("Incandescent Bulb", 60.0, 4.0),
            appliance("LED Bulb", 10.0, 5.0),
        ]);
        assert_eq!(tips.len(), 1);
        assert_eq!(tips[0].impact, Impact::High);
        // (60 - 10) W × 4 h = 0.2 units a day, at ₹5 for 365 days:
        assert_eq!(tips[0].savings, "Save ~₹365/year");
    }

    #[test]
    fn test_air_conditioner() {
        assert!(personalised(&[appliance("Air Conditioner", 1500.0, 6.0)]).is_empty());
        let tips = personalised(&[appliance("Bedroom AC", 1500.0, 10.0)]);
        assert_eq!(tips.len(), 1);
        assert_eq!(tips[0].title, "Optimize AC usage");
    }

    #[test]
    fn test_is_air_conditioner() {
        assert!(is_air_conditioner("Air Conditioner"));
        assert!(is_air_conditioner("AC (living room)"));
        assert!(!is_air_conditioner("Vacuum Cleaner"));
    }

    #[test]
    fn test_always_on() {
        let appliances = [
            appliance("Refrigerator", 150.0, 24.0),
            appliance("Router", 10.0, 24.0),
            appliance("Set-top box", 15.0, 20.0),
        ];
        let tips = personalised(&appliances);
        assert_eq!(tips.len(), 1);
        assert_eq!(tips[0].impact, Impact::Medium);
        assert!(personalised(&appliances[..2]).is_empty());
    }
}
