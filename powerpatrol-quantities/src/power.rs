use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use serde::{Deserialize, Serialize};

use crate::{energy::KilowattHours, time::Hours};

/// Appliance nameplate power, entered and displayed in watts.
#[derive(
    Copy,
    Clone,
    Default,
    PartialEq,
    PartialOrd,
    Serialize,
    Deserialize,
    derive_more::Add,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Sum,
)]
#[serde(transparent)]
pub struct Watts(pub f64);

impl Watts {
    pub const ZERO: Self = Self(0.0);
}

/// Multiplies in watt-hours first and converts to kilowatt-hours last,
/// so that `80 W × 5 h` is exactly `0.4 kWh`.
impl Mul<Hours> for Watts {
    type Output = KilowattHours;

    fn mul(self, hours: Hours) -> Self::Output {
        KilowattHours::from_watt_hours(self.0 * hours.into_inner())
    }
}

impl Display for Watts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} W", self.0)
    }
}

impl Debug for Watts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}W", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watts_times_hours() {
        assert_eq!((Watts(80.0) * Hours::from(5)).into_inner(), 0.4);
    }

    #[test]
    fn test_display() {
        assert_eq!(Watts(1500.0).to_string(), "1500 W");
    }
}
