use comfy_table::Color;
use powerpatrol_quantities::energy::KilowattHours;

/// Daily usage of a typical household, about 450 units a month.
pub const AVERAGE_HOUSEHOLD_DAILY: KilowattHours = KilowattHours::new(15.0);

#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Display)]
pub enum UsageStatus {
    #[display("Excellent!")]
    Excellent,

    #[display("Good")]
    Good,

    #[display("Above Average")]
    AboveAverage,

    #[display("High Usage")]
    High,
}

impl UsageStatus {
    /// Daily usage relative to the average household.
    #[must_use]
    pub fn share(daily: KilowattHours) -> f64 {
        daily / AVERAGE_HOUSEHOLD_DAILY
    }

    #[must_use]
    pub fn from_share(share: f64) -> Self {
        if share < 0.5 {
            Self::Excellent
        } else if share < 0.8 {
            Self::Good
        } else if share < 1.0 {
            Self::AboveAverage
        } else {
            Self::High
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Self::Excellent => Color::Green,
            Self::Good => Color::Yellow,
            Self::AboveAverage => Color::DarkYellow,
            Self::High => Color::Red,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_share() {
        let share = UsageStatus::share(KilowattHours::from(1));
        assert_eq!(UsageStatus::from_share(share), UsageStatus::Excellent);
        assert_eq!(UsageStatus::from_share(0.5), UsageStatus::Good);
        assert_eq!(UsageStatus::from_share(0.99), UsageStatus::AboveAverage);
        assert_eq!(UsageStatus::from_share(1.0), UsageStatus::High);
    }

    #[test]
    fn test_display() {
        assert_eq!(UsageStatus::Excellent.to_string(), "Excellent!");
        assert_eq!(UsageStatus::AboveAverage.to_string(), "Above Average");
        assert_eq!(UsageStatus::High.to_string(), "High Usage");
    }
}
