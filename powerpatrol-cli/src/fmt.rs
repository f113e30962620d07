use std::fmt::{Debug, Display, Formatter};

/// Ratio formatted as a percentage.
pub struct FormattedPercentage(pub f64);

impl Debug for FormattedPercentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for FormattedPercentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}%", self.0 * 100.0)
    }
}

/// Relative month-over-month change with a trend arrow.
pub struct FormattedChange(pub f64);

impl Display for FormattedChange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let arrow = if self.0 > 0.0 { '▲' } else { '▼' };
        write!(f, "{arrow} {:.1}%", self.0.abs() * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage() {
        assert_eq!(FormattedPercentage(0.4 / 15.0).to_string(), "3%");
    }

    #[test]
    fn test_change() {
        assert_eq!(FormattedChange(0.25).to_string(), "▲ 25.0%");
        assert_eq!(FormattedChange(-0.125).to_string(), "▼ 12.5%");
    }
}
