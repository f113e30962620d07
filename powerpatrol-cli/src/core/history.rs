use std::{fs, path::Path};

use average::Mean;
use powerpatrol_quantities::{cost::Cost, energy::KilowattHours};
use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Billed usage of one past month, recorded elsewhere.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlyUsage {
    /// Free-text label, for example `Oct 2024`.
    pub month: String,

    pub units: KilowattHours,
    pub cost: Cost,
}

/// Chronological monthly usage, oldest first.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct History {
    #[serde(default)]
    pub months: Vec<MonthlyUsage>,
}

impl History {
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn read_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read the history from `{}`", path.display()))?;
        let history: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse the history from `{}`", path.display()))?;
        info!(n_months = history.months.len(), "loaded");
        Ok(history)
    }

    /// Trend and averages for display, `None` for an empty history.
    pub fn statistics(&self) -> Option<HistoryStatistics<'_>> {
        let (latest, rest) = self.months.split_last()?;
        let previous = rest.last();
        let mean_units: Mean = self.months.iter().map(|month| month.units.into_inner()).collect();
        let mean_cost: Mean = self.months.iter().map(|month| month.cost.into_inner()).collect();
        Some(HistoryStatistics {
            latest,
            unit_change: previous.and_then(|previous| relative_change(latest.units, previous.units)),
            cost_change: previous.and_then(|previous| relative_change(latest.cost, previous.cost)),
            mean_units: KilowattHours::new(mean_units.mean()),
            mean_cost: Cost::new(mean_cost.mean()),
        })
    }
}

/// `None` when there is nothing to compare against.
fn relative_change<const P: isize, const T: isize, const C: isize>(
    latest: powerpatrol_quantities::Quantity<P, T, C>,
    previous: powerpatrol_quantities::Quantity<P, T, C>,
) -> Option<f64> {
    (previous.into_inner() != 0.0).then(|| (latest - previous) / previous)
}

#[must_use]
pub struct HistoryStatistics<'a> {
    pub latest: &'a MonthlyUsage,

    /// Month-over-month change as a ratio, `0.1` is a 10% increase.
    pub unit_change: Option<f64>,

    /// Month-over-month change as a ratio.
    pub cost_change: Option<f64>,

    pub mean_units: KilowattHours,
    pub mean_cost: Cost,
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    const HISTORY: &str = r#"
        [[months]]
        month = "Aug 2024"
        units = 400.0
        cost = 2400.0

        [[months]]
        month = "Sep 2024"
        units = 500.0
        cost = 3200.0
    "#;

    #[test]
    fn test_statistics() {
        let history: History = toml::from_str(HISTORY).unwrap();
        let statistics = history.statistics().unwrap();
        assert_eq!(statistics.latest.month, "Sep 2024");
        assert_abs_diff_eq!(statistics.unit_change.unwrap(), 0.25);
        assert_abs_diff_eq!(statistics.cost_change.unwrap(), 800.0 / 2400.0);
        assert_eq!(statistics.mean_units, KilowattHours::from(450));
        assert_eq!(statistics.mean_cost, Cost::from(2800));
    }

    #[test]
    fn test_single_month_has_no_trend() {
        let history = History {
            months: vec![MonthlyUsage {
                month: "Oct 2024".to_owned(),
                units: KilowattHours::from(300),
                cost: Cost::from(1500),
            }],
        };
        let statistics = history.statistics().unwrap();
        assert!(statistics.unit_change.is_none());
        assert!(statistics.cost_change.is_none());
        assert_eq!(statistics.mean_units, KilowattHours::from(300));
    }

    #[test]
    fn test_zero_previous_month() {
        assert!(relative_change(KilowattHours::from(10), KilowattHours::ZERO).is_none());
    }

    #[test]
    fn test_empty() {
        assert!(History::default().statistics().is_none());
    }
}
