use clap::Parser;
use enumset::EnumSet;
use powerpatrol_quantities::energy::KilowattHours;

use crate::{
    cli::{context::ContextArgs, household::HouseholdArgs},
    core::{
        breach::{Breaches, Limits, Period},
        estimate::Estimate,
        usage::{ActivitySummary, Usage},
    },
    prelude::*,
    tables::{build_activity_table, build_usage_table},
};

#[derive(Parser)]
pub struct SummaryArgs {
    #[clap(flatten)]
    context: ContextArgs,

    /// Override the stored daily limit.
    #[clap(long = "daily-limit", env = "DAILY_LIMIT")]
    daily_limit: Option<KilowattHours>,

    /// Override the stored monthly limit.
    #[clap(long = "monthly-limit", env = "MONTHLY_LIMIT")]
    monthly_limit: Option<KilowattHours>,

    /// Limit warnings to suppress.
    #[clap(long, env = "DISMISS", value_delimiter = ',')]
    dismiss: Vec<Period>,
}

impl SummaryArgs {
    #[instrument(skip_all)]
    pub fn run(self, household: &HouseholdArgs) -> Result {
        let household = household.read()?;
        let context = self.context.context()?;

        let usage = Usage::aggregate(&household.appliances, &context);
        info!(daily = %usage.daily, monthly = %usage.monthly, "aggregated");
        let estimate = Estimate::new(usage, &household.slabs);

        let limits = Limits {
            daily: self.daily_limit.unwrap_or(household.limits.daily),
            monthly: self.monthly_limit.unwrap_or(household.limits.monthly),
        };
        let dismissed: EnumSet<Period> = self.dismiss.into_iter().collect();
        let breaches = Breaches::evaluate(usage, limits, dismissed);
        if breaches.daily {
            warn!(usage = %usage.daily, limit = %limits.daily, "daily limit exceeded");
        }
        if breaches.monthly {
            warn!(usage = %usage.monthly, limit = %limits.monthly, "monthly limit exceeded");
        }

        let activity: ActivitySummary = household.appliances.iter().collect();
        println!("{}", build_usage_table(&estimate, limits, breaches));
        println!("{}", build_activity_table(activity, usage.daily));
        Ok(())
    }
}
