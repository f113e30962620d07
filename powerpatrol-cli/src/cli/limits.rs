use clap::{Parser, Subcommand};
use powerpatrol_quantities::energy::KilowattHours;

use crate::{cli::household::HouseholdArgs, prelude::*, tables::build_limits_table};

#[derive(Subcommand)]
pub enum LimitsCommand {
    /// Show the stored limits.
    Show,

    /// Store new limits in the household file.
    Set(SetArgs),
}

impl LimitsCommand {
    pub fn run(self, household_args: &HouseholdArgs) -> Result {
        let mut household = household_args.read()?;
        match self {
            Self::Show => {
                println!("{}", build_limits_table(household.limits));
                Ok(())
            }
            Self::Set(args) => {
                ensure!(
                    args.daily.is_some() || args.monthly.is_some(),
                    "nothing to set, pass `--daily` or `--monthly`"
                );
                let limits = household.set_limits(args.daily, args.monthly)?;
                info!(daily = %limits.daily, monthly = %limits.monthly, "limits updated");
                household_args.write(&household)
            }
        }
    }
}

#[derive(Parser)]
pub struct SetArgs {
    /// Daily limit in units.
    #[clap(long)]
    daily: Option<KilowattHours>,

    /// Monthly limit in units.
    #[clap(long)]
    monthly: Option<KilowattHours>,
}
