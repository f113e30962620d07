use std::path::PathBuf;

use clap::Parser;

use crate::{household::Household, prelude::*};

#[derive(Parser)]
pub struct HouseholdArgs {
    /// Household file with the appliances, the price slabs, and the limits.
    #[clap(
        long = "household",
        env = "HOUSEHOLD_PATH",
        default_value = "household.toml",
        global = true
    )]
    pub path: PathBuf,
}

impl HouseholdArgs {
    pub fn read(&self) -> Result<Household> {
        let household = Household::read_from(&self.path)?;
        household.warn_issues();
        Ok(household)
    }

    pub fn write(&self, household: &Household) -> Result {
        household.write_to(&self.path)
    }
}
