use clap::Parser;

use crate::{cli::household::HouseholdArgs, core::tips, prelude::*, tables::build_tips_table};

#[derive(Parser)]
pub struct TipsArgs {}

impl TipsArgs {
    pub fn run(self, household: &HouseholdArgs) -> Result {
        let household = household.read()?;
        let tips = tips::personalised(&household.appliances);
        if tips.is_empty() {
            info!("no tips, the household looks efficient");
        } else {
            println!("{}", build_tips_table(&tips));
        }
        Ok(())
    }
}
