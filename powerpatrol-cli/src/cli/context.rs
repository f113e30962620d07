use clap::Parser;

use crate::{
    core::{month::Month, usage::UsageContext},
    prelude::*,
};

#[derive(Copy, Clone, Parser)]
pub struct ContextArgs {
    /// Month to check the seasonal appliances against, defaults to the current one.
    #[clap(long, env = "MONTH", ignore_case = true)]
    month: Option<Month>,

    /// Vacation mode: cut all usage by 80%.
    #[clap(long, env = "VACATION_MODE")]
    vacation: bool,
}

impl ContextArgs {
    pub fn context(self) -> Result<UsageContext> {
        let month = match self.month {
            Some(month) => month,
            None => Month::current()?,
        };
        debug!(%month, is_vacation = self.vacation, "usage context");
        Ok(UsageContext::new(month, self.vacation))
    }
}
