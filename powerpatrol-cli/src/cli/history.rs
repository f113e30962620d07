use std::path::PathBuf;

use clap::Parser;

use crate::{
    core::history::History,
    prelude::*,
    tables::{build_history_statistics_table, build_history_table},
};

#[derive(Parser)]
pub struct HistoryArgs {
    /// Monthly consumption history file.
    #[clap(long = "history", env = "HISTORY_PATH", default_value = "history.toml")]
    path: PathBuf,
}

impl HistoryArgs {
    pub fn run(self) -> Result {
        let history = History::read_from(&self.path)?;
        println!("{}", build_history_table(&history));
        match history.statistics() {
            Some(statistics) => println!("{}", build_history_statistics_table(&statistics)),
            None => warn!("the history is empty"),
        }
        Ok(())
    }
}
