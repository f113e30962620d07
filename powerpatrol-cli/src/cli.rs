mod appliance;
mod context;
mod history;
mod household;
mod limits;
mod summary;
mod tariff;
mod tips;

use clap::{Parser, Subcommand};

use crate::{
    cli::{
        appliance::ApplianceCommand,
        history::HistoryArgs,
        household::HouseholdArgs,
        limits::LimitsCommand,
        summary::SummaryArgs,
        tariff::TariffCommand,
        tips::TipsArgs,
    },
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[clap(flatten)]
    household: HouseholdArgs,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn run(self) -> Result {
        match self.command {
            Command::Summary(args) => args.run(&self.household),
            Command::Appliance(args) => args.run(&self.household),
            Command::Tariff(args) => args.run(&self.household),
            Command::Limits(args) => args.run(&self.household),
            Command::History(args) => args.run(),
            Command::Tips(args) => args.run(&self.household),
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Main command: estimate the usage and the bill, and check the limits.
    Summary(SummaryArgs),

    /// List and manage the appliances.
    #[clap(subcommand)]
    Appliance(ApplianceCommand),

    /// Show the price slabs and bill arbitrary consumption.
    #[clap(subcommand)]
    Tariff(TariffCommand),

    /// Show and change the usage limits.
    #[clap(subcommand)]
    Limits(LimitsCommand),

    /// Show the past monthly consumption.
    History(HistoryArgs),

    /// Personalised saving tips.
    Tips(TipsArgs),
}
