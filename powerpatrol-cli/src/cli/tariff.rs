use clap::{Parser, Subcommand};
use powerpatrol_quantities::{energy::KilowattHours, rate::KilowattHourRate};

use crate::{
    cli::household::HouseholdArgs,
    core::tariff::PriceSlab,
    prelude::*,
    tables::{build_bill_table, build_slabs_table},
};

#[derive(Subcommand)]
pub enum TariffCommand {
    /// Show the price slabs, and optionally the bill for the given consumption.
    Show(ShowArgs),

    /// Append a slab continuing after the last one.
    AddSlab(AddSlabArgs),

    /// Remove the slab by its position.
    RemoveSlab(RemoveSlabArgs),
}

impl TariffCommand {
    pub fn run(self, household_args: &HouseholdArgs) -> Result {
        let mut household = household_args.read()?;
        match self {
            Self::Show(args) => {
                println!("{}", build_slabs_table(&household.slabs));
                if let Some(units) = args.units {
                    println!("{}", build_bill_table(&household.slabs.bill(units)));
                }
                return Ok(());
            }
            Self::AddSlab(args) => {
                let slab = args.apply(household.slabs.next_slab());
                info!(%slab, rate = %slab.rate, "adding");
                household.slabs.0.push(slab);
            }
            Self::RemoveSlab(args) => {
                let slab = household.remove_slab(args.index)?;
                info!(%slab, rate = %slab.rate, "removed");
            }
        }
        for issue in household.slabs.issues() {
            warn!(%issue, "tariff issue after the change");
        }
        household_args.write(&household)
    }
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Consumption to bill.
    #[clap(long)]
    units: Option<KilowattHours>,
}

#[derive(Parser)]
pub struct AddSlabArgs {
    /// Inclusive upper bound, defaults to 99 units past the lower one.
    #[clap(long, conflicts_with = "unbounded")]
    to: Option<u32>,

    /// Make it the top slab without the upper bound.
    #[clap(long)]
    unbounded: bool,

    #[clap(long)]
    rate: Option<KilowattHourRate>,
}

impl AddSlabArgs {
    fn apply(self, mut slab: PriceSlab) -> PriceSlab {
        if self.unbounded {
            slab.to = None;
        } else if let Some(to) = self.to {
            slab.to = Some(to);
        }
        if let Some(rate) = self.rate {
            slab.rate = rate;
        }
        slab
    }
}

#[derive(Parser)]
pub struct RemoveSlabArgs {
    /// Position as shown by `tariff show`.
    index: usize,
}
