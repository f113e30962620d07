use clap::{Parser, Subcommand};
use enumset::EnumSet;
use powerpatrol_quantities::{power::Watts, time::Hours};

use crate::{
    cli::{context::ContextArgs, household::HouseholdArgs},
    core::{
        appliance::{Appliance, ApplianceId, ApplianceUpdate, UsageType},
        month::Month,
        preset::{PRESETS, Preset},
    },
    prelude::*,
    tables::{build_appliances_table, build_presets_table},
};

#[derive(Subcommand)]
pub enum ApplianceCommand {
    /// List the appliances with their daily consumption.
    List(ListArgs),

    /// Add a new appliance, from scratch or from a preset.
    Add(AddArgs),

    /// List the appliance presets.
    Presets,

    /// Edit an existing appliance.
    Edit(EditArgs),

    /// Switch the appliance on or off.
    Toggle(IdArgs),

    /// Remove the appliance.
    Remove(IdArgs),
}

impl ApplianceCommand {
    pub fn run(self, household_args: &HouseholdArgs) -> Result {
        let mut household = household_args.read()?;
        match self {
            Self::List(args) => {
                let context = args.context.context()?;
                println!("{}", build_appliances_table(&household.appliances, &context));
                return Ok(());
            }
            Self::Presets => {
                println!("{}", build_presets_table(&PRESETS));
                return Ok(());
            }
            Self::Add(args) => {
                let id = household.add(args.into_appliance()?)?;
                info!(%id, "added");
            }
            Self::Edit(args) => {
                let id = args.id;
                let appliance = household.update(id, args.into())?;
                info!(%id, name = %appliance.name, "updated");
            }
            Self::Toggle(IdArgs { id }) => {
                let is_on = household.toggle(id)?;
                info!(%id, is_on, "toggled");
            }
            Self::Remove(IdArgs { id }) => {
                let appliance = household.remove(id)?;
                info!(%id, name = %appliance.name, "removed");
            }
        }
        household_args.write(&household)
    }
}

#[derive(Parser)]
pub struct ListArgs {
    #[clap(flatten)]
    context: ContextArgs,
}

#[derive(Parser)]
pub struct IdArgs {
    id: ApplianceId,
}

#[derive(Parser)]
pub struct AddArgs {
    /// Start from the preset, as listed by `appliance presets`; the other options override it.
    #[clap(long)]
    preset: Option<String>,

    #[clap(long, required_unless_present = "preset")]
    name: Option<String>,

    #[clap(long, required_unless_present = "preset")]
    category: Option<String>,

    /// Nameplate power in watts.
    #[clap(long, required_unless_present = "preset")]
    wattage: Option<Watts>,

    /// Hours of use on a day the appliance is used.
    #[clap(long, required_unless_present = "preset")]
    hours: Option<Hours>,

    /// Defaults to the preset's, or `regular`.
    #[clap(long)]
    usage_type: Option<UsageType>,

    /// Months of use for a seasonal appliance, for example `apr,may,jun`.
    #[clap(long, value_delimiter = ',', ignore_case = true)]
    seasonal_months: Option<Vec<Month>>,

    /// Add the appliance switched off.
    #[clap(long)]
    off: bool,
}

impl AddArgs {
    fn into_appliance(self) -> Result<Appliance> {
        let mut appliance = match &self.preset {
            Some(name) => Preset::find(name)
                .with_context(|| format!("there is no preset `{name}`"))?
                .to_appliance(),
            None => {
                let missing = |option: &str| format!("`--{option}` is required without a preset");
                Appliance::builder()
                    .name(self.name.clone().with_context(|| missing("name"))?)
                    .category(self.category.clone().with_context(|| missing("category"))?)
                    .wattage(self.wattage.with_context(|| missing("wattage"))?)
                    .hours_per_day(self.hours.with_context(|| missing("hours"))?)
                    .build()
            }
        };
        appliance.apply(
            ApplianceUpdate::builder()
                .maybe_name(self.name)
                .maybe_category(self.category)
                .maybe_wattage(self.wattage)
                .maybe_hours_per_day(self.hours)
                .maybe_usage_type(self.usage_type)
                .maybe_seasonal_months(
                    self.seasonal_months.map(|months| months.into_iter().collect::<EnumSet<_>>()),
                )
                .is_on(!self.off)
                .build(),
        );
        Ok(appliance)
    }
}

#[derive(Parser)]
pub struct EditArgs {
    id: ApplianceId,

    #[clap(long)]
    name: Option<String>,

    #[clap(long)]
    category: Option<String>,

    #[clap(long)]
    wattage: Option<Watts>,

    #[clap(long)]
    hours: Option<Hours>,

    #[clap(long)]
    usage_type: Option<UsageType>,

    /// Replace the seasonal months.
    #[clap(long, value_delimiter = ',', ignore_case = true)]
    seasonal_months: Option<Vec<Month>>,
}

impl From<EditArgs> for ApplianceUpdate {
    fn from(args: EditArgs) -> Self {
        Self::builder()
            .maybe_name(args.name)
            .maybe_category(args.category)
            .maybe_wattage(args.wattage)
            .maybe_hours_per_day(args.hours)
            .maybe_usage_type(args.usage_type)
            .maybe_seasonal_months(
                args.seasonal_months.map(|months| months.into_iter().collect::<EnumSet<_>>()),
            )
            .build()
    }
}

#[cfg(test)]
mod tests {
    use enumset::enum_set;

    use super::*;

    fn parse_add(args: &[&str]) -> Result<Appliance> {
        let args = std::iter::once("add").chain(args.iter().copied());
        AddArgs::try_parse_from(args)?.into_appliance()
    }

    #[test]
    fn test_add_from_preset() {
        let heater = parse_add(&["--preset", "Room Heater"]).unwrap();
        assert_eq!(heater.name, "Room Heater");
        assert_eq!(heater.usage_type, UsageType::Seasonal);
        assert_eq!(heater.seasonal_months, enum_set!(Month::Dec | Month::Jan | Month::Feb));
        assert!(heater.is_on);
    }

    #[test]
    fn test_options_override_preset() {
        let heater = parse_add(&[
            "--preset",
            "room heater",
            "--name",
            "Bedroom Heater",
            "--hours",
            "2",
            "--seasonal-months",
            "jan",
            "--off",
        ])
        .unwrap();
        assert_eq!(heater.name, "Bedroom Heater");
        assert_eq!(heater.wattage, Watts(2000.0));
        assert_eq!(heater.hours_per_day, Hours::from(2));
        assert_eq!(heater.seasonal_months, enum_set!(Month::Jan));
        assert!(!heater.is_on);
    }

    #[test]
    fn test_add_from_scratch() {
        let lamp = parse_add(&[
            "--name", "Lamp", "--category", "Lighting", "--wattage", "9", "--hours", "3",
        ])
        .unwrap();
        assert_eq!(lamp.usage_type, UsageType::Regular);
        assert!(lamp.seasonal_months.is_empty());
    }

    #[test]
    fn test_add_requires_fields_without_preset() {
        assert!(parse_add(&["--name", "Lamp"]).is_err());
        assert!(parse_add(&["--preset", "Toaster"]).is_err());
    }
}
