use std::{fs, path::Path};

use itertools::Itertools;
use powerpatrol_quantities::{
    energy::KilowattHours,
    power::Watts,
    rate::KilowattHourRate,
    time::Hours,
};
use serde::{Deserialize, Serialize};

use crate::{
    core::{
        appliance::{Appliance, ApplianceId, ApplianceUpdate},
        breach::Limits,
        tariff::{PriceSlab, Tariff},
    },
    prelude::*,
};

/// Everything the user maintains about the household: appliances, tariff, and limits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Household {
    /// Identifier for the next added appliance, never handed out twice.
    #[serde(default)]
    pub next_id: ApplianceId,

    #[serde(default)]
    pub limits: Limits,

    #[serde(default)]
    pub appliances: Vec<Appliance>,

    #[serde(default)]
    pub slabs: Tariff,
}

impl Default for Household {
    /// A fresh household with two appliances and a four-slab tariff.
    fn default() -> Self {
        Self {
            next_id: ApplianceId(3),
            limits: Limits::default(),
            appliances: vec![
                Appliance::builder()
                    .id(ApplianceId(1))
                    .name("LED TV")
                    .category("Entertainment")
                    .wattage(Watts(80.0))
                    .hours_per_day(Hours::from(5))
                    .build(),
                Appliance::builder()
                    .id(ApplianceId(2))
                    .name("Ceiling Fan")
                    .category("Cooling")
                    .wattage(Watts(75.0))
                    .hours_per_day(Hours::from(8))
                    .build(),
            ],
            slabs: Tariff(vec![
                PriceSlab { from: 0, to: Some(100), rate: KilowattHourRate::from(3) },
                PriceSlab { from: 101, to: Some(200), rate: KilowattHourRate::from(5) },
                PriceSlab { from: 201, to: Some(400), rate: KilowattHourRate::from(7) },
                PriceSlab { from: 401, to: None, rate: KilowattHourRate::from(9) },
            ]),
        }
    }
}

impl Household {
    /// Read the household, falling back to [`Household::default`] when the file does not exist.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn read_from(path: &Path) -> Result<Self> {
        if !path.is_file() {
            info!("no household file, using the defaults");
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read the household from `{}`", path.display()))?;
        let mut household: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse the household from `{}`", path.display()))?;
        household.reserve_ids();
        info!(
            n_appliances = household.appliances.len(),
            n_slabs = household.slabs.0.len(),
            "loaded",
        );
        Ok(household)
    }

    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn write_to(&self, path: &Path) -> Result {
        let contents = toml::to_string(self).context("failed to serialize the household")?;
        fs::write(path, contents)
            .with_context(|| format!("failed to write the household to `{}`", path.display()))?;
        info!("saved");
        Ok(())
    }

    /// Bump `next_id` past every stored identifier, in case the file was edited by hand.
    fn reserve_ids(&mut self) {
        if let Some(max_id) = self.appliances.iter().map(|appliance| appliance.id).max()
            && self.next_id <= max_id
        {
            warn!(%max_id, next_id = %self.next_id, "stale next identifier, bumping");
            self.next_id = max_id.next();
        }
    }

    /// Log the data-entry problems, which the aggregation silently sums up anyway.
    pub fn warn_issues(&self) {
        for appliance in &self.appliances {
            for issue in appliance.issues() {
                warn!(id = %appliance.id, name = %appliance.name, %issue, "appliance issue");
            }
        }
        for issue in self.slabs.issues() {
            warn!(%issue, "tariff issue");
        }
    }

    /// Add the appliance under a freshly assigned identifier.
    pub fn add(&mut self, mut appliance: Appliance) -> Result<ApplianceId> {
        ensure_valid(&appliance)?;
        ensure!(!appliance.category.trim().is_empty(), "category is empty");
        let id = self.next_id;
        appliance.id = id;
        self.next_id = id.next();
        self.appliances.push(appliance);
        Ok(id)
    }

    pub fn get_mut(&mut self, id: ApplianceId) -> Result<&mut Appliance> {
        self.appliances
            .iter_mut()
            .find(|appliance| appliance.id == id)
            .with_context(|| format!("appliance #{id} does not exist"))
    }

    /// Edit the appliance in place, the edit must leave it valid.
    pub fn update(&mut self, id: ApplianceId, update: ApplianceUpdate) -> Result<&Appliance> {
        let appliance = self.get_mut(id)?;
        let mut edited = appliance.clone();
        edited.apply(update);
        ensure_valid(&edited)?;
        *appliance = edited;
        Ok(&*appliance)
    }

    /// Flip the appliance on or off and return the new state.
    pub fn toggle(&mut self, id: ApplianceId) -> Result<bool> {
        let appliance = self.get_mut(id)?;
        appliance.is_on = !appliance.is_on;
        Ok(appliance.is_on)
    }

    pub fn remove(&mut self, id: ApplianceId) -> Result<Appliance> {
        let (index, _) = self
            .appliances
            .iter()
            .find_position(|appliance| appliance.id == id)
            .with_context(|| format!("appliance #{id} does not exist"))?;
        Ok(self.appliances.remove(index))
    }

    /// Replace the given limits, keeping the others. Limits must stay positive.
    pub fn set_limits(
        &mut self,
        daily: Option<KilowattHours>,
        monthly: Option<KilowattHours>,
    ) -> Result<Limits> {
        let limits = Limits {
            daily: daily.unwrap_or(self.limits.daily),
            monthly: monthly.unwrap_or(self.limits.monthly),
        };
        ensure!(limits.daily.is_positive(), "daily limit must be positive, got {}", limits.daily);
        ensure!(
            limits.monthly.is_positive(),
            "monthly limit must be positive, got {}",
            limits.monthly
        );
        self.limits = limits;
        Ok(limits)
    }

    /// Remove a slab by its position, the last remaining slab cannot be removed.
    pub fn remove_slab(&mut self, index: usize) -> Result<PriceSlab> {
        ensure!(self.slabs.0.len() > 1, "cannot remove the only price slab");
        ensure!(index < self.slabs.0.len(), "there is no slab #{index}");
        Ok(self.slabs.0.remove(index))
    }
}

fn ensure_valid(appliance: &Appliance) -> Result {
    if let Some(issue) = appliance.issues().into_iter().next() {
        bail!("invalid appliance `{}`: {issue}", appliance.name);
    }
    Ok(())
}
