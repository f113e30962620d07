use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Calendar month under its canonical three-letter label.
#[derive(
    Debug,
    Hash,
    Ord,
    PartialOrd,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    derive_more::Display,
    enumset::EnumSetType,
)]
#[enumset(serialize_repr = "list")]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// Month of the local clock.
    pub fn current() -> Result<Self> {
        let number = u8::try_from(Local::now().month())?;
        Ok(chrono::Month::try_from(number)?.into())
    }
}

impl From<chrono::Month> for Month {
    fn from(month: chrono::Month) -> Self {
        match month {
            chrono::Month::January => Self::Jan,
            chrono::Month::February => Self::Feb,
            chrono::Month::March => Self::Mar,
            chrono::Month::April => Self::Apr,
            chrono::Month::May => Self::May,
            chrono::Month::June => Self::Jun,
            chrono::Month::July => Self::Jul,
            chrono::Month::August => Self::Aug,
            chrono::Month::September => Self::Sep,
            chrono::Month::October => Self::Oct,
            chrono::Month::November => Self::Nov,
            chrono::Month::December => Self::Dec,
        }
    }
}
