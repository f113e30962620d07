use std::fmt::{Display, Formatter};

use itertools::Itertools;
use powerpatrol_quantities::{cost::Cost, energy::KilowattHours, rate::KilowattHourRate};
use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Price tier: consumption within `from..=to` units is billed at `rate`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceSlab {
    pub from: u32,

    /// Inclusive upper bound, `None` for the unbounded top tier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<u32>,

    pub rate: KilowattHourRate,
}

impl PriceSlab {
    /// Consumption the tier must reach before it bills anything.
    fn threshold(self) -> KilowattHours {
        KilowattHours::from(f64::from(self.from))
    }

    /// Cumulative consumption billed by the earlier tiers once this one is entered.
    ///
    /// Tier `101..=200` bills consumption above 100 units, tier `0..=100` bills from the very first unit.
    fn floor(self) -> KilowattHours {
        KilowattHours::new(f64::from(self.from) - 1.0)
    }
}

impl Display for PriceSlab {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.to {
            Some(to) => write!(f, "{}–{}", self.from, to),
            None => write!(f, "{}–∞", self.from),
        }
    }
}

/// Slab price list, as entered by the user: possibly unsorted, gapped, or overlapping.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tariff(pub Vec<PriceSlab>);

impl Tariff {
    /// Flat estimation margin added on top of every monthly bill.
    pub const BUFFER: Cost = Cost::new(20.0);

    /// Span of a slab added with [`Tariff::next_slab`].
    pub const NEXT_SLAB_SPAN: u32 = 99;

    /// Rate of a slab added with [`Tariff::next_slab`].
    pub const NEXT_SLAB_RATE: KilowattHourRate = KilowattHourRate::new(5.0);

    /// Slabs sorted by the lower bound, so that the stored order does not matter.
    pub fn normalized(&self) -> Vec<PriceSlab> {
        self.0.iter().copied().sorted_by_key(|slab| slab.from).collect()
    }

    /// Bill the units tier by tier.
    ///
    /// A tier bills only once the consumption has reached its `from`, and never more than its
    /// capacity. Units left over when the tiers run out stay unbilled, see [`SlabBill::unbilled`].
    /// So do fractions between two tiers: 100.5 units never reach the tier starting at 101.
    pub fn bill(&self, units: KilowattHours) -> SlabBill {
        let mut remaining = units;
        let mut billed = KilowattHours::ZERO;
        let mut charges = Vec::new();

        for slab in self.normalized() {
            if remaining <= KilowattHours::ZERO {
                break;
            }
            if units < slab.threshold() {
                continue;
            }
            let quantity = match slab.to {
                None => remaining,
                Some(to) => {
                    let capacity = KilowattHours::from(f64::from(to)) - slab.floor().max(billed);
                    remaining.min(capacity.max(KilowattHours::ZERO))
                }
            };
            if quantity > KilowattHours::ZERO {
                charges.push(SlabCharge { slab, units: quantity, cost: quantity * slab.rate });
                remaining -= quantity;
                billed += quantity;
            }
        }

        let unbilled = remaining.max(KilowattHours::ZERO);
        if unbilled > KilowattHours::ZERO {
            warn!(%units, %unbilled, "the price slabs do not cover the consumption, excess is not billed");
        }
        SlabBill { charges, unbilled }
    }

    /// Configuration problems which do not prevent billing, but likely distort it.
    pub fn issues(&self) -> Vec<TariffIssue> {
        let slabs = self.normalized();
        let mut issues = Vec::new();

        match slabs.first() {
            None => {
                issues.push(TariffIssue::Empty);
                return issues;
            }
            Some(first) if first.from != 0 => issues.push(TariffIssue::NotStartingAtZero(first.from)),
            Some(_) => {}
        }

        let n_unbounded = slabs.iter().filter(|slab| slab.to.is_none()).count();
        if n_unbounded > 1 {
            issues.push(TariffIssue::MultipleUnbounded(n_unbounded));
        }

        for slab in &slabs {
            if let Some(to) = slab.to
                && to < slab.from
            {
                issues.push(TariffIssue::Inverted(*slab));
            }
            if !slab.rate.is_positive() {
                issues.push(TariffIssue::NonPositiveRate(*slab));
            }
        }

        for (current, next) in slabs.iter().tuple_windows() {
            match current.to {
                None => issues.push(TariffIssue::Overlap(*current, *next)),
                Some(to) if next.from <= to => issues.push(TariffIssue::Overlap(*current, *next)),
                Some(to) if next.from > to + 1 => issues.push(TariffIssue::Gap(*current, *next)),
                Some(_) => {}
            }
        }

        issues
    }

    /// Suggested slab to append: it continues after the last bounded slab in the stored order.
    pub fn next_slab(&self) -> PriceSlab {
        let from = match self.0.last() {
            Some(PriceSlab { to: Some(to), .. }) => to.saturating_add(1),
            _ => 0,
        };
        PriceSlab {
            from,
            to: Some(from.saturating_add(Self::NEXT_SLAB_SPAN)),
            rate: Self::NEXT_SLAB_RATE,
        }
    }
}

/// Units billed within a single tier.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SlabCharge {
    pub slab: PriceSlab,
    pub units: KilowattHours,
    pub cost: Cost,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[must_use]
pub struct SlabBill {
    pub charges: Vec<SlabCharge>,

    /// Consumption which no tier could absorb.
    ///
    /// Non-zero only for a tariff without an unbounded top tier.
    /// It is zero-rated, which masks the misconfiguration, hence it gets logged and shown.
    pub unbilled: KilowattHours,
}

impl SlabBill {
    pub fn total(&self) -> Cost {
        self.charges.iter().map(|charge| charge.cost).sum()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, derive_more::Display)]
pub enum TariffIssue {
    #[display("no price slabs, every bill is free")]
    Empty,

    #[display("the first slab starts at {_0} instead of 0")]
    NotStartingAtZero(u32),

    #[display("{_0} slabs are unbounded, only the first one is ever used")]
    MultipleUnbounded(usize),

    #[display("slab {_0} ends before it starts")]
    Inverted(PriceSlab),

    #[display("slab {_0} has a non-positive rate")]
    NonPositiveRate(PriceSlab),

    #[display("slabs {_0} and {_1} overlap")]
    Overlap(PriceSlab, PriceSlab),

    #[display("slabs {_0} and {_1} leave a gap")]
    Gap(PriceSlab, PriceSlab),
}
