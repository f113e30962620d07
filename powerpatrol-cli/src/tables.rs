use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use enumset::EnumSet;
use itertools::Itertools;
use powerpatrol_quantities::{cost::Cost, energy::KilowattHours};

use crate::{
    core::{
        appliance::{Appliance, UsageType},
        breach::{Breaches, Limits},
        estimate::Estimate,
        history::{History, HistoryStatistics},
        month::Month,
        preset::Preset,
        status::UsageStatus,
        tariff::{SlabBill, Tariff},
        tips::Tip,
        usage::{ActivitySummary, DAYS_PER_MONTH, UsageContext},
    },
    fmt::{FormattedChange, FormattedPercentage},
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

fn usage_label(usage_type: UsageType, seasonal_months: EnumSet<Month>) -> String {
    if seasonal_months.is_empty() {
        usage_type.to_string()
    } else {
        format!("{usage_type} ({})", seasonal_months.iter().join(", "))
    }
}

pub fn build_usage_table(estimate: &Estimate, limits: Limits, breaches: Breaches) -> Table {
    let mut table = new_table();
    table.set_header(vec!["", "Units", "Limit", "Slabs", "Buffer", "Estimate"]);
    for (label, units, limit, is_breached, bill, buffer, total) in [
        (
            "Daily",
            estimate.usage.daily,
            limits.daily,
            breaches.daily,
            &estimate.daily,
            Tariff::BUFFER / DAYS_PER_MONTH,
            estimate.daily_cost(),
        ),
        (
            "Monthly",
            estimate.usage.monthly,
            limits.monthly,
            breaches.monthly,
            &estimate.monthly,
            Tariff::BUFFER,
            estimate.monthly_cost(),
        ),
    ] {
        table.add_row(vec![
            Cell::new(label).add_attribute(Attribute::Bold),
            Cell::new(units)
                .set_alignment(CellAlignment::Right)
                .fg(if is_breached { Color::Red } else { Color::Green }),
            Cell::new(limit).set_alignment(CellAlignment::Right).add_attribute(Attribute::Dim),
            Cell::new(bill.total()).set_alignment(CellAlignment::Right),
            Cell::new(buffer).set_alignment(CellAlignment::Right).add_attribute(Attribute::Dim),
            Cell::new(total).set_alignment(CellAlignment::Right).add_attribute(Attribute::Bold),
        ]);
    }
    table
}

pub fn build_limits_table(limits: Limits) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Daily limit", "Monthly limit"]);
    table.add_row(vec![
        Cell::new(limits.daily).set_alignment(CellAlignment::Right),
        Cell::new(limits.monthly).set_alignment(CellAlignment::Right),
    ]);
    table
}

pub fn build_activity_table(activity: ActivitySummary, daily: KilowattHours) -> Table {
    let share = UsageStatus::share(daily);
    let status = UsageStatus::from_share(share);
    let mut table = new_table();
    table.set_header(vec!["Devices", "Active", "Power", "Status", "Of average household"]);
    table.add_row(vec![
        Cell::new(activity.n_devices),
        Cell::new(activity.n_active).fg(Color::Green),
        Cell::new(activity.active_wattage).set_alignment(CellAlignment::Right),
        Cell::new(status).fg(status.color()),
        Cell::new(FormattedPercentage(share)).set_alignment(CellAlignment::Right),
    ]);
    table
}

pub fn build_appliances_table(appliances: &[Appliance], context: &UsageContext) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "#", "Name", "Category", "Power", "Hours", "Usage", "Effective", "Units/day", "On",
    ]);
    for appliance in appliances {
        let daily_units = appliance.daily_units(context);
        table.add_row(vec![
            Cell::new(appliance.id).add_attribute(Attribute::Dim),
            Cell::new(&appliance.name),
            Cell::new(&appliance.category).add_attribute(Attribute::Dim),
            Cell::new(appliance.wattage).set_alignment(CellAlignment::Right),
            Cell::new(appliance.hours_per_day).set_alignment(CellAlignment::Right),
            Cell::new(usage_label(appliance.usage_type, appliance.seasonal_months)),
            Cell::new(appliance.effective_hours(context.month))
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
            Cell::new(daily_units).set_alignment(CellAlignment::Right).fg(
                if daily_units > KilowattHours::ZERO { Color::Reset } else { Color::DarkGrey },
            ),
            if appliance.is_on {
                Cell::new("on").fg(Color::Green)
            } else {
                Cell::new("off").fg(Color::DarkGrey)
            },
        ]);
    }
    table
}

pub fn build_presets_table(presets: &[Preset]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Preset", "Category", "Power", "Hours", "Usage"]);
    for preset in presets {
        table.add_row(vec![
            Cell::new(preset.name).add_attribute(Attribute::Bold),
            Cell::new(preset.category).add_attribute(Attribute::Dim),
            Cell::new(preset.wattage).set_alignment(CellAlignment::Right),
            Cell::new(preset.hours_per_day).set_alignment(CellAlignment::Right),
            Cell::new(usage_label(preset.usage_type, preset.seasonal_months)),
        ]);
    }
    table
}

pub fn build_slabs_table(tariff: &Tariff) -> Table {
    let mut table = new_table();
    table.set_header(vec!["#", "Units", "Rate"]);
    for (index, slab) in tariff.0.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index).add_attribute(Attribute::Dim),
            Cell::new(slab).set_alignment(CellAlignment::Right),
            Cell::new(slab.rate).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn build_bill_table(bill: &SlabBill) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Slab", "Rate", "Units", "Cost"]);
    for charge in &bill.charges {
        table.add_row(vec![
            Cell::new(charge.slab),
            Cell::new(charge.slab.rate).set_alignment(CellAlignment::Right),
            Cell::new(charge.units).set_alignment(CellAlignment::Right),
            Cell::new(charge.cost).set_alignment(CellAlignment::Right),
        ]);
    }
    if bill.unbilled > KilowattHours::ZERO {
        table.add_row(vec![
            Cell::new("Not covered").fg(Color::Red),
            Cell::new(""),
            Cell::new(bill.unbilled).set_alignment(CellAlignment::Right).fg(Color::Red),
            Cell::new(Cost::ZERO).set_alignment(CellAlignment::Right).fg(Color::Red),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(""),
        Cell::new(bill.total()).set_alignment(CellAlignment::Right).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn build_history_table(history: &History) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Month", "Units", "Cost"]);
    for month in &history.months {
        table.add_row(vec![
            Cell::new(&month.month),
            Cell::new(month.units).set_alignment(CellAlignment::Right),
            Cell::new(month.cost).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn build_history_statistics_table(statistics: &HistoryStatistics<'_>) -> Table {
    let change_cell = |change: Option<f64>| match change {
        Some(change) => Cell::new(FormattedChange(change))
            .set_alignment(CellAlignment::Right)
            .fg(if change > 0.0 { Color::Red } else { Color::Green }),
        None => Cell::new("–").set_alignment(CellAlignment::Right).add_attribute(Attribute::Dim),
    };
    let mut table = new_table();
    table.set_header(vec!["Latest", "Units", "Cost", "Mean units", "Mean cost"]);
    table.add_row(vec![
        Cell::new(&statistics.latest.month).add_attribute(Attribute::Bold),
        change_cell(statistics.unit_change),
        change_cell(statistics.cost_change),
        Cell::new(statistics.mean_units).set_alignment(CellAlignment::Right),
        Cell::new(statistics.mean_cost).set_alignment(CellAlignment::Right),
    ]);
    table
}

pub fn build_tips_table(tips: &[Tip]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Tip", "Impact", "Savings", "Details"]);
    for tip in tips {
        table.add_row(vec![
            Cell::new(tip.title).add_attribute(Attribute::Bold),
            Cell::new(tip.impact).fg(tip.impact.color()),
            Cell::new(&tip.savings).fg(Color::Green),
            Cell::new(&tip.description),
        ]);
    }
    table
}
