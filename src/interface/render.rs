use crate::cycle::CycleReport;
use crate::models::{FeedEvent, LogEntry};
use crate::state::FarmSession;

/// Print the opening banner of a run.
pub fn display_farm(session: &FarmSession) {
    println!();
    println!("=== Moo Mover: {} ===", session.plan.label());
    println!();

    for food in session.catalog.iter() {
        println!(
            "  {:<10} {:>8.2} kg in {} (nominal {:.2} kg/cow)",
            food.name,
            session.inventory.stock(&food.name).unwrap_or(0.0),
            food.location(),
            food.nominal_weight_per_cow
        );
    }
    for shed in &session.sheds {
        println!("  {} - {} x {}", shed.shed_id, shed.cow_type, shed.cow_count);
    }
    println!();
}

/// Print the log of one cycle, grouped by feeding round.
pub fn display_log(cycle: u32, entries: &[LogEntry]) {
    println!("===== Daily Feeding Cycle {} =====", cycle);

    let mut round = 0;
    let mut pushes_shown = false;
    for entry in entries {
        if entry.round != round && entry.round > 0 {
            round = entry.round;
            println!();
            println!("-- Feeding Round {} --", round);
        }
        if entry.event == FeedEvent::PushedBack && !pushes_shown {
            pushes_shown = true;
            println!();
            println!("-- Food Push Rounds --");
        }
        println!("  {}", entry);
    }
    println!();
}

/// Print the end-of-cycle summary table.
pub fn display_summary(report: &CycleReport) {
    println!("--- Summary (cycle {}) ---", report.cycle);
    println!(
        "Servings: {}  Blocked: {}  Battery: {}%  Water: {:.0} L",
        report.servings, report.blocked, report.battery, report.water_liters
    );

    if report.totals.is_empty() {
        println!("No food served yet.");
        println!();
        return;
    }

    let width = report
        .totals
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(8);

    println!(
        "{:<width$} {:>10} {:>10} {:>10} {:>10}",
        "Food",
        "Loaded",
        "Eaten",
        "Leftover",
        "Skipped",
        width = width
    );
    for (name, totals) in &report.totals {
        println!(
            "{:<width$} {:>10.2} {:>10.2} {:>10.2} {:>10.2}",
            name,
            totals.loaded,
            totals.eaten,
            totals.leftover,
            totals.skipped,
            width = width
        );
    }
    println!();
}
