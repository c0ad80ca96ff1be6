//! ASCII rendering of menus, doors and results.
//!
//! Every function returns a `String`; writing it out is the presenter's
//! job. Door columns are eight characters wide:
//!
//! ```text
//!    [1]     [2]     [3]
//!   +-----+ +-----+ +-----+
//!   | ??? | |GOAT | | ??? |
//!   +-----+ +-----+ +-----+
//!     ^^^
//! ```

use crate::core::DoorId;
use crate::rules::{Outcome, Round};
use crate::simulation::{BatchReport, StrategyResult};

/// What a door shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DoorFace {
    /// Still closed.
    Closed,
    /// Opened on a goat.
    Goat,
    /// Opened on the car.
    Car,
}

impl DoorFace {
    const fn panel(self) -> &'static str {
        match self {
            DoorFace::Closed => "| ??? | ",
            DoorFace::Goat => "|GOAT | ",
            DoorFace::Car => "| CAR | ",
        }
    }
}

/// The main menu, ending in the choice prompt.
#[must_use]
pub fn menu() -> String {
    [
        "",
        "========= Monty Hall Menu =========",
        "1. Play interactive game (3 doors)",
        "2. Play interactive game (n doors)",
        "3. Run simulation (3 doors)",
        "4. Run simulation (n doors)",
        "5. View past statistics",
        "6. Exit",
        "====================================",
        "Choose an option (1-6): ",
    ]
    .join("\n")
}

/// Title banner, closed doors and the rules.
#[must_use]
pub fn intro_diagram(door_count: usize) -> String {
    let mut out = String::new();
    out.push_str("\n   ============================\n");
    out.push_str(&format!("       MONTY HALL - {door_count} DOORS\n"));
    out.push_str("   ============================\n\n");
    out.push_str(&door_rows(&vec![DoorFace::Closed; door_count], None, " "));
    out.push_str("\n   - One door hides a CAR\n");
    out.push_str("   - The others hide GOATS\n");
    out.push_str("   - Monty will reveal all goat doors except one\n");
    out
}

/// Doors after the host's reveal, with the player's pick marked.
#[must_use]
pub fn revealed_doors(round: &Round) -> String {
    let faces: Vec<_> = DoorId::all(round.door_count())
        .map(|door| if round.is_opened(door) { DoorFace::Goat } else { DoorFace::Closed })
        .collect();
    with_heading(&door_rows(&faces, round.initial_pick(), ""))
}

/// Every door opened, with the player's final pick marked.
#[must_use]
pub fn final_doors(round: &Round) -> String {
    let faces: Vec<_> = DoorId::all(round.door_count())
        .map(|door| if round.prize() == Some(door) { DoorFace::Car } else { DoorFace::Goat })
        .collect();
    with_heading(&door_rows(&faces, round.final_pick(), ""))
}

/// Win or loss message for a resolved round.
#[must_use]
pub fn outcome_message(round: &Round, outcome: Outcome) -> String {
    match (outcome, round.prize()) {
        (Outcome::Win, _) => ":) You WON the car!\n".to_string(),
        (Outcome::Loss, Some(prize)) => {
            format!(":( You got a goat. The car was behind door {}.\n", prize.number())
        }
        (Outcome::Loss, None) => ":( You got a goat.\n".to_string(),
    }
}

/// Side-by-side switch and stay results.
#[must_use]
pub fn simulation_report(report: &BatchReport) -> String {
    let mut out = String::new();
    out.push_str("\n=== Monty Hall Simulation Results ===\n");
    out.push_str(&format!("Number of Doors: {}\n", report.door_count));
    out.push_str(&format!("Simulations per Strategy: {}\n\n", report.trials));
    out.push_str(&strategy_line("Switched", &report.switch));
    out.push_str(&strategy_line("Stayed", &report.stay));
    out
}

/// History lines under a heading, or the empty-history notice.
#[must_use]
pub fn history(lines: &[String]) -> String {
    if lines.is_empty() {
        return "\nNo statistics recorded yet.\n".to_string();
    }
    let mut out = String::from("\n=== Game History ===\n");
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}

fn strategy_line(label: &str, result: &StrategyResult) -> String {
    format!(
        "{:<9} -> Wins: {}, Losses: {} ({:.2}% win rate)\n",
        label,
        result.wins,
        result.losses(),
        result.win_rate() * 100.0
    )
}

fn with_heading(rows: &str) -> String {
    format!("\n   Doors:\n{rows}")
}

fn door_rows(faces: &[DoorFace], marked: Option<DoorId>, label_indent: &str) -> String {
    let edge = "+-----+ ".repeat(faces.len());
    let edge = edge.trim_end();
    let labels: String = DoorId::all(faces.len())
        .map(|door| format!("{:<8}", format!("[{}]", door.number())))
        .collect();
    let panels: String = faces.iter().map(|face| face.panel()).collect();

    let mut out = format!("   {label_indent}{}\n", labels.trim_end());
    out.push_str(&format!("   {edge}\n"));
    out.push_str(&format!("   {}\n", panels.trim_end()));
    out.push_str(&format!("   {edge}\n"));

    if let Some(door) = marked {
        out.push_str(&format!("   {}  ^^^\n", " ".repeat(door.index() * 8)));
    }
    out
}
