//! Example Skirmish - Run the demo encounter and print the report
//!
//! Two adventurers (Liara, and Mira the healer) face two goblins (one of
//! them a nuker). Usage:
//!
//! ```text
//! example_skirmish [seed] [rules.toml]
//! ```
//!
//! The seed fixes the turn-order shuffle and every evasion roll, so the
//! same seed always prints the same combat.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use skirmish_core::config::{demo_encounter, load_rules};
use skirmish_core::prelude::*;
use std::path::Path;
use std::process::ExitCode;

fn run() -> Result<CombatReport, Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);

    let seed: u64 = match args.next() {
        Some(arg) => arg.parse()?,
        None => rand::random(),
    };
    let rules = match args.next() {
        Some(path) => load_rules(Path::new(&path))?,
        None => RuleConstants::default(),
    };

    let (team1, team2) = demo_encounter()?.into_teams()?;

    println!("Seed: {seed}");
    println!();
    println!("Team 1: {}", roster_line(&team1));
    println!("Team 2: {}", roster_line(&team2));
    println!();

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let report = simulate_combat_with_rng(team1, team2, &rules, &mut rng)?;

    for event in &report.events {
        println!("{event}");
    }

    println!();
    println!("Final states:");
    for state in &report.final_states {
        println!(
            "  {:10} hp {:3}  armor {:3}  barrier {:3}{}",
            state.name,
            state.hp,
            state.armor_rating,
            state.barrier_rating,
            if state.hp <= 0 { "  (dead)" } else { "" },
        );
    }

    println!();
    println!("{}", serde_json::to_string_pretty(&report.final_states)?);

    Ok(report)
}

fn roster_line(team: &[Combatant]) -> String {
    team.iter()
        .map(|c| {
            let mut tags = Vec::new();
            if c.capabilities.heal {
                tags.push("heal");
            }
            if c.capabilities.nuke {
                tags.push("nuke");
            }
            if tags.is_empty() {
                c.name.clone()
            } else {
                format!("{} [{}]", c.name, tags.join(", "))
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn main() -> ExitCode {
    match run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
