use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;
use tracing::info;

use hoi_core::{Direction, Hand, SeededChoice, Side, choose};
use hoi_engine::{
    EngineConfig, ManualScheduler, NarratorConfig, Phase, RoundEngine, RoundEvent, RoundView,
    Scheduler,
};

/// Outcome counts over a simulated match.
#[derive(Debug, Default, Serialize)]
struct Tally {
    ties: u32,
    player_wins: u32,
    player_losses: u32,
    no_decisions: u32,
}

impl Tally {
    fn record(&mut self, event: &RoundEvent) {
        match event {
            RoundEvent::Tie { .. } => self.ties += 1,
            RoundEvent::PlayerWins => self.player_wins += 1,
            RoundEvent::PlayerLoses => self.player_losses += 1,
            RoundEvent::NoDecision => self.no_decisions += 1,
            _ => {}
        }
    }
}

#[derive(Debug, Serialize)]
struct Report {
    seed: u64,
    rounds: u32,
    elapsed_ms: u64,
    tally: Tally,
    leader: Option<Side>,
    last_round: RoundView,
}

pub fn run(rounds: u32, seed: u64, json: bool, show_events: bool) -> Result<(), String> {
    let config = EngineConfig::default()
        .with_seed(seed)
        .with_narrator(NarratorConfig::new().with_enabled(false));
    let mut engine = RoundEngine::new(config, ManualScheduler::new());
    let mut player = SeededChoice::new(seed.wrapping_add(1));
    let mut tally = Tally::default();

    for round in 1..=rounds {
        engine.start_new_round();
        while engine.phase() == Phase::Janken {
            let hand: Hand = choose(&mut player);
            engine.submit_hand(hand);
            engine.settle();
        }
        let direction: Direction = choose(&mut player);
        engine.submit_direction(direction);
        engine.settle();

        for event in engine.drain_events() {
            tally.record(&event);
            if show_events
                && !json
                && let Some(line) = super::render_event(&event)
            {
                let label = format!("[round {round:>3}]").dimmed();
                println!("  {label} {line}");
            }
        }
    }

    info!(rounds, seed, scores = %engine.scoreboard(), "simulation finished");
    let report = Report {
        seed,
        rounds,
        elapsed_ms: engine.scheduler().now().as_millis() as u64,
        tally,
        leader: engine.scoreboard().leader(),
        last_round: engine.view(),
    };

    if json {
        let out = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    if show_events {
        println!();
    }
    print_report(&report);
    Ok(())
}

fn print_report(report: &Report) {
    println!(
        "  {} {}",
        "Simulation".bold(),
        format!(
            "({} rounds, seed={}, {:.1}s of play)",
            report.rounds,
            report.seed,
            report.elapsed_ms as f64 / 1000.0
        )
        .dimmed()
    );
    println!();

    let decided = report.rounds.max(1) as f64;
    let share = |n: u32| format!("{:>5.1}%", f64::from(n) * 100.0 / decided);

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Outcome", "Count", "Per round"]);
    let tally = &report.tally;
    table.add_row(vec![
        "Player wins".to_string(),
        tally.player_wins.to_string(),
        share(tally.player_wins),
    ]);
    table.add_row(vec![
        "Player losses".to_string(),
        tally.player_losses.to_string(),
        share(tally.player_losses),
    ]);
    table.add_row(vec![
        "No decision".to_string(),
        tally.no_decisions.to_string(),
        share(tally.no_decisions),
    ]);
    table.add_row(vec![
        "Janken ties".to_string(),
        tally.ties.to_string(),
        share(tally.ties),
    ]);
    println!("{table}");
    println!();

    let view = &report.last_round;
    let verdict = match report.leader {
        Some(Side::Player) => "player leads".green().bold(),
        Some(Side::Cpu) => "cpu leads".red().bold(),
        None => "level".yellow().bold(),
    };
    println!(
        "  Final score: {} - {} ({verdict})",
        view.player_score, view.cpu_score
    );
}
