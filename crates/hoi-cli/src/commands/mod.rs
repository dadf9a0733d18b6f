pub mod phrases;
pub mod play;
pub mod simulate;

use colored::Colorize;

use hoi_engine::{Phase, Pointer, RoundEvent};

/// One-line description of an event for the terminal.
fn describe_event(event: &RoundEvent) -> Option<String> {
    let line = match event {
        RoundEvent::Tie { hand } => format!("{} vs {}  tie, throw again", hand.emoji(), hand.emoji()),
        RoundEvent::HandResult {
            pointer,
            player_hand,
            cpu_hand,
        } => {
            let who = match pointer {
                Pointer::PlayerPoints => "you point",
                Pointer::CpuPoints => "cpu points",
            };
            format!(
                "you {} {player_hand} vs cpu {} {cpu_hand}  {who}",
                player_hand.emoji(),
                cpu_hand.emoji()
            )
        }
        RoundEvent::PhaseChanged { to, .. } => match to {
            Phase::Pointing => "pointing round: left, right, up or down".to_string(),
            Phase::Janken | Phase::Deciding => return None,
        },
        RoundEvent::DirectionsRevealed { player, cpu } => format!(
            "you {} {player}  cpu {} {cpu}",
            player.arrow(),
            cpu.arrow()
        ),
        RoundEvent::PlayerWins => "you win the round".to_string(),
        RoundEvent::PlayerLoses => "you lose the round".to_string(),
        RoundEvent::NoDecision => "no decision".to_string(),
        RoundEvent::ScoresReset => "scores reset".to_string(),
    };
    Some(line)
}

fn colorize_event(event: &RoundEvent, description: &str) -> colored::ColoredString {
    match event {
        RoundEvent::PlayerWins => description.green().bold(),
        RoundEvent::PlayerLoses => description.red().bold(),
        RoundEvent::NoDecision => description.dimmed(),
        RoundEvent::Tie { .. } => description.yellow(),
        RoundEvent::HandResult { .. } | RoundEvent::DirectionsRevealed { .. } => {
            description.cyan()
        }
        RoundEvent::PhaseChanged { .. } => description.blue(),
        RoundEvent::ScoresReset => description.magenta(),
    }
}

/// Render an event as a coloured terminal line, if it has one.
fn render_event(event: &RoundEvent) -> Option<String> {
    describe_event(event).map(|d| colorize_event(event, &d).to_string())
}
