use std::io::{self, BufRead, Write};
use std::time::Duration;

use colored::Colorize;
use tracing::debug;

use hoi_core::{Direction, Hand, Side};
use hoi_engine::{
    EngineConfig, Locale, Narrator, NarratorConfig, Phase, RoundEngine, Scheduler,
    WallClockScheduler,
};

/// Prints the character's lines to stdout.
struct ConsoleNarrator;

impl Narrator for ConsoleNarrator {
    fn say(&mut self, line: &str) {
        println!("  {} {}", "CPU>".magenta().bold(), format!("「{line}」").magenta());
    }
}

pub fn run(seed: Option<u64>, delay: Duration, locale: &str, quiet: bool) -> Result<(), String> {
    let locale: Locale = locale.parse().map_err(|e| format!("{e}"))?;
    let mut config = EngineConfig::default()
        .with_delay(delay)
        .with_narrator(NarratorConfig::new().with_locale(locale).with_enabled(!quiet));
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let mut engine =
        RoundEngine::new(config, WallClockScheduler::new()).with_narrator(ConsoleNarrator);
    debug!(
        ?seed,
        reveal = ?engine.config().reveal_delay,
        resolve = ?engine.config().resolve_delay,
        %locale,
        quiet,
        "starting interactive session"
    );

    println!("  {} janken, then acchi muite hoi", "hoi".bold());
    println!("  Type 'help' for commands, 'quit' to exit.\n");
    engine.start_new_round();
    flush_events(&mut engine);

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("{} ", prompt(engine.phase()));
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input.to_lowercase().as_str() {
            "quit" | "q" => break,
            "help" => print_help(),
            "score" => print_score(&engine),
            "reset" => engine.reset_match(),
            "next" | "n" => {
                if engine.phase() == Phase::Deciding {
                    engine.start_new_round();
                } else {
                    println!("  {}", "the round is still in play".yellow());
                }
            }
            _ => submit(&mut engine, input),
        }

        wait_pending(&mut engine);
        println!();
    }

    debug!(events = engine.events_recorded(), "session closed");
    print_score(&engine);
    Ok(())
}

fn submit(engine: &mut RoundEngine<WallClockScheduler>, input: &str) {
    match engine.phase() {
        Phase::Janken => match input.parse::<Hand>() {
            Ok(hand) => engine.submit_hand(hand),
            Err(e) => println!("  {}", e.to_string().yellow()),
        },
        Phase::Pointing => match input.parse::<Direction>() {
            Ok(direction) => engine.submit_direction(direction),
            Err(e) => println!("  {}", e.to_string().yellow()),
        },
        Phase::Deciding => {
            println!("  {}", "round over: type 'next' to play again".yellow());
        }
    }
}

/// Block until every scheduled continuation has fired, printing events as
/// they happen.
fn wait_pending(engine: &mut RoundEngine<WallClockScheduler>) {
    flush_events(engine);
    while let Some(wait) = engine.scheduler().next_due_in() {
        std::thread::sleep(wait);
        engine.tick();
        flush_events(engine);
    }
}

fn flush_events(engine: &mut RoundEngine<WallClockScheduler>) {
    for event in engine.drain_events() {
        if let Some(line) = super::render_event(&event) {
            println!("  {line}");
        }
        if event.is_decision() {
            println!("  {}", "type 'next' for another round".dimmed());
        }
    }
}

fn prompt(phase: Phase) -> String {
    match phase {
        Phase::Janken => "hand (rock/scissors/paper)>".to_string(),
        Phase::Pointing => "direction (left/right/up/down)>".to_string(),
        Phase::Deciding => "next>".to_string(),
    }
}

fn print_score(engine: &RoundEngine<WallClockScheduler>) {
    let board = engine.scoreboard();
    println!(
        "  {} you {} - {} cpu",
        "Score:".bold(),
        board.get(Side::Player),
        board.get(Side::Cpu)
    );
}

fn print_help() {
    println!("  {}", "Commands".bold().underline());
    println!(
        "  rock | scissors | paper   throw a hand (r/s/p, {})",
        Hand::ALL.map(Hand::label_ja).join("/")
    );
    println!(
        "  left | right | up | down  pick a direction (l/r/u/d, {})",
        Direction::ALL.map(Direction::label_ja).join("/")
    );
    println!("  next                      start the next round");
    println!("  score                     show the score");
    println!("  reset                     zero the score and restart");
    println!("  quit                      leave");
}
