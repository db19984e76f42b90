use std::env;
use std::fs;
use std::io::{self, BufRead, Write};
use std::process;
use std::time::Instant;

use chord_drill::{Degree, DrillError, DrillSettings, RoundResult, Screen, Session};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SETTINGS_ENV: &str = "CHORD_DRILL_SETTINGS";

fn init_logging() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .init();
}

fn load_settings() -> Result<DrillSettings, DrillError> {
    match env::var(SETTINGS_ENV) {
        Ok(path) => {
            let content = fs::read_to_string(&path).map_err(|e| {
                DrillError::SettingsError(format!("cannot read '{}': {}", path, e))
            })?;
            DrillSettings::from_yaml(&content)
        }
        Err(_) => Ok(DrillSettings::default()),
    }
}

fn print_round(session: &Session, now: Instant) {
    let Some(progression) = session.progression() else {
        return;
    };
    let score = session.scoreboard();
    let timer = session
        .time_remaining(now)
        .map(|left| format!("  {}s left", left.as_secs()))
        .unwrap_or_default();
    println!();
    println!(
        "Score {:+}  ✓ {}  ✗ {}{}",
        score.score, score.correct, score.incorrect, timer
    );
    println!("Key of {} Major", progression.key_display());
    let chords: Vec<String> = (0..progression.len())
        .filter_map(|slot| progression.chord_display(slot))
        .collect();
    println!("  {}", chords.join("   "));
    if session.is_quick_mode() {
        print!("Scale degree (1-7)> ");
    } else {
        print!("Roman numerals> ");
    }
    let _ = io::stdout().flush();
}

fn print_feedback(result: &RoundResult) {
    if result.correct {
        println!("✓ Correct! +1");
    } else {
        println!("✗ Wrong! −1");
    }
    for slot in &result.slots {
        let submitted = slot.submitted.as_deref().unwrap_or("—");
        if slot.correct {
            println!("  {:<8} ✓ {}", slot.chord_display, slot.expected);
        } else {
            println!("  {:<8} ✗ {} ({})", slot.chord_display, submitted, slot.expected);
        }
    }
}

fn answer(session: &mut Session, line: &str) -> Result<(), DrillError> {
    if session.is_quick_mode() {
        match line.trim().parse::<u8>() {
            Ok(n) => session.set_degree(Degree::new(n)?),
            Err(_) => session.submit_text(&[line]).map(|_| ()),
        }
    } else {
        let answers: Vec<&str> = line.split_whitespace().collect();
        session.submit_text(&answers).map(|_| ())
    }
}

fn run(settings: DrillSettings) -> Result<(), DrillError> {
    let mut rng = rand::thread_rng();
    let mut session = Session::new(settings)?;
    session.start_game(&mut rng, Instant::now())?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let now = Instant::now();
        match session.tick(now) {
            Screen::Playing => {
                print_round(&session, now);
                let Some(Ok(line)) = lines.next() else {
                    break;
                };
                if line.trim() == "q" {
                    break;
                }
                // The countdown keeps running while the prompt waits.
                if session.tick(Instant::now()) == Screen::GameOver {
                    continue;
                }
                if let Err(e) = answer(&mut session, &line) {
                    eprintln!("{}", e);
                }
            }
            Screen::Feedback => {
                if let Some(result) = session.last_result() {
                    print_feedback(result);
                }
                session.next_round(&mut rng, Instant::now())?;
            }
            Screen::GameOver | Screen::Settings => break,
        }
    }

    let score = session.scoreboard();
    println!();
    println!("Game over!");
    println!(
        "Final score {:+}  ✓ {}  ✗ {}",
        score.score, score.correct, score.incorrect
    );
    Ok(())
}

fn main() {
    init_logging();

    let settings = match load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error loading settings: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run(settings) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
