use clap::{Parser, Subcommand};
use kana_core::*;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "kanaflip")]
#[command(about = "Japanese syllabary flip-card trainer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive study session (default)
    Study {
        /// Study mode (hiragana, katakana, mixed)
        #[arg(long)]
        mode: Option<String>,

        /// Start with the deck shuffled
        #[arg(long)]
        shuffle: bool,

        /// Seed the shuffle for a reproducible deck order
        #[arg(long)]
        seed: Option<u64>,

        /// Disable sound events
        #[arg(long)]
        no_sound: bool,
    },

    /// Print the character chart for a mode
    Chart {
        /// Study mode (hiragana, katakana, mixed)
        #[arg(long)]
        mode: Option<String>,
    },
}

fn main() -> Result<()> {
    kana_core::logging::init();

    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    config.validate()?;

    match cli.command {
        Some(Commands::Study {
            mode,
            shuffle,
            seed,
            no_sound,
        }) => cmd_study(mode, shuffle, seed, no_sound, &config),
        Some(Commands::Chart { mode }) => cmd_chart(mode, &config),
        None => {
            // Default to "study" command
            cmd_study(None, false, None, false, &config)
        }
    }
}

fn cmd_study(
    mode: Option<String>,
    shuffle: bool,
    seed: Option<u64>,
    no_sound: bool,
    config: &Config,
) -> Result<()> {
    let mode = resolve_mode(mode.as_deref(), config.study.default_mode);
    let shuffled = shuffle || config.study.shuffled;

    let notifier: Box<dyn Notifier> = if no_sound || !config.sound.enabled {
        Box::new(NullNotifier)
    } else {
        Box::new(TerminalChime)
    };

    let mut session = match seed {
        Some(seed) => Session::with_seed(mode, shuffled, notifier, seed),
        None => Session::new(mode, shuffled, notifier),
    };
    session.set_milestone_interval(config.celebration.streak_interval);

    // The display timer for streak celebrations belongs to this layer;
    // the core only raises and clears the flag.
    let mut timer =
        CelebrationTimer::new(Duration::from_secs(config.celebration.display_seconds));

    println!("Learn {}: flip the card, then rate yourself.", mode.label());

    loop {
        if timer.expired() {
            session.clear_celebration();
        }

        let snap = session.snapshot();
        display_card(&snap);

        match prompt_command(snap.revealed)? {
            StudyCommand::Flip => session.reveal(),

            StudyCommand::Knew => {
                if session.revealed() {
                    session.mark_correct();
                    // Re-arm on every milestone so a second one landing
                    // inside the first's display window gets its full delay
                    if session.celebrating() {
                        timer.arm();
                    }
                } else {
                    println!("Flip the card first ('f').");
                }
            }

            // Marking a miss needs no reveal: skipping a card you could
            // not read still breaks the streak
            StudyCommand::Missed => session.mark_incorrect(),

            StudyCommand::Next => session.advance(),
            StudyCommand::Previous => session.retreat(),

            StudyCommand::CycleMode => {
                session.cycle_mode();
                println!("Switched to {}.", session.mode().label());
            }

            StudyCommand::ToggleShuffle => {
                session.toggle_shuffle();
                if session.shuffled() {
                    println!("Shuffle on.");
                } else {
                    println!("Shuffle off.");
                }
            }

            StudyCommand::Reset => {
                session.reset();
                timer.cancel();
                println!("Progress reset.");
            }

            StudyCommand::Quit => break,

            StudyCommand::Unknown => println!("Unknown command."),
        }
    }

    println!();
    println!("Best streak this session: {}", session.best_streak());
    Ok(())
}

fn cmd_chart(mode: Option<String>, config: &Config) -> Result<()> {
    let mode = resolve_mode(mode.as_deref(), config.study.default_mode);

    match mode {
        StudyMode::Mixed => {
            display_table("Hiragana", syllabary::hiragana());
            println!();
            display_table("Katakana", syllabary::katakana());
        }
        single => display_table(single.label(), syllabary::for_mode(single)),
    }

    Ok(())
}

/// Parse a mode name, falling back to the configured default on bad input
fn resolve_mode(arg: Option<&str>, fallback: StudyMode) -> StudyMode {
    match arg {
        Some(s) => StudyMode::parse(s).unwrap_or_else(|| {
            eprintln!("Unknown mode: {}. Using {}.", s, fallback.label());
            fallback
        }),
        None => fallback,
    }
}

fn display_card(snap: &Snapshot) {
    println!();
    println!("╭─────────────────────────────╮");
    println!("│      {}", snap.glyph);
    println!("╰─────────────────────────────╯");

    if let Some(romaji) = snap.romaji {
        println!("  Reading: {}", romaji);
    }

    let shuffle_tag = if snap.shuffled { " · shuffled" } else { "" };
    println!(
        "  Card {} of {} · {}{}",
        snap.card_index,
        snap.deck_size,
        snap.mode.label(),
        shuffle_tag
    );
    println!("  Streak {} · Best {}", snap.streak, snap.best_streak);

    if snap.celebrating {
        println!("  ✨ Streak milestone! ✨");
    }
}

fn display_table(title: &str, entries: &[CharacterEntry]) {
    println!("{}", title);
    println!("─────────────────────────────────────────");
    for row in entries.chunks(5) {
        let line = row
            .iter()
            .map(|e| format!("{} {:<4}", e.glyph, e.romaji))
            .collect::<Vec<_>>()
            .join(" ");
        println!("  {}", line);
    }
}

enum StudyCommand {
    Flip,
    Knew,
    Missed,
    Next,
    Previous,
    CycleMode,
    ToggleShuffle,
    Reset,
    Quit,
    Unknown,
}

fn prompt_command(revealed: bool) -> Result<StudyCommand> {
    println!("─────────────────────────────────────────");
    if revealed {
        println!("  'y' knew it · 'n' still learning");
    } else {
        println!("  'f' (or Enter) to flip the card");
    }
    println!("  '.' next · ',' previous · 'm' mode · 's' shuffle · 'r' reset · 'q' quit");
    print!("> ");
    io::stdout().flush()?;

    let mut input = String::new();
    let read = io::stdin().read_line(&mut input)?;
    if read == 0 {
        // EOF - treat like quit so piped input ends cleanly
        return Ok(StudyCommand::Quit);
    }

    let command = match input.trim().to_lowercase().as_str() {
        "" | "f" => StudyCommand::Flip,
        "y" => StudyCommand::Knew,
        "n" => StudyCommand::Missed,
        "." => StudyCommand::Next,
        "," => StudyCommand::Previous,
        "m" => StudyCommand::CycleMode,
        "s" => StudyCommand::ToggleShuffle,
        "r" => StudyCommand::Reset,
        "q" => StudyCommand::Quit,
        _ => StudyCommand::Unknown,
    };

    Ok(command)
}

/// Cancellable timer that clears the celebratory display after a fixed
/// delay. Owned here so a stale callback can never touch a new session.
struct CelebrationTimer {
    display: Duration,
    deadline: Option<Instant>,
}

impl CelebrationTimer {
    fn new(display: Duration) -> Self {
        Self {
            display,
            deadline: None,
        }
    }

    fn arm(&mut self) {
        self.deadline = Some(Instant::now() + self.display);
    }

    fn cancel(&mut self) {
        self.deadline = None;
    }

    /// True exactly once after the armed delay has elapsed
    fn expired(&mut self) -> bool {
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Sound backend for plain terminals: a BEL per event.
///
/// Playback failure is swallowed; sound must never affect session state.
struct TerminalChime;

impl Notifier for TerminalChime {
    fn notify(&self, event: SoundEvent) {
        tracing::debug!(event = event.name(), "sound event");
        let mut out = io::stdout();
        let _ = out.write_all(b"\x07");
        let _ = out.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_unarmed_timer_never_expires() {
        let mut timer = CelebrationTimer::new(Duration::ZERO);
        assert!(!timer.expired());
        assert!(!timer.expired());
    }

    #[test]
    fn test_armed_timer_expires_exactly_once() {
        let mut timer = CelebrationTimer::new(Duration::ZERO);
        timer.arm();
        assert!(timer.expired());
        assert!(!timer.expired());
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let mut timer = CelebrationTimer::new(Duration::ZERO);
        timer.arm();
        timer.cancel();
        assert!(!timer.expired());
    }

    #[test]
    fn test_rearm_extends_the_display_window() {
        let mut timer = CelebrationTimer::new(Duration::from_millis(200));
        timer.arm();
        thread::sleep(Duration::from_millis(100));
        timer.arm(); // second milestone inside the first window

        // Past the first deadline but not the second
        thread::sleep(Duration::from_millis(150));
        assert!(!timer.expired());

        thread::sleep(Duration::from_millis(200));
        assert!(timer.expired());
    }
}
