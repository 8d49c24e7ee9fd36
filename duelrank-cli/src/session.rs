/// Interactive comparison session: presents one pair at a time, reads
/// commands from the terminal, and drives the engine until a terminal
/// state or an early quit.
use std::io::{self, BufRead, Write};

use duelrank_core::{ChoiceOutcome, CurrentPair, Engine, EngineError, Side};

use crate::config::Theme;
use crate::output;

/// One line of user input, parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Choose(Side),
    Remove(Side),
    Ranking,
    Progress,
    Help,
    Quit,
}

/// Parse a command line. Case-insensitive, surrounding whitespace ignored.
pub fn parse_command(line: &str) -> Option<Command> {
    match line.trim().to_ascii_lowercase().as_str() {
        "1" | "a" => Some(Command::Choose(Side::First)),
        "2" | "b" => Some(Command::Choose(Side::Second)),
        "d1" | "da" => Some(Command::Remove(Side::First)),
        "d2" | "db" => Some(Command::Remove(Side::Second)),
        "r" | "ranking" => Some(Command::Ranking),
        "p" | "progress" => Some(Command::Progress),
        "h" | "?" | "help" => Some(Command::Help),
        "q" | "quit" => Some(Command::Quit),
        _ => None,
    }
}

pub struct SessionOptions {
    pub theme: Theme,
    pub json: bool,
    pub verbose: bool,
    /// Ask before the first removal of the run.
    pub confirm_removals: bool,
    pub title: Option<String>,
}

const HELP_TEXT: &str = "\
  1 / 2    choose the winner
  d1 / d2  remove that option from the run (permanent)
  r        show the live ranking
  p        show progress
  q        quit early and print the ranking so far";

fn prompt_line(input: &mut impl BufRead, prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line),
        Err(_) => None,
    }
}

/// Run the session to completion, reading commands from `input` (the
/// terminal, or /dev/tty when the option list was piped on stdin).
/// Prints the final ranking (table or JSON) before returning.
pub fn run(engine: &mut Engine, opts: &SessionOptions, input: &mut impl BufRead) {
    if let Some(ref title) = opts.title {
        println!("Ranking: {title}");
    }
    println!(
        "{} options, {} pairs to compare. Type h for help.",
        engine.num_items(),
        engine.num_pairs(),
    );

    loop {
        let (first, second) = match engine.current_pair() {
            CurrentPair::Pair { first, second } => (first.to_string(), second.to_string()),
            CurrentPair::Finished => {
                println!("\nAll comparisons done.");
                break;
            }
            CurrentPair::Insufficient { remaining } => {
                match remaining {
                    Some(name) => println!("\nOnly \"{name}\" remains — nothing left to compare."),
                    None => println!("\nNo options remain."),
                }
                break;
            }
        };

        let progress = engine.progress();
        println!();
        println!("{} {}", output::progress_bar(&progress), output::progress_line(&progress));
        println!("  1) {first}");
        println!("  2) {second}");

        let Some(line) = prompt_line(input, "> ") else {
            println!();
            break; // EOF: treat as quit
        };

        let Some(command) = parse_command(&line) else {
            println!("Unrecognized input. Type h for help.");
            continue;
        };

        match command {
            Command::Choose(side) => match engine.record_choice(side) {
                Ok(ChoiceOutcome::Recorded) => {}
                Ok(ChoiceOutcome::SkippedStale) => {
                    // The stale entries a removal left behind have now
                    // been consumed and the cursor sits on the pair that
                    // was presented, so the choice applies to it.
                    if let Err(e) = engine.record_choice(side) {
                        println!("{e}");
                    }
                }
                Err(e) => println!("{e}"),
            },
            Command::Remove(side) => {
                let target = match side {
                    Side::First => &first,
                    Side::Second => &second,
                };
                if opts.confirm_removals && !engine.removal_occurred() {
                    let answer = prompt_line(input, &format!(
                        "Remove \"{target}\" from the run? This cannot be undone. [y/N] ",
                    ));
                    let confirmed = answer
                        .map(|s| {
                            let s = s.trim().to_ascii_lowercase();
                            s == "y" || s == "yes"
                        })
                        .unwrap_or(false);
                    if !confirmed {
                        continue;
                    }
                }
                match engine.remove_option(side) {
                    Ok(()) => println!("Removed \"{target}\"."),
                    Err(EngineError::CannotRemoveLast) => {
                        println!("Cannot remove — at least one option must remain.");
                    }
                    Err(e) => println!("{e}"),
                }
            }
            Command::Ranking => output::print_table(&engine.ranking(), opts.theme),
            Command::Progress => {
                let p = engine.progress();
                println!("{} {}", output::progress_bar(&p), output::progress_line(&p));
            }
            Command::Help => println!("{HELP_TEXT}"),
            Command::Quit => {
                println!("Quitting early.");
                break;
            }
        }
    }

    let rows = engine.ranking();
    let progress = engine.progress();
    if opts.json {
        output::print_json(&rows, &progress);
    } else {
        println!();
        output::print_table(&rows, opts.theme);
        println!("\n{}", output::progress_line(&progress));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    fn session_opts() -> SessionOptions {
        SessionOptions {
            theme: Theme::Dark,
            json: false,
            verbose: false,
            confirm_removals: false,
            title: None,
        }
    }

    fn scripted_engine(names: &[&str], seed: u64, script: &str) -> Engine {
        let mut engine = Engine::with_rng(names, &mut SmallRng::seed_from_u64(seed)).unwrap();
        let mut input = Cursor::new(script.as_bytes().to_vec());
        run(&mut engine, &session_opts(), &mut input);
        engine
    }

    #[test]
    fn scripted_session_runs_to_completion() {
        // Three options, three pairs, always pick the first side. The
        // session reads from any BufRead, not just a terminal.
        let engine = scripted_engine(&["a", "b", "c"], 7, "1\n1\n1\n");
        let progress = engine.progress();
        assert_eq!(progress.done, 3);
        assert_eq!(progress.total, 3);
        assert_eq!(engine.current_pair(), CurrentPair::Finished);
    }

    #[test]
    fn eof_quits_the_session_early() {
        let engine = scripted_engine(&["a", "b", "c"], 7, "1\n");
        assert_eq!(engine.progress().done, 1);
    }

    #[test]
    fn choice_after_removal_is_not_lost() {
        // Removing one side leaves the schedule entry at the cursor
        // stale. The very next choice on the re-presented pair must be
        // recorded, not swallowed by the stale-skip.
        let engine = scripted_engine(&["a", "b", "c"], 5, "d1\n1\n");
        assert_eq!(engine.active_count(), 2);

        let total_wins: u32 = engine.items().iter().map(|i| i.wins).sum();
        assert_eq!(total_wins, 1);
        assert_eq!(engine.current_pair(), CurrentPair::Finished);
    }

    #[test]
    fn removal_confirmation_declined_keeps_option() {
        let mut engine =
            Engine::with_rng(&["a", "b", "c"], &mut SmallRng::seed_from_u64(9)).unwrap();
        let opts = SessionOptions { confirm_removals: true, ..session_opts() };
        // Decline the first removal, then quit.
        let mut input = Cursor::new(b"d1\nn\nq\n".to_vec());
        run(&mut engine, &opts, &mut input);
        assert_eq!(engine.active_count(), 3);
        assert!(!engine.removal_occurred());
    }

    #[test]
    fn commands_parse() {
        assert_eq!(parse_command("1"), Some(Command::Choose(Side::First)));
        assert_eq!(parse_command(" 2 \n"), Some(Command::Choose(Side::Second)));
        assert_eq!(parse_command("B"), Some(Command::Choose(Side::Second)));
        assert_eq!(parse_command("d1"), Some(Command::Remove(Side::First)));
        assert_eq!(parse_command("D2"), Some(Command::Remove(Side::Second)));
        assert_eq!(parse_command("r"), Some(Command::Ranking));
        assert_eq!(parse_command("progress"), Some(Command::Progress));
        assert_eq!(parse_command("?"), Some(Command::Help));
        assert_eq!(parse_command("q"), Some(Command::Quit));
    }

    #[test]
    fn junk_does_not_parse() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("3"), None);
        assert_eq!(parse_command("delete"), None);
        assert_eq!(parse_command("12"), None);
    }
}
