mod config;
mod output;
mod presets;
mod session;

use clap::Parser;
use duelrank_core::Engine;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal};
use std::path::PathBuf;

use crate::config::Theme;
use crate::session::SessionOptions;

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "duelrank", version, about = "Rank a list of options through pairwise choices")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Run an interactive pairwise ranking session
    Rank(RankArgs),
    /// List the built-in presets
    Presets,
    /// Set and persist the display theme
    Theme(ThemeArgs),
    /// Create a default config file at ~/.config/duelrank/config.toml
    Init,
}

#[derive(Parser)]
struct RankArgs {
    /// File with one option per line, or a JSON array of strings
    #[arg(long)]
    items: Option<PathBuf>,

    /// Inline option (repeatable)
    #[arg(long = "item")]
    inline_items: Vec<String>,

    /// Built-in preset to rank (see `duelrank presets`)
    #[arg(long)]
    preset: Option<String>,

    /// Seed for a reproducible comparison order
    #[arg(long)]
    seed: Option<u64>,

    /// Output the final ranking as JSON
    #[arg(long)]
    json: bool,

    /// Show extra notes on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Override the configured theme for this run ("light" or "dark")
    #[arg(long)]
    theme: Option<String>,

    /// Skip the confirmation prompt before the first removal
    #[arg(long)]
    no_confirm: bool,

    /// Path to config file (default: ~/.config/duelrank/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser)]
struct ThemeArgs {
    /// "light" or "dark"
    theme: String,

    /// Path to config file (default: ~/.config/duelrank/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Parse a string as either a JSON array of strings or plain text (one
/// option per line).
fn parse_items_from_str(content: &str) -> Vec<String> {
    let trimmed = content.trim();
    if trimmed.starts_with('[') {
        // Try JSON array
        let items: Vec<String> = serde_json::from_str(trimmed)
            .unwrap_or_else(|e| bail(format!("File looks like JSON but failed to parse: {e}")));
        items.into_iter().filter(|s| !s.trim().is_empty()).collect()
    } else {
        // Plain text, one option per line
        trimmed
            .lines()
            .map(|l| l.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Load options from the chosen source: --preset, --items file,
/// repeatable --item flags, or stdin when piped. Returns the list and a
/// session title.
fn load_items(args: &RankArgs) -> (Vec<String>, Option<String>) {
    if let Some(ref key) = args.preset {
        let preset = presets::find(key).unwrap_or_else(|| {
            let known: Vec<&str> = presets::PRESETS.iter().map(|p| p.key).collect();
            bail(format!("Unknown preset \"{key}\". Available: {}", known.join(", ")));
        });
        if args.items.is_some() || !args.inline_items.is_empty() {
            bail("--preset cannot be combined with --items or --item");
        }
        let names = preset.names.iter().map(|s| s.to_string()).collect();
        return (names, Some(preset.title.to_string()));
    }

    let mut items = Vec::new();

    if let Some(ref path) = args.items {
        let content = std::fs::read_to_string(path)
            .unwrap_or_else(|e| bail(format!("Failed to read items file {}: {e}", path.display())));
        items = parse_items_from_str(&content);
    }

    items.extend(args.inline_items.iter().cloned());

    // From stdin (only if no file and no inline items)
    if items.is_empty() {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            bail("No options provided. Use --preset <name>, --items <file>, --item <name>, or pipe options via stdin.");
        }
        let content: String = stdin
            .lock()
            .lines()
            .map(|l| l.expect("Failed to read from stdin"))
            .collect::<Vec<_>>()
            .join("\n");
        items = parse_items_from_str(&content);
    }

    if items.is_empty() {
        bail("No options provided. Use --preset <name>, --items <file>, --item <name>, or pipe options via stdin.");
    }

    (items, Some("Custom List".to_string()))
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rank(args) => run_rank(args),
        Commands::Presets => {
            for preset in presets::PRESETS {
                println!("{:<18} {} ({} options)", preset.key, preset.title, preset.names.len());
            }
        }
        Commands::Theme(args) => {
            let theme = Theme::parse(&args.theme)
                .unwrap_or_else(|| bail(format!("Unknown theme \"{}\". Use \"light\" or \"dark\".", args.theme)));
            let path = args.config.unwrap_or_else(config::config_path);
            config::save_theme(&path, theme);
            println!("Theme set to {}.", theme.as_str());
        }
        Commands::Init => {
            let path = config::create_default_config();
            println!("Created config at {}", path.display());
            println!("Edit it to set your default theme.");
        }
    }
}

fn run_rank(args: RankArgs) {
    let config_path = args.config.clone().unwrap_or_else(config::config_path);
    let cfg = config::load_config(&config_path);

    let theme = match args.theme.as_deref() {
        Some(s) => Theme::parse(s)
            .unwrap_or_else(|| bail(format!("Unknown theme \"{s}\". Use \"light\" or \"dark\"."))),
        None => cfg.theme(),
    };

    let (items, title) = load_items(&args);

    let mut engine = match args.seed {
        Some(seed) => Engine::with_rng(&items, &mut SmallRng::seed_from_u64(seed)),
        None => Engine::new(&items),
    }
    .unwrap_or_else(|e| bail(e));

    if args.verbose {
        eprintln!(
            "Ranking {} options ({} comparisons scheduled)",
            engine.num_items(),
            engine.num_pairs(),
        );
        if let Some(seed) = args.seed {
            eprintln!("Seed: {seed}");
        }
    }

    let opts = SessionOptions {
        theme,
        json: args.json,
        verbose: args.verbose,
        confirm_removals: cfg.confirm_removals() && !args.no_confirm,
        title,
    };

    // When the option list was piped on stdin, the session's commands
    // come from the controlling terminal instead.
    let mut input: Box<dyn BufRead> = if io::stdin().is_terminal() {
        Box::new(io::stdin().lock())
    } else {
        let tty = File::open("/dev/tty").unwrap_or_else(|e| {
            bail(format!("stdin is piped and the controlling terminal could not be opened: {e}"))
        });
        Box::new(BufReader::new(tty))
    };

    session::run(&mut engine, &opts, &mut input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_items_are_trimmed_and_filtered() {
        let items = parse_items_from_str("  Pizza \n\nSushi\n   \nTacos\n");
        assert_eq!(items, vec!["Pizza", "Sushi", "Tacos"]);
    }

    #[test]
    fn json_array_items() {
        let items = parse_items_from_str("[\"Pizza\", \"Sushi\", \"\"]");
        assert_eq!(items, vec!["Pizza", "Sushi"]);
    }

    #[test]
    fn single_line_is_plain_text() {
        let items = parse_items_from_str("just one option");
        assert_eq!(items, vec!["just one option"]);
    }
}
