use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use libbangla::{
    create_ime_engine_with_config, enable_bangla_typing, rule_count, BanglaEngine, BaseKey,
    Config, InputField, KeyEvent, Layout, OutputUnit, TextBuffer,
};

#[derive(Parser)]
#[command(name = "libbangla")]
#[command(about = "Type Bangla with a Latin keyboard: phonetic layout with vowel-sign composition")]
#[command(version)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Feed each character of KEYS as a keystroke and print the result
    Type {
        /// Keystrokes as typed on a US keyboard (uppercase means shift)
        keys: String,
        /// Print every edit instruction as a JSON line
        #[arg(long)]
        json: bool,
    },
    /// Interactive mode: each line is typed into a persistent buffer
    Repl,
    /// Print the key table
    Table,
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::load_toml(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(Config::default()),
    }
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Type `keys` into `field`, optionally echoing each edit as JSON.
fn type_keys(field: &mut InputField<TextBuffer>, keys: &str, json: bool) -> Result<()> {
    for ch in keys.chars() {
        let event = KeyEvent::from_char(ch);
        let result = field.key_press(&event);
        if json {
            match field.last_edit() {
                Some(edit) => println!("{}", serde_json::to_string(edit)?),
                None => println!("{}", serde_json::json!({ "operation": "default" })),
            }
        }
        tracing::trace!(%ch, ?result, "typed");
    }
    Ok(())
}

fn run_type(engine: Arc<BanglaEngine>, keys: &str, json: bool) -> Result<()> {
    let mut field = enable_bangla_typing(Some(TextBuffer::new()), engine)?;
    type_keys(&mut field, keys, json)?;
    let buffer = field.target();
    println!("{}", buffer.text());
    if json {
        println!(
            "{}",
            serde_json::json!({ "text": buffer.text(), "cursor": buffer.cursor() })
        );
    }
    Ok(())
}

fn run_repl(engine: Arc<BanglaEngine>) -> Result<()> {
    let mut field = enable_bangla_typing(Some(TextBuffer::new()), engine.clone())?;

    println!("libbangla: type keys and press Enter");
    println!("Commands: :toggle (Bangla on/off), :clear, :quit");
    println!("Ctrl-D to exit.");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        match line.trim_end() {
            ":quit" => break,
            ":clear" => field.target_mut().clear(),
            ":toggle" => {
                let mode = engine.toggle_mode();
                println!("mode: {:?}", mode);
                continue;
            }
            keys => type_keys(&mut field, keys, false)?,
        }
        let buffer = field.target();
        println!("{}  (cursor {}/{})", buffer.text(), buffer.cursor(), buffer.len());
        io::stdout().flush()?;
    }
    Ok(())
}

fn describe(unit: OutputUnit) -> String {
    match unit {
        OutputUnit::Literal(" ") => "space".to_string(),
        OutputUnit::Literal(s) => s.to_string(),
        OutputUnit::VowelSign(s) => format!("{s} (sign)"),
        OutputUnit::Unhandled => "-".to_string(),
    }
}

/// The key table of `engine`'s layout, one row per mappable key.
fn render_table(engine: &BanglaEngine) -> String {
    let layout = engine.layout();
    let mut out = format!("{:<6} {:<14} {:<14}\n", "key", "plain", "shift");
    let keys = BaseKey::LETTERS
        .iter()
        .copied()
        .chain([BaseKey::QuoteDbl, BaseKey::Space]);
    for key in keys {
        out.push_str(&format!(
            "{:<6} {:<14} {:<14}\n",
            format!("{:?}", key),
            describe(layout.resolve(key, false)),
            describe(layout.resolve(key, true)),
        ));
    }
    out.push_str(&format!("{} vowel combination rules\n", rule_count()));
    out
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    init_tracing(&config);

    let engine = Arc::new(create_ime_engine_with_config(&config));
    match cli.command {
        Commands::Type { keys, json } => run_type(engine, &keys, json)?,
        Commands::Repl => run_repl(engine)?,
        Commands::Table => print!("{}", render_table(&engine)),
    }
    Ok(())
}
