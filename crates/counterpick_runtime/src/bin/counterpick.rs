//! counterpick CLI entry point.

use counterpick_runtime::{
    FileStore, KeyValueStore, MemoryStore, Repl, ScriptedEditor, Session, SessionConfig, logging,
};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

/// Directory used for the file store when `--store` is not given.
const DEFAULT_STORE_DIR: &str = ".counterpick";

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    store_dir: Option<PathBuf>,
    memory: bool,
    url: Option<String>,
    key: Option<String>,
    batch: Option<PathBuf>,
    yes: bool,
    verbosity: u8,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-y" | "--yes" => config.yes = true,
            "--memory" => config.memory = true,
            "--store" => {
                let dir = args.next().ok_or("--store requires a directory")?;
                config.store_dir = Some(PathBuf::from(dir));
            }
            "--url" => config.url = Some(args.next().ok_or("--url requires a value")?),
            "--key" => config.key = Some(args.next().ok_or("--key requires a value")?),
            "-b" | "--batch" => {
                let file = args.next().ok_or("--batch requires a file")?;
                config.batch = Some(PathBuf::from(file));
            }
            flags if is_verbosity(flags) => {
                let count = u8::try_from(flags.len() - 1).unwrap_or(u8::MAX);
                config.verbosity = config.verbosity.saturating_add(count);
            }
            other => return Err(format!("unknown option: {other}").into()),
        }
    }

    if config.memory && config.store_dir.is_some() {
        return Err("--memory and --store cannot be combined".into());
    }

    Ok(config)
}

/// Matches `-v`, `-vv`, `-vvv`, ...
fn is_verbosity(arg: &str) -> bool {
    arg.strip_prefix('-')
        .is_some_and(|rest| !rest.is_empty() && rest.bytes().all(|b| b == b'v'))
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("counterpick {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    logging::init(config.verbosity)?;

    let mut session_config = SessionConfig::default();
    if let Some(key) = &config.key {
        session_config = session_config.with_storage_key(key.clone());
    }

    let store: Box<dyn KeyValueStore> = if config.memory {
        Box::new(MemoryStore::new())
    } else {
        let dir = config
            .store_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_DIR));
        Box::new(FileStore::open(dir)?)
    };

    let session = Session::start(store, session_config, config.url.as_deref());

    // A script cannot answer prompts, so batch runs decline unless -y.
    if let Some(path) = &config.batch {
        let script = fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        let editor = ScriptedEditor::from_script(&script).echoing();
        let mut repl = Repl::with_editor(editor, session)
            .without_banner()
            .with_prompt("> ")
            .with_auto_confirm(config.yes);
        repl.run()?;
        return Ok(());
    }

    let mut repl = Repl::new(session)?;
    if config.yes {
        repl = repl.with_auto_confirm(true);
    }
    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mcounterpick\x1b[0m - Arrange characters into counter-pick sets

\x1b[1mUSAGE:\x1b[0m
    counterpick [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    --store DIR        Save the roster in DIR (default: {DEFAULT_STORE_DIR})
    --memory           Keep the roster in memory only
    --url URL          Open a page URL, previewing any share link it carries
    --key KEY          Storage key (default: pokemon-unite-counter-pick)
    -b, --batch FILE   Run commands from FILE and exit
    -y, --yes          Answer yes to every confirmation
    -v                 More logging (repeat for more; RUST_LOG overrides)

\x1b[1mEXAMPLES:\x1b[0m
    counterpick                          Start the interactive REPL
    counterpick --memory -b demo.txt     Run a script without saving
    counterpick --url 'http://x/?d=...'  Preview a shared roster

\x1b[1mREPL COMMANDS:\x1b[0m
    Type `help` inside the REPL for the command list.
    Ctrl+D               Exit REPL"
    );
}
