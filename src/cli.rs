use std::error::Error;
use std::io::Read;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::io::{DirStore, Session, StorageKey};
use crate::store::{Action, Touched};

#[derive(Parser)]
#[command(
    name = "lb",
    about = concat!("[>] lifeboard v", env!("CARGO_PKG_VERSION"), " - personal productivity state store"),
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Run against a different data directory
    #[arg(short = 'C', long = "data-dir", global = true, default_value = ".lifeboard")]
    pub data_dir: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the stored JSON blob for one key
    Show(ShowArgs),
    /// Run one action (JSON) through the store
    Dispatch(DispatchArgs),
    /// List all storage keys
    Keys,
    /// Purge trash entries older than 30 days
    Sweep,
    /// Wipe all stored data and reinstall defaults
    Reset,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Storage key name, e.g. `boards` or `dailyTodos`
    pub key: String,
}

#[derive(Args)]
pub struct DispatchArgs {
    /// Action as JSON, e.g. `{"type":"ADD_BOARD","title":"Work"}`.
    /// Reads stdin when omitted.
    pub action: Option<String>,
}

pub fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let open = || -> Result<Session<DirStore>, Box<dyn Error>> {
        Ok(Session::open(DirStore::open(&cli.data_dir)?))
    };

    match cli.command {
        Commands::Keys => {
            for key in StorageKey::ALL {
                println!("{key}");
            }
            Ok(())
        }
        Commands::Show(args) => {
            let key = StorageKey::parse(&args.key)
                .ok_or_else(|| format!("unknown storage key '{}'", args.key))?;
            let session = open()?;
            println!("{}", session.encode_key(key)?);
            Ok(())
        }
        Commands::Dispatch(args) => {
            let raw = match args.action {
                Some(raw) => raw,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let action: Action = serde_json::from_str(&raw)
                .map_err(|e| format!("invalid action: {}", e))?;
            let mut session = open()?;
            match session.dispatch(action)? {
                Touched::None => println!("no-op"),
                Touched::Keys(keys) => {
                    for key in keys {
                        println!("wrote {key}");
                    }
                }
                Touched::SaveAll => println!("wrote all keys"),
                Touched::Reset => println!("storage reset"),
            }
            Ok(())
        }
        Commands::Sweep => {
            // Opening the session runs the sweep and writes back.
            open()?;
            println!("sweep complete");
            Ok(())
        }
        Commands::Reset => {
            let mut session = open()?;
            session.dispatch(Action::ResetSettings)?;
            println!("storage reset");
            Ok(())
        }
    }
}
