//! Command-line arguments

use clap::Parser as ClapParser;
use tracing::Level;

/// Byte array shell
#[derive(ClapParser, Debug, Clone)]
#[command(name = "bytearray-shell")]
#[command(version, about = "Interactive shell for growable byte arrays", long_about = None)]
pub struct Cli {
    /// Script of shell commands to execute
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<String>,

    /// Commands to execute, separated by `;`
    #[arg(short, long, value_name = "CMDS")]
    pub eval: Option<String>,

    /// Start the interactive REPL
    #[arg(short, long)]
    pub repl: bool,

    /// JSON file with byte array options
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Initial capacity of new byte arrays (overrides the config file)
    #[arg(long, value_name = "N")]
    pub initial_capacity: Option<usize>,

    /// Hard length limit of new byte arrays (overrides the config file)
    #[arg(long, value_name = "N")]
    pub max_length: Option<usize>,

    /// Most verbose log level written to stderr
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: Level,
}

impl Cli {
    /// Arguments that run `path` as a script
    pub fn with_file(path: String) -> Self {
        Cli {
            file: Some(path),
            eval: None,
            repl: false,
            config: None,
            initial_capacity: None,
            max_length: None,
            log_level: Level::WARN,
        }
    }
}
