//! Command-line argument parsing with clap.

use clap::{Parser, Subcommand};

use rack_render::RenderMode;

/// rackctl - rack device-management client.
#[derive(Parser, Debug, Clone)]
#[command(name = "rackctl")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Device service to talk to.
    #[arg(short = 'H', long, env = "RACKCTL_HOST", default_value = "http://localhost:5000")]
    pub host: String,

    /// Output format. Defaults to each command's preferred format.
    #[arg(short, long, value_enum)]
    pub format: Option<RenderMode>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List every device known to the service.
    Scan(ScanArgs),

    /// Read the current values of one device.
    Read(TargetArgs),

    /// Show the full record for one device.
    Info(TargetArgs),

    /// Check service health.
    Status,
}

/// Arguments for the scan command.
#[derive(Parser, Debug, Clone)]
pub struct ScanArgs {
    /// Sort keys in priority order (comma-separated).
    #[arg(
        short,
        long = "order-by",
        value_delimiter = ',',
        default_values_t = ["rack".to_string(), "board".to_string(), "device".to_string()]
    )]
    pub order_by: Vec<String>,

    /// Keep only devices matching the condition; repeat to AND several.
    #[arg(long = "filter", value_name = "FIELD=VALUE")]
    pub filter: Vec<String>,
}

/// Arguments addressing one device.
#[derive(Parser, Debug, Clone)]
pub struct TargetArgs {
    /// Rack identifier.
    pub rack: String,

    /// Board identifier.
    pub board: String,

    /// Device identifier.
    pub device: String,
}
