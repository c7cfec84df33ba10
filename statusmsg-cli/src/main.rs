use anyhow::Result;
use clap::{Parser, Subcommand};
use statusmsg_cli::{commands, StateKind};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "statusmsg")]
#[command(about = "Statusmsg - Borsh codec for status message contract state", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode JSON state into base64 Borsh
    Encode {
        /// Input JSON file ("-" for stdin)
        #[arg(short, long)]
        input: String,

        /// Output file for the base64 text
        #[arg(short, long)]
        output: Option<String>,

        /// Shape of the state
        #[arg(long, value_enum, default_value_t = StateKind::Message)]
        kind: StateKind,
    },

    /// Decode base64 Borsh state into JSON
    Decode {
        /// Input base64 file ("-" for stdin)
        #[arg(short, long)]
        input: String,

        /// Output file for the JSON
        #[arg(short, long)]
        output: Option<String>,

        /// Shape of the state
        #[arg(long, value_enum, default_value_t = StateKind::Message)]
        kind: StateKind,
    },

    /// Show the byte layout of base64 Borsh state
    Inspect {
        /// Input base64 file ("-" for stdin)
        #[arg(short, long)]
        input: String,

        /// Shape of the state
        #[arg(long, value_enum, default_value_t = StateKind::Message)]
        kind: StateKind,
    },

    /// Print the status stored for an account
    Lookup {
        /// Input base64 file ("-" for stdin)
        #[arg(short, long)]
        input: String,

        /// Account identifier
        #[arg(short, long)]
        account: String,
    },

    /// Print the storage key the state lives under
    StateKey,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Encode {
            input,
            output,
            kind,
        } => commands::encode::execute(&input, output.as_deref(), kind).map(|_| ()),

        Commands::Decode {
            input,
            output,
            kind,
        } => commands::decode::execute(&input, output.as_deref(), kind).map(|_| ()),

        Commands::Inspect { input, kind } => commands::inspect::execute(&input, kind).map(|_| ()),

        Commands::Lookup { input, account } => {
            commands::lookup::execute(&input, &account).map(|_| ())
        }

        Commands::StateKey => commands::state_key::execute().map(|_| ()),
    }
}
