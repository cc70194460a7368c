use clap::{CommandFactory, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "bedtime-cli", version, about = "Bedtime CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the ideal bedtime
    Estimate {
        /// Wake-up time (HH:MM or H:MM AM/PM); config default when omitted
        #[arg(long)]
        wake: Option<String>,
        /// Desired sleep in hours (2-16); config default when omitted
        #[arg(long)]
        sleep: Option<f64>,
        /// Daily coffee cups (0-10); config default when omitted
        #[arg(long)]
        coffee: Option<u8>,
        /// Emit the estimate as JSON
        #[arg(long)]
        json: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Model artifact inspection
    Model {
        #[command(subcommand)]
        action: commands::model::ModelAction,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Estimate {
            wake,
            sleep,
            coffee,
            json,
        } => commands::estimate::run(wake, sleep, coffee, json),
        Commands::Config { action } => commands::config::run(action),
        Commands::Model { action } => commands::model::run(action),
        Commands::Completions { shell } => {
            commands::completions::run(shell, &mut Cli::command());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
