use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "tanggalmerah", version, about = "Indonesian holiday calendar & leave planner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend which workdays to bridge into long weekends
    Plan(commands::plan::PlanArgs),
    /// Holiday data
    Holidays {
        #[command(subcommand)]
        action: commands::holidays::HolidaysAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Plan(args) => commands::plan::run(args),
        Commands::Holidays { action } => commands::holidays::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
