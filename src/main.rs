use clap::{Parser, Subcommand};
use panelfit::control_defs::ControlDefRegistry;
use panelfit::panel::CPConfiguration;
use std::process;
use tracing::{error, info};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Panel description file.
    #[arg(global = true, short, long, default_value = "data/panel.json")]
    panel: String,

    /// Control definition file; the compiled-in controls.dat table is used
    /// when omitted.
    #[arg(global = true, short, long)]
    defs: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Check(cmd::check::CheckArgs),
    Validate(cmd::validate::ValidateArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let defs = match &cli.defs {
        Some(path) => ControlDefRegistry::load_from_file(path).unwrap_or_else(|e| {
            error!("{}", e);
            process::exit(1);
        }),
        None => ControlDefRegistry::builtin(),
    };

    info!("Loading panel: {}", cli.panel);
    let panel = CPConfiguration::load_from_file(&cli.panel).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });

    match cli.command {
        Commands::Check(args) => cmd::check::run(args, &defs, &panel),
        Commands::Validate(args) => cmd::validate::run(args, &defs, &panel),
    }
}
