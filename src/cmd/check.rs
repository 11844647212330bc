use crate::reports;
use clap::Args;
use panelfit::check::check_game_bulk;
use panelfit::control_defs::ControlDefRegistry;
use panelfit::game::GameDb;
use panelfit::panel::CPConfiguration;
use panelfit::video::{
    CachedModelineCalculator, ModelineCalculator, MonitorConfig, NoopModelineCalculator,
};
use std::fs;
use std::process;
use tracing::{error, info};

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Game records file.
    #[arg(short, long, default_value = "data/games.json")]
    pub games: String,

    /// Monitor configuration file; video is reported as unknown when omitted.
    #[arg(short, long)]
    pub monitors: Option<String>,

    /// Precomputed modeline results file.
    #[arg(long)]
    pub modelines: Option<String>,

    /// Print the full result payload as JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Print per-title control assignment tables.
    #[arg(long, default_value_t = false)]
    pub detail: bool,

    /// Titles to check; every known game when omitted.
    pub names: Vec<String>,
}

pub fn run(args: CheckArgs, defs: &ControlDefRegistry, panel: &CPConfiguration) {
    let db = GameDb::load_from_file(&args.games).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });

    let monitor_configs: Vec<MonitorConfig> = match &args.monitors {
        Some(path) => {
            let content = fs::read_to_string(path).unwrap_or_else(|e| {
                error!("Failed to read monitor configs: {}", e);
                process::exit(1);
            });
            serde_json::from_str(&content).unwrap_or_else(|e| {
                error!("Failed to parse monitor configs: {}", e);
                process::exit(1);
            })
        }
        None => Vec::new(),
    };

    let calculator: Box<dyn ModelineCalculator> = match &args.modelines {
        Some(path) => Box::new(CachedModelineCalculator::load_from_file(path).unwrap_or_else(
            |e| {
                error!("{}", e);
                process::exit(1);
            },
        )),
        None => Box::new(NoopModelineCalculator),
    };

    let names: Vec<String> = if args.names.is_empty() {
        let mut names: Vec<String> = db.iter().map(|g| g.name.clone()).collect();
        names.sort();
        names
    } else {
        args.names.clone()
    };

    info!("Checking {} title(s)", names.len());

    let comps = check_game_bulk(
        &db,
        defs,
        panel,
        &monitor_configs,
        calculator.as_ref(),
        &names,
    )
    .unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });

    if args.json {
        match serde_json::to_string_pretty(&comps) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to serialize results: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    reports::print_check_report(&comps);

    if args.detail {
        for comp in &comps {
            reports::print_title_detail(comp, &db, panel);
        }
    }
}
