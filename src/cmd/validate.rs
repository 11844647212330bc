use crate::reports;
use clap::Args;
use panelfit::control_defs::ControlDefRegistry;
use panelfit::panel::CPConfiguration;
use tracing::warn;

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Also list the fallback table of every control type on the panel.
    #[arg(long, default_value_t = false)]
    pub fallbacks: bool,
}

pub fn run(args: ValidateArgs, defs: &ControlDefRegistry, panel: &CPConfiguration) {
    if panel.control_sets.is_empty() {
        warn!("Panel defines no control sets; a single empty one will be assumed when matching.");
    }

    for set in &panel.control_sets {
        if set.control_ids.is_empty() && set.button_cluster.is_none() {
            warn!("Panel has an empty control set.");
        }
    }

    reports::print_panel_report(panel);

    if args.fallbacks {
        reports::print_fallback_report(defs, panel);
    }
}
