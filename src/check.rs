use crate::control_defs::ControlDefRegistry;
use crate::error::PfResult;
use crate::game::{DriverStatus, Game, GameDb};
use crate::matcher::{self, ControlsCompatibility};
use crate::panel::CPConfiguration;
use crate::status::{EmulationStatus, OverallStatus, StatusLattice, VideoStatus};
use crate::video::{video_status, ModelineCalculator, ModelineResult, MonitorConfig};
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmulationCompatibility {
    pub status: EmulationStatus,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoCompatibility {
    /// Index of the monitor config this verdict belongs to.
    pub monitor_config: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modeline_result: Option<ModelineResult>,
    pub status: VideoStatus,
}

/// Everything known about one title against one panel and monitor setup.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameCompatibility {
    pub name_input: String,
    /// Resolved machine name, when the input matched a known game.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_name: Option<String>,
    pub emu_comp: EmulationCompatibility,
    pub video_comps: Vec<VideoCompatibility>,
    pub controls_comp: ControlsCompatibility,
    /// Worst of emulation, controls and best-video, `Unknown` included.
    pub overall_status: OverallStatus,
    /// Worst of the components that are actually known.
    pub known_overall_status: OverallStatus,
}

fn emulation_status(game: Option<&Game>) -> EmulationStatus {
    match game.and_then(|g| g.driver_status) {
        Some(DriverStatus::Preliminary) => EmulationStatus::Preliminary,
        Some(DriverStatus::Imperfect) => EmulationStatus::Imperfect,
        Some(DriverStatus::Good) => EmulationStatus::Good,
        None => EmulationStatus::Unknown,
    }
}

/// Check many titles in one pass.
///
/// Video timing is resolved first, one batched collaborator call per monitor
/// config; the per-title control matching passes share no mutable state and
/// run in parallel.
pub fn check_game_bulk(
    db: &GameDb,
    defs: &ControlDefRegistry,
    panel: &CPConfiguration,
    monitor_configs: &[MonitorConfig],
    calculator: &dyn ModelineCalculator,
    name_inputs: &[String],
) -> PfResult<Vec<GameCompatibility>> {
    let games: Vec<Option<&Game>> = name_inputs
        .iter()
        .map(|name| db.get_by_input(name))
        .collect();

    let known_games: Vec<&Game> = games.iter().flatten().copied().collect();
    let mut video_result_maps = Vec::with_capacity(monitor_configs.len());
    for config in monitor_configs {
        video_result_maps.push(calculator.calc_modeline_bulk(config, &known_games)?);
    }

    info!(
        "Checking {} title(s) against {} monitor config(s)",
        name_inputs.len(),
        monitor_configs.len()
    );

    (0..name_inputs.len())
        .into_par_iter()
        .map(|i| {
            let game = games[i];

            let emu_comp = EmulationCompatibility {
                status: emulation_status(game),
            };

            let video_comps: Vec<VideoCompatibility> = video_result_maps
                .iter()
                .enumerate()
                .map(|(monitor_config, results)| {
                    let modeline_result =
                        game.and_then(|g| results.get(&g.name)).cloned();
                    VideoCompatibility {
                        monitor_config,
                        status: video_status(modeline_result.as_ref()),
                        modeline_result,
                    }
                })
                .collect();

            let controls_comp = matcher::check_controls(
                defs,
                panel,
                game.and_then(|g| db.control_info_for(g)),
            )?;

            let best_video_status = VideoStatus::max_of(video_comps.iter().map(|v| v.status));
            let statuses = [
                OverallStatus::from(emu_comp.status),
                OverallStatus::from(controls_comp.status),
                OverallStatus::from(best_video_status),
            ];

            Ok(GameCompatibility {
                name_input: name_inputs[i].clone(),
                game_name: game.map(|g| g.name.clone()),
                emu_comp,
                video_comps,
                controls_comp,
                overall_status: OverallStatus::min_of(statuses),
                known_overall_status: OverallStatus::known_min(statuses),
            })
        })
        .collect()
}

pub fn check_game(
    db: &GameDb,
    defs: &ControlDefRegistry,
    panel: &CPConfiguration,
    monitor_configs: &[MonitorConfig],
    calculator: &dyn ModelineCalculator,
    name_input: &str,
) -> PfResult<GameCompatibility> {
    let mut comps = check_game_bulk(
        db,
        defs,
        panel,
        monitor_configs,
        calculator,
        &[name_input.to_string()],
    )?;
    Ok(comps.remove(0))
}
