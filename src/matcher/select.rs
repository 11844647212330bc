use super::config::control_config_compatibility;
use super::types::ControlsCompatibility;
use crate::control_defs::ControlDefRegistry;
use crate::error::PfResult;
use crate::game::{CabinetType, GameControlInfo};
use crate::panel::CPConfiguration;
use crate::status::{ControlsStatus, StatusLattice};
use tracing::debug;

/// Check every candidate control configuration of a game against the panel
/// and rank them.
///
/// Ranking: best status first (with `Unknown` floored at the bottom rather
/// than ranked by its raw lattice value), then upright-cabinet
/// configurations over others, then score. A game with no control data
/// yields an `Unknown` result with no candidates, never an error.
pub fn check_controls(
    defs: &ControlDefRegistry,
    panel: &CPConfiguration,
    control_info: Option<&GameControlInfo>,
) -> PfResult<ControlsCompatibility> {
    let game_configs = control_info.map_or(&[][..], |info| &info.control_configs[..]);

    let mut config_comps = game_configs
        .iter()
        .enumerate()
        .map(|(index, game_config)| {
            control_config_compatibility(defs, panel, game_config, index)
        })
        .collect::<PfResult<Vec<_>>>()?;

    config_comps.sort_by(|a, b| {
        let a_upright =
            game_configs[a.game_control_config].target_cabinet_type == CabinetType::Upright;
        let b_upright =
            game_configs[b.game_control_config].target_cabinet_type == CabinetType::Upright;

        b.status
            .score_rank()
            .cmp(&a.status.score_rank())
            .then_with(|| b_upright.cmp(&a_upright))
            .then_with(|| b.score.compare(&a.score))
    });

    let status = config_comps
        .first()
        .map_or(ControlsStatus::Unknown, |comp| comp.status);

    debug!(
        "Ranked {} control configuration(s), best status {}",
        config_comps.len(),
        status
    );

    Ok(ControlsCompatibility {
        config_comps,
        status,
    })
}
