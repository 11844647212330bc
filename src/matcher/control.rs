use super::types::ControlCompatibility;
use crate::control_defs::{ControlDefRegistry, ControlType};
use crate::error::PfResult;
use crate::game::GameControl;
use crate::panel::{CPConfiguration, ControlId};
use crate::score::Score;
use crate::status::{ControlsStatus, StatusLattice};

/// Match one physical control against one required control. `cp_control` of
/// `None` is the absence candidate: the requirement is scored as unmet
/// rather than paired with an incompatible control.
pub fn control_compatibility(
    defs: &ControlDefRegistry,
    panel: &CPConfiguration,
    cp_control: Option<ControlId>,
    game_control: &GameControl,
    game_control_index: usize,
) -> PfResult<ControlCompatibility> {
    let (control_status, buttons_status) = match cp_control {
        Some(id) => {
            let cp = panel.control(id);
            (
                control_status(defs, cp.control_type, game_control)?,
                buttons_status(cp.num_buttons, game_control),
            )
        }
        None => (ControlsStatus::Unsupported, ControlsStatus::Unsupported),
    };

    let status = ControlsStatus::min_of([control_status, buttons_status]);
    let score = Score::of([
        ("control.status", status.into()),
        ("control.controlStatus", control_status.into()),
        ("control.buttonsStatus", buttons_status.into()),
    ]);

    Ok(ControlCompatibility {
        game_control: game_control_index,
        cp_control,
        control_status,
        buttons_status,
        status,
        score,
    })
}

/// Type fit alone: native on an exact type match, otherwise whatever level
/// the required type's fallback table grants the offered type.
fn control_status(
    defs: &ControlDefRegistry,
    offered: ControlType,
    game_control: &GameControl,
) -> PfResult<ControlsStatus> {
    if offered == game_control.control_type {
        return Ok(ControlsStatus::Native);
    }

    let def = defs.get(game_control.control_type)?;
    Ok(def
        .fallback_for(offered)
        .map(|level| level.to_status())
        .unwrap_or(ControlsStatus::Unsupported))
}

/// Button sufficiency is binary: the physical control either carries enough
/// buttons for the requirement or it does not.
fn buttons_status(num_buttons: u32, game_control: &GameControl) -> ControlsStatus {
    if num_buttons as usize >= game_control.buttons.len() {
        ControlsStatus::Native
    } else {
        ControlsStatus::Unsupported
    }
}
