use super::types::ButtonsCompatibility;
use crate::game::GameButton;
use crate::panel::{CPConfiguration, ClusterId};
use crate::score::Score;
use crate::status::ControlsStatus;

/// Match an available button cluster (or none) against a control set's
/// required buttons. A set requiring no buttons never consumes a cluster; an
/// offered cluster is given back to the pool.
pub fn buttons_compatibility(
    panel: &CPConfiguration,
    avail_cluster: Option<ClusterId>,
    required_buttons: &[GameButton],
) -> ButtonsCompatibility {
    let (cp_button_cluster, status) = if required_buttons.is_empty() {
        (None, ControlsStatus::Native)
    } else {
        match avail_cluster {
            None => (None, ControlsStatus::Unsupported),
            Some(id) => {
                let status = if panel.cluster(id).num_buttons as usize >= required_buttons.len() {
                    ControlsStatus::Native
                } else {
                    ControlsStatus::Unsupported
                };
                (Some(id), status)
            }
        }
    };

    ButtonsCompatibility {
        cp_button_cluster,
        status,
        score: Score::of([("buttons.status", status.into())]),
    }
}
