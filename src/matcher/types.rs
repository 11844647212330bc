use crate::panel::{ClusterId, ControlId};
use crate::score::Score;
use crate::status::ControlsStatus;
use serde::Serialize;

/// Controls and button clusters still unclaimed at some point of a matching
/// pass. Pools are copied at the start of every allocation round so that
/// candidates are evaluated against a stable snapshot while commits reduce
/// the live pool.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AvailablePools {
    pub controls: Vec<ControlId>,
    pub clusters: Vec<ClusterId>,
}

impl AvailablePools {
    pub fn has_control(&self, id: ControlId) -> bool {
        self.controls.contains(&id)
    }

    pub fn has_cluster(&self, id: ClusterId) -> bool {
        self.clusters.contains(&id)
    }

    pub fn take_control(&mut self, id: ControlId) {
        self.controls.retain(|c| *c != id);
    }

    pub fn take_cluster(&mut self, id: ClusterId) {
        self.clusters.retain(|c| *c != id);
    }
}

/// Result of matching one physical control (or the absence candidate)
/// against one required control.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlCompatibility {
    /// Index of the requirement within its game control set.
    pub game_control: usize,
    /// The physical control assigned, or `None` when the requirement is left
    /// unmet.
    pub cp_control: Option<ControlId>,
    pub control_status: ControlsStatus,
    pub buttons_status: ControlsStatus,
    pub status: ControlsStatus,
    pub score: Score,
}

/// Result of matching a button cluster against a set's required buttons.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonsCompatibility {
    pub cp_button_cluster: Option<ClusterId>,
    pub status: ControlsStatus,
    pub score: Score,
}

/// One round of control allocation within a control set: the pool snapshot
/// the round ranked against, and the requirements it committed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlAllocationRound {
    pub avail_controls: Vec<ControlId>,
    pub allocated_game_controls: Vec<usize>,
}

/// Result of allocating one CP control set to one game control set.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlSetCompatibility {
    /// Index of the game control set within its configuration.
    pub game_control_set: usize,
    /// Index of the CP control set that was paired (0 for the implicit set
    /// of a panel defining none).
    pub cp_control_set: usize,
    /// Per-requirement results, in allocation order.
    pub control_comps: Vec<ControlCompatibility>,
    pub buttons_comp: ButtonsCompatibility,
    pub status: ControlsStatus,
    pub score: Score,
    pub rounds: Vec<ControlAllocationRound>,
}

/// One round of control-set allocation within a configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetAllocationRound {
    pub avail_controls: Vec<ControlId>,
    pub avail_clusters: Vec<ClusterId>,
    pub allocated_game_control_sets: Vec<usize>,
}

/// Result of allocating the whole panel to one game control configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlConfigCompatibility {
    /// Index of the configuration within the game's control info.
    pub game_control_config: usize,
    /// Per-set results, in allocation order.
    pub control_set_comps: Vec<ControlSetCompatibility>,
    pub status: ControlsStatus,
    pub score: Score,
    pub rounds: Vec<SetAllocationRound>,
}

/// Result of checking a game's controls against the panel: every candidate
/// configuration's compatibility, ranked best-first.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlsCompatibility {
    /// Ranked best-first; empty when the game has no known control data.
    pub config_comps: Vec<ControlConfigCompatibility>,
    pub status: ControlsStatus,
}

impl ControlsCompatibility {
    pub fn best(&self) -> Option<&ControlConfigCompatibility> {
        self.config_comps.first()
    }
}
