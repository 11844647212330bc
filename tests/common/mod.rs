#![allow(dead_code)]

use panelfit::control_defs::{ControlDefRegistry, ControlType};
use panelfit::game::{
    CabinetType, GameButton, GameControl, GameControlConfiguration, GameControlInfo,
    GameControlSet,
};
use panelfit::matcher::AvailablePools;
use panelfit::panel::{CPButtonCluster, CPConfiguration, CPControl, PanelFile, PanelSetEntry};

pub fn defs() -> ControlDefRegistry {
    ControlDefRegistry::builtin()
}

/// Builder for panel configurations to clean up tests.
pub struct PanelBuilder {
    file: PanelFile,
}

impl PanelBuilder {
    pub fn new() -> Self {
        Self {
            file: PanelFile::default(),
        }
    }

    pub fn control(mut self, name: &str, control_type: ControlType, num_buttons: u32) -> Self {
        self.file.controls.push(CPControl {
            name: name.to_string(),
            control_type,
            num_buttons,
            is_on_opposite_screen_side: false,
        });
        self
    }

    pub fn control_opposite(
        mut self,
        name: &str,
        control_type: ControlType,
        num_buttons: u32,
    ) -> Self {
        self.file.controls.push(CPControl {
            name: name.to_string(),
            control_type,
            num_buttons,
            is_on_opposite_screen_side: true,
        });
        self
    }

    pub fn cluster(mut self, name: &str, num_buttons: u32) -> Self {
        self.file.button_clusters.push(CPButtonCluster {
            name: name.to_string(),
            num_buttons,
            is_on_opposite_screen_side: false,
        });
        self
    }

    pub fn cluster_opposite(mut self, name: &str, num_buttons: u32) -> Self {
        self.file.button_clusters.push(CPButtonCluster {
            name: name.to_string(),
            num_buttons,
            is_on_opposite_screen_side: true,
        });
        self
    }

    pub fn set(mut self, controls: &[&str], cluster: Option<&str>) -> Self {
        self.file.control_sets.push(PanelSetEntry {
            name: Some(format!("set-{}", self.file.control_sets.len() + 1)),
            controls: controls.iter().map(|s| s.to_string()).collect(),
            button_cluster: cluster.map(|s| s.to_string()),
        });
        self
    }

    pub fn build(self) -> CPConfiguration {
        self.file.resolve().expect("panel builder references")
    }
}

pub fn full_pools(panel: &CPConfiguration) -> AvailablePools {
    AvailablePools {
        controls: panel.control_ids().collect(),
        clusters: panel.cluster_ids().collect(),
    }
}

pub fn buttons(count: usize) -> Vec<GameButton> {
    (0..count).map(|_| GameButton::default()).collect()
}

pub fn game_control(control_type: ControlType, num_buttons: usize) -> GameControl {
    GameControl {
        control_type,
        descriptor: None,
        buttons: buttons(num_buttons),
    }
}

pub fn game_set(controls: Vec<GameControl>, panel_buttons: usize) -> GameControlSet {
    GameControlSet {
        supported_player_nums: vec![1],
        is_required: true,
        is_on_opposite_screen_side: false,
        controls,
        control_panel_buttons: buttons(panel_buttons),
    }
}

pub fn optional(mut set: GameControlSet) -> GameControlSet {
    set.is_required = false;
    set
}

pub fn opposite(mut set: GameControlSet) -> GameControlSet {
    set.is_on_opposite_screen_side = true;
    set
}

pub fn game_config(control_sets: Vec<GameControlSet>) -> GameControlConfiguration {
    GameControlConfiguration {
        target_cabinet_type: CabinetType::Upright,
        control_sets,
        menu_buttons: Vec::new(),
    }
}

pub fn cocktail(mut config: GameControlConfiguration) -> GameControlConfiguration {
    config.target_cabinet_type = CabinetType::Cocktail;
    config
}

pub fn control_info(control_configs: Vec<GameControlConfiguration>) -> GameControlInfo {
    GameControlInfo {
        num_players: 1,
        alternates_turns: false,
        control_configs,
    }
}
