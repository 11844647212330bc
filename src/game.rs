use crate::control_defs::ControlType;
use crate::error::PfResult;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::info;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CabinetType {
    Upright,
    Cocktail,
}

/// MAME driver emulation quality, as reported by the machine list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DriverStatus {
    Preliminary,
    Imperfect,
    Good,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DisplayType {
    Raster,
    Vector,
    Lcd,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDisplay {
    #[serde(rename = "type")]
    pub display_type: DisplayType,
    #[serde(default)]
    pub rotation: u16,
    pub refresh: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameInput {
    #[serde(default)]
    pub is_analog: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neg_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos_label: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameButton {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descriptor: Option<String>,
    #[serde(default)]
    pub input: GameInput,
}

/// One required control of a game control set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameControl {
    pub control_type: ControlType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descriptor: Option<String>,
    #[serde(default)]
    pub buttons: Vec<GameButton>,
}

/// The requirements of one player position: its controls, its button count
/// and which side of the screen it faces.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameControlSet {
    pub supported_player_nums: Vec<u8>,
    pub is_required: bool,
    #[serde(default)]
    pub is_on_opposite_screen_side: bool,
    pub controls: Vec<GameControl>,
    #[serde(default)]
    pub control_panel_buttons: Vec<GameButton>,
}

/// One way a game's controls can be laid out, tied to a cabinet style.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameControlConfiguration {
    pub target_cabinet_type: CabinetType,
    pub control_sets: Vec<GameControlSet>,
    #[serde(default)]
    pub menu_buttons: Vec<GameButton>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameControlInfo {
    pub num_players: u8,
    #[serde(default)]
    pub alternates_turns: bool,
    pub control_configs: Vec<GameControlConfiguration>,
}

/// An already-deserialized game record: machine identity plus the control
/// requirements from controls.dat, when known.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clone_of: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver_status: Option<DriverStatus>,
    #[serde(default)]
    pub displays: Vec<GameDisplay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_info: Option<GameControlInfo>,
}

/// Game records keyed by machine name.
#[derive(Debug, Clone, Default)]
pub struct GameDb {
    games: HashMap<String, Game>,
}

impl GameDb {
    pub fn new(games: Vec<Game>) -> Self {
        Self {
            games: games.into_iter().map(|g| (g.name.clone(), g)).collect(),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> PfResult<Self> {
        let content = fs::read_to_string(&path)?;
        let games: Vec<Game> = serde_json::from_str(&content)?;
        info!(
            "Loaded {} game records from {}",
            games.len(),
            path.as_ref().display()
        );
        Ok(Self::new(games))
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Game> {
        self.games.values()
    }

    /// Look up a game from raw user input.
    pub fn get_by_input(&self, name_input: &str) -> Option<&Game> {
        self.games.get(&name_input.trim().to_lowercase())
    }

    pub fn get(&self, name: &str) -> Option<&Game> {
        self.games.get(name)
    }

    /// A game's control requirements, falling back to its parent record when
    /// the clone carries none of its own.
    pub fn control_info_for<'a>(&'a self, game: &'a Game) -> Option<&'a GameControlInfo> {
        if let Some(info) = game.control_info.as_ref() {
            return Some(info);
        }
        game.clone_of
            .as_ref()
            .and_then(|parent| self.games.get(parent))
            .and_then(|parent| parent.control_info.as_ref())
    }
}
