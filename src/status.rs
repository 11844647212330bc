use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Shared shape of every compatibility lattice: a total order of ranked
/// levels with the sentinel `Unknown` below everything else.
///
/// Reductions over required items use `min_of` (worst case); reductions over
/// alternatives use `max_of` (best case). `Unknown` always wins `min_of` and
/// never wins `max_of`, so callers wanting a "best known" outcome must go
/// through `known_min` / filter the sentinel out first.
pub trait StatusLattice: Copy + Ord + Sized {
    const UNKNOWN: Self;

    fn rank(self) -> i8;

    /// Worst status of the given items. Empty input yields `Unknown`.
    fn min_of<I: IntoIterator<Item = Self>>(items: I) -> Self {
        items.into_iter().min().unwrap_or(Self::UNKNOWN)
    }

    /// Best status of the given items. Empty input yields `Unknown`.
    fn max_of<I: IntoIterator<Item = Self>>(items: I) -> Self {
        items.into_iter().max().unwrap_or(Self::UNKNOWN)
    }

    /// Worst status among the items that are not `Unknown`. Yields `Unknown`
    /// only when every item is.
    fn known_min<I: IntoIterator<Item = Self>>(items: I) -> Self {
        Self::min_of(items.into_iter().filter(|s| s.is_known()))
    }

    fn is_known(self) -> bool {
        self.rank() >= 0
    }

    /// Rank clamped at zero, the value a status contributes to a score
    /// dimension. `Unknown` scores like `Unsupported` rather than erroring.
    fn score_rank(self) -> u32 {
        self.rank().max(0) as u32
    }
}

macro_rules! impl_status_lattice {
    ($name:ident) => {
        impl StatusLattice for $name {
            const UNKNOWN: Self = Self::Unknown;

            fn rank(self) -> i8 {
                self as i8
            }
        }
    };
}

/// Compatibility of the control panel with a game's control requirements.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "camelCase")]
#[repr(i8)]
pub enum ControlsStatus {
    Unknown = -1,
    Unsupported = 0,
    Bad = 1,
    Ok = 2,
    Good = 3,
    Native = 4,
}

impl_status_lattice!(ControlsStatus);

/// Quality of the best video mode the monitor can produce for a game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "camelCase")]
#[repr(i8)]
pub enum VideoStatus {
    Unknown = -1,
    Unsupported = 0,
    Bad = 1,
    VfreqSlightlyOff = 2,
    IntScale = 3,
    Native = 4,
}

impl_status_lattice!(VideoStatus);

/// How well MAME emulates a game, straight from the driver status.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "camelCase")]
#[repr(i8)]
pub enum EmulationStatus {
    Unknown = -1,
    Preliminary = 0,
    Imperfect = 1,
    Good = 2,
}

impl_status_lattice!(EmulationStatus);

/// Title-level roll-up of emulation, video and controls compatibility.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "camelCase")]
#[repr(i8)]
pub enum OverallStatus {
    Unknown = -1,
    Unsupported = 0,
    Bad = 1,
    Ok = 2,
    Good = 3,
    Native = 4,
}

impl_status_lattice!(OverallStatus);

impl From<EmulationStatus> for OverallStatus {
    fn from(status: EmulationStatus) -> Self {
        match status {
            EmulationStatus::Unknown => OverallStatus::Unknown,
            EmulationStatus::Preliminary => OverallStatus::Bad,
            EmulationStatus::Imperfect => OverallStatus::Ok,
            EmulationStatus::Good => OverallStatus::Native,
        }
    }
}

impl From<ControlsStatus> for OverallStatus {
    fn from(status: ControlsStatus) -> Self {
        match status {
            ControlsStatus::Unknown => OverallStatus::Unknown,
            ControlsStatus::Unsupported => OverallStatus::Unsupported,
            ControlsStatus::Bad => OverallStatus::Bad,
            ControlsStatus::Ok => OverallStatus::Ok,
            ControlsStatus::Good => OverallStatus::Good,
            ControlsStatus::Native => OverallStatus::Native,
        }
    }
}

impl From<VideoStatus> for OverallStatus {
    fn from(status: VideoStatus) -> Self {
        match status {
            VideoStatus::Unknown => OverallStatus::Unknown,
            VideoStatus::Unsupported => OverallStatus::Unsupported,
            VideoStatus::Bad => OverallStatus::Bad,
            VideoStatus::VfreqSlightlyOff => OverallStatus::Ok,
            VideoStatus::IntScale => OverallStatus::Good,
            VideoStatus::Native => OverallStatus::Native,
        }
    }
}
