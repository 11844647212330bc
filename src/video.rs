use crate::error::PfResult;
use crate::game::Game;
use crate::status::VideoStatus;
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
pub enum MonitorOrientation {
    Horizontal,
    Vertical,
}

/// One monitor setup the panel's machine might drive. Opaque to the engine;
/// it is handed to the modeline collaborator as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorConfig {
    pub preset: String,
    pub orientation: MonitorOrientation,
    #[serde(default)]
    pub allow_doublescan: bool,
    #[serde(default)]
    pub allow_interlaced: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Modeline {
    #[serde(default)]
    pub interlace: bool,
    #[serde(default)]
    pub hfreq: f64,
    #[serde(default)]
    pub vfreq: f64,
}

fn scale_one() -> f64 {
    1.0
}

/// The collaborator's verdict for one game on one monitor config. The engine
/// only classifies this shape; all the timing math happens elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelineResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub err: Option<String>,
    #[serde(default)]
    pub in_range: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modeline: Option<Modeline>,
    #[serde(default)]
    pub res_stretch: bool,
    #[serde(default)]
    pub vfreq_off: bool,
    #[serde(default)]
    pub v_diff: f64,
    #[serde(default = "scale_one")]
    pub x_scale: f64,
    #[serde(default = "scale_one")]
    pub y_scale: f64,
}

/// Derive a video status from a collaborator result.
pub fn video_status(result: Option<&ModelineResult>) -> VideoStatus {
    let Some(result) = result else {
        return VideoStatus::Unknown;
    };
    if result.err.is_some() {
        return VideoStatus::Unknown;
    }

    if !result.in_range {
        return VideoStatus::Unsupported;
    }

    let interlaced = result.modeline.as_ref().is_some_and(|m| m.interlace);
    if interlaced || result.res_stretch || result.vfreq_off {
        return VideoStatus::Bad;
    }

    if result.v_diff != 0.0 {
        return VideoStatus::VfreqSlightlyOff;
    }

    if result.x_scale != 1.0 || result.y_scale != 1.0 {
        return VideoStatus::IntScale;
    }

    VideoStatus::Native
}

/// The video-timing collaborator: all displays needing evaluation under one
/// monitor config are submitted in a single batch so the implementation can
/// amortize its own caching.
pub trait ModelineCalculator {
    fn calc_modeline_bulk(
        &self,
        config: &MonitorConfig,
        games: &[&Game],
    ) -> PfResult<HashMap<String, ModelineResult>>;
}

/// Calculator used when no timing data is available: every game comes back
/// without a result and classifies as `Unknown`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopModelineCalculator;

impl ModelineCalculator for NoopModelineCalculator {
    fn calc_modeline_bulk(
        &self,
        _config: &MonitorConfig,
        _games: &[&Game],
    ) -> PfResult<HashMap<String, ModelineResult>> {
        Ok(HashMap::new())
    }
}

/// Precomputed collaborator results, keyed by monitor preset then game name.
#[derive(Debug, Clone, Default)]
pub struct CachedModelineCalculator {
    cache: HashMap<String, HashMap<String, ModelineResult>>,
}

impl CachedModelineCalculator {
    pub fn new(cache: HashMap<String, HashMap<String, ModelineResult>>) -> Self {
        Self { cache }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> PfResult<Self> {
        let content = fs::read_to_string(&path)?;
        let cache: HashMap<String, HashMap<String, ModelineResult>> =
            serde_json::from_str(&content)?;
        info!(
            "Loaded modeline cache from {}: {} preset(s)",
            path.as_ref().display(),
            cache.len()
        );
        Ok(Self { cache })
    }
}

impl ModelineCalculator for CachedModelineCalculator {
    fn calc_modeline_bulk(
        &self,
        config: &MonitorConfig,
        games: &[&Game],
    ) -> PfResult<HashMap<String, ModelineResult>> {
        let Some(preset_cache) = self.cache.get(&config.preset) else {
            return Ok(HashMap::new());
        };

        Ok(games
            .iter()
            .filter_map(|game| {
                preset_cache
                    .get(&game.name)
                    .map(|result| (game.name.clone(), result.clone()))
            })
            .collect())
    }
}
