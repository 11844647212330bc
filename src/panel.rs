use crate::control_defs::ControlType;
use crate::error::{PanelFitError, PfResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// Index of a physical control in its panel's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ControlId(pub usize);

/// Index of a button cluster in its panel's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ClusterId(pub usize);

/// One physical control instance on the panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CPControl {
    pub name: String,
    pub control_type: ControlType,
    #[serde(default)]
    pub num_buttons: u32,
    #[serde(default)]
    pub is_on_opposite_screen_side: bool,
}

/// A named group of standalone buttons sharing one screen side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CPButtonCluster {
    pub name: String,
    pub num_buttons: u32,
    #[serde(default)]
    pub is_on_opposite_screen_side: bool,
}

/// One player's station: a subset of the panel's controls plus at most one
/// button cluster. Controls may be shared between sets; the allocator's
/// availability pools enforce single use per pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CPControlSet {
    pub control_ids: Vec<ControlId>,
    pub button_cluster: Option<ClusterId>,
}

/// The physical panel: flat arenas of controls and button clusters, plus the
/// control sets that group them. All references are arena indices.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CPConfiguration {
    pub controls: Vec<CPControl>,
    pub button_clusters: Vec<CPButtonCluster>,
    pub control_sets: Vec<CPControlSet>,
}

impl CPConfiguration {
    pub fn control(&self, id: ControlId) -> &CPControl {
        &self.controls[id.0]
    }

    pub fn cluster(&self, id: ClusterId) -> &CPButtonCluster {
        &self.button_clusters[id.0]
    }

    pub fn control_ids(&self) -> impl Iterator<Item = ControlId> {
        (0..self.controls.len()).map(ControlId)
    }

    pub fn cluster_ids(&self) -> impl Iterator<Item = ClusterId> {
        (0..self.button_clusters.len()).map(ClusterId)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> PfResult<Self> {
        let content = fs::read_to_string(&path)?;
        let file: PanelFile = serde_json::from_str(&content)?;
        let config = file.resolve()?;
        info!(
            "Loaded panel from {}: {} controls, {} button clusters, {} control sets",
            path.as_ref().display(),
            config.controls.len(),
            config.button_clusters.len(),
            config.control_sets.len()
        );
        Ok(config)
    }
}

/// User-written panel description. Control sets reference pool entries by
/// name; resolution maps the names onto arena indices and rejects dangling
/// references before the engine ever sees them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelFile {
    #[serde(default)]
    pub controls: Vec<CPControl>,
    #[serde(default)]
    pub button_clusters: Vec<CPButtonCluster>,
    #[serde(default)]
    pub control_sets: Vec<PanelSetEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelSetEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub controls: Vec<String>,
    #[serde(default)]
    pub button_cluster: Option<String>,
}

impl PanelFile {
    pub fn resolve(self) -> PfResult<CPConfiguration> {
        let control_sets = self
            .control_sets
            .iter()
            .map(|entry| {
                let set_name = entry.name.clone().unwrap_or_else(|| "unnamed".to_string());

                let control_ids = entry
                    .controls
                    .iter()
                    .map(|name| {
                        self.controls
                            .iter()
                            .position(|c| &c.name == name)
                            .map(ControlId)
                            .ok_or_else(|| PanelFitError::UnresolvedPanelReference {
                                set_name: set_name.clone(),
                                kind: "control",
                                reference: name.clone(),
                            })
                    })
                    .collect::<PfResult<Vec<_>>>()?;

                let button_cluster = entry
                    .button_cluster
                    .as_ref()
                    .map(|name| {
                        self.button_clusters
                            .iter()
                            .position(|c| &c.name == name)
                            .map(ClusterId)
                            .ok_or_else(|| PanelFitError::UnresolvedPanelReference {
                                set_name: set_name.clone(),
                                kind: "button cluster",
                                reference: name.clone(),
                            })
                    })
                    .transpose()?;

                Ok(CPControlSet {
                    control_ids,
                    button_cluster,
                })
            })
            .collect::<PfResult<Vec<_>>>()?;

        Ok(CPConfiguration {
            controls: self.controls,
            button_clusters: self.button_clusters,
            control_sets,
        })
    }
}
