use crate::control_defs::ControlType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PanelFitError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No control definition for control type '{0}'")]
    MissingControlDef(ControlType),

    #[error("Panel control set '{set_name}' references unknown {kind} '{reference}'")]
    UnresolvedPanelReference {
        set_name: String,
        kind: &'static str,
        reference: String,
    },

    #[error("Score structure mismatch: {0}")]
    ScoreStructure(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type PfResult<T> = Result<T, PanelFitError>;
