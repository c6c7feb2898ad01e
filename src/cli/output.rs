//! CLI error presentation

use crate::error::PlanError;

/// Map an error to the message shown on stderr
pub fn map_error(err: &PlanError) -> String {
    match err {
        PlanError::Stage { stage, source } => {
            format!("Error: {} stage failed: {}", stage, source)
        }
        PlanError::Manifest(msg) => format!("Error: invalid manifest: {}", msg),
        other => format!("Error: {}", other),
    }
}
