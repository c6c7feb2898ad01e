//! Path segment validation for planned node names

use crate::error::PlanError;

/// Check that `name` is a single usable path segment.
///
/// Rejects empty names, `.` and `..`, and anything containing a separator or
/// NUL, since the node's full path would otherwise escape or alias its parent.
pub fn validate_segment(name: &str) -> Result<(), PlanError> {
    if name.is_empty() || name == "." || name == ".." {
        return Err(PlanError::InvalidName(name.to_string()));
    }
    if name.contains('/') || name.contains('\0') {
        return Err(PlanError::InvalidName(name.to_string()));
    }
    #[cfg(windows)]
    if name.contains('\\') || name.contains(':') {
        return Err(PlanError::InvalidName(name.to_string()));
    }
    Ok(())
}
