//! Deployment stages
//!
//! Realize a planned tree on disk. Stages run in a fixed order over the whole
//! tree and none of them re-checks the work of an earlier stage:
//! materialize, write content, hash (see `tree::hasher`), set permissions.

pub mod content;
pub mod materialize;
pub mod permissions;

pub use content::write_file;
pub use materialize::{generate, generate_from};
pub use permissions::set_perms;

use crate::error::{IoOp, PlanError};
use crate::types::Permission;
use std::path::Path;

/// Apply `permission` to the entry at `path`
pub(crate) fn chmod(path: &Path, permission: Permission) -> Result<(), PlanError> {
    #[cfg(unix)]
    let perms = {
        use std::os::unix::fs::PermissionsExt;
        std::fs::Permissions::from_mode(permission.mode())
    };
    #[cfg(not(unix))]
    let perms = {
        let mut perms = std::fs::metadata(path)
            .map_err(|e| PlanError::io(IoOp::Chmod, path, e))?
            .permissions();
        perms.set_readonly(permission.mode() & 0o200 == 0);
        perms
    };
    std::fs::set_permissions(path, perms).map_err(|e| PlanError::io(IoOp::Chmod, path, e))
}
