//! Delete: remove a project directory

use camino::Utf8Path;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::{is_plain_name, DeleteOutcome, LifecycleDispatcher};
use crate::error::{Error, Result};

impl LifecycleDispatcher<'_> {
    /// Delete the project directory named `name`
    ///
    /// Names that could reach outside the working directory are refused
    /// before any filesystem access, whatever `delete_force` says.
    pub fn delete(&self, name: &str) -> Result<DeleteOutcome> {
        let target = name.trim_end_matches('/');
        if matches!(target, "" | "." | "..") || !is_plain_name(Utf8Path::new(target)) {
            return Err(Error::unsafe_delete_target(name));
        }

        let dir = self.paths.project_dir(target);
        if !dir.is_dir() {
            return Err(Error::project_not_found(name));
        }

        if !self.config.delete_force {
            let question = format!("Delete {} and everything in it?", dir);
            if !self.prompter.confirm(&question) {
                info!("Deletion of {} cancelled", dir);
                return Ok(DeleteOutcome::Cancelled);
            }
        }

        remove_tree(&dir)?;
        info!("Deleted {}", dir);
        Ok(DeleteOutcome::Deleted)
    }
}

/// Recursively remove `dir`
///
/// Runs in-process rather than through the process runner, so no shell or
/// external `rm` is involved. Tries a single `remove_dir_all` first. If that
/// fails, walks the tree contents-first, removing what it can, and reports
/// how many entries survived.
pub fn remove_tree(dir: &Utf8Path) -> Result<()> {
    match std::fs::remove_dir_all(dir) {
        Ok(()) => return Ok(()),
        Err(e) => warn!("Recursive remove of {} failed ({}), deleting entry by entry", dir, e),
    }

    let failed = remove_entries(dir);
    if failed > 0 {
        return Err(Error::deletion_partial_failure(dir.as_str(), failed));
    }
    Ok(())
}

/// Remove files, then directories bottom-up; returns the number of failures
fn remove_entries(dir: &Utf8Path) -> usize {
    let mut failed = 0;
    for entry in WalkDir::new(dir).contents_first(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Cannot visit entry: {}", e);
                failed += 1;
                continue;
            }
        };

        let removed = if entry.file_type().is_dir() {
            std::fs::remove_dir(entry.path())
        } else {
            std::fs::remove_file(entry.path())
        };
        if let Err(e) = removed {
            debug!("Cannot remove {}: {}", entry.path().display(), e);
            failed += 1;
        }
    }
    failed
}
