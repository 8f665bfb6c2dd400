//! Atomic full-file replacement via tempfile + rename

use std::io::Write;
use std::path::Path;

use stash_core::FileSink;
use stash_domain::{CacheError, Result};
use tempfile::NamedTempFile;

/// Sink that replaces the target file in one atomic step
///
/// The bytes land in a temporary file created in the destination's parent
/// directory, which is then renamed over the target. A reader never observes
/// a partial write: either the new contents are fully in place or the
/// previous contents remain.
#[derive(Debug, Clone, Copy, Default)]
pub struct AtomicFileSink;

impl FileSink for AtomicFileSink {
    fn write(&self, location: &Path, bytes: &[u8]) -> Result<()> {
        let parent = match location.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(io_error)?;

        // Same directory as the target, so the final rename stays on one
        // filesystem.
        let mut staged = NamedTempFile::new_in(parent).map_err(io_error)?;
        staged.write_all(bytes).map_err(io_error)?;
        staged.flush().map_err(io_error)?;
        staged.persist(location).map_err(|err| CacheError::Io(err.to_string()))?;

        tracing::trace!(location = %location.display(), bytes = bytes.len(), "file replaced");
        Ok(())
    }
}

fn io_error(err: std::io::Error) -> CacheError {
    CacheError::Io(err.to_string())
}
