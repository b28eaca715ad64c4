use std::cell::Cell;
use std::env;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use log::{debug, warn};
use tempfile::TempDir;

use crate::Result;

thread_local! {
    static SCRATCH_HELD: Cell<bool> = const { Cell::new(false) };
}

/// Scoped working directory swapped in around an engine invocation.
///
/// The engine writes checkpoint and report files relative to the process
/// working directory, so the directory is swapped to a temporary one for the
/// duration of the call and restored when the guard drops, on error paths
/// included. At most one guard may be held per thread at a time.
#[derive(Debug)]
pub struct ScratchDir {
    previous: PathBuf,
    dir: TempDir,
}

impl ScratchDir {
    pub fn acquire() -> Result<Self> {
        if SCRATCH_HELD.with(|held| held.replace(true)) {
            bail!("A scratch directory is already held by this thread.");
        }
        match Self::enter() {
            Ok(guard) => Ok(guard),
            Err(error) => {
                SCRATCH_HELD.with(|held| held.set(false));
                Err(error)
            }
        }
    }

    fn enter() -> Result<Self> {
        let previous = env::current_dir().context("Cannot read the current directory")?;
        let dir = TempDir::new().context("Cannot create a scratch directory")?;
        env::set_current_dir(dir.path())
            .context("Cannot switch to the scratch directory")?;
        debug!("Entered scratch directory {}", dir.path().display());
        Ok(ScratchDir { previous, dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        if let Err(error) = env::set_current_dir(&self.previous) {
            warn!(
                "Could not restore the working directory to {}: {}",
                self.previous.display(),
                error
            );
        }
        SCRATCH_HELD.with(|held| held.set(false));
    }
}

#[cfg(test)]
mod tests {
    use super::ScratchDir;

    // A single test since the working directory is process-global and the
    // test harness runs tests on parallel threads.
    #[test]
    fn scoped_acquisition() {
        let before = std::env::current_dir().unwrap();
        {
            let guard = ScratchDir::acquire().unwrap();
            assert_eq!(
                std::env::current_dir().unwrap().canonicalize().unwrap(),
                guard.path().canonicalize().unwrap()
            );
            let error = ScratchDir::acquire().unwrap_err();
            assert!(error.to_string().contains("already held"));
        }
        assert_eq!(std::env::current_dir().unwrap(), before);
        assert!(ScratchDir::acquire().is_ok());
    }
}
