use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const OBSERVABLES_FILE_NAME: &str = "obs.txt";
pub const SNAPSHOT_DIR_NAME: &str = "configs";

/// Files of one run under its root directory:
///
/// ```text
/// rootdir/
/// ├── <params file copy>
/// ├── obs.txt
/// └── configs/
///     └── cfg_<t>.xy
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn snapshot_dir(&self) -> PathBuf {
        self.root.join(SNAPSHOT_DIR_NAME)
    }

    pub fn snapshot_path(&self, t: u64) -> PathBuf {
        self.snapshot_dir().join(format!("cfg_{}.xy", t))
    }

    pub fn observables_path(&self) -> PathBuf {
        self.root.join(OBSERVABLES_FILE_NAME)
    }

    /// Creates the root and snapshot directories and copies `params_file` (if any) into the root,
    /// overwriting a previous copy.
    pub fn prepare(&self, params_file: Option<&Path>) -> io::Result<()> {
        fs::create_dir_all(self.snapshot_dir())?;
        if let Some(source) = params_file {
            let file_name = source.file_name().ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("parameter path '{}' has no file name", source.display()),
                )
            })?;
            let target = self.root.join(file_name);
            let same_file = match (fs::canonicalize(source), fs::canonicalize(&target)) {
                (Ok(a), Ok(b)) => a == b,
                _ => false,
            };
            if !same_file {
                fs::copy(source, &target)?;
            }
            debug!(from = %source.display(), to = %target.display(), "Copied run parameters");
        }
        Ok(())
    }
}
