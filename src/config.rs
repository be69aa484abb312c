use std::path::PathBuf;

/// Archive the launcher script execs, expected next to the script.
pub const DEFAULT_ARCHIVE_NAME: &str = "bounding-box.jar";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// The single largest box that survives the overlap filter.
    #[default]
    Largest,
    /// Every box, but only when none of them overlap.
    All,
}

#[derive(Debug, Clone)]
pub struct LauncherConfig {
    pub output: PathBuf,
    pub archive_name: String,
}

impl LauncherConfig {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            archive_name: DEFAULT_ARCHIVE_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SolveConfig {
    pub selection: Selection,
}
