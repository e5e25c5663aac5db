//! Options fixed at the start of a run.

use camino::{Utf8Path, Utf8PathBuf};

/// Where a run's input and configuration come from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// The markdown document being processed.
    pub input_file_path: Utf8PathBuf,
    /// The per-user configuration directory, if any.
    pub user_config_dir: Option<Utf8PathBuf>,
    /// In-tree configuration directories, nearest to the input file first.
    pub config_dirs: Vec<Utf8PathBuf>,
}

impl RunOptions {
    /// Creates options for processing `input_file_path`.
    #[must_use]
    pub fn new(input_file_path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            input_file_path: input_file_path.into(),
            ..Self::default()
        }
    }

    /// Sets the per-user configuration directory.
    #[must_use]
    pub fn with_user_config_dir(mut self, dir: impl Into<Utf8PathBuf>) -> Self {
        self.user_config_dir = Some(dir.into());
        self
    }

    /// Sets the in-tree configuration directories.
    #[must_use]
    pub fn with_config_dirs(mut self, dirs: impl IntoIterator<Item = Utf8PathBuf>) -> Self {
        self.config_dirs = dirs.into_iter().collect();
        self
    }

    /// Returns the directory containing the input file.
    #[must_use]
    pub fn input_dir(&self) -> Option<&Utf8Path> {
        self.input_file_path
            .parent()
            .map(|parent| if parent.as_str().is_empty() { Utf8Path::new(".") } else { parent })
    }
}
