use directories::ProjectDirs;
use std::path::PathBuf;

/// Application directories following XDG spec
#[derive(Debug, Clone)]
pub struct Directories {
    /// Config directory (~/.config/underlay)
    pub config: PathBuf,

    /// Config file path
    pub config_file: PathBuf,
}

impl Directories {
    /// Create a new `Directories` instance with standard XDG paths.
    ///
    /// # Panics
    ///
    /// Panics if the system's project directories cannot be determined.
    #[must_use]
    pub fn new() -> Self {
        let project =
            ProjectDirs::from("", "", "underlay").expect("Failed to determine project directories");

        let config = project.config_dir().to_path_buf();

        Self {
            config_file: config.join("config.json"),
            config,
        }
    }

    #[must_use]
    pub fn with_base(base: PathBuf) -> Self {
        Self {
            config_file: base.join("config.json"),
            config: base,
        }
    }

    /// Ensure the config directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn ensure_exists(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.config)
    }
}

impl Default for Directories {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_base_sets_all_paths() {
        let base = PathBuf::from("/tmp/test-underlay");
        let dirs = Directories::with_base(base.clone());

        assert_eq!(dirs.config, base);
        assert_eq!(dirs.config_file, base.join("config.json"));
    }

    #[test]
    fn test_ensure_exists_creates_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let base = temp_dir.path().join("underlay-test-subdir");
        let dirs = Directories::with_base(base);

        assert!(!dirs.config.exists());

        dirs.ensure_exists().unwrap();

        assert!(dirs.config.exists());
    }

    #[test]
    fn test_ensure_exists_idempotent() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dirs = Directories::with_base(temp_dir.path().to_path_buf());

        dirs.ensure_exists().unwrap();
        dirs.ensure_exists().unwrap();

        assert!(dirs.config.exists());
    }

    #[test]
    fn test_new_returns_valid_xdg_paths() {
        let dirs = Directories::new();

        assert!(dirs.config.to_string_lossy().contains("underlay"));
        assert!(dirs.config_file.to_string_lossy().ends_with("config.json"));
    }

    #[test]
    fn test_default_same_as_new() {
        let default_dirs = Directories::default();
        let new_dirs = Directories::new();

        assert_eq!(default_dirs.config, new_dirs.config);
        assert_eq!(default_dirs.config_file, new_dirs.config_file);
    }
}
