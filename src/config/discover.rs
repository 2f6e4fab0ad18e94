//! Locating declaration sources on disk.
//!
//! Search order for both formats: an explicitly supplied path wins,
//! then a project-local file, then one in the home directory. The
//! directories are injected so tests can point discovery at temp dirs;
//! [`Discovery::current`] wires in the real working and home
//! directories.

use std::path::{Path, PathBuf};

/// Project-local / home declaration script file name.
pub const SCRIPT_FILE: &str = ".shortnames";

/// Project-local / home structured config file name.
pub const CONFIG_FILE: &str = ".shortnames.yml";

/// Where to look for declaration sources.
#[derive(Clone, Debug)]
pub struct Discovery {
    project_dir: PathBuf,
    home_dir: Option<PathBuf>,
}

impl Discovery {
    pub fn new(project_dir: impl Into<PathBuf>, home_dir: Option<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            home_dir,
        }
    }

    /// Discovery rooted at the current working directory and the real
    /// home directory.
    pub fn current() -> std::io::Result<Self> {
        Ok(Self::new(std::env::current_dir()?, dirs::home_dir()))
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// The default namespace: the last component of the project
    /// directory.
    pub fn namespace(&self) -> String {
        self.project_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Locate the line-format script, project first, then home.
    pub fn find_script(&self) -> Option<PathBuf> {
        self.find(SCRIPT_FILE)
    }

    /// Locate the structured config, project first, then home.
    pub fn find_config(&self) -> Option<PathBuf> {
        self.find(CONFIG_FILE)
    }

    fn find(&self, file_name: &str) -> Option<PathBuf> {
        let project = self.project_dir.join(file_name);
        if project.exists() {
            return Some(project);
        }
        let home = self.home_dir.as_ref()?.join(file_name);
        home.exists().then_some(home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        std::fs::write(path, "").unwrap();
    }

    #[test]
    fn test_project_file_wins_over_home() {
        let project = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        touch(&project.path().join(SCRIPT_FILE));
        touch(&home.path().join(SCRIPT_FILE));

        let discovery = Discovery::new(project.path(), Some(home.path().to_path_buf()));
        assert_eq!(
            discovery.find_script().unwrap(),
            project.path().join(SCRIPT_FILE)
        );
    }

    #[test]
    fn test_falls_back_to_home() {
        let project = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        touch(&home.path().join(CONFIG_FILE));

        let discovery = Discovery::new(project.path(), Some(home.path().to_path_buf()));
        assert_eq!(
            discovery.find_config().unwrap(),
            home.path().join(CONFIG_FILE)
        );
    }

    #[test]
    fn test_nothing_found() {
        let project = tempfile::tempdir().unwrap();
        let discovery = Discovery::new(project.path(), None);
        assert!(discovery.find_script().is_none());
        assert!(discovery.find_config().is_none());
    }

    #[test]
    fn test_namespace_is_last_path_component() {
        let discovery = Discovery::new("/home/dev/my_project", None);
        assert_eq!(discovery.namespace(), "my_project");
    }
}
