//! Filesystem locations used by every operation

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::{Error, Result};

/// Overrides the config file location
pub const CONFIG_ENV: &str = "PUCK_CONFIG";

/// Overrides the installation root (cheatsheets, bundled projects)
pub const HOME_ENV: &str = "PUCK_HOME";

/// Directory under the installation root holding cheatsheets
const CHEATSHEET_DIR: &str = "cheatsheets";

/// Working directory and installation root for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    /// Directory the command was invoked from
    pub cwd: Utf8PathBuf,
    /// Directory puck is installed in
    pub install_root: Utf8PathBuf,
}

impl Paths {
    pub fn new(cwd: impl Into<Utf8PathBuf>, install_root: impl Into<Utf8PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            install_root: install_root.into(),
        }
    }

    /// Resolve paths for the running process
    pub fn discover() -> Result<Self> {
        let cwd = to_utf8(std::env::current_dir()?)?;
        Ok(Self {
            cwd,
            install_root: install_root()?,
        })
    }

    /// Where a project of this name lives relative to the working directory
    pub fn project_dir(&self, name: &str) -> Utf8PathBuf {
        self.cwd.join(name)
    }

    /// Candidate project roots in lookup order: working directory first,
    /// then the installation root
    pub fn candidate_roots(&self, name: &str) -> Vec<Utf8PathBuf> {
        let local = self.cwd.join(name);
        let installed = self.install_root.join(name);
        if local == installed {
            vec![local]
        } else {
            vec![local, installed]
        }
    }

    /// Directory holding cheatsheet files
    pub fn cheatsheet_dir(&self) -> Utf8PathBuf {
        self.install_root.join(CHEATSHEET_DIR)
    }
}

/// Location of the config file: `$PUCK_CONFIG`, else `<config dir>/puck/config`
pub fn config_path() -> Result<Utf8PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        if !path.is_empty() {
            return Ok(Utf8PathBuf::from(path));
        }
    }

    let base = dirs::config_dir().ok_or_else(|| Error::path_unavailable("config directory"))?;
    Ok(to_utf8(base)?.join("puck").join("config"))
}

/// Installation root: `$PUCK_HOME`, else the directory of the executable
pub fn install_root() -> Result<Utf8PathBuf> {
    if let Ok(home) = std::env::var(HOME_ENV) {
        if !home.is_empty() {
            return Ok(Utf8PathBuf::from(home));
        }
    }

    let exe = to_utf8(std::env::current_exe()?)?;
    exe.parent()
        .map(Utf8Path::to_path_buf)
        .ok_or_else(|| Error::path_unavailable("installation directory"))
}

fn to_utf8(path: std::path::PathBuf) -> Result<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path).map_err(|p| Error::non_utf8_path(p.display().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_candidate_roots_order() {
        let paths = Paths::new("/work", "/opt/puck");
        assert_eq!(
            paths.candidate_roots("demo"),
            vec![
                Utf8PathBuf::from("/work/demo"),
                Utf8PathBuf::from("/opt/puck/demo")
            ]
        );
    }

    #[test]
    fn test_candidate_roots_dedup() {
        let paths = Paths::new("/opt/puck", "/opt/puck");
        assert_eq!(paths.candidate_roots("demo").len(), 1);
    }

    #[test]
    fn test_cheatsheet_dir() {
        let paths = Paths::new("/work", "/opt/puck");
        assert_eq!(
            paths.cheatsheet_dir(),
            Utf8PathBuf::from("/opt/puck/cheatsheets")
        );
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        std::env::set_var(CONFIG_ENV, "/tmp/puck-test/config");
        std::env::set_var(HOME_ENV, "/tmp/puck-home");

        assert_eq!(
            config_path().unwrap(),
            Utf8PathBuf::from("/tmp/puck-test/config")
        );
        assert_eq!(install_root().unwrap(), Utf8PathBuf::from("/tmp/puck-home"));

        std::env::remove_var(CONFIG_ENV);
        std::env::remove_var(HOME_ENV);
    }

    #[test]
    #[serial]
    fn test_install_root_defaults_to_exe_dir() {
        std::env::remove_var(HOME_ENV);
        let exe = std::env::current_exe().unwrap();
        assert_eq!(
            install_root().unwrap().as_std_path(),
            exe.parent().unwrap()
        );
    }
}
