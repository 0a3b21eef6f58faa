//! Locating and running `gmad`, the Garry's Mod addon tool.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info};

use crate::{Error, Result};

pub const GMAD_ENV_VAR: &str = "GMAD_PATH";
pub const GMAD_EXECUTABLE: &str = "gmad";

/// Something that can unpack a downloaded addon in place.
pub trait Extractor {
    fn extract(&self, file: &Path) -> Result<()>;
}

/// Find gmad: `$GMAD_PATH` if set and non-empty, otherwise a search of the
/// executable path.
pub fn resolve_gmad<E, S>(env_lookup: E, path_search: S) -> Result<PathBuf>
where
    E: FnOnce(&str) -> Option<OsString>,
    S: FnOnce(&str) -> Option<PathBuf>,
{
    if let Some(path) = env_lookup(GMAD_ENV_VAR).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    path_search(GMAD_EXECUTABLE).ok_or_else(|| Error::ExecutableNotFound {
        name: GMAD_EXECUTABLE.to_string(),
        env_var: GMAD_ENV_VAR.to_string(),
    })
}

/// Resolve gmad against the real environment and `PATH`.
pub fn locate_gmad() -> Result<PathBuf> {
    resolve_gmad(|name| std::env::var_os(name), |name| which::which(name).ok())
}

#[derive(Debug, Clone)]
pub struct Gmad {
    executable: PathBuf,
}

impl Gmad {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    pub fn locate() -> Result<Self> {
        locate_gmad().map(Self::new)
    }
}

impl Extractor for Gmad {
    /// Runs `gmad extract -file <file>`, sharing our stdout and stderr.
    fn extract(&self, file: &Path) -> Result<()> {
        info!("Extracting {} with gmad", file.display());
        debug!(executable = %self.executable.display(), "spawning gmad");

        let status = Command::new(&self.executable)
            .arg("extract")
            .arg("-file")
            .arg(file)
            .status()?;

        if !status.success() {
            return Err(Error::ExtractFailed(status));
        }
        Ok(())
    }
}

/// Resolves gmad on first use, so runs that never extract never need it.
#[derive(Debug, Default)]
pub struct LazyGmad {
    resolved: std::cell::OnceCell<Gmad>,
}

impl LazyGmad {
    pub fn new() -> Self {
        Self::default()
    }

    fn get(&self) -> Result<&Gmad> {
        if let Some(gmad) = self.resolved.get() {
            return Ok(gmad);
        }
        let gmad = Gmad::locate()?;
        Ok(self.resolved.get_or_init(|| gmad))
    }
}

impl Extractor for LazyGmad {
    fn extract(&self, file: &Path) -> Result<()> {
        self.get()?.extract(file)
    }
}
