use std::path::{Path, PathBuf};

use loadout_loader::load_patch;
use loadout_merge::{ContentMerger, MergeConfig, MergeReport};
use loadout_types::{HostDatabase, PatchDatabase};
use tracing::{error, info};

use crate::error::{SdkError, SdkResult};
use crate::hook::PostDbLoad;

/// Name of the optional configuration file inside a mod directory.
pub const CONFIG_FILE: &str = "loadout.toml";

/// Run one merge pass of `patch` over `host`.
pub fn merge(host: &mut HostDatabase, patch: &PatchDatabase, config: &MergeConfig) -> MergeReport {
    ContentMerger::new(host, patch, config).run()
}

/// A content mod on disk: a directory holding `database/` and, optionally,
/// `loadout.toml`.
#[derive(Clone, Debug)]
pub struct ContentMod {
    mod_dir: PathBuf,
    config: MergeConfig,
}

impl ContentMod {
    /// Locate the mod named by `config.mod_name` under the server's mods root.
    pub fn new(mods_root: &Path, config: MergeConfig) -> Self {
        Self {
            mod_dir: mods_root.join(&config.mod_name),
            config,
        }
    }

    /// Open a mod directory directly, reading its `loadout.toml` if present.
    pub fn open(mod_dir: &Path) -> SdkResult<Self> {
        if !mod_dir.is_dir() {
            return Err(SdkError::ModNotFound(mod_dir.display().to_string()));
        }
        let config = MergeConfig::load_or_default(&mod_dir.join(CONFIG_FILE))?;
        Ok(Self {
            mod_dir: mod_dir.to_path_buf(),
            config,
        })
    }

    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    pub fn mod_dir(&self) -> &Path {
        &self.mod_dir
    }

    /// `{mod_dir}/database/`
    pub fn database_dir(&self) -> PathBuf {
        self.mod_dir.join("database")
    }

    /// Load this mod's patch set.
    pub fn load_patch(&self) -> SdkResult<PatchDatabase> {
        Ok(load_patch(&self.database_dir())?)
    }

    /// Load the patch set and merge it into `host`.
    pub fn run(&self, host: &mut HostDatabase) -> SdkResult<MergeReport> {
        let patch = self.load_patch()?;
        Ok(merge(host, &patch, &self.config))
    }
}

impl PostDbLoad for ContentMod {
    fn post_db_load(&self, host: &mut HostDatabase) {
        match self.run(host) {
            Ok(report) => info!(
                mod_name = %self.config.mod_name,
                cloned = report.cloned.len(),
                diagnostics = report.diagnostics.len(),
                "{} loaded",
                self.config.mod_name
            ),
            Err(e) => error!(
                mod_name = %self.config.mod_name,
                error = %e,
                "failed to load content mod"
            ),
        }
    }
}
