use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::error::{Error, Result};
use crate::pattern::FilePattern;
use crate::setup::{self, TestHarness};
use crate::tools::{
    ComplexityConfig, DocCoverageConfig, DuplicationConfig, MutationConfig, StyleConfig,
};

/// Environment variable that overrides the project root in [`ProjectContext::from_env`].
pub const PROJECT_ROOT_ENV: &str = "DEVTOOLS_PROJECT_ROOT";

pub const LIB_DIR: &str = "lib";
pub const SPEC_DIR: &str = "spec";
pub const CONFIG_DIR: &str = "config";
pub const SHARED_MANIFEST: &str = "Gemfile.devtools";
pub const SOURCE_GLOB: &str = "**/*.rb";

/// Shared metadata about the project root, handed to every tool config.
///
/// Derived paths are pure joins on `root`; each is computed on first access
/// and cached for the lifetime of the context. Nothing here touches the
/// filesystem except [`setup_test_environment`](Self::setup_test_environment).
#[derive(Debug)]
pub struct ProjectContext {
    root: PathBuf,
    lib_dir: OnceLock<PathBuf>,
    file_pattern: OnceLock<FilePattern>,
    spec_root: OnceLock<PathBuf>,
    config_dir: OnceLock<PathBuf>,
    shared_manifest_path: OnceLock<PathBuf>,
}

impl ProjectContext {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if root.as_os_str().is_empty() {
            return Err(Error::InvalidPath("project root is empty".to_string()));
        }
        Ok(Self {
            root,
            lib_dir: OnceLock::new(),
            file_pattern: OnceLock::new(),
            spec_root: OnceLock::new(),
            config_dir: OnceLock::new(),
            shared_manifest_path: OnceLock::new(),
        })
    }

    /// Context rooted at `$DEVTOOLS_PROJECT_ROOT`, or the current directory.
    pub fn from_env() -> Result<Self> {
        let root = resolve_root(std::env::var_os(PROJECT_ROOT_ENV), std::env::current_dir)?;
        Self::new(root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn lib_dir(&self) -> &Path {
        self.lib_dir
            .get_or_init(|| derive(&self.root, "lib_dir", self.root.join(LIB_DIR)))
    }

    /// Recursive glob over the library sources.
    pub fn file_pattern(&self) -> &FilePattern {
        self.file_pattern.get_or_init(|| {
            let pattern = FilePattern::new(self.lib_dir(), SOURCE_GLOB);
            tracing::debug!(root = %self.root.display(), pattern = %pattern, "derived file_pattern");
            pattern
        })
    }

    pub fn spec_root(&self) -> &Path {
        self.spec_root
            .get_or_init(|| derive(&self.root, "spec_root", self.root.join(SPEC_DIR)))
    }

    pub fn config_dir(&self) -> &Path {
        self.config_dir
            .get_or_init(|| derive(&self.root, "config_dir", self.root.join(CONFIG_DIR)))
    }

    /// The dependency manifest shared across sibling projects.
    pub fn shared_manifest_path(&self) -> &Path {
        self.shared_manifest_path.get_or_init(|| {
            derive(
                &self.root,
                "shared_manifest_path",
                self.root.join(SHARED_MANIFEST),
            )
        })
    }

    pub fn style_config(&self) -> StyleConfig<'_> {
        StyleConfig::new(self)
    }

    pub fn duplication_config(&self) -> DuplicationConfig<'_> {
        DuplicationConfig::new(self)
    }

    pub fn doc_coverage_config(&self) -> DocCoverageConfig<'_> {
        DocCoverageConfig::new(self)
    }

    pub fn complexity_config(&self) -> ComplexityConfig<'_> {
        ComplexityConfig::new(self)
    }

    pub fn mutation_config(&self) -> MutationConfig<'_> {
        MutationConfig::new(self)
    }

    /// Prepare `harness` to run this project's specs.
    ///
    /// Bootstraps the framework, registers the process-wide shared examples,
    /// loads every file under `spec/{shared,support}/**/*.rb` and applies the
    /// legacy runtime quirks. The first support file that fails to load
    /// aborts the setup.
    pub fn setup_test_environment<H>(&self, harness: &mut H) -> Result<&Self>
    where
        H: TestHarness + ?Sized,
    {
        setup::run(self, harness)?;
        Ok(self)
    }
}

fn derive(root: &Path, name: &str, path: PathBuf) -> PathBuf {
    tracing::debug!(root = %root.display(), path = %path.display(), "derived {name}");
    path
}

/// Pick the project root: a non-empty override wins, otherwise `cwd`.
pub fn resolve_root<F>(env_override: Option<OsString>, cwd: F) -> Result<PathBuf>
where
    F: FnOnce() -> std::io::Result<PathBuf>,
{
    if let Some(raw) = env_override.filter(|raw| !raw.is_empty()) {
        return Ok(PathBuf::from(raw));
    }
    cwd().map_err(|e| Error::InvalidPath(format!("resolving current directory: {e}")))
}
