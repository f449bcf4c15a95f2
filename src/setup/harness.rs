use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use semver::Version;

use super::{SHARED_EXAMPLES, TestHarness};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedFile {
    pub path: PathBuf,
    pub source: String,
}

/// In-process harness that keeps loaded support files in memory.
///
/// Loading has require semantics: a path already loaded is skipped.
#[derive(Debug, Default)]
pub struct ProcessHarness {
    runtime: Option<Version>,
    bootstrapped: bool,
    shared_examples: bool,
    autorun: bool,
    seen: HashSet<PathBuf>,
    loaded: Vec<LoadedFile>,
}

impl ProcessHarness {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_runtime_version(mut self, runtime: Version) -> Self {
        self.runtime = Some(runtime);
        self
    }

    pub fn is_bootstrapped(&self) -> bool {
        self.bootstrapped
    }

    pub fn has_shared_examples(&self) -> bool {
        self.shared_examples
    }

    pub fn autorun_enabled(&self) -> bool {
        self.autorun
    }

    /// Files loaded so far, in load order.
    pub fn loaded(&self) -> &[LoadedFile] {
        &self.loaded
    }
}

impl TestHarness for ProcessHarness {
    fn bootstrap(&mut self) -> Result<()> {
        self.bootstrapped = true;
        Ok(())
    }

    fn register_shared_examples(&mut self) -> Result<()> {
        SHARED_EXAMPLES.ensure_registered(|| Ok(()))?;
        self.shared_examples = true;
        Ok(())
    }

    fn load_file(&mut self, path: &Path) -> Result<()> {
        if self.seen.contains(path) {
            return Ok(());
        }
        let source = fs::read_to_string(path)
            .with_context(|| format!("reading support file {}", path.display()))?;
        self.seen.insert(path.to_path_buf());
        self.loaded.push(LoadedFile {
            path: path.to_path_buf(),
            source,
        });
        Ok(())
    }

    fn runtime_version(&self) -> Option<Version> {
        self.runtime.clone()
    }

    fn enable_autorun(&mut self) -> Result<()> {
        self.autorun = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn loads_each_path_once() {
        let tmp = tempdir().expect("temp dir");
        let file = tmp.path().join("helper.rb");
        fs::write(&file, "module Helper; end\n").expect("write helper");

        let mut harness = ProcessHarness::new();
        harness.load_file(&file).expect("first load");
        harness.load_file(&file).expect("second load");

        assert_eq!(harness.loaded().len(), 1);
        assert_eq!(harness.loaded()[0].source, "module Helper; end\n");
    }

    #[test]
    fn unreadable_file_is_an_error() {
        let tmp = tempdir().expect("temp dir");
        let mut harness = ProcessHarness::new();

        let err = harness
            .load_file(&tmp.path().join("missing.rb"))
            .expect_err("missing file");
        assert!(format!("{err:#}").contains("missing.rb"));
        assert!(harness.loaded().is_empty());
    }
}
