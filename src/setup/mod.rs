//! Test environment setup for a project's spec suite.

mod harness;
pub mod quirks;
mod shared;

use std::path::Path;

use anyhow::Result;
use semver::Version;

use crate::error::Error;
use crate::pattern::FilePattern;
use crate::project::ProjectContext;

pub use harness::{LoadedFile, ProcessHarness};
pub use shared::{SHARED_EXAMPLES, SharedExampleRegistry};

/// Glob, relative to the spec root, selecting shared examples and support code.
pub const SUPPORT_GLOB: &str = "{shared,support}/**/*.rb";

/// The test framework a project's specs run under.
pub trait TestHarness {
    /// Load the framework itself. Must be idempotent.
    fn bootstrap(&mut self) -> Result<()>;

    /// Register the shared example groups every project gets.
    ///
    /// Called on every setup. Implementations guard any process-wide work
    /// themselves, e.g. through [`SHARED_EXAMPLES`].
    fn register_shared_examples(&mut self) -> Result<()>;

    /// Load one support file into the running suite.
    fn load_file(&mut self, path: &Path) -> Result<()>;

    /// Version of the runtime hosting the suite, when known.
    fn runtime_version(&self) -> Option<Version> {
        None
    }

    /// Make the suite run itself at process exit.
    fn enable_autorun(&mut self) -> Result<()>;
}

/// Support files for `project`, in the order they are loaded.
pub fn support_pattern(project: &ProjectContext) -> FilePattern {
    FilePattern::new(project.spec_root(), SUPPORT_GLOB)
}

pub(crate) fn run<H>(project: &ProjectContext, harness: &mut H) -> Result<(), Error>
where
    H: TestHarness + ?Sized,
{
    tracing::info!(spec_root = %project.spec_root().display(), "setting up test environment");

    harness.bootstrap().map_err(Error::Bootstrap)?;
    harness
        .register_shared_examples()
        .map_err(Error::SharedExamples)?;
    load_support_files(project, harness)?;
    quirks::prepare(harness)?;

    tracing::info!("test environment ready");
    Ok(())
}

fn load_support_files<H>(project: &ProjectContext, harness: &mut H) -> Result<(), Error>
where
    H: TestHarness + ?Sized,
{
    let pattern = support_pattern(project);
    let files = pattern.files().map_err(|source| Error::SupportWalk {
        root: project.spec_root().to_path_buf(),
        source,
    })?;

    for path in files {
        tracing::debug!(path = %path.display(), "loading support file");
        if let Err(source) = harness.load_file(&path) {
            tracing::warn!(path = %path.display(), error = %source, "support file failed to load");
            return Err(Error::SetupLoadFailure { path, source });
        }
    }
    Ok(())
}
