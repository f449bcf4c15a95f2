//! Per-tool configuration handles.
//!
//! Each handle borrows the [`ProjectContext`] it was built from and resolves
//! paths through it on demand, so handles built from one context always agree.

mod complexity;
mod doc_coverage;
mod duplication;
mod mutation;
mod style;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::config::{LoadedSettings, load_settings_from_dir, settings_candidates};
use crate::pattern::FilePattern;
use crate::project::ProjectContext;

pub use complexity::ComplexityConfig;
pub use doc_coverage::DocCoverageConfig;
pub use duplication::DuplicationConfig;
pub use mutation::MutationConfig;
pub use style::StyleConfig;

pub trait ToolConfig<'p> {
    /// Stem of the tool's settings file inside `config/`.
    const NAME: &'static str;

    type Settings: DeserializeOwned;

    fn project(&self) -> &'p ProjectContext;

    fn lib_dir(&self) -> &'p Path {
        self.project().lib_dir()
    }

    fn file_pattern(&self) -> &'p FilePattern {
        self.project().file_pattern()
    }

    fn config_dir(&self) -> &'p Path {
        self.project().config_dir()
    }

    fn config_file_candidates(&self) -> Vec<PathBuf> {
        settings_candidates(self.config_dir(), Self::NAME)
    }

    /// Read the tool's settings file, if the project has one.
    fn load_settings(&self) -> Result<Option<LoadedSettings<Self::Settings>>> {
        load_settings_from_dir(self.config_dir(), Self::NAME)
    }

    /// Library sources the tool should scan.
    fn source_files(&self) -> Result<Vec<PathBuf>> {
        let pattern = self.file_pattern();
        pattern
            .files()
            .with_context(|| format!("listing {} sources matching {pattern}", Self::NAME))
    }
}
