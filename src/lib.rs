//! Project layout and tool configuration shared by a project's dev tools.
//!
//! A [`ProjectContext`] derives every path the tools need from one root and
//! hands out per-tool configuration handles that resolve through it.

pub mod config;
mod error;
pub mod pattern;
mod project;
pub mod setup;
pub mod tools;

pub use error::{Error, Result};
pub use pattern::FilePattern;
pub use project::{
    CONFIG_DIR, LIB_DIR, PROJECT_ROOT_ENV, ProjectContext, SHARED_MANIFEST, SOURCE_GLOB, SPEC_DIR,
    resolve_root,
};
pub use setup::{ProcessHarness, TestHarness};
pub use tools::{
    ComplexityConfig, DocCoverageConfig, DuplicationConfig, MutationConfig, StyleConfig,
    ToolConfig,
};
