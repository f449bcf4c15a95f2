use crate::config::DuplicationSettings;
use crate::project::ProjectContext;

use super::ToolConfig;

/// flay: structural duplication across the library sources.
#[derive(Debug, Clone, Copy)]
pub struct DuplicationConfig<'p> {
    project: &'p ProjectContext,
}

impl<'p> DuplicationConfig<'p> {
    pub fn new(project: &'p ProjectContext) -> Self {
        Self { project }
    }
}

impl<'p> ToolConfig<'p> for DuplicationConfig<'p> {
    const NAME: &'static str = "flay";

    type Settings = DuplicationSettings;

    fn project(&self) -> &'p ProjectContext {
        self.project
    }
}
