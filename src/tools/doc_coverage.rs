use crate::config::DocCoverageSettings;
use crate::project::ProjectContext;

use super::ToolConfig;

#[derive(Debug, Clone, Copy)]
pub struct DocCoverageConfig<'p> {
    project: &'p ProjectContext,
}

impl<'p> DocCoverageConfig<'p> {
    pub fn new(project: &'p ProjectContext) -> Self {
        Self { project }
    }
}

impl<'p> ToolConfig<'p> for DocCoverageConfig<'p> {
    const NAME: &'static str = "yardstick";

    type Settings = DocCoverageSettings;

    fn project(&self) -> &'p ProjectContext {
        self.project
    }
}
