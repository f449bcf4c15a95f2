use crate::config::StyleSettings;
use crate::project::ProjectContext;

use super::ToolConfig;

/// flog: complexity scoring over the library sources.
#[derive(Debug, Clone, Copy)]
pub struct StyleConfig<'p> {
    project: &'p ProjectContext,
}

impl<'p> StyleConfig<'p> {
    pub fn new(project: &'p ProjectContext) -> Self {
        Self { project }
    }
}

impl<'p> ToolConfig<'p> for StyleConfig<'p> {
    const NAME: &'static str = "flog";

    type Settings = StyleSettings;

    fn project(&self) -> &'p ProjectContext {
        self.project
    }
}
