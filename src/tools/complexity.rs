use crate::config::ComplexitySettings;
use crate::project::ProjectContext;

use super::ToolConfig;

/// roodi checks, configured from `config/roodi.yml`.
#[derive(Debug, Clone, Copy)]
pub struct ComplexityConfig<'p> {
    project: &'p ProjectContext,
}

impl<'p> ComplexityConfig<'p> {
    pub fn new(project: &'p ProjectContext) -> Self {
        Self { project }
    }
}

impl<'p> ToolConfig<'p> for ComplexityConfig<'p> {
    const NAME: &'static str = "roodi";

    type Settings = ComplexitySettings;

    fn project(&self) -> &'p ProjectContext {
        self.project
    }
}
