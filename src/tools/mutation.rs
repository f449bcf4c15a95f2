use anyhow::Result;

use crate::config::MutationSettings;
use crate::project::ProjectContext;

use super::ToolConfig;

/// mutant: which subjects to mutate and under which namespace.
#[derive(Debug, Clone, Copy)]
pub struct MutationConfig<'p> {
    project: &'p ProjectContext,
}

impl<'p> MutationConfig<'p> {
    pub fn new(project: &'p ProjectContext) -> Self {
        Self { project }
    }

    /// Namespace to mutate: `namespace` from the settings file, else `name`.
    pub fn namespace(&self) -> Result<Option<String>> {
        Ok(self.load_settings()?.and_then(|loaded| {
            let MutationSettings {
                name, namespace, ..
            } = loaded.data;
            namespace.or(name)
        }))
    }
}

impl<'p> ToolConfig<'p> for MutationConfig<'p> {
    const NAME: &'static str = "mutant";

    type Settings = MutationSettings;

    fn project(&self) -> &'p ProjectContext {
        self.project
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn project_with_mutant(yaml: &str) -> (tempfile::TempDir, ProjectContext) {
        let tmp = tempdir().expect("temp dir");
        let config_dir = tmp.path().join("config");
        fs::create_dir_all(&config_dir).expect("mkdir config");
        fs::write(config_dir.join("mutant.yml"), yaml).expect("write mutant.yml");
        let ctx = ProjectContext::new(tmp.path()).expect("root");
        (tmp, ctx)
    }

    #[test]
    fn namespace_prefers_explicit_namespace() {
        let (_tmp, ctx) = project_with_mutant("name: devtools\nnamespace: Devtools\n");
        assert_eq!(
            ctx.mutation_config().namespace().expect("load"),
            Some("Devtools".to_string())
        );
    }

    #[test]
    fn namespace_falls_back_to_name() {
        let (_tmp, ctx) = project_with_mutant("name: devtools\n");
        assert_eq!(
            ctx.mutation_config().namespace().expect("load"),
            Some("devtools".to_string())
        );
    }

    #[test]
    fn namespace_is_none_without_settings() {
        let tmp = tempdir().expect("temp dir");
        let ctx = ProjectContext::new(tmp.path()).expect("root");
        assert_eq!(ctx.mutation_config().namespace().expect("probe"), None);
    }
}
