use std::path::Path;

use devtools::{ProjectContext, ToolConfig};
use proptest::prelude::*;

#[test]
fn layout_for_fixed_root() {
    let ctx = ProjectContext::new("/proj").expect("root");

    insta::assert_snapshot!(ctx.lib_dir().display(), @"/proj/lib");
    insta::assert_snapshot!(ctx.file_pattern(), @"/proj/lib/**/*.rb");
    insta::assert_snapshot!(ctx.spec_root().display(), @"/proj/spec");
    insta::assert_snapshot!(ctx.config_dir().display(), @"/proj/config");
    insta::assert_snapshot!(ctx.shared_manifest_path().display(), @"/proj/Gemfile.devtools");
}

#[test]
fn cached_paths_ignore_later_filesystem_changes() {
    let tmp = tempfile::tempdir().expect("temp dir");
    let ctx = ProjectContext::new(tmp.path()).expect("root");

    let before = ctx.spec_root().to_path_buf();
    std::fs::create_dir_all(tmp.path().join("spec")).expect("mkdir spec");
    assert_eq!(ctx.spec_root(), before);
}

#[test]
fn tool_configs_are_fresh_but_agree() {
    let ctx = ProjectContext::new("/proj").expect("root");
    let first = ctx.style_config();
    let second = ctx.style_config();

    assert!(!std::ptr::eq(&first, &second));
    assert_eq!(first.lib_dir(), second.lib_dir());
    assert_eq!(first.lib_dir(), Path::new("/proj/lib"));
    assert_eq!(
        ctx.duplication_config().config_dir(),
        ctx.doc_coverage_config().config_dir()
    );
}

#[test]
fn empty_root_fails_at_construction() {
    assert!(matches!(
        ProjectContext::new(""),
        Err(devtools::Error::InvalidPath(_))
    ));
}

proptest! {
    #[test]
    fn derived_paths_are_pure_functions_of_root(root in "/[a-z]{1,8}(/[a-z0-9_]{1,8}){0,3}") {
        let a = ProjectContext::new(&root).expect("root");
        let b = ProjectContext::new(&root).expect("root");

        prop_assert_eq!(a.lib_dir(), b.lib_dir());
        prop_assert_eq!(a.file_pattern(), b.file_pattern());
        prop_assert_eq!(a.spec_root(), b.spec_root());
        prop_assert_eq!(a.config_dir(), b.config_dir());
        prop_assert_eq!(a.shared_manifest_path(), b.shared_manifest_path());
        prop_assert_eq!(a.lib_dir(), Path::new(&root).join("lib"));
    }
}
