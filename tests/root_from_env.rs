use std::path::Path;

use devtools::{PROJECT_ROOT_ENV, ProjectContext};
use serial_test::serial;

struct EnvGuard(Option<std::ffi::OsString>);

impl EnvGuard {
    fn set(value: &str) -> Self {
        let previous = std::env::var_os(PROJECT_ROOT_ENV);
        // SAFETY: tests touching the environment run under #[serial].
        unsafe { std::env::set_var(PROJECT_ROOT_ENV, value) };
        Self(previous)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // SAFETY: see EnvGuard::set.
        unsafe {
            match self.0.take() {
                Some(previous) => std::env::set_var(PROJECT_ROOT_ENV, previous),
                None => std::env::remove_var(PROJECT_ROOT_ENV),
            }
        }
    }
}

#[test]
#[serial]
fn root_comes_from_environment_override() {
    let _guard = EnvGuard::set("/from/env");

    let ctx = ProjectContext::from_env().expect("root from env");
    assert_eq!(ctx.root(), Path::new("/from/env"));
    assert_eq!(ctx.lib_dir(), Path::new("/from/env/lib"));
}

#[test]
#[serial]
fn empty_override_uses_current_dir() {
    let _guard = EnvGuard::set("");

    let ctx = ProjectContext::from_env().expect("root from cwd");
    let cwd = std::env::current_dir().expect("cwd");
    assert_eq!(ctx.root(), cwd.as_path());
}
