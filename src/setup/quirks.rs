//! Compatibility shims for legacy runtimes.
//!
//! Runtimes older than [`AUTORUN_CUTOFF`] do not start the suite on their own,
//! so autorun is switched on explicitly. Drop this module once those runtimes
//! are no longer supported.

use semver::Version;

use crate::error::Error;

use super::TestHarness;

pub const AUTORUN_CUTOFF: Version = Version::new(1, 9, 0);

pub fn needs_autorun(runtime: &Version) -> bool {
    *runtime < AUTORUN_CUTOFF
}

pub(crate) fn prepare<H>(harness: &mut H) -> Result<(), Error>
where
    H: TestHarness + ?Sized,
{
    let Some(runtime) = harness.runtime_version() else {
        return Ok(());
    };
    if needs_autorun(&runtime) {
        tracing::debug!(%runtime, "legacy runtime, enabling autorun");
        harness.enable_autorun().map_err(Error::Quirks)?;
    }
    Ok(())
}
