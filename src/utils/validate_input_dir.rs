use crate::Error;
use std::fs;
use std::path::Path;

/// Checks that `dir` exists, is a directory and can be listed.
///
/// Runs before any corpus file is opened; every failure is an
/// [`Error::ConfigError`].
pub fn validate_input_dir(dir: &Path) -> Result<(), Error> {
    if !dir.is_dir() {
        return Err(Error::ConfigError(format!(
            "readable_dir:{} is not a valid path",
            dir.display()
        )));
    }

    fs::read_dir(dir).map_err(|err| {
        Error::ConfigError(format!(
            "readable_dir:{} is not a readable dir ({})",
            dir.display(),
            err
        ))
    })?;

    Ok(())
}
