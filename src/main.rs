//! wowkeep - interactive backup tool for a World of Warcraft installation.
//!
//! Run it from the installation folder (next to `World of Warcraft Launcher.exe`)
//! and pick one of:
//!
//! 1. **Backup**: copy the add-ons listed in `config.yaml`, and each listed
//!    account's saved-variables files for them, into `temp/`
//! 2. **Restore**: copy `temp/` back into `_classic_/` and delete it
//! 3. **Initialize**: delete the client's WTF, cache, font, interface and
//!    error-log folders
//!
//! Per-item results are printed as they happen; the run ends with a single
//! summary line. Log files are kept in the system temp folder.

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use wowkeep::{APP_NAME, KeepError, StdinPrompt, VERSION};

fn main() -> Result<()> {
    let log_dir = wowkeep::logging::default_log_dir()?;
    let _guard =
        wowkeep::logging::setup_logging_with_console(log_dir.as_str(), APP_NAME, false, true)?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let root = match Utf8PathBuf::try_from(cwd) {
        Ok(root) => root,
        Err(e) => {
            report_fatal(&KeepError::InvalidPath(e.into_path_buf()));
            return Ok(());
        }
    };

    let mut prompt = StdinPrompt::new();
    match wowkeep::app::run(&root, &mut prompt) {
        Ok(report) => println!("{}", report.summary_line()),
        Err(e) => report_fatal(&e),
    }

    Ok(())
}

/// No distinct exit codes: fatal conditions are a console message
fn report_fatal(err: &KeepError) {
    tracing::error!("{}", err);
    println!("{}", err);
}
