//! List configured server profiles

use std::path::Path;

use vulsconf::load_settings;
use vulsconf::output::{OutputMode, ServerListResult};

/// Print every named server after `[default]` inheritance
pub fn servers(config: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let settings = load_settings(config)?;
    ServerListResult::new(&settings).render(mode);
    Ok(())
}
