//! Validate a settings file

use std::path::Path;

use vulsconf::load_settings;
use vulsconf::output::{OutputMode, ValidateResult};

/// Load, validate and report; fails when any violation is found
pub fn validate(config: &Path, mail: bool, slack: bool, mode: OutputMode) -> anyhow::Result<()> {
    let mut settings = load_settings(config)?;

    // Blocks are only checked when this run would use them
    settings.mail.use_this_time = mail;
    settings.chat.use_this_time = slack;

    let violations = settings.validate();
    for v in &violations {
        log::error!("{v}");
    }

    let result = ValidateResult::new(config.display().to_string(), &settings, violations);
    result.render(mode);

    if !result.valid {
        anyhow::bail!("{} violation(s) in {}", result.violations.len(), config.display());
    }

    Ok(())
}
