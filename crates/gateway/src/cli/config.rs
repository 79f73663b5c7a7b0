use jl_domain::config::{Config, ConfigSeverity};

/// Print every issue of the config.  Returns `false` when at least one
/// of them is an error.
pub fn validate(config: &Config, config_path: &str) -> bool {
    let issues = config.validate();

    if issues.is_empty() {
        println!("Config OK ({config_path})");
        return true;
    }

    let error_count = issues
        .iter()
        .filter(|e| e.severity == ConfigSeverity::Error)
        .count();
    let warning_count = issues.len() - error_count;

    for issue in &issues {
        println!("{issue}");
    }

    println!(
        "\n{} error(s), {} warning(s) in {config_path}",
        error_count, warning_count,
    );

    error_count == 0
}

/// Log every issue of the config and fail when any of them is an error.
///
/// Run before anything that acts on the config (`serve`, `calc`, `timezones`).
pub fn ensure_valid(config: &Config, config_path: &str) -> anyhow::Result<()> {
    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            ConfigSeverity::Error => tracing::error!(field = %issue.field, "{}", issue.message),
            ConfigSeverity::Warning => tracing::warn!(field = %issue.field, "{}", issue.message),
        }
    }
    let errors: Vec<String> = issues
        .iter()
        .filter(|i| i.severity == ConfigSeverity::Error)
        .map(|i| i.to_string())
        .collect();
    if !errors.is_empty() {
        anyhow::bail!(
            "invalid configuration in {config_path}:\n{}\nrun `jetlag config validate` for details",
            errors.join("\n")
        );
    }
    Ok(())
}

/// Dump the resolved config (with all defaults filled in) as TOML.
pub fn show(config: &Config) -> anyhow::Result<()> {
    let output = toml::to_string_pretty(config)
        .map_err(|e| anyhow::anyhow!("serializing config: {e}"))?;
    print!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_passes() {
        assert!(ensure_valid(&Config::default(), "config.toml").is_ok());
    }

    #[test]
    fn negative_sleep_hours_fail() {
        let mut config = Config::default();
        config.scheduler.sleep_hours = -1.0;
        let err = ensure_valid(&config, "config.toml").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("scheduler.sleep_hours"), "{msg}");
        assert!(msg.contains("config.toml"));
    }

    #[test]
    fn warnings_alone_do_not_fail() {
        let mut config = Config::default();
        config.server.cors.allowed_origins = vec!["*".into()];
        assert!(ensure_valid(&config, "config.toml").is_ok());
    }
}
