use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Environment variable checked before `RUST_LOG`.
pub const LOG_ENV_VAR: &str = "CIRCULATE_LOG";

/// How much the subscriber should say when no filter is set in the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogOptions {
    pub verbose: bool,
    pub no_color: bool,
    /// The dashboard owns the terminal. Nothing is logged unless the
    /// environment asks for it.
    pub interactive: bool,
}

const fn default_directive(options: LogOptions) -> &'static str {
    if options.interactive {
        "off"
    } else if options.verbose {
        "debug"
    } else {
        "info"
    }
}

fn build_filter(env_value: Option<String>, options: LogOptions) -> EnvFilter {
    let fallback = default_directive(options);
    env_value.map_or_else(
        || EnvFilter::new(fallback),
        |value| EnvFilter::try_new(value).unwrap_or_else(|_| EnvFilter::new(fallback)),
    )
}

pub fn init_logging(options: LogOptions) {
    let env_value = std::env::var(LOG_ENV_VAR)
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok();
    let filter = build_filter(env_value, options);

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_ansi(!options.no_color)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, AppResult};

    const QUIET: LogOptions = LogOptions {
        verbose: false,
        no_color: true,
        interactive: false,
    };

    #[test]
    fn init_logging_is_idempotent() {
        init_logging(QUIET);
        init_logging(QUIET);
    }

    #[test]
    fn dashboard_mode_silences_default_filter() -> AppResult<()> {
        let options = LogOptions {
            verbose: true,
            interactive: true,
            ..QUIET
        };
        let filter = build_filter(None, options);
        if filter.to_string() != EnvFilter::new("off").to_string() {
            return Err(AppError::validation(format!(
                "dashboard filter must be off, got {}",
                filter
            )));
        }
        if filter.max_level_hint() != Some(tracing::level_filters::LevelFilter::OFF) {
            return Err(AppError::validation("dashboard filter lets events through"));
        }
        let verbose = LogOptions {
            verbose: true,
            ..QUIET
        };
        if default_directive(verbose) != "debug" || default_directive(QUIET) != "info" {
            return Err(AppError::validation("unexpected headless defaults"));
        }
        Ok(())
    }

    #[test]
    fn invalid_env_filter_falls_back() -> AppResult<()> {
        let filter = build_filter(Some("circulate=notalevel".to_owned()), QUIET);
        if filter.to_string() != EnvFilter::new("info").to_string() {
            return Err(AppError::validation(format!("unexpected filter {}", filter)));
        }
        let custom = build_filter(Some("circulate=trace".to_owned()), QUIET);
        if custom.to_string() != "circulate=trace" {
            return Err(AppError::validation(format!("unexpected filter {}", custom)));
        }
        Ok(())
    }
}
