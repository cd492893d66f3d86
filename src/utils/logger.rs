use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "display_helpers=debug,info"
    } else {
        "display_helpers=info"
    }
}

/// Installs the global subscriber. `RUST_LOG` wins over `verbose`; `json`
/// switches the compact line format for JSON lines.
pub fn init_logger(verbose: bool, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    // stdout carries command output, so logs go to stderr
    let base = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let fmt_layer = if json {
        base.json().boxed()
    } else {
        base.compact().boxed()
    };

    let _ = tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(false), "display_helpers=info");
        assert!(default_filter(true).starts_with("display_helpers=debug"));
    }

    #[test]
    fn test_init_logger_twice_is_harmless() {
        init_logger(false, true);
        init_logger(true, false);
        tracing::info!("logger installed");
    }
}
