use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count when `RUST_LOG` is not set.
///
/// Only this workspace's crates are raised; dependencies stay quiet.
fn default_directive(verbose: u8) -> String {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("srcfmt={level},srcfmt_cli={level}")
}

/// Install the global subscriber, writing to stderr so stdout carries only the report.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_levels() {
        assert_eq!(default_directive(0), "srcfmt=warn,srcfmt_cli=warn");
        assert_eq!(default_directive(1), "srcfmt=info,srcfmt_cli=info");
        assert_eq!(default_directive(2), "srcfmt=debug,srcfmt_cli=debug");
        assert_eq!(default_directive(9), "srcfmt=trace,srcfmt_cli=trace");
    }
}
