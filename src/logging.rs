use tracing_subscriber::EnvFilter;

/// Workspace crate targets that emit log output.
const CRATE_TARGETS: &[&str] = &["kairos", "kairos_datetime", "kairos_grid"];

/// Initialize tracing from the CLI verbosity count: 0 maps to warn,
/// 1 to info, 2 to debug, and anything higher to trace.
///
/// A set `RUST_LOG` env var wins over the flag.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directives = CRATE_TARGETS
            .iter()
            .map(|target| format!("{target}={level}"))
            .collect::<Vec<_>>()
            .join(",");
        EnvFilter::new(directives)
    });

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
