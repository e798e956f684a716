pub mod statusline;

use clap::Parser;

/// Colored status line for coding-assistant sessions
#[derive(Parser)]
#[command(name = "cc-statusline", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub statusline: statusline::Args,

    /// Logging verbosity for stderr: off, error, warn, info, debug, trace.
    #[arg(long, env = "CC_STATUSLINE_LOG", default_value = "warn")]
    pub log_level: String,
}

/// Initialize tracing to stderr. Stdout belongs to the status line.
pub fn init_tracing(log_level: &str) {
    let filter = match log_level {
        "off" | "error" | "warn" | "info" | "debug" | "trace" => log_level,
        other => {
            eprintln!(
                "warning: unknown log level '{}', defaulting to 'warn'",
                other
            );
            "warn"
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}
