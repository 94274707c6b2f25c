use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Output goes to stderr so the stdio MCP
/// transport keeps stdout to itself. `RUST_LOG` overrides `default_filter`.
pub fn init(default_filter: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
}
