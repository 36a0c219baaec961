//! stderr logging. `BREW_LOG` takes an `EnvFilter` directive; default is `warn`.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

pub fn init(json: bool) -> Result<()> {
    let filter = EnvFilter::try_from_env("BREW_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
