//! Logging setup
//!
//! Installs a global `tracing` subscriber. The filter comes from `RUST_LOG`
//! when set, otherwise from the given default directive.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

pub const DEFAULT_FILTER: &str = "negotiation_agency=info";

fn filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Initialize the global subscriber. Fails if one is already installed.
pub fn init_logging(default_directive: &str) -> anyhow::Result<()> {
    Registry::default()
        .with(filter(default_directive))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        let _ = init_logging(DEFAULT_FILTER);
        assert!(init_logging(DEFAULT_FILTER).is_err());
    }
}
