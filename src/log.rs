use tracing_subscriber::{EnvFilter, layer::SubscriberExt};

/// Install a global `tracing` subscriber.
///
/// Debug builds log at `DEBUG` by default, directives from `RUST_LOG` are added on top. Does
/// nothing if a subscriber is already installed.
pub fn init_log() {
    let mut filter = EnvFilter::default();

    if cfg!(debug_assertions) {
        filter = filter.add_directive(tracing::Level::DEBUG.into());
    }

    if let Ok(env) = std::env::var("RUST_LOG")
        && let Ok(env) = env.parse()
    {
        filter = filter.add_directive(env);
    }

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer());

    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_log_twice() {
        super::init_log();
        super::init_log();

        tracing::debug!("logging initialised");
    }
}
