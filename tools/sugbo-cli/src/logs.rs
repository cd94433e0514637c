use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Log to stderr, WARN and up unless `RUST_LOG` says otherwise.
pub fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    Registry::default()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
