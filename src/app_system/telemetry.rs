use super::AppConfig;

/// Configure tracing once at application startup.
///
/// `RUST_LOG` wins when set; otherwise the configured level applies to the whole process.
///
/// ```bash
/// RUST_LOG=debug cargo run                        # cart and like changes, every intent
/// RUST_LOG=shop_binding::shop_actor=debug cargo run
/// SHOP_LOG_LEVEL=warn cargo run
/// ```
pub fn setup_tracing(config: &AppConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}
