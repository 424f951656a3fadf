use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Maps a `-v` count onto a level, starting from `base`.
pub fn verbosity_level(base: LevelFilter, verbose: u8) -> LevelFilter {
    let levels = [
        LevelFilter::ERROR,
        LevelFilter::WARN,
        LevelFilter::INFO,
        LevelFilter::DEBUG,
        LevelFilter::TRACE,
    ];
    let start = levels.iter().position(|l| *l == base).unwrap_or(2);
    levels[(start + verbose as usize).min(levels.len() - 1)]
}

/// Log to stderr; stdout is reserved for results. RUST_LOG overrides `level`.
pub fn init_tracing(level: LevelFilter) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
