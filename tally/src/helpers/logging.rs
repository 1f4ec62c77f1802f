use tracing::Level;
use tracing_subscriber::fmt;

/// Log to stderr, stdout only carries results.
pub fn init() {
    #[cfg(not(debug_assertions))]
    let level = Level::INFO;
    #[cfg(debug_assertions)]
    let level = Level::TRACE;

    fmt()
        .with_file(true)
        .with_line_number(true)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
