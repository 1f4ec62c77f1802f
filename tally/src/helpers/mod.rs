/// Load `config.yaml`.
pub mod config;
/// Feed tokenized titles into a frequency list.
pub mod counter;
/// Read answers from standard input.
pub mod input;
/// Set up the tracing subscriber.
pub mod logging;
/// Extract data from input files.
pub mod reader;
