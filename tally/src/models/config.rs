use serde::Deserialize;
use tally_tokenizer::DEFAULT_MIN_LENGTH;

/// The data in the configuration file for setting up Tally.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// 0-based CSV column holding the title.
    pub column: usize,
    /// Records whose first field starts with this are skipped.
    pub comment_prefix: String,
    /// Words shorter than this are not counted.
    pub min_length: usize,
    /// Words never counted.
    pub exclude: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            column: 4,
            comment_prefix: "#".to_string(),
            min_length: DEFAULT_MIN_LENGTH,
            exclude: Vec::new(),
        }
    }
}
