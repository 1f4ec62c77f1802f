use crate::models::config::Config;
use std::collections::HashSet;
use tally_algorithm::frequency::FrequencyList;
use tally_tokenizer::tokenize;
use tracing::info;

/// Count every word of `titles` that is long enough and not excluded.
///
/// Excluded words match regardless of case, tokens are lowercase.
pub fn count_titles<I, T>(titles: I, config: &Config) -> FrequencyList
where
    I: IntoIterator<Item = T>,
    T: ToString,
{
    let exclude: HashSet<String> = config
        .exclude
        .iter()
        .map(|word| word.to_lowercase())
        .collect();
    let mut list = FrequencyList::new();
    let mut total = 0usize;

    for title in titles {
        for word in tokenize(title, config.min_length) {
            if !exclude.contains(&word) {
                list.observe(&word);
                total += 1;
            }
        }
    }

    info!("Counted {} words, {} distinct.", total, list.len());

    list
}
