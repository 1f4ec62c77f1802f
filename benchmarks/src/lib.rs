//! shared inputs for the Tally benchmarks.

/// Deterministic word stream with a skewed distribution.
pub fn words(len: usize) -> Vec<String> {
    (0..len)
        .map(|index| {
            format!("word{}", (index * index + 7 * index) % 500 / (1 + index % 7))
        })
        .collect()
}
