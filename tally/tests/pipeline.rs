use std::fs;
use tally::{
    helpers::{counter, reader},
    models::config::Config,
};
use tempfile::TempDir;

const NEWS: &str = "#,source,author,url,title
1,cnn,A,http://a,\"Senate passes budget, again\"
2,fox,B,http://b,Budget fight in the Senate
3,abc,C,http://c,\"Senate recess: what's next?\"
4,short
";

fn write_news(temp_dir: &TempDir) -> std::path::PathBuf {
    let path = temp_dir.path().join("news.csv");
    fs::write(&path, NEWS).unwrap();
    path
}

#[test]
fn test_reads_titles_and_skips_header() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_news(&temp_dir);

    let titles = reader::titles(&path, &Config::default()).unwrap();

    assert_eq!(
        titles,
        vec![
            "Senate passes budget, again",
            "Budget fight in the Senate",
            "Senate recess: what's next?",
        ]
    );
}

#[test]
fn test_rank_query_over_titles() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_news(&temp_dir);
    let config = Config::default();

    let titles = reader::titles(&path, &config).unwrap();
    let mut list = counter::count_titles(&titles, &config);

    assert_eq!(list.len(), 9);

    let top: Vec<String> = list
        .rank_query(1)
        .unwrap()
        .iter()
        .map(|entry| entry.to_string())
        .collect();
    assert_eq!(top, vec!["senate:3", "budget:2"]);

    // Every word seen once ties at rank 2.
    assert_eq!(list.rank_query(2).unwrap().len(), 9);
    assert!(list.rank_query(8).is_ok());
    assert!(list.rank_query(9).unwrap_err().is_out_of_range());
    assert!(list.rank_query(-1).unwrap_err().is_out_of_range());
}

#[test]
fn test_excluded_words_and_other_column() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_news(&temp_dir);
    let config = Config {
        column: 1,
        exclude: vec!["fox".to_string()],
        ..Config::default()
    };

    let titles = reader::titles(&path, &config).unwrap();
    let list = counter::count_titles(&titles, &config);

    assert_eq!(titles, vec!["cnn", "fox", "abc", "short"]);
    assert!(!list.contains("fox"));
    assert_eq!(list.count("short"), Some(1));
}
