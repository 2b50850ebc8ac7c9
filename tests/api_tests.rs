use clumpy::api::clumpify;
use clumpy::error::ClumpyError;
use clumpy::optimizer::SearchOptions;
use std::time::Duration;

#[test]
fn clumpify_reorders_without_losing_lines() {
    let lines: Vec<String> = [
        "Song A Live",
        "Unrelated Track",
        "Song B Live",
        "Another Thing",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let opts = SearchOptions {
        seed: Some(99),
        ..SearchOptions::default()
    };
    let result = clumpify(&lines, opts, Duration::from_millis(100)).unwrap();

    let mut got = result.clone();
    got.sort_unstable();
    let mut expected = lines.clone();
    expected.sort_unstable();
    assert_eq!(got, expected);
}

#[test]
fn clumpify_drops_blank_lines() {
    let lines: Vec<String> = ["Song A", "", "Song B"].iter().map(|s| s.to_string()).collect();

    let result = clumpify(
        &lines,
        SearchOptions::default(),
        Duration::from_millis(10),
    )
    .unwrap();

    assert_eq!(result.len(), 2);
}

#[test]
fn clumpify_rejects_all_blank_input() {
    let lines = vec![String::new(), "   ".to_string()];

    let result = clumpify(&lines, SearchOptions::default(), Duration::from_millis(10));
    assert!(matches!(result, Err(ClumpyError::EmptyPlaylist)));
}
