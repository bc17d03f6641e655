mod common;
use common::date;
use rflightwatch::core::gate::has_future_dates;

#[test]
fn past_dates_only_closes_the_gate() {
    let tracked = ["01-09-2024 · 06:00", "30-09-2024 · 23:59"];
    assert!(!has_future_dates(&tracked, date(2024, 10, 1)));
}

#[test]
fn today_counts_as_future() {
    let tracked = ["01-10-2024 · 00:01"];
    assert!(has_future_dates(&tracked, date(2024, 10, 1)));
}

#[test]
fn one_future_date_is_enough() {
    let tracked = ["01-09-2024 · 06:00", "12-10-2024 · 06:00"];
    assert!(has_future_dates(&tracked, date(2024, 10, 1)));
}

#[test]
fn malformed_labels_are_skipped() {
    let tracked = ["2024/10/12 · 06:00", "garbage", "12-10-2024 · 06:00"];
    assert!(has_future_dates(&tracked, date(2024, 10, 1)));

    let only_bad = ["2024/10/12 · 06:00", ""];
    assert!(!has_future_dates(&only_bad, date(2024, 10, 1)));
}

#[test]
fn empty_tracked_set_closes_the_gate() {
    let tracked: [&str; 0] = [];
    assert!(!has_future_dates(&tracked, date(2024, 10, 1)));
}
