mod common;
use common::{TRACKED, TRACKED_2, UNTRACKED, check_time, flight};
use rflightwatch::core::AlertPolicy;
use rflightwatch::errors::AppError;
use rflightwatch::models::{AlertEvent, StateMap, TrackedState};

fn policy() -> AlertPolicy {
    AlertPolicy::new([TRACKED, TRACKED_2], 100)
}

fn state(price: Option<i64>, hurry_alert_sent: bool) -> TrackedState {
    TrackedState {
        price,
        hurry_alert_sent,
    }
}

fn prior(entries: &[(&str, TrackedState)]) -> StateMap {
    entries
        .iter()
        .map(|(k, s)| (k.to_string(), s.clone()))
        .collect()
}

#[test]
fn first_sighting_under_threshold_alerts_price_drop() {
    let flights = vec![flight(TRACKED, 80, None)];
    let out = policy().diff(&StateMap::new(), &flights, check_time()).unwrap();

    assert_eq!(out.alerts, vec![AlertEvent::PriceDrop(flights[0].clone())]);
    assert_eq!(out.state[TRACKED], state(Some(80), false));
}

#[test]
fn same_price_again_does_not_alert() {
    let previous = prior(&[(TRACKED, state(Some(80), false))]);
    let out = policy()
        .diff(&previous, &[flight(TRACKED, 80, None)], check_time())
        .unwrap();

    assert!(out.alerts.is_empty());
    assert_eq!(out.state[TRACKED], state(Some(80), false));
}

#[test]
fn hurry_text_on_new_flight_alerts_once() {
    let flights = vec![flight(UNTRACKED, 300, Some("2 seats left"))];
    let out = policy().diff(&StateMap::new(), &flights, check_time()).unwrap();

    assert_eq!(out.alerts, vec![AlertEvent::Hurry(flights[0].clone())]);
    assert!(out.state[UNTRACKED].hurry_alert_sent);

    // second run with the persisted state: no repeat
    let again = policy().diff(&out.state, &flights, check_time()).unwrap();
    assert!(again.alerts.is_empty());
    assert!(again.state[UNTRACKED].hurry_alert_sent);
}

#[test]
fn hurry_flag_stays_set_when_hurry_text_disappears() {
    let previous = prior(&[(UNTRACKED, state(Some(300), true))]);
    let out = policy()
        .diff(&previous, &[flight(UNTRACKED, 300, None)], check_time())
        .unwrap();

    assert!(out.alerts.is_empty());
    assert!(out.state[UNTRACKED].hurry_alert_sent);
}

#[test]
fn hurry_alert_ignores_tracked_set_and_price() {
    let out = policy()
        .diff(
            &StateMap::new(),
            &[flight(UNTRACKED, 9_999, Some("Last seat!"))],
            check_time(),
        )
        .unwrap();
    assert_eq!(out.alerts.len(), 1);
    assert_eq!(out.alerts[0].kind(), "hurry");
}

#[test]
fn price_drop_fires_only_on_strict_improvement_under_threshold() {
    let cases = [
        // (prior, current, expected alert)
        (None, 100, true),
        (None, 101, false),
        (Some(90), 85, true),
        (Some(85), 85, false),
        (Some(85), 90, false),
        (Some(150), 120, false),
        (Some(150), 100, true),
    ];

    for (prior_price, current, expected) in cases {
        let previous = match prior_price {
            Some(p) => prior(&[(TRACKED, state(Some(p), false))]),
            None => StateMap::new(),
        };
        let out = policy()
            .diff(&previous, &[flight(TRACKED, current, None)], check_time())
            .unwrap();
        assert_eq!(
            !out.alerts.is_empty(),
            expected,
            "prior {prior_price:?}, current {current}"
        );
    }
}

#[test]
fn untracked_flight_never_alerts_on_price_or_logs() {
    let previous = prior(&[(UNTRACKED, state(Some(500), false))]);
    let out = policy()
        .diff(&previous, &[flight(UNTRACKED, 10, None)], check_time())
        .unwrap();

    assert!(out.alerts.is_empty());
    assert!(out.log_entries.is_empty());
    // current price is still written
    assert_eq!(out.state[UNTRACKED].price, Some(10));
}

#[test]
fn tracked_flight_is_logged_regardless_of_threshold() {
    let flights = vec![flight(TRACKED, 250, None), flight(UNTRACKED, 50, None)];
    let out = policy().diff(&StateMap::new(), &flights, check_time()).unwrap();

    assert!(out.alerts.is_empty());
    assert_eq!(out.log_entries.len(), 1);
    let row = &out.log_entries[0];
    assert_eq!(row.log_date, "2024-10-01");
    assert_eq!(row.log_time, "10:00:00");
    assert_eq!(row.flight_date, "12-10-2024");
    assert_eq!(row.flight_time, "06:00");
    assert_eq!(row.departure, "Roma Fiumicino");
    assert_eq!(row.destination, "Malta");
    assert_eq!(row.price, 250);
    assert_eq!(out.state[TRACKED].price, Some(250));
}

#[test]
fn alerts_follow_snapshot_order_with_hurry_first() {
    let flights = vec![
        flight(TRACKED_2, 70, None),
        flight(TRACKED, 60, Some("1 seat left")),
    ];
    let out = policy().diff(&StateMap::new(), &flights, check_time()).unwrap();

    let kinds: Vec<(&str, &str)> = out
        .alerts
        .iter()
        .map(|a| (a.kind(), a.flight().date_label.as_str()))
        .collect();
    assert_eq!(
        kinds,
        vec![
            ("price_drop", TRACKED_2),
            ("hurry", TRACKED),
            ("price_drop", TRACKED),
        ]
    );
}

#[test]
fn keys_missing_from_snapshot_are_dropped() {
    let previous = prior(&[
        (TRACKED, state(Some(80), true)),
        (UNTRACKED, state(Some(300), true)),
    ]);
    let out = policy()
        .diff(&previous, &[flight(TRACKED, 80, None)], check_time())
        .unwrap();

    assert_eq!(out.state.len(), 1);
    assert!(!out.state.contains_key(UNTRACKED));

    // the dropped key alerts again once it comes back with hurry text
    let back = policy()
        .diff(
            &out.state,
            &[flight(UNTRACKED, 300, Some("3 seats left"))],
            check_time(),
        )
        .unwrap();
    assert_eq!(back.alerts.len(), 1);
}

#[test]
fn tracked_label_without_separator_is_an_error() {
    let policy = AlertPolicy::new(["12-10-2024 06:00"], 100);
    let err = policy
        .diff(
            &StateMap::new(),
            &[flight("12-10-2024 06:00", 80, None)],
            check_time(),
        )
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidLabel(_)));
}

#[test]
fn alert_bodies_render_flight_details() {
    let f = flight(TRACKED, 80, Some("2 seats left"));
    let hurry = AlertEvent::Hurry(f.clone()).render("euros");
    assert!(hurry.starts_with("Hurry Alert:"));
    assert!(hurry.contains("Limited Seats for Flight on 12-10-2024 · 06:00"));
    assert!(hurry.contains("Seats Left: 2 seats left"));
    assert!(hurry.contains("Price: 80 euros"));

    let drop = AlertEvent::PriceDrop(f).render("euros");
    assert!(drop.starts_with("Price Drop Alert:"));
    assert!(drop.contains("New Price: 80 euros"));
    assert!(drop.contains("Destination: Malta"));
    assert!(drop.contains("Booking Link: https://example.com/book/80"));
}
