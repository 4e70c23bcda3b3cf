mod helpers;

use chronicle::event::scoring::recompute;
use chronicle::event::store::{fetch_all, rescore_all, set_favorite, set_user_weight};
use chronicle::event::types::EventType;
use helpers::{day, insert_event, test_db};

#[test]
fn rescore_twice_is_deterministic() {
    let mut conn = test_db();
    insert_event(&mut conn, EventType::Job, "Started at Acme", day(0));
    insert_event(&mut conn, EventType::Vacation, "Lisbon", day(45));
    insert_event(&mut conn, EventType::Photo, "Rooftop sunset", day(45));

    rescore_all(&mut conn).unwrap();
    let first: Vec<(String, f64)> = fetch_all(&conn)
        .unwrap()
        .into_iter()
        .map(|e| (e.id, e.significance))
        .collect();

    rescore_all(&mut conn).unwrap();
    let second: Vec<(String, f64)> = fetch_all(&conn)
        .unwrap()
        .into_iter()
        .map(|e| (e.id, e.significance))
        .collect();

    assert_eq!(first, second);
}

#[test]
fn all_persisted_scores_are_bounded() {
    let mut conn = test_db();
    for (i, t) in chronicle::event::types::ALL_EVENT_TYPES.iter().enumerate() {
        insert_event(&mut conn, *t, &format!("event {i}"), day(i as i64 * 90));
    }
    rescore_all(&mut conn).unwrap();

    for e in fetch_all(&conn).unwrap() {
        assert!((0.0..=1.0).contains(&e.significance), "{}", e.significance);
    }
}

#[test]
fn worked_example_relationship_vs_micro() {
    // raw = 4.2 * 0.95 + 1.3 = 5.29 → σ ≈ 0.9950
    // raw = 4.2 * 0.50 + 1.3 = 3.40 → σ ≈ 0.9677
    let mut conn = test_db();
    let a = insert_event(&mut conn, EventType::Relationship, "Met R.", day(0));
    let b = insert_event(&mut conn, EventType::Micro, "Morning walk", day(0));
    rescore_all(&mut conn).unwrap();

    let events = fetch_all(&conn).unwrap();
    let sig_a = events.iter().find(|e| e.id == a.id).unwrap().significance;
    let sig_b = events.iter().find(|e| e.id == b.id).unwrap().significance;

    assert!((sig_a - 0.9950).abs() < 1e-3, "{sig_a}");
    assert!((sig_b - 0.9677).abs() < 1e-3, "{sig_b}");
    assert!(sig_a > sig_b);
}

#[test]
fn favoriting_raises_the_persisted_score() {
    let mut conn = test_db();
    let a = insert_event(&mut conn, EventType::Photo, "Plain", day(0));
    let b = insert_event(&mut conn, EventType::Photo, "Pinned", day(0));
    set_favorite(&conn, &b.id, true).unwrap();
    rescore_all(&mut conn).unwrap();

    let events = fetch_all(&conn).unwrap();
    let sig_a = events.iter().find(|e| e.id == a.id).unwrap().significance;
    let sig_b = events.iter().find(|e| e.id == b.id).unwrap().significance;
    assert!(sig_b > sig_a);
}

#[test]
fn user_weight_raises_the_persisted_score() {
    let mut conn = test_db();
    let a = insert_event(&mut conn, EventType::Photo, "Plain", day(0));
    let b = insert_event(&mut conn, EventType::Photo, "Weighted", day(0));
    set_user_weight(&conn, &b.id, 0.5).unwrap();
    rescore_all(&mut conn).unwrap();

    let events = fetch_all(&conn).unwrap();
    let sig_a = events.iter().find(|e| e.id == a.id).unwrap().significance;
    let sig_b = events.iter().find(|e| e.id == b.id).unwrap().significance;
    assert!(sig_b > sig_a);
}

#[test]
fn earliest_event_scores_at_least_the_latest_twin() {
    let mut conn = test_db();
    let early = insert_event(&mut conn, EventType::Fitness, "First run", day(0));
    let late = insert_event(&mut conn, EventType::Fitness, "Another run", day(100));
    rescore_all(&mut conn).unwrap();

    let events = fetch_all(&conn).unwrap();
    let sig_early = events.iter().find(|e| e.id == early.id).unwrap().significance;
    let sig_late = events.iter().find(|e| e.id == late.id).unwrap().significance;
    assert!(sig_early >= sig_late);
}

#[test]
fn insertion_order_does_not_change_scores() {
    // Two stores fed the same events in different order end up identical.
    let mut conn_a = test_db();
    insert_event(&mut conn_a, EventType::Job, "Job", day(0));
    insert_event(&mut conn_a, EventType::Micro, "Note", day(250));
    insert_event(&mut conn_a, EventType::Vacation, "Trip", day(30));
    rescore_all(&mut conn_a).unwrap();

    let mut conn_b = test_db();
    insert_event(&mut conn_b, EventType::Vacation, "Trip", day(30));
    insert_event(&mut conn_b, EventType::Job, "Job", day(0));
    insert_event(&mut conn_b, EventType::Micro, "Note", day(250));
    rescore_all(&mut conn_b).unwrap();

    let mut scores_a: Vec<(String, f64)> = fetch_all(&conn_a)
        .unwrap()
        .into_iter()
        .map(|e| (e.title, e.significance))
        .collect();
    let mut scores_b: Vec<(String, f64)> = fetch_all(&conn_b)
        .unwrap()
        .into_iter()
        .map(|e| (e.title, e.significance))
        .collect();
    scores_a.sort_by(|x, y| x.0.cmp(&y.0));
    scores_b.sort_by(|x, y| x.0.cmp(&y.0));
    assert_eq!(scores_a, scores_b);
}

#[test]
fn in_memory_recompute_matches_persisted_scores() {
    let mut conn = test_db();
    insert_event(&mut conn, EventType::Education, "Graduated", day(0));
    insert_event(&mut conn, EventType::Finance, "Bought a flat", day(700));
    rescore_all(&mut conn).unwrap();

    let persisted = fetch_all(&conn).unwrap();
    let mut replay = persisted.clone();
    recompute(&mut replay);

    for (p, r) in persisted.iter().zip(&replay) {
        assert_eq!(p.significance, r.significance);
    }
}
