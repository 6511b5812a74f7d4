use crate::*;

use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

use scrollwindow::{HeightSpec, ResolveMode, ScrollMetrics, ScrollSnapshot, WindowError};

fn rows(n: u32) -> Vec<u32> {
    (0..n).collect()
}

fn counter() -> (Arc<AtomicUsize>, impl Fn() + Send + Sync + 'static) {
    let count = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&count);
    (count, move || {
        c.fetch_add(1, Ordering::SeqCst);
    })
}

#[test]
fn scrolling_moves_the_window() {
    let mut c = ListController::new(
        ListOptions::new(20.0).with_viewport_extent(Some(200.0)),
        rows(100),
    )
    .unwrap();

    let w = c.window().unwrap();
    assert_eq!((w.start_index, w.end_index), (0, 10));

    let out = c.on_scroll(205.0).unwrap();
    assert_eq!(out.window.start_index, 10);
    assert_eq!(out.window.offset_pixels, 200.0);
    assert!(!out.reached_end);
    assert!(out.fetch.is_none());
    assert_eq!(c.scroll_offset(), 205.0);

    let extents = c.extents().unwrap();
    assert_eq!(extents.total_extent, 2000.0);
    assert_eq!(extents.viewport_extent, 200.0);
}

#[test]
fn default_viewport_follows_first_row_height() {
    let c = ListController::new(
        ListOptions::new(HeightSpec::variable(|i| if i == 0 { 10.0 } else { 30.0 })),
        rows(5),
    )
    .unwrap();
    let extents = c.extents().unwrap();
    assert_eq!(extents.total_extent, 130.0);
    assert_eq!(extents.viewport_extent, 50.0);
}

#[test]
fn visible_items_carry_keys() {
    let mut c = ListController::new(
        ListOptions::new(20.0)
            .with_viewport_extent(Some(40.0))
            .with_get_key(|i| if i == 11 { String::new() } else { format!("row-{i}") }),
        rows(100),
    )
    .unwrap();
    let _ = c.on_scroll(200.0).unwrap();

    let mut seen = Vec::new();
    let window = c
        .for_each_visible(|v| seen.push((v.index, v.key, *v.item)))
        .unwrap();
    assert_eq!(window.indices(), 10..13);
    let expected: Vec<(usize, String, u32)> = alloc::vec![
        (10, "row-10".into(), 10),
        (11, "11".into(), 11),
        (12, "row-12".into(), 12),
    ];
    assert_eq!(seen, expected);

    let mut out = Vec::new();
    c.collect_visible(&mut out).unwrap();
    assert_eq!(out.len(), 3);
    assert_eq!(c.visible_keys().unwrap(), ["row-10", "11", "row-12"]);
}

#[test]
fn keys_default_to_index() {
    let c = ListController::new(ListOptions::new(20.0), rows(3)).unwrap();
    assert_eq!(c.key_for(2), "2");
    assert_eq!(c.key_for(2), c.key_for(2));
}

#[test]
fn initial_offset_is_applied() {
    let c = ListController::new(
        ListOptions::new(20.0)
            .with_viewport_extent(Some(200.0))
            .with_initial_offset_provider(|| 400.0),
        rows(100),
    )
    .unwrap();
    assert_eq!(c.window().unwrap().start_index, 20);

    let err = ListController::new(
        ListOptions::<u32>::new(20.0).with_initial_offset_value(-1.0),
        rows(10),
    )
    .unwrap_err();
    assert_eq!(err, WindowError::InvalidScrollPosition { offset: -1.0 });
}

#[test]
fn rejected_scroll_keeps_previous_offset() {
    let mut c = ListController::new(ListOptions::new(20.0), rows(10)).unwrap();
    let _ = c.on_scroll(40.0).unwrap();
    assert!(c.on_scroll(-5.0).is_err());
    assert_eq!(c.scroll_offset(), 40.0);
}

#[test]
fn empty_list_never_triggers_a_fetch() {
    let (reached, on_reach_end) = counter();
    let (fetched, on_fetch) = counter();
    let mut c = ListController::new(
        ListOptions::<u32>::new(20.0)
            .with_viewport_extent(Some(200.0))
            .with_on_reach_end(on_reach_end)
            .with_fetch_items(move || {
                on_fetch();
                async { None }
            }),
        Vec::new(),
    )
    .unwrap();

    for offset in [0.0, 10.0, 1e9] {
        let out = c.on_scroll(offset).unwrap();
        assert!(out.window.is_empty());
        assert!(!out.reached_end);
        assert!(out.fetch.is_none());
    }
    assert_eq!(reached.load(Ordering::SeqCst), 0);
    assert_eq!(fetched.load(Ordering::SeqCst), 0);
    assert!(!c.is_fetching());
}

#[test]
fn end_fires_once_per_crossing() {
    let (reached, on_reach_end) = counter();
    let mut c = ListController::new(
        ListOptions::new(20.0)
            .with_viewport_extent(Some(200.0))
            .with_on_reach_end(on_reach_end),
        rows(100),
    )
    .unwrap();

    // total(2000) - offset(1800) == viewport(200)
    let out = c.on_scroll(1800.0).unwrap();
    assert!(out.reached_end);
    assert!(out.fetch.is_none());
    assert_eq!(reached.load(Ordering::SeqCst), 1);

    let out = c.on_scroll(1800.0).unwrap();
    assert!(!out.reached_end);
    let out = c.on_scroll(1799.5).unwrap();
    assert!(!out.reached_end);
    assert_eq!(reached.load(Ordering::SeqCst), 1);

    let _ = c.on_scroll(1000.0).unwrap();
    let out = c.on_scroll(1800.0).unwrap();
    assert!(out.reached_end);
    assert_eq!(reached.load(Ordering::SeqCst), 2);
}

#[test]
fn container_metrics_drive_end_detection() {
    let (reached, on_reach_end) = counter();
    let mut c = ListController::new(
        ListOptions::new(20.0)
            .with_viewport_extent(Some(200.0))
            .with_end_epsilon(0.0)
            .with_on_reach_end(on_reach_end),
        rows(100),
    )
    .unwrap();

    let out = c
        .on_scroll_metrics(ScrollMetrics {
            scroll_offset: 1500.0,
            viewport_extent: 500.0,
            content_extent: 2000.0,
        })
        .unwrap();
    assert!(out.reached_end);
    assert_eq!(out.window.start_index, 75);
    assert_eq!(reached.load(Ordering::SeqCst), 1);
}

#[test]
fn in_flight_fetch_suppresses_duplicates() {
    let (reached, on_reach_end) = counter();
    let mut c = ListController::new(
        ListOptions::new(20.0)
            .with_viewport_extent(Some(200.0))
            .with_on_reach_end(on_reach_end)
            .with_fetch_items(|| async { Some(Vec::<u32>::new()) }),
        rows(100),
    )
    .unwrap();

    let first = c.on_scroll(1800.0).unwrap();
    let ticket = first.fetch.expect("fetch started").ticket();
    assert!(c.is_fetching());

    let _ = c.on_scroll(0.0).unwrap();
    let second = c.on_scroll(1800.0).unwrap();
    assert!(second.reached_end);
    assert!(second.fetch.is_none());
    assert_eq!(reached.load(Ordering::SeqCst), 2);
    assert_eq!(c.fetches_in_flight(), 1);

    c.cancel_fetch(ticket);
    assert!(!c.is_fetching());
    // Releasing twice does not underflow.
    c.cancel_fetch(ticket);
    assert_eq!(c.fetches_in_flight(), 0);
}

#[test]
fn concurrent_fetches_can_be_allowed() {
    let mut c = ListController::new(
        ListOptions::new(20.0)
            .with_viewport_extent(Some(200.0))
            .with_allow_concurrent_fetches(true)
            .with_fetch_items(|| async { None }),
        rows(100),
    )
    .unwrap();

    let a = c.on_scroll(1800.0).unwrap();
    let _ = c.on_scroll(0.0).unwrap();
    let b = c.on_scroll(1800.0).unwrap();
    assert!(a.fetch.is_some());
    assert!(b.fetch.is_some());
    assert_eq!(c.fetches_in_flight(), 2);
}

#[tokio::test]
async fn completed_fetch_appends_items_and_rearms() {
    let mut c = ListController::new(
        ListOptions::new(20.0)
            .with_viewport_extent(Some(200.0))
            .with_fetch_items(|| async { Some((100..110).collect()) }),
        rows(100),
    )
    .unwrap();

    let out = c.on_scroll(1800.0).unwrap();
    let fetched = out.fetch.expect("fetch started").await;
    assert_eq!(c.complete_fetch(fetched).unwrap(), 10);
    assert!(!c.is_fetching());
    assert_eq!(c.len(), 110);
    assert_eq!(c.state().number_of_items(), 110);
    assert_eq!(c.items()[109], 109);
    assert_eq!(c.extents().unwrap().total_extent, 2200.0);

    // Still at 1800, but the content grew: no longer the end.
    let out = c.on_scroll(1800.0).unwrap();
    assert!(!out.reached_end);
    assert_eq!(out.window.end_index, 100);

    let out = c.on_scroll(2000.0).unwrap();
    assert!(out.reached_end);
    let fetched = out.fetch.expect("fetch started").await;
    c.complete_fetch(fetched).unwrap();
    assert_eq!(c.len(), 120);
}

#[tokio::test]
async fn fetch_with_nothing_to_add_leaves_items_alone() {
    let mut c = ListController::new(
        ListOptions::new(20.0)
            .with_viewport_extent(Some(200.0))
            .with_fetch_items(|| async { None }),
        rows(100),
    )
    .unwrap();

    let out = c.on_scroll(1800.0).unwrap();
    let fetched = out.fetch.expect("fetch started").await;
    assert_eq!(c.complete_fetch(fetched).unwrap(), 0);
    assert_eq!(c.len(), 100);
    assert!(!c.is_fetching());
}

#[tokio::test]
async fn replacing_items_drops_fetches_for_the_old_items() {
    let mut c = ListController::new(
        ListOptions::new(20.0)
            .with_viewport_extent(Some(200.0))
            .with_fetch_items(|| async { Some(alloc::vec![999u32; 5]) }),
        rows(20),
    )
    .unwrap();

    let out = c.on_scroll(200.0).unwrap();
    let stale = out.fetch.expect("fetch started");
    assert!(c.is_fetching());

    c.replace_items(alloc::vec![7, 7, 7]).unwrap();
    assert!(!c.is_fetching());

    let fetched = stale.await;
    assert_eq!(c.complete_fetch(fetched).unwrap(), 0);
    assert_eq!(c.items(), &[7, 7, 7]);
    assert_eq!(c.fetches_in_flight(), 0);

    // A fetch started for the new items still lands.
    let out = c.on_scroll(0.0).unwrap();
    let fresh = out.fetch.expect("fetch started");
    let fetched = fresh.await;
    assert_eq!(c.complete_fetch(fetched).unwrap(), 5);
    assert_eq!(c.items(), &[7, 7, 7, 999, 999, 999, 999, 999]);
}

#[test]
fn cancelling_a_superseded_fetch_keeps_the_new_guard() {
    let mut c = ListController::new(
        ListOptions::new(20.0)
            .with_viewport_extent(Some(200.0))
            .with_fetch_items(|| async { None }),
        rows(20),
    )
    .unwrap();

    let old = c.on_scroll(200.0).unwrap().fetch.expect("fetch started");
    c.replace_items(rows(3)).unwrap();
    let new = c.on_scroll(0.0).unwrap().fetch.expect("fetch started");
    assert_ne!(old.ticket(), new.ticket());

    c.cancel_fetch(old.ticket());
    assert!(c.is_fetching());
    c.cancel_fetch(new.ticket());
    assert!(!c.is_fetching());
}

#[test]
fn measure_is_ignored_in_uniform_mode() {
    let mut c = ListController::new(
        ListOptions::new(20.0).with_viewport_extent(Some(200.0)),
        rows(10),
    )
    .unwrap();
    assert!(!c.measure(0, 50.0).unwrap());
    assert_eq!(c.extents().unwrap().total_extent, 200.0);
    assert_eq!(c.window().unwrap().offset_pixels, 0.0);
}

#[test]
fn measured_mode_tracks_real_heights() {
    let mut c = ListController::new(
        ListOptions::new(HeightSpec::variable(|i| if i % 2 == 0 { 10.0 } else { 30.0 }))
            .with_mode(ResolveMode::Measured)
            .with_viewport_extent(Some(40.0)),
        rows(10),
    )
    .unwrap();
    assert_eq!(c.extents().unwrap().total_extent, 200.0);

    // Row starts: 0, 10, 40, 50, 80, ...
    let out = c.on_scroll(45.0).unwrap();
    assert_eq!(out.window.start_index, 2);
    assert_eq!(out.window.end_index, 4);
    assert_eq!(out.window.offset_pixels, 40.0);

    assert!(c.measure(0, 20.0).unwrap());
    assert!(!c.measure(99, 20.0).unwrap());
    assert_eq!(c.extents().unwrap().total_extent, 210.0);
    let w = c.window().unwrap();
    assert_eq!(w.start_index, 1);
    assert_eq!(w.offset_pixels, 20.0);

    assert_eq!(c.append_items([10, 11]).unwrap(), 2);
    assert_eq!(c.extents().unwrap().total_extent, 250.0);
}

#[test]
fn measured_append_rejects_invalid_heights() {
    let mut c = ListController::new(
        ListOptions::new(HeightSpec::variable(|i| if i < 3 { 10.0 } else { 0.0 }))
            .with_mode(ResolveMode::Measured),
        rows(3),
    )
    .unwrap();
    assert!(c.append_items([3, 4]).is_err());
    assert_eq!(c.len(), 3);
    assert_eq!(c.extents().unwrap().total_extent, 30.0);
}

#[test]
fn replace_items_resets_end_state() {
    let (reached, on_reach_end) = counter();
    let mut c = ListController::new(
        ListOptions::new(20.0)
            .with_viewport_extent(Some(200.0))
            .with_on_reach_end(on_reach_end),
        rows(20),
    )
    .unwrap();
    assert!(c.on_scroll(200.0).unwrap().reached_end);

    c.replace_items(rows(20)).unwrap();
    assert!(c.on_scroll(200.0).unwrap().reached_end);
    assert_eq!(reached.load(Ordering::SeqCst), 2);
}

#[test]
fn snapshot_restores_scroll_position() {
    let mut c = ListController::new(ListOptions::new(20.0), rows(100)).unwrap();
    let _ = c.on_scroll(640.0).unwrap();
    let snap = c.snapshot();
    assert_eq!(
        snap,
        ScrollSnapshot {
            scroll_offset: 640.0,
            number_of_items: 100,
        }
    );

    let mut other = ListController::new(ListOptions::new(20.0), rows(100)).unwrap();
    other.restore(snap).unwrap();
    assert_eq!(other.window().unwrap().start_index, 32);
}

#[test]
fn end_trigger_is_edge_triggered() {
    let bottom = ScrollMetrics {
        scroll_offset: 80.0,
        viewport_extent: 20.0,
        content_extent: 100.0,
    };
    let top = ScrollMetrics {
        scroll_offset: 0.0,
        ..bottom
    };

    let mut t = EndTrigger::new();
    assert!(!t.observe(top, 0.0));
    assert!(t.observe(bottom, 0.0));
    assert!(t.is_at_end());
    assert!(!t.observe(bottom, 0.0));
    t.reset();
    assert!(t.observe(bottom, 0.0));
    assert!(!t.observe(top, 0.0));
    assert!(!t.is_at_end());
}
