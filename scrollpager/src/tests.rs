use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

fn batch_of(n: usize) -> PageBatch<u32> {
    PageBatch::new((0..n as u32).collect())
}

fn near_end() -> ScrollMetrics {
    // content=1000, viewport=400, offset=420 -> distance 180, under the
    // default threshold of 200.
    ScrollMetrics::new(420, 400, 1000)
}

fn far_from_end() -> ScrollMetrics {
    ScrollMetrics::new(0, 400, 1000)
}

#[test]
fn defaults_match_documented_values() {
    let opts = PagerOptions::<u32>::new();
    assert!(opts.enabled);
    assert_eq!(opts.per_page, DEFAULT_PER_PAGE);
    assert_eq!(opts.threshold, DEFAULT_THRESHOLD);
    assert_eq!(opts.loading_text, "Loading more records...");
    assert_eq!(opts.end_text, "All records loaded");
}

#[test]
fn per_page_is_clamped_to_one() {
    let opts = PagerOptions::<u32>::new().with_per_page(0);
    assert_eq!(opts.per_page, 1);

    let mut p = Pager::new(PagerOptions::<u32>::new());
    p.set_per_page(0);
    assert_eq!(p.per_page(), 1);
    p.update_options(|o| o.per_page = 0);
    assert_eq!(p.per_page(), 1);
}

#[test]
fn distance_to_end_saturates() {
    assert_eq!(ScrollMetrics::new(420, 400, 1000).distance_to_end(), 180);
    assert_eq!(ScrollMetrics::new(0, 400, 400).distance_to_end(), 0);
    // Overscroll (rubber-banding) must not underflow.
    assert_eq!(ScrollMetrics::new(900, 400, 1000).distance_to_end(), 0);
}

#[test]
fn new_pager_starts_at_page_one() {
    let p = Pager::<u32>::new(PagerOptions::new());
    assert_eq!(p.page(), 1);
    assert!(p.has_more());
    assert!(!p.loading());
    assert!(p.is_empty());
}

#[test]
fn scroll_inside_threshold_triggers_load() {
    let mut p = Pager::<u32>::new(PagerOptions::new());
    assert!(p.should_load(near_end()));
    let ticket = p.on_scroll(near_end()).unwrap();
    assert_eq!(ticket.page, 2);
    assert!(p.loading());
}

#[test]
fn scroll_outside_threshold_is_ignored() {
    let mut p = Pager::<u32>::new(PagerOptions::new());
    assert!(!p.should_load(far_from_end()));
    assert!(p.on_scroll(far_from_end()).is_none());
    assert!(!p.loading());
}

#[test]
fn at_most_one_load_in_flight() {
    let mut p = Pager::<u32>::new(PagerOptions::new());
    let ticket = p.begin_load().unwrap();

    // The listener fires many times per second; every trigger while loading
    // must be dropped, not queued.
    for _ in 0..100 {
        assert!(p.on_scroll(near_end()).is_none());
        assert!(p.begin_load().is_none());
    }

    p.complete_load(ticket, batch_of(25));
    assert!(!p.loading());
    assert!(p.begin_load().is_some());
}

#[test]
fn successful_full_page_loads_accumulate() {
    let mut p = Pager::<u32>::new(PagerOptions::new().with_per_page(25));

    for n in 1..=4u32 {
        let ticket = p.on_scroll(near_end()).unwrap();
        let out = p.complete_load(ticket, batch_of(25));
        assert_eq!(
            out,
            CompleteOutcome::Appended {
                appended: 25,
                has_more: true
            }
        );
        // N successful loads of full pages of size P: N*P records, page N+1.
        assert_eq!(p.len(), n as usize * 25);
        assert_eq!(p.page(), n + 1);
    }
}

#[test]
fn records_are_appended_in_received_order() {
    let mut p = Pager::<u32>::new(PagerOptions::new().with_per_page(3));
    let t = p.begin_load().unwrap();
    p.complete_load(t, PageBatch::new(Vec::from([7, 8, 9])));
    let t = p.begin_load().unwrap();
    p.complete_load(t, PageBatch::new(Vec::from([10, 11])));
    assert_eq!(p.records(), &[7, 8, 9, 10, 11]);
}

#[test]
fn short_batch_marks_exhaustion() {
    let mut p = Pager::<u32>::new(PagerOptions::new().with_per_page(25));
    let ticket = p.begin_load().unwrap();
    let out = p.complete_load(ticket, batch_of(10));
    assert_eq!(
        out,
        CompleteOutcome::Appended {
            appended: 10,
            has_more: false
        }
    );
    assert!(!p.has_more());
}

#[test]
fn full_batch_without_flag_keeps_has_more() {
    // Known limitation: when the total count is an exact multiple of the page
    // size, batch-size inference cannot tell "exactly exhausted" from "more to
    // come". The next trigger fetches one empty batch.
    let mut p = Pager::<u32>::new(PagerOptions::new().with_per_page(25));
    let ticket = p.begin_load().unwrap();
    p.complete_load(ticket, batch_of(25));
    assert!(p.has_more());

    let ticket = p.begin_load().unwrap();
    p.complete_load(ticket, batch_of(0));
    assert!(!p.has_more());
}

#[test]
fn explicit_next_page_flag_wins_over_inference() {
    let mut p = Pager::<u32>::new(PagerOptions::new().with_per_page(25));

    // Full batch, but the response says the collection is exhausted.
    let ticket = p.begin_load().unwrap();
    p.complete_load(ticket, batch_of(25).with_next_page(false));
    assert!(!p.has_more());

    p.reset();

    // Short batch, but the response says more pages exist.
    let ticket = p.begin_load().unwrap();
    p.complete_load(ticket, batch_of(3).with_next_page(true));
    assert!(p.has_more());
}

#[test]
fn exhausted_pager_never_issues_a_ticket() {
    let mut p = Pager::<u32>::new(PagerOptions::new().with_per_page(25));
    let ticket = p.begin_load().unwrap();
    p.complete_load(ticket, batch_of(10));
    assert!(!p.has_more());

    assert!(!p.should_load(near_end()));
    assert!(p.on_scroll(near_end()).is_none());
    assert!(p.begin_load().is_none());
}

#[test]
fn failed_load_reverts_page_and_keeps_records() {
    let mut p = Pager::<u32>::new(PagerOptions::new().with_per_page(25));
    let ticket = p.begin_load().unwrap();
    p.complete_load(ticket, batch_of(25));
    let before_page = p.page();
    let before_len = p.len();

    let ticket = p.begin_load().unwrap();
    assert_eq!(ticket.page, before_page + 1);
    assert!(p.fail_load(ticket));

    assert_eq!(p.page(), before_page);
    assert_eq!(p.len(), before_len);
    assert!(!p.loading());
    assert!(p.has_more());

    // The next trigger retries the same page.
    let retry = p.begin_load().unwrap();
    assert_eq!(retry.page, before_page + 1);
}

#[test]
fn reset_restores_initial_state() {
    let mut p = Pager::<u32>::new(PagerOptions::new().with_per_page(25));
    let ticket = p.begin_load().unwrap();
    p.complete_load(ticket, batch_of(10));
    assert!(!p.has_more());
    assert!(!p.is_empty());

    p.reset();
    assert_eq!(p.page(), 1);
    assert!(p.has_more());
    assert!(!p.loading());
    assert!(p.is_empty());

    // Idempotent.
    p.reset();
    assert_eq!(p.page(), 1);
    assert!(p.has_more());
}

#[test]
fn response_after_reset_is_discarded() {
    let mut p = Pager::<u32>::new(PagerOptions::new().with_per_page(25));
    let stale = p.begin_load().unwrap();

    // Filter/sort changed while the request was in flight.
    p.reset();

    assert_eq!(p.complete_load(stale, batch_of(25)), CompleteOutcome::Stale);
    assert!(p.is_empty());
    assert_eq!(p.page(), 1);
    assert!(p.has_more());
    assert!(!p.loading());
}

#[test]
fn stale_failure_is_ignored() {
    let mut p = Pager::<u32>::new(PagerOptions::new());
    let stale = p.begin_load().unwrap();
    p.reset();

    assert!(!p.fail_load(stale));
    assert_eq!(p.page(), 1);
    assert!(p.has_more());
}

#[test]
fn ticket_from_previous_attempt_is_not_current() {
    let mut p = Pager::<u32>::new(PagerOptions::new());
    let first = p.begin_load().unwrap();
    assert!(p.fail_load(first));

    // A new attempt for the same page gets the same page number but the old
    // ticket must still be rejected once the new one completes.
    let second = p.begin_load().unwrap();
    assert_eq!(first.page, second.page);
    p.complete_load(second, batch_of(25));
    assert_eq!(p.complete_load(first, batch_of(25)), CompleteOutcome::Stale);
    assert_eq!(p.len(), 25);
}

#[test]
fn disabled_pager_never_loads() {
    let mut p = Pager::<u32>::new(PagerOptions::new().with_enabled(false));
    assert!(!p.should_load(near_end()));
    assert!(p.on_scroll(near_end()).is_none());
    assert!(p.begin_load().is_none());
}

#[test]
fn toggling_enabled_keeps_accumulated_records() {
    let mut p = Pager::<u32>::new(PagerOptions::new().with_per_page(25));
    let ticket = p.begin_load().unwrap();
    p.complete_load(ticket, batch_of(25));
    assert_eq!(p.len(), 25);

    p.set_enabled(false);
    assert_eq!(p.len(), 25);
    assert!(p.on_scroll(near_end()).is_none());

    p.set_enabled(true);
    assert_eq!(p.len(), 25);
    assert_eq!(p.page(), 2);
    assert!(p.on_scroll(near_end()).is_some());
}

#[test]
fn threshold_boundary_is_exclusive() {
    let p = Pager::<u32>::new(PagerOptions::new().with_threshold(200));
    // distance == threshold does not trigger; distance < threshold does.
    assert!(!p.should_load(ScrollMetrics::new(400, 400, 1000)));
    assert!(p.should_load(ScrollMetrics::new(401, 400, 1000)));
}

#[test]
fn on_change_fires_once_per_transition() {
    let fired = Arc::new(AtomicUsize::new(0));
    let fired2 = Arc::clone(&fired);
    let mut p = Pager::<u32>::new(PagerOptions::new().with_on_change(Some(move |_: &Pager<u32>| {
        fired2.fetch_add(1, Ordering::SeqCst);
    })));

    fired.store(0, Ordering::SeqCst);
    let ticket = p.begin_load().unwrap();
    assert_eq!(fired.load(Ordering::SeqCst), 1);

    // complete_load batches its internal updates into one notification.
    p.complete_load(ticket, batch_of(25));
    assert_eq!(fired.load(Ordering::SeqCst), 2);

    p.reset();
    assert_eq!(fired.load(Ordering::SeqCst), 3);
}

#[test]
fn batch_update_coalesces_notifications() {
    let fired = Arc::new(AtomicUsize::new(0));
    let fired2 = Arc::clone(&fired);
    let mut p = Pager::<u32>::new(PagerOptions::new().with_on_change(Some(move |_: &Pager<u32>| {
        fired2.fetch_add(1, Ordering::SeqCst);
    })));

    fired.store(0, Ordering::SeqCst);
    p.batch_update(|p| {
        p.set_threshold(100);
        p.set_per_page(10);
        p.reset();
    });
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[test]
fn load_state_round_trips() {
    let mut p = Pager::<u32>::new(PagerOptions::new().with_per_page(25));
    let ticket = p.begin_load().unwrap();
    p.complete_load(ticket, batch_of(25));
    let state = p.load_state();
    assert_eq!(
        state,
        LoadState {
            page: 2,
            has_more: true
        }
    );

    let mut q = Pager::<u32>::new(PagerOptions::new().with_per_page(25));
    q.restore_load_state(state);
    assert_eq!(q.page(), 2);
    assert!(q.has_more());
    assert!(!q.loading());
}

#[test]
fn restore_invalidates_in_flight_ticket() {
    let mut p = Pager::<u32>::new(PagerOptions::new().with_per_page(25));
    let state = p.load_state();
    let ticket = p.begin_load().unwrap();

    p.restore_load_state(state);
    assert!(!p.loading());
    assert_eq!(p.complete_load(ticket, batch_of(25)), CompleteOutcome::Stale);
    assert!(p.is_empty());
}

#[test]
fn default_load_state_is_fresh() {
    assert_eq!(
        LoadState::default(),
        LoadState {
            page: 1,
            has_more: true
        }
    );
}
