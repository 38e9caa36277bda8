use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::Cell;

use crate::{CompleteOutcome, LoadState, LoadTicket, PageBatch, PagerOptions, ScrollMetrics};

/// A headless scroll-to-load pagination engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects and never performs I/O itself.
/// - Your adapter drives it by reporting scroll geometry and by fetching pages.
/// - A load is a three-step handshake: [`Self::begin_load`] issues a
///   [`LoadTicket`], the host fetches the page, and the ticket is handed back
///   via [`Self::complete_load`] or [`Self::fail_load`].
///
/// The `loading` flag is the sole concurrency control: while a ticket is
/// outstanding, no second load can start, so at most one fetch is ever in
/// flight. Tickets carry an epoch so a response that races [`Self::reset`] is
/// discarded instead of being appended to the fresh list.
///
/// For view lifecycle (attach/teardown) and query-change tracking, see the
/// `scrollpager-adapter` crate.
#[derive(Clone, Debug)]
pub struct Pager<R> {
    options: PagerOptions<R>,
    records: Vec<R>,
    page: u32,
    has_more: bool,
    loading: bool,
    epoch: u64,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl<R> Pager<R> {
    /// Creates a new pager from options.
    ///
    /// The initial page counts as page 1: the host view is assumed to render
    /// its first batch through its normal path, and the pager takes over from
    /// page 2 onward.
    pub fn new(options: PagerOptions<R>) -> Self {
        pdebug!(
            enabled = options.enabled,
            per_page = options.per_page,
            threshold = options.threshold,
            "Pager::new"
        );
        Self {
            options,
            records: Vec::new(),
            page: 1,
            has_more: true,
            loading: false,
            epoch: 0,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &PagerOptions<R> {
        &self.options
    }

    pub fn set_options(&mut self, mut options: PagerOptions<R>) {
        options.per_page = options.per_page.max(1);
        ptrace!(
            enabled = options.enabled,
            per_page = options.per_page,
            threshold = options.threshold,
            "Pager::set_options"
        );
        self.options = options;
        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut PagerOptions<R>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Pager<R>) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    pub fn enabled(&self) -> bool {
        self.options.enabled
    }

    /// Enables or disables scroll-triggered loading.
    ///
    /// Disabling mid-session keeps the accumulated records and the current
    /// page/exhaustion state; re-enabling resumes from where loading stopped.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.options.enabled == enabled {
            return;
        }
        self.options.enabled = enabled;
        self.notify();
    }

    pub fn per_page(&self) -> u32 {
        self.options.per_page
    }

    pub fn set_per_page(&mut self, per_page: u32) {
        self.options.per_page = per_page.max(1);
        self.notify();
    }

    pub fn threshold(&self) -> u64 {
        self.options.threshold
    }

    pub fn set_threshold(&mut self, threshold: u64) {
        self.options.threshold = threshold;
        self.notify();
    }

    /// The highest page requested so far (1-based).
    pub fn page(&self) -> u32 {
        self.page
    }

    /// True while a ticket is outstanding.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Whether more pages are believed to exist beyond the loaded set.
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// The current pager generation. Bumped by `reset` and restores.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Records accumulated across pages, in received order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    /// Whether a scroll position should trigger the next load.
    ///
    /// True when the pager is enabled, not exhausted, has no load in flight,
    /// and the viewport end is within `threshold` of the content end. Pure and
    /// cheap, so it is safe to call at scroll-event frequency.
    pub fn should_load(&self, metrics: ScrollMetrics) -> bool {
        self.options.enabled
            && self.has_more
            && !self.loading
            && metrics.distance_to_end() < self.options.threshold
    }

    /// Feeds a scroll event to the pager.
    ///
    /// Issues a ticket when the position crosses the threshold and no load is
    /// in flight. The `loading` guard makes this idempotent under the bursts a
    /// scroll listener produces.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> Option<LoadTicket> {
        if !self.should_load(metrics) {
            return None;
        }
        ptrace!(
            offset = metrics.offset,
            distance = metrics.distance_to_end(),
            threshold = self.options.threshold,
            "on_scroll: threshold crossed"
        );
        self.begin_load()
    }

    /// Starts the next page load.
    ///
    /// Sets `loading`, advances the page counter, and returns the ticket the
    /// host must hand back on completion or failure. Returns `None` when the
    /// pager is disabled, already loading, or exhausted.
    pub fn begin_load(&mut self) -> Option<LoadTicket> {
        if !self.options.enabled || self.loading || !self.has_more {
            return None;
        }
        self.loading = true;
        self.page += 1;
        pdebug!(page = self.page, epoch = self.epoch, "begin_load");
        self.notify();
        Some(LoadTicket {
            page: self.page,
            epoch: self.epoch,
        })
    }

    /// Applies a successfully fetched batch.
    ///
    /// Stale tickets (issued before a `reset` or restore, or otherwise not the
    /// outstanding one) drop the batch and leave the pager untouched.
    pub fn complete_load(&mut self, ticket: LoadTicket, batch: PageBatch<R>) -> CompleteOutcome {
        if !self.is_current(ticket) {
            pwarn!(
                ticket_page = ticket.page,
                ticket_epoch = ticket.epoch,
                page = self.page,
                epoch = self.epoch,
                "complete_load: stale ticket, dropping batch"
            );
            return CompleteOutcome::Stale;
        }

        let appended = batch.records.len();
        let has_more = batch
            .next_page
            .unwrap_or(appended >= self.options.per_page as usize);
        pdebug!(page = ticket.page, appended, has_more, "complete_load");

        self.batch_update(|p| {
            p.records.extend(batch.records);
            p.has_more = has_more;
            p.loading = false;
            p.notify();
        });

        CompleteOutcome::Appended { appended, has_more }
    }

    /// Records a failed load.
    ///
    /// Reverts the page counter to its pre-increment value so the next trigger
    /// retries the same page, and clears `loading`. Records are untouched.
    /// Stale tickets are ignored. Returns whether the failure was applied.
    pub fn fail_load(&mut self, ticket: LoadTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        pwarn!(page = ticket.page, "fail_load: reverting page counter");
        self.page = self.page.saturating_sub(1).max(1);
        self.loading = false;
        self.notify();
        true
    }

    fn is_current(&self, ticket: LoadTicket) -> bool {
        self.loading && ticket.epoch == self.epoch && ticket.page == self.page
    }

    /// Resets the pager to its initial state.
    ///
    /// Clears the accumulated records, restores page 1 / `has_more` /
    /// `!loading`, and bumps the epoch so any in-flight response is discarded
    /// on arrival. Call this whenever the effective query (filters, sort,
    /// search) changes; pagination-only parameter changes must not reach here,
    /// or every scroll-triggered load would reset its own state.
    pub fn reset(&mut self) {
        pdebug!(
            dropped = self.records.len(),
            epoch = self.epoch,
            "Pager::reset"
        );
        self.records.clear();
        self.page = 1;
        self.has_more = true;
        self.loading = false;
        self.epoch += 1;
        self.notify();
    }

    /// Returns a snapshot of the load progress (page counter + exhaustion).
    pub fn load_state(&self) -> LoadState {
        LoadState {
            page: self.page,
            has_more: self.has_more,
        }
    }

    /// Restores load progress from a previously captured snapshot.
    ///
    /// The epoch is bumped and `loading` cleared: a load that was in flight
    /// when the snapshot was taken (or is in flight now) cannot be resumed, so
    /// its eventual response must be discarded. Records are the host's to
    /// restore alongside.
    pub fn restore_load_state(&mut self, state: LoadState) {
        self.page = state.page.max(1);
        self.has_more = state.has_more;
        self.loading = false;
        self.epoch += 1;
        self.notify();
    }
}
