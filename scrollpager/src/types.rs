use alloc::vec::Vec;

/// Scroll geometry reported by the host view.
///
/// Units are whatever the host measures in (pixels for a DOM container, rows
/// for a TUI). Only differences matter, so the engine never interprets them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollMetrics {
    /// Scroll offset from the start of the content (aka `scrollTop`).
    pub offset: u64,
    /// Size of the visible viewport (aka `clientHeight`).
    pub viewport: u32,
    /// Total size of the scrollable content (aka `scrollHeight`).
    pub content: u64,
}

impl ScrollMetrics {
    pub fn new(offset: u64, viewport: u32, content: u64) -> Self {
        Self {
            offset,
            viewport,
            content,
        }
    }

    /// Distance from the bottom edge of the viewport to the end of the content.
    ///
    /// Returns 0 when the viewport already covers (or overshoots) the end.
    pub fn distance_to_end(&self) -> u64 {
        self.content
            .saturating_sub(self.offset.saturating_add(self.viewport as u64))
    }
}

/// One page of records returned by the host's fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageBatch<R> {
    /// Records in received order. Appended as-is.
    pub records: Vec<R>,
    /// Explicit "a next page exists" signal from the response, when available.
    ///
    /// When `None`, exhaustion is inferred from the batch size: a batch shorter
    /// than `per_page` means the collection is exhausted. The inference is wrong
    /// when the total count is an exact multiple of the page size (the next
    /// trigger fetches one empty batch); prefer the explicit flag when the
    /// backend provides one.
    pub next_page: Option<bool>,
}

impl<R> PageBatch<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self {
            records,
            next_page: None,
        }
    }

    pub fn with_next_page(mut self, next_page: bool) -> Self {
        self.next_page = Some(next_page);
        self
    }
}

/// A token identifying one in-flight page load.
///
/// Tickets are handed out by [`crate::Pager::begin_load`] and must be passed
/// back to `complete_load`/`fail_load`. The `epoch` pins the ticket to the
/// pager generation it was issued under: `reset` bumps the epoch, so a response
/// that races a filter/sort change is discarded instead of being stitched into
/// the freshly reset list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadTicket {
    /// The page this load is for (1-based).
    pub page: u32,
    /// The pager generation the ticket was issued under.
    pub epoch: u64,
}

/// The result of handing a completed load back to the pager.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompleteOutcome {
    /// The batch was appended.
    Appended {
        /// Number of records appended.
        appended: usize,
        /// Whether more pages are believed to exist.
        has_more: bool,
    },
    /// The ticket no longer matches the pager state (a reset or restore
    /// happened while the request was in flight); the batch was dropped.
    Stale,
}
