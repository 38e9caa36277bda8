use alloc::borrow::Cow;
use alloc::sync::Arc;

use crate::pager::Pager;

/// Default number of records fetched per page.
pub const DEFAULT_PER_PAGE: u32 = 25;

/// Default proximity-to-boundary trigger distance, in host units.
pub const DEFAULT_THRESHOLD: u64 = 200;

/// A callback fired when a pager state update occurs.
pub type OnChangeCallback<R> = Arc<dyn Fn(&Pager<R>) + Send + Sync>;

/// Configuration for [`crate::Pager`].
///
/// This type is designed to be cheap to clone: the callback is stored in an
/// `Arc` so adapters can tweak a few fields and call `Pager::set_options`
/// without reallocating closures.
pub struct PagerOptions<R> {
    /// Enables/disables scroll-triggered loading. When disabled, no load is
    /// ever started; already-accumulated records are kept.
    pub enabled: bool,

    /// Records requested per page. Clamped to at least 1.
    pub per_page: u32,

    /// Distance from the content end at which the next load triggers.
    pub threshold: u64,

    /// Display string shown by the host while a load is in flight.
    ///
    /// Presentation only; carried so hosts have a single configuration surface.
    pub loading_text: Cow<'static, str>,

    /// Display string shown by the host once the collection is exhausted.
    pub end_text: Cow<'static, str>,

    /// Optional callback fired when the pager's internal state changes.
    pub on_change: Option<OnChangeCallback<R>>,
}

impl<R> PagerOptions<R> {
    pub fn new() -> Self {
        Self {
            enabled: true,
            per_page: DEFAULT_PER_PAGE,
            threshold: DEFAULT_THRESHOLD,
            loading_text: Cow::Borrowed("Loading more records..."),
            end_text: Cow::Borrowed("All records loaded"),
            on_change: None,
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    pub fn with_threshold(mut self, threshold: u64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_loading_text(mut self, loading_text: impl Into<Cow<'static, str>>) -> Self {
        self.loading_text = loading_text.into();
        self
    }

    pub fn with_end_text(mut self, end_text: impl Into<Cow<'static, str>>) -> Self {
        self.end_text = end_text.into();
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Pager<R>) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl<R> Default for PagerOptions<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for PagerOptions<R> {
    fn clone(&self) -> Self {
        Self {
            enabled: self.enabled,
            per_page: self.per_page,
            threshold: self.threshold,
            loading_text: self.loading_text.clone(),
            end_text: self.end_text.clone(),
            on_change: self.on_change.clone(),
        }
    }
}

impl<R> core::fmt::Debug for PagerOptions<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PagerOptions")
            .field("enabled", &self.enabled)
            .field("per_page", &self.per_page)
            .field("threshold", &self.threshold)
            .field("loading_text", &self.loading_text)
            .field("end_text", &self.end_text)
            .finish_non_exhaustive()
    }
}
