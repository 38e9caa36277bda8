use alloc::string::ToString;

use scrollpager::{CompleteOutcome, LoadTicket, PageBatch, Pager, PagerOptions, ScrollMetrics};

use crate::{
    FetchError, PageFetcher, PageRequest, QueryParams, QuerySignature, ScrollConfig,
    ScrollSettings,
};

/// A framework-neutral controller that wraps a [`scrollpager::Pager`] and owns
/// the view-lifecycle and query-tracking workflows around it.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `attach` when the listing view mounts / `detach` when it unmounts
/// - `on_query` whenever the route's query parameters change
/// - `on_scroll` from the scroll (or intersection) listener
/// - `complete`/`fail` when the issued page request settles
///
/// While detached, scroll events are ignored entirely, which is the
/// listener-removal half of the teardown contract; `detach` is idempotent and
/// never discards accumulated records.
#[derive(Clone, Debug)]
pub struct Controller<R> {
    pager: Pager<R>,
    attached: bool,
    query: QueryParams,
    signature: QuerySignature,
}

impl<R> Controller<R> {
    pub fn new(options: PagerOptions<R>) -> Self {
        Self::from_pager(Pager::new(options))
    }

    pub fn from_pager(pager: Pager<R>) -> Self {
        let query = QueryParams::new();
        let signature = query.signature();
        Self {
            pager,
            attached: false,
            query,
            signature,
        }
    }

    /// Builds a controller for a collection from the package config.
    ///
    /// The controller attaches immediately when the config's `auto_enable` is
    /// set and the collection is not excluded; otherwise the host toggles it
    /// via [`Self::set_enabled`] or [`Self::attach`].
    pub fn for_collection<C: ScrollSettings>(config: &ScrollConfig) -> Self {
        let mut controller = Self::new(C::pager_options(config));
        if config.auto_enable {
            controller.attach();
        }
        controller
    }

    pub fn pager(&self) -> &Pager<R> {
        &self.pager
    }

    pub fn pager_mut(&mut self) -> &mut Pager<R> {
        &mut self.pager
    }

    pub fn into_pager(self) -> Pager<R> {
        self.pager
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Attaches the controller to the view's scroll events.
    ///
    /// No-op when already attached or when the pager is disabled (a disabled
    /// collection never gets a listener). Returns whether the controller is
    /// attached afterwards.
    pub fn attach(&mut self) -> bool {
        if self.attached {
            return true;
        }
        if !self.pager.enabled() {
            return false;
        }
        adebug!("controller attached");
        self.attached = true;
        true
    }

    /// Detaches from the view's scroll events.
    ///
    /// Idempotent: safe to call when never attached or called twice.
    /// Accumulated records and load progress are kept.
    pub fn detach(&mut self) {
        if self.attached {
            adebug!("controller detached");
        }
        self.attached = false;
    }

    /// Toggles the feature, detaching or re-attaching as needed.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.pager.set_enabled(enabled);
        if enabled {
            self.attach();
        } else {
            self.detach();
        }
    }

    /// Reports the view's current query parameters.
    ///
    /// When the effective query (filters/sort/search) changed, the pager is
    /// reset and `true` is returned. Changes limited to pagination parameters
    /// leave the pager alone.
    pub fn on_query(&mut self, params: &QueryParams) -> bool {
        let signature = params.signature();
        self.query = params.clone();
        if signature == self.signature {
            return false;
        }
        adebug!("effective query changed, resetting pager");
        self.signature = signature;
        self.pager.reset();
        true
    }

    /// Feeds a scroll event through to the pager.
    ///
    /// Returns the request for the next page when the load threshold was
    /// crossed; `None` while detached, loading, or exhausted. The request
    /// carries the current query parameters with `page`/`perPage` merged in.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> Option<PageRequest> {
        if !self.attached {
            return None;
        }
        let ticket = self.pager.on_scroll(metrics)?;
        Some(self.request_for(ticket))
    }

    fn request_for(&self, ticket: LoadTicket) -> PageRequest {
        let per_page = self.pager.per_page();
        let mut params = self.query.clone();
        params.set("page", ticket.page.to_string());
        params.set("perPage", per_page.to_string());
        PageRequest {
            ticket,
            per_page,
            params: params.pairs().to_vec(),
        }
    }

    /// Hands a successfully fetched batch back to the pager.
    pub fn complete(&mut self, ticket: LoadTicket, batch: PageBatch<R>) -> CompleteOutcome {
        self.pager.complete_load(ticket, batch)
    }

    /// Records a failed page request.
    ///
    /// Logs the error and reverts the pager so the next trigger retries the
    /// same page. Fire-and-forget: no retry loop, no backoff.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn fail(&mut self, ticket: LoadTicket, error: &FetchError) -> bool {
        awarn!(page = ticket.page, reason = %error.reason, "page load failed");
        self.pager.fail_load(ticket)
    }

    /// Synchronous convenience drive for hosts (and tests) that fetch inline:
    /// runs `on_scroll`, performs the fetch, and settles the ticket.
    ///
    /// Returns `None` when no load was due.
    pub fn pump(
        &mut self,
        metrics: ScrollMetrics,
        fetcher: &mut impl PageFetcher<R>,
    ) -> Option<Result<CompleteOutcome, FetchError>> {
        let request = self.on_scroll(metrics)?;
        match fetcher.fetch_page(&request) {
            Ok(batch) => Some(Ok(self.complete(request.ticket, batch))),
            Err(error) => {
                self.fail(request.ticket, &error);
                Some(Err(error))
            }
        }
    }
}
