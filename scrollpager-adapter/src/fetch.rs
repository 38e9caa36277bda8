use alloc::string::String;
use alloc::vec::Vec;

use scrollpager::{LoadTicket, PageBatch};

/// Everything a host needs to issue the next-page request.
///
/// `params` is the full parameter list for the request: the current query
/// parameters with `page` and `perPage` merged in. On the wire this maps to
/// `GET <collection-endpoint>?<params>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    /// The ticket to hand back via `complete`/`fail` once the request settles.
    pub ticket: LoadTicket,
    /// Records requested for this page.
    pub per_page: u32,
    /// Full request parameters, in order.
    pub params: Vec<(String, String)>,
}

/// The next-page request failed (network error or non-success response).
///
/// Policy: log and leave the pager retryable. No automatic retry, no backoff;
/// the user's next scroll trigger re-requests the same page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to fetch page {page}: {reason}")]
pub struct FetchError {
    /// The page the failed request was for.
    pub page: u32,
    /// Transport- or status-level detail, for the log line only.
    pub reason: String,
}

impl FetchError {
    pub fn new(page: u32, reason: impl Into<String>) -> Self {
        Self {
            page,
            reason: reason.into(),
        }
    }
}

/// The page-fetch strategy a host view delegates to.
///
/// Implementations perform the actual request against the collection endpoint.
/// The controller never calls this while a load is already in flight.
pub trait PageFetcher<R> {
    fn fetch_page(&mut self, request: &PageRequest) -> Result<PageBatch<R>, FetchError>;
}

impl<R, F> PageFetcher<R> for F
where
    F: FnMut(&PageRequest) -> Result<PageBatch<R>, FetchError>,
{
    fn fetch_page(&mut self, request: &PageRequest) -> Result<PageBatch<R>, FetchError> {
        self(request)
    }
}
