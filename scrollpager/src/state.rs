/// A lightweight, serializable snapshot of the pager's load progress.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
///
/// Records are not part of the snapshot: they belong to the host's data layer,
/// and an in-flight load cannot survive a save/restore cycle anyway.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadState {
    /// The highest page loaded so far (1-based; 1 means only the initial page).
    pub page: u32,
    /// Whether more pages are believed to exist.
    pub has_more: bool,
}

impl Default for LoadState {
    fn default() -> Self {
        Self {
            page: 1,
            has_more: true,
        }
    }
}
