use alloc::string::String;
use alloc::vec::Vec;

/// Parameter names that address pagination itself rather than the query.
///
/// Changes limited to these must not reset the pager, otherwise every
/// scroll-triggered load would immediately reset its own state.
const PAGINATION_PARAMS: &[&str] = &["page", "perPage", "per_page"];

/// Query parameters for a listing view, in insertion order.
///
/// This is a plain ordered name/value list so hosts can mirror whatever their
/// router/URL layer produces. Pagination parameters may be present; they are
/// carried into page requests but excluded from [`Self::signature`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Sets a parameter, replacing an existing value for the same name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(pair) = self.pairs.iter_mut().find(|(n, _)| *n == name) {
            pair.1 = value;
        } else {
            self.pairs.push((name, value));
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn remove(&mut self, name: &str) {
        self.pairs.retain(|(n, _)| n != name);
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Computes the identity of the effective query.
    ///
    /// Pagination parameters are dropped and the rest is sorted by name, so two
    /// parameter sets that differ only in page number or parameter order
    /// compare equal. Anything else (a filter value, a sort column, a search
    /// term) changes the signature.
    pub fn signature(&self) -> QuerySignature {
        let mut pairs: Vec<(String, String)> = self
            .pairs
            .iter()
            .filter(|(n, _)| !PAGINATION_PARAMS.contains(&n.as_str()))
            .cloned()
            .collect();
        pairs.sort();
        QuerySignature { pairs }
    }
}

/// A normalized identity for the effective query (filters/sort/search).
///
/// Produced by [`QueryParams::signature`]; compared by the controller to decide
/// when the pager must be reset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuerySignature {
    pairs: Vec<(String, String)>,
}
