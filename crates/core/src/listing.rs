//! List endpoint envelopes.

use serde::{Deserialize, Serialize};

/// Body of a list endpoint.
///
/// Depending on the backend's pagination setting a list arrives either as a
/// bare JSON array or as a page envelope with a `results` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    /// Page envelope
    Paginated {
        /// Total number of items across pages
        #[serde(default)]
        count: Option<u64>,
        /// Link to the next page
        #[serde(default)]
        next: Option<String>,
        /// Link to the previous page
        #[serde(default)]
        previous: Option<String>,
        /// Items on this page
        results: Vec<T>,
    },
    /// Bare array
    Plain(Vec<T>),
}

impl<T> Listing<T> {
    /// Items regardless of envelope.
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Paginated { results, .. } => results,
            Self::Plain(items) => items,
        }
    }
}

impl<T> From<Listing<T>> for Vec<T> {
    fn from(listing: Listing<T>) -> Self {
        listing.into_items()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_and_paginated() {
        let plain: Listing<u32> = serde_json::from_str("[1, 2, 3]").unwrap();
        assert_eq!(plain.into_items(), vec![1, 2, 3]);

        let page: Listing<u32> =
            serde_json::from_str(r#"{"count": 3, "next": null, "previous": null, "results": [4]}"#)
                .unwrap();
        assert_eq!(page.into_items(), vec![4]);
    }
}
