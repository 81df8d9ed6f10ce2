//! Trakt API response types
//!
//! Data structures for deserializing Trakt list responses.
//!
//! See: https://trakt.docs.apiary.io/#reference/users/lists

use serde::{Deserialize, Serialize};

/// A user-created Trakt list.
///
/// Only the fields this tool consumes are modelled; the API returns more
/// (description, privacy, item counts) which serde ignores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraktList {
    /// Display name, e.g. `"Naruto_filler"`
    pub name: String,

    /// Stable identifiers
    #[serde(default)]
    pub ids: ListIds,
}

/// Identifier block of a Trakt list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListIds {
    /// Numeric Trakt id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trakt: Option<u64>,

    /// URL slug, absent on some legacy lists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl TraktList {
    /// The list's URL path segment: the slug when present, else the raw name.
    pub fn slug_or_name(&self) -> &str {
        self.ids.slug.as_deref().unwrap_or(&self.name)
    }
}
