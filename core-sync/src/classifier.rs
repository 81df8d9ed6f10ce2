//! List classification by naming convention.
//!
//! Lists follow a `{subject}_{episode-type}` convention, e.g.
//! `Naruto_filler` or `One Piece_Manga Canon`. The split happens on the
//! first underscore only, so extra underscores stay in the episode-type
//! token (and usually make it unrecognizable, which drops the list).

use crate::category::CategoryKind;
use provider_trakt::TraktList;
use tracing::debug;

/// Public site base for canonical list URLs.
pub const TRAKT_WEB_BASE: &str = "https://trakt.tv";

/// Classified list URLs, one ordered set per category.
///
/// Within a category, insertion order follows the remote result order;
/// duplicates are dropped on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedLists {
    buckets: [Vec<String>; 4],
}

impl ClassifiedLists {
    /// URLs classified into `kind`, in first-seen order.
    pub fn urls(&self, kind: CategoryKind) -> &[String] {
        &self.buckets[Self::index(kind)]
    }

    /// Insert a URL, keeping first-seen order and dropping duplicates.
    pub fn insert(&mut self, kind: CategoryKind, url: String) {
        let bucket = &mut self.buckets[Self::index(kind)];
        if !bucket.contains(&url) {
            bucket.push(url);
        }
    }

    /// Total number of classified URLs across all categories.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn index(kind: CategoryKind) -> usize {
        match kind {
            CategoryKind::Fillers => 0,
            CategoryKind::MangaCanon => 1,
            CategoryKind::AnimeCanon => 2,
            CategoryKind::MixedCanonFiller => 3,
        }
    }
}

/// Map a normalized (lowercased) episode-type token to its category.
///
/// Hyphen, space, and slash variants are all accepted; anything else is
/// unrecognized and the list is ignored.
fn category_for_token(token: &str) -> Option<CategoryKind> {
    match token {
        "filler" => Some(CategoryKind::Fillers),
        "manga-canon" | "manga canon" => Some(CategoryKind::MangaCanon),
        "anime-canon" | "anime canon" => Some(CategoryKind::AnimeCanon),
        "mixed-canon-filler" | "mixed canon/filler" => Some(CategoryKind::MixedCanonFiller),
        _ => None,
    }
}

/// Classify fetched lists into the four category buckets.
///
/// Names without an underscore and names whose episode-type token is not in
/// the synonym table are skipped silently. The canonical URL uses the list's
/// slug when present, else its raw name.
pub fn classify(lists: &[TraktList], username: &str) -> ClassifiedLists {
    let mut classified = ClassifiedLists::default();

    for list in lists {
        let Some((_subject, episode_type)) = list.name.split_once('_') else {
            debug!(name = %list.name, "skipping list without episode-type suffix");
            continue;
        };

        let Some(kind) = category_for_token(&episode_type.to_lowercase()) else {
            debug!(name = %list.name, "skipping list with unrecognized episode type");
            continue;
        };

        let url = format!(
            "{}/users/{}/lists/{}",
            TRAKT_WEB_BASE,
            username,
            list.slug_or_name()
        );
        classified.insert(kind, url);
    }

    classified
}
