//! The four fixed episode-type categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Episode-type classification bucket.
///
/// The four categories are fixed and exhaustive: a successful sync always
/// produces exactly one collection entry per kind. The per-kind lookup
/// tables below are the single source of truth for display names, default
/// item labels, and overlay file naming, shared by the classifier, the
/// diff/merge engine, and the overlay emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryKind {
    Fillers,
    MangaCanon,
    AnimeCanon,
    MixedCanonFiller,
}

impl CategoryKind {
    /// All four kinds, in canonical emission order.
    pub const ALL: [CategoryKind; 4] = [
        CategoryKind::Fillers,
        CategoryKind::MangaCanon,
        CategoryKind::AnimeCanon,
        CategoryKind::MixedCanonFiller,
    ];

    /// Top-level key in the collections file.
    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryKind::Fillers => "Fillers",
            CategoryKind::MangaCanon => "Manga Canon",
            CategoryKind::AnimeCanon => "Anime Canon",
            CategoryKind::MixedCanonFiller => "Mixed Canon/Filler",
        }
    }

    /// Reverse lookup from a collections-file key.
    pub fn from_display_name(name: &str) -> Option<CategoryKind> {
        Self::ALL.into_iter().find(|kind| kind.display_name() == name)
    }

    /// Default `item_label` for freshly created collection entries:
    /// the display name with " Canon/Filler" stripped and " Canon"
    /// contracted to "Canon".
    pub fn item_label(&self) -> &'static str {
        match self {
            CategoryKind::Fillers => "Fillers",
            CategoryKind::MangaCanon => "MangaCanon",
            CategoryKind::AnimeCanon => "AnimeCanon",
            CategoryKind::MixedCanonFiller => "Mixed",
        }
    }

    /// File name of the per-category overlay definition.
    pub fn overlay_file_name(&self) -> &'static str {
        match self {
            CategoryKind::Fillers => "fillers.yml",
            CategoryKind::MangaCanon => "manga_canon.yml",
            CategoryKind::AnimeCanon => "anime_canon.yml",
            CategoryKind::MixedCanonFiller => "mixed.yml",
        }
    }

    /// Entry name inside the overlay definition's `overlays` mapping.
    pub fn overlay_entry_name(&self) -> &'static str {
        match self {
            CategoryKind::Fillers => "filler_overlay",
            CategoryKind::MangaCanon => "manga_overlay",
            CategoryKind::AnimeCanon => "anime_overlay",
            CategoryKind::MixedCanonFiller => "mixed_overlay",
        }
    }

    /// Text rendered by the overlay.
    pub fn overlay_text(&self) -> &'static str {
        match self {
            CategoryKind::Fillers => "Filler",
            CategoryKind::MangaCanon => "Manga Canon",
            CategoryKind::AnimeCanon => "Anime Canon",
            CategoryKind::MixedCanonFiller => "Mixed Canon/Filler",
        }
    }

    /// Episode label the overlay's filter matches on.
    pub fn episode_label(&self) -> &'static str {
        match self {
            CategoryKind::Fillers => "Filler",
            CategoryKind::MangaCanon => "MangaCanon",
            CategoryKind::AnimeCanon => "AnimeCanon",
            CategoryKind::MixedCanonFiller => "Mixed",
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_round_trips() {
        for kind in CategoryKind::ALL {
            assert_eq!(CategoryKind::from_display_name(kind.display_name()), Some(kind));
        }
        assert_eq!(CategoryKind::from_display_name("Specials"), None);
    }

    #[test]
    fn lookup_tables() {
        assert_eq!(CategoryKind::Fillers.item_label(), "Fillers");
        assert_eq!(CategoryKind::MangaCanon.item_label(), "MangaCanon");
        assert_eq!(CategoryKind::AnimeCanon.item_label(), "AnimeCanon");
        assert_eq!(CategoryKind::MixedCanonFiller.item_label(), "Mixed");

        assert_eq!(CategoryKind::MixedCanonFiller.overlay_file_name(), "mixed.yml");
        assert_eq!(CategoryKind::Fillers.overlay_entry_name(), "filler_overlay");
        assert_eq!(CategoryKind::Fillers.overlay_text(), "Filler");
        assert_eq!(CategoryKind::MixedCanonFiller.episode_label(), "Mixed");
    }
}
