//! Shiori - Natural-order sorting for comic and manga libraries
//!
//! This crate provides the comparers a library server needs to present
//! chapters, volumes and pages in the order a reader expects: `Ch 2` before
//! `Ch 10`, `Vol 1` before `vol_2`, and chapters without a number either
//! grouped first or last.
//!
//! # Getting Started
//!
//! Every comparer implements [`SortComparer`](comparer::SortComparer) and can
//! be used directly with `sort_by`. For library-wide preferences, build a
//! [`SortConfig`] once and let it sort names, paths and chapter numbers.
//!
//! ```rust
//! use shiori::prelude::*;
//!
//! // Plain comparers
//! let mut names = vec!["Vol 10.cbz", "vol_2.cbz", "Vol 1.cbz"];
//! names.sort_by(|a, b| NaturalSortComparer::new().compare(a, b));
//! assert_eq!(names, vec!["Vol 1.cbz", "vol_2.cbz", "Vol 10.cbz"]);
//!
//! let mut chapters = vec![2.0, DEFAULT_CHAPTER_NUMBER, 1.5];
//! chapters.sort_by(|a, b| ChapterSortComparer::DEFAULT_LAST.compare(a, b));
//! assert_eq!(chapters, vec![1.5, 2.0, DEFAULT_CHAPTER_NUMBER]);
//!
//! // A configured sorter
//! let config = SortConfig::builder()
//!     .page_strategy(SortStrategy::Logical)
//!     .special_placement(SpecialPlacement::First)
//!     .build()?;
//!
//! let mut chapter_dirs = vec![
//!     PathBuf::from("Series/Ch 10"),
//!     PathBuf::from("Series/Prologue"),
//!     PathBuf::from("Series/Ch 9"),
//! ];
//! config.sort_chapters(&mut chapter_dirs);
//! assert_eq!(chapter_dirs[0], PathBuf::from("Series/Prologue"));
//! assert_eq!(chapter_dirs[2], PathBuf::from("Series/Ch 10"));
//! # Ok::<(), shiori::error::Error>(())
//! ```
//!
//! Comparisons never fail and never panic; only building a [`SortConfig`]
//! returns errors (see [`error`]).

pub mod comparer;
pub mod error;
pub mod numbering;
pub mod path_utils;
pub mod sorter;
pub mod types;

// Publicly expose the main `SortConfig` struct and its builder
pub use sorter::{SortConfig, SortConfigBuilder, cover_page};

// Re-export comparers and core types for direct access
pub use comparer::{
    ChapterNumber, ChapterSortComparer, NaturalSortComparer, NaturalSortKey, NumericComparer,
    Reversed, SortComparer, SpecialPlacement, StringLogicalComparer, logical_compare,
};
pub use numbering::{DEFAULT_CHAPTER_NUMBER, LOOSE_LEAF_VOLUME_NUMBER, SPECIAL_VOLUME_NUMBER};
pub use types::{SortDirection, SortStrategy};

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and traits, allowing you to
/// import everything you need with a single `use shiori::prelude::*;` statement.
pub mod prelude {
    pub use super::{
        ChapterNumber, ChapterSortComparer, DEFAULT_CHAPTER_NUMBER, LOOSE_LEAF_VOLUME_NUMBER,
        NaturalSortComparer, NaturalSortKey, NumericComparer, Reversed, SPECIAL_VOLUME_NUMBER,
        SortComparer, SortConfig, SortConfigBuilder, SortDirection, SortStrategy,
        SpecialPlacement, StringLogicalComparer, cover_page, error, logical_compare, types,
    };
    pub use std::cmp::Ordering;
    pub use std::path::{Path, PathBuf};
}
