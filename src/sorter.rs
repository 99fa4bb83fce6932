//! Library-facing sorting configuration.
//!
//! [`SortConfig`] bundles the choices a library makes once (which string
//! comparer orders pages, which direction, where chapters without a number
//! go) and applies them to names, paths and parsed chapter numbers.
//!
//! ```
//! use shiori::prelude::*;
//!
//! let config = SortConfig::builder()
//!     .page_strategy(SortStrategy::Natural)
//!     .special_placement(SpecialPlacement::First)
//!     .build()?;
//!
//! let mut pages = vec![PathBuf::from("10.jpg"), PathBuf::from("9.jpg")];
//! config.sort_pages(&mut pages);
//! assert_eq!(pages, vec![PathBuf::from("9.jpg"), PathBuf::from("10.jpg")]);
//! # Ok::<(), shiori::error::Error>(())
//! ```

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use regex::Regex;

use crate::comparer::{
    ChapterNumber, ChapterSortComparer, NaturalSortComparer, NumericComparer, SortComparer,
    SpecialPlacement, logical_compare,
};
use crate::error::{Error, Result};
use crate::numbering::{DEFAULT_CHAPTER_NUMBER, DEFAULT_NUMBER_REGEX, chapter_number_or};
use crate::path_utils::{
    chapter_name_lossy, get_file_name_lossy, has_blacklisted_folder, is_cover_image,
    is_hidden_file, is_image_file, path_to_string_lossy, path_without_extension_lossy,
};
use crate::types::{SortDirection, SortStrategy};

const NATURAL: NaturalSortComparer = NaturalSortComparer::new();

/// Sorting preferences for one library, built with [`SortConfig::builder`].
#[derive(Clone, Debug, derive_builder::Builder)]
#[builder(
    setter(into, strip_option),
    build_fn(private, name = "fallible_build")
)]
#[cfg_attr(feature = "specta", derive(specta::Type))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SortConfig {
    /// Comparer used for page, file and folder names.
    #[builder(default)]
    pub page_strategy: SortStrategy,

    /// Applied to every ordering this config produces, including chapters.
    /// [`first_chapter`](Self::first_chapter) and
    /// [`last_chapter`](Self::last_chapter) ignore it.
    #[builder(default)]
    pub direction: SortDirection,

    /// Where chapters carrying `chapter_sentinel` go.
    #[builder(default)]
    pub special_placement: SpecialPlacement,

    /// The number assigned to chapters whose name has no number.
    #[builder(default = "DEFAULT_CHAPTER_NUMBER")]
    pub chapter_sentinel: f64,

    /// Custom regex to read a chapter number from a chapter name.
    ///
    /// The last match wins. If the pattern has a capture group, group 1 is
    /// parsed, otherwise the whole match. Defaults to any integer or decimal.
    #[builder(default)]
    pub chapter_name_regex_str: Option<String>,

    /// Compiled from `chapter_name_regex_str` in [`SortConfigBuilder::build`].
    #[builder(setter(skip), default)]
    #[cfg_attr(feature = "serde", serde(skip))]
    #[cfg_attr(feature = "specta", specta(skip))]
    pub(crate) compiled_chapter_name_regex: Option<Regex>,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            page_strategy: SortStrategy::default(),
            direction: SortDirection::default(),
            special_placement: SpecialPlacement::default(),
            chapter_sentinel: DEFAULT_CHAPTER_NUMBER,
            chapter_name_regex_str: None,
            compiled_chapter_name_regex: None,
        }
    }
}

impl SortConfig {
    /// Creates a new builder for configuring `SortConfig`.
    ///
    /// Every field has a default, so `SortConfig::builder().build()` is the
    /// same as [`SortConfig::default`].
    pub fn builder() -> SortConfigBuilder {
        SortConfigBuilder::default()
    }

    /// The regex used to read chapter numbers.
    pub fn chapter_name_regex(&self) -> &Regex {
        self.compiled_chapter_name_regex
            .as_ref()
            .unwrap_or(&*DEFAULT_NUMBER_REGEX)
    }

    /// Compares two names with the configured strategy and direction.
    pub fn compare_names(&self, a: &str, b: &str) -> Ordering {
        let ordering = match self.page_strategy {
            SortStrategy::Natural => NATURAL.compare(a, b),
            SortStrategy::Numeric => NumericComparer.compare(a, b),
            SortStrategy::Logical => logical_compare(a, b),
        };
        self.direction.apply(ordering)
    }

    pub fn sort_names<S: AsRef<str> + Send>(&self, names: &mut [S]) {
        names.par_sort_by(|a, b| self.compare_names(a.as_ref(), b.as_ref()));
    }

    /// Sorts paths by their full path string.
    pub fn sort_paths(&self, paths: &mut [PathBuf]) {
        paths.par_sort_by(|a, b| {
            self.compare_names(&path_to_string_lossy(a), &path_to_string_lossy(b))
        });
    }

    /// Sorts pages by file name, falling back to the full path for pages
    /// with the same name in different folders.
    pub fn sort_pages(&self, pages: &mut [PathBuf]) {
        pages.par_sort_by(|a, b| {
            self.compare_names(&get_file_name_lossy(a), &get_file_name_lossy(b))
                .then_with(|| {
                    self.compare_names(&path_to_string_lossy(a), &path_to_string_lossy(b))
                })
        });
    }

    /// The chapter comparer for this config's sentinel and placement.
    pub fn chapter_comparer(&self) -> ChapterSortComparer {
        ChapterSortComparer::new(self.chapter_sentinel, self.special_placement)
    }

    /// Sorts parsed chapter or volume numbers.
    ///
    /// With [`SortDirection::Descending`] the whole order is reversed, the
    /// sentinel included.
    pub fn sort_chapter_numbers<N: ChapterNumber + Send>(&self, numbers: &mut [N]) {
        let comparer = self.chapter_comparer();
        numbers.par_sort_by(|a, b| self.direction.apply(comparer.compare(a, b)));
    }

    /// Reads the chapter number of a chapter file or folder, or the sentinel.
    pub fn chapter_number(&self, path: &Path) -> f64 {
        chapter_number_or(
            &chapter_name_lossy(path),
            self.chapter_name_regex(),
            self.chapter_sentinel,
        )
    }

    /// Sorts chapter files or folders by the number in their name.
    ///
    /// Chapters with the same number (or none) are ordered by name. Numbers
    /// are read once per chapter.
    pub fn sort_chapters(&self, chapters: &mut Vec<PathBuf>) {
        let mut keyed: Vec<(f64, PathBuf)> = chapters
            .drain(..)
            .map(|path| (self.chapter_number(&path), path))
            .collect();

        keyed.par_sort_by(|(an, a), (bn, b)| {
            self.direction
                .apply(self.compare_chapter_keys(*an, a, *bn, b))
        });

        chapters.extend(keyed.into_iter().map(|(_, path)| path));
    }

    /// The chapter that comes first in ascending chapter order.
    pub fn first_chapter<'a>(&self, chapters: &'a [PathBuf]) -> Option<&'a PathBuf> {
        chapters.iter().min_by(|a, b| self.compare_chapters(a, b))
    }

    /// The chapter that comes last in ascending chapter order.
    pub fn last_chapter<'a>(&self, chapters: &'a [PathBuf]) -> Option<&'a PathBuf> {
        chapters.iter().max_by(|a, b| self.compare_chapters(a, b))
    }

    fn compare_chapters(&self, a: &Path, b: &Path) -> Ordering {
        self.compare_chapter_keys(self.chapter_number(a), a, self.chapter_number(b), b)
    }

    fn compare_chapter_keys(&self, an: f64, a: &Path, bn: f64, b: &Path) -> Ordering {
        self.chapter_comparer()
            .compare(&an, &bn)
            .then_with(|| NATURAL.compare(&*get_file_name_lossy(a), &*get_file_name_lossy(b)))
            .then_with(|| a.cmp(b))
    }
}

impl SortConfigBuilder {
    /// Builds the config and compiles `chapter_name_regex_str`.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidConfig`] - The regex does not parse, or matches the
    ///   empty string
    pub fn build(&self) -> Result<SortConfig> {
        let mut config = self.fallible_build()?;

        if let Some(pattern) = &config.chapter_name_regex_str {
            let regex = compile_chapter_regex(pattern)?;
            log::debug!("Using custom chapter regex {pattern:?}");
            config.compiled_chapter_name_regex = Some(regex);
        }

        log::debug!(
            "Sorting names {} ({}), specials {:?} at {}",
            config.page_strategy,
            config.direction,
            config.special_placement,
            config.chapter_sentinel
        );
        Ok(config)
    }
}

fn compile_chapter_regex(pattern: &str) -> Result<Regex> {
    let regex = Regex::new(pattern).map_err(|e| {
        Error::InvalidConfig(format!("Invalid chapter_name_regex: {pattern} ({e})"))
    })?;
    if regex.is_match("") {
        return Err(Error::InvalidConfig(format!(
            "chapter_name_regex matches an empty name: {pattern}"
        )));
    }
    Ok(regex)
}

/// Picks the cover image from the entries of an archive or folder.
///
/// Entries in metadata folders, hidden files and non-images are skipped. An
/// image named like a cover (`cover.jpg`, `!folder.png`, `p000 [Cover].jpg`)
/// wins; otherwise the first image in natural order of its path without
/// extension is used.
pub fn cover_page(entries: &[PathBuf]) -> Option<&PathBuf> {
    let by_natural_path = |a: &&PathBuf, b: &&PathBuf| {
        NATURAL
            .compare(
                &path_without_extension_lossy(a),
                &path_without_extension_lossy(b),
            )
            .then_with(|| a.cmp(b))
    };

    let candidates = entries
        .iter()
        .filter(|p| is_image_file(p) && !is_hidden_file(p) && !has_blacklisted_folder(p));

    let cover = candidates
        .clone()
        .filter(|p| is_cover_image(p))
        .min_by(by_natural_path)
        .or_else(|| candidates.min_by(by_natural_path));

    if let Some(path) = cover {
        log::trace!("Selected cover page {}", path.display());
    }
    cover
}
