//! Path helpers used when ordering archive entries and page files.
//!
//! Names are always compared as UTF-8 text, so paths are converted lossily;
//! an invalid byte never prevents a path from being sorted. Archive entry
//! names use `/` regardless of platform and are handled the same way.

use std::borrow::Cow;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

/// Image extensions that can serve as a page or cover.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "avif", "bmp"];

/// Archive and book containers that hold a whole chapter or volume.
const ARCHIVE_EXTENSIONS: &[&str] = &[
    "cbz", "zip", "cbr", "rar", "cb7", "7z", "cbt", "tar", "epub", "pdf",
];

/// Metadata and trash folders that never contain real pages, matched anywhere
/// in the path. Matching is case-sensitive.
const BLACKLISTED_FRAGMENTS: &[&str] = &["__MACOSX", ".qpkg", ".yacreaderlibrary", ".caltrash"];

/// NAS snapshot and recycle bins, matched at the start of the path.
const BLACKLISTED_PREFIXES: &[&str] = &["@Recently-Snapshot", "@recycle", "#recycle"];

/// macOS resource forks and the folders that hold them.
const MAC_OS_METADATA_PREFIX: &str = "._";

lazy_static! {
    /// A standalone "cover" or "folder" word, optionally prefixed with "!".
    static ref COVER_IMAGE_REGEX: Regex =
        Regex::new(r"(?i)(?:^|[^a-z\d])!?(?:cover|folder)(?:[^a-z\d]|$)").unwrap();
    static ref BACK_COVER_REGEX: Regex = Regex::new(r"(?i)back[\s_-]?cover").unwrap();
}

/// Gets the file name from a path with fallback to lossy conversion.
///
/// # Returns
///
/// * `Cow<str>` - The file name, or an empty string for paths such as `/` or `..`
pub fn get_file_name_lossy(path: &Path) -> Cow<'_, str> {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or(Cow::Borrowed(""))
}

/// Converts a path to a string with fallback to lossy conversion.
pub fn path_to_string_lossy(path: &Path) -> Cow<'_, str> {
    path.to_string_lossy()
}

/// The full path with the extension of the last component removed.
///
/// Used as the sort key for archive entries so that `cover.png` and
/// `cover.jpg` do not order by their extension.
pub fn path_without_extension_lossy(path: &Path) -> String {
    path.with_extension("").to_string_lossy().into_owned()
}

/// Checks if a filename starts with a dot (hidden file or `._` resource fork).
pub fn is_hidden_file(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}

fn has_extension_in(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy();
            extensions.iter().any(|known| known.eq_ignore_ascii_case(&ext))
        })
        .unwrap_or(false)
}

pub fn is_image_file(path: &Path) -> bool {
    has_extension_in(path, IMAGE_EXTENSIONS)
}

pub fn is_archive_file(path: &Path) -> bool {
    has_extension_in(path, ARCHIVE_EXTENSIONS)
}

/// The name used to read a chapter number from a path.
///
/// Known image and archive extensions are dropped so `Ch 3.cb7` does not read
/// as chapter 7. Other names, including folders like `Ch.019`, are kept whole.
pub fn chapter_name_lossy(path: &Path) -> Cow<'_, str> {
    if is_image_file(path) || is_archive_file(path) {
        path.file_stem()
            .map(|stem| stem.to_string_lossy())
            .unwrap_or(Cow::Borrowed(""))
    } else {
        get_file_name_lossy(path)
    }
}

/// Whether the path lies in a metadata or trash folder, or is a macOS
/// resource fork.
///
/// `__MACOSX`, `.qpkg`, `.yacreaderlibrary` and `.caltrash` may appear
/// anywhere; `@Recently-Snapshot`, `@recycle`, `#recycle` and `._` only at
/// the start of the path. A file name starting with `._` is rejected too.
pub fn has_blacklisted_folder(path: &Path) -> bool {
    let full = path.to_string_lossy();

    BLACKLISTED_FRAGMENTS.iter().any(|f| full.contains(f))
        || BLACKLISTED_PREFIXES.iter().any(|p| full.starts_with(p))
        || full.starts_with(MAC_OS_METADATA_PREFIX)
        || get_file_name_lossy(path).starts_with(MAC_OS_METADATA_PREFIX)
}

/// Whether the file name marks an image as the designated cover.
///
/// Matches `cover.jpg`, `!cover.png`, `folder.jpg` and tagged names such as
/// `p000 [Cover].jpg`, but not `back cover.jpg` or `discover.png`.
pub fn is_cover_image(path: &Path) -> bool {
    if !is_image_file(path) {
        return false;
    }
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or(Cow::Borrowed(""));

    COVER_IMAGE_REGEX.is_match(&stem) && !BACK_COVER_REGEX.is_match(&stem)
}
