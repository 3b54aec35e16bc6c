//! File categorization by extension.
//!
//! This module maps file extensions to broad categories (Images, Documents,
//! Archives, ...) that name the destination subfolders. The mapping is an
//! ordered table built once at startup; the first category listing an
//! extension wins, and anything unrecognized falls back to [`Category::Others`].
//!
//! # Examples
//!
//! ```
//! use forg::category::{Category, CategoryTable};
//!
//! let table = CategoryTable::new();
//! assert_eq!(table.classify("photo.JPG"), Category::Images);
//! assert_eq!(table.classify("notes.md"), Category::Documents);
//! assert_eq!(table.classify("mystery.xyz"), Category::Others);
//! ```

use std::collections::HashMap;

/// A broad file category, naming one destination subfolder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Image files (JPG, PNG, SVG, etc.)
    Images,
    /// Video files (MP4, MKV, AVI, etc.)
    Videos,
    /// Audio files (MP3, WAV, FLAC, etc.)
    Audio,
    /// Document files (PDF, DOCX, TXT, etc.)
    Documents,
    /// Archive and package files (ZIP, TAR, ISO, etc.)
    Archives,
    /// Source code and configuration files (RS, PY, JSON, etc.)
    Code,
    /// Executables and shared libraries (EXE, ELF, SO, etc.)
    Executables,
    /// Database files (SQL, SQLITE, etc.)
    Database,
    /// E-book files (EPUB, MOBI, etc.)
    Books,
    /// Fallback for unrecognized or missing extensions.
    Others,
}

impl Category {
    /// All categories in table definition order, `Others` last.
    ///
    /// This is the display order for the summary table.
    pub const ALL: [Category; 10] = [
        Category::Images,
        Category::Videos,
        Category::Audio,
        Category::Documents,
        Category::Archives,
        Category::Code,
        Category::Executables,
        Category::Database,
        Category::Books,
        Category::Others,
    ];

    /// Returns the folder name for this category.
    ///
    /// # Examples
    ///
    /// ```
    /// use forg::category::Category;
    ///
    /// assert_eq!(Category::Images.dir_name(), "Images");
    /// assert_eq!(Category::Others.dir_name(), "Others");
    /// ```
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Images => "Images",
            Category::Videos => "Videos",
            Category::Audio => "Audio",
            Category::Documents => "Documents",
            Category::Archives => "Archives",
            Category::Code => "Code",
            Category::Executables => "Executables",
            Category::Database => "Database",
            Category::Books => "Books",
            Category::Others => "Others",
        }
    }
}

/// Extension sets per category, in definition order. First match wins.
const CATEGORY_EXTENSIONS: &[(Category, &[&str])] = &[
    (
        Category::Images,
        &[
            "jpg", "jpeg", "png", "gif", "bmp", "tiff", "svg", "webp", "ico", "psd", "ai", "eps",
        ],
    ),
    (
        Category::Videos,
        &[
            "mp4", "mkv", "avi", "mov", "wmv", "flv", "webm", "m4v", "mpeg", "mpg", "3gp", "rmvb",
        ],
    ),
    (
        Category::Audio,
        &[
            "mp3", "wav", "flac", "aac", "ogg", "m4a", "wma", "aiff", "mid", "midi",
        ],
    ),
    (
        Category::Documents,
        &[
            "pdf", "doc", "docx", "txt", "rtf", "odt", "xls", "xlsx", "ppt", "pptx", "csv", "md",
            "markdown", "log",
        ],
    ),
    (
        Category::Archives,
        &[
            "zip", "rar", "7z", "tar", "gz", "bz2", "xz", "iso", "dmg", "pkg", "deb", "rpm",
        ],
    ),
    (
        Category::Code,
        &[
            "cpp", "c", "h", "hpp", "py", "js", "ts", "html", "htm", "css", "scss", "java", "go",
            "rs", "rb", "php", "swift", "kt", "scala", "sh", "bash", "json", "xml", "yaml", "yml",
            "toml", "ini", "cfg", "conf",
        ],
    ),
    (
        Category::Executables,
        &["exe", "app", "bin", "msi", "run", "elf", "so", "dll", "dylib"],
    ),
    (
        Category::Database,
        &["sql", "db", "sqlite", "mdb", "accdb", "frm", "ibd"],
    ),
    (
        Category::Books,
        &["epub", "mobi", "azw", "azw3", "fb2", "djvu", "chm"],
    ),
];

/// Extracts the extension of a filename, lowercased, without the dot.
///
/// Returns an empty string when the name has no `.` or ends with one.
///
/// # Examples
///
/// ```
/// use forg::category::file_extension;
///
/// assert_eq!(file_extension("photo.JPG"), "jpg");
/// assert_eq!(file_extension("noext"), "");
/// assert_eq!(file_extension("trailing."), "");
/// ```
pub fn file_extension(filename: &str) -> String {
    match filename.rfind('.') {
        Some(pos) if pos + 1 < filename.len() => filename[pos + 1..].to_lowercase(),
        _ => String::new(),
    }
}

/// Immutable extension-to-category lookup table.
///
/// Built once at startup from the static extension sets. Lookups are
/// case-insensitive; if an extension is listed under two categories, the
/// earlier category in definition order wins.
#[derive(Debug, Clone)]
pub struct CategoryTable {
    lookup: HashMap<&'static str, Category>,
}

impl CategoryTable {
    /// Creates the table with all standard extension mappings.
    pub fn new() -> Self {
        let mut lookup = HashMap::new();
        for (category, extensions) in CATEGORY_EXTENSIONS {
            for ext in *extensions {
                // First match in definition order wins.
                lookup.entry(*ext).or_insert(*category);
            }
        }
        Self { lookup }
    }

    /// Returns the category for a lowercase-folded extension, if mapped.
    pub fn extension_to_category(&self, ext: &str) -> Option<Category> {
        self.lookup.get(ext.to_lowercase().as_str()).copied()
    }

    /// Determines the category for a filename.
    ///
    /// Pure function: extracts the extension and looks it up. Files with no
    /// extension, a trailing dot, or an unrecognized extension map to
    /// [`Category::Others`].
    pub fn classify(&self, filename: &str) -> Category {
        let ext = file_extension(filename);
        if ext.is_empty() {
            return Category::Others;
        }
        self.extension_to_category(&ext).unwrap_or(Category::Others)
    }

    /// Iterates the (category, extensions) pairs in definition order.
    ///
    /// Used by the help screen to print the category overview.
    pub fn entries(&self) -> impl Iterator<Item = (Category, &'static [&'static str])> {
        CATEGORY_EXTENSIONS.iter().copied()
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::new()
    }
}
