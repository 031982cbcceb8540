#![forbid(unsafe_code)]

//! Base transliteration table.
//!
//! Maps non-ASCII code points to ASCII replacement strings. An empty
//! replacement means "drop this character". The built-in table is built
//! from [`crate::data`] once per process; custom tables can be assembled
//! with [`BaseTable::insert`] or parsed from a text asset with
//! [`BaseTable::parse`].
//!
//! # Text format
//!
//! ```text
//! # comment
//! U+00E9	e
//! 00DF	ss
//! 0301
//! ```
//!
//! One entry per line: a hexadecimal code point (optional `U+` prefix), a
//! tab, and the replacement (the rest of the line, taken verbatim). A line
//! without a tab maps the code point to the empty string. Blank lines and
//! lines starting with `#` are ignored. Later lines win over earlier ones.

use std::borrow::Cow;
use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::data::BASE_ENTRIES;

/// Largest valid Unicode scalar value.
pub const MAX_CODE_POINT: u32 = 0x10_FFFF;

/// Why a table entry was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableErrorKind {
    /// The code point field is not hexadecimal.
    InvalidCodePoint(String),
    /// The code point exceeds [`MAX_CODE_POINT`].
    OutOfRange(u32),
    /// The code point is a UTF-16 surrogate.
    Surrogate(u32),
    /// ASCII never has an entry; it always passes through.
    AsciiKey(u32),
    /// Replacements must be ASCII.
    NonAsciiReplacement(u32),
}

impl std::fmt::Display for TableErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCodePoint(raw) => write!(f, "invalid code point '{raw}'"),
            Self::OutOfRange(cp) => write!(f, "code point 0x{cp:X} is beyond U+10FFFF"),
            Self::Surrogate(cp) => write!(f, "code point U+{cp:04X} is a surrogate"),
            Self::AsciiKey(cp) => write!(f, "ASCII code point U+{cp:04X} cannot have an entry"),
            Self::NonAsciiReplacement(cp) => {
                write!(f, "replacement for U+{cp:04X} is not ASCII")
            }
        }
    }
}

impl std::error::Error for TableErrorKind {}

/// A rejected line while parsing a table asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableError {
    /// 1-based line number.
    pub line: usize,
    /// What was wrong with it.
    pub kind: TableErrorKind,
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

/// Code point to ASCII replacement mapping.
#[derive(Debug, Clone, Default)]
pub struct BaseTable {
    entries: FxHashMap<u32, Cow<'static, str>>,
}

impl BaseTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide built-in table.
    #[must_use]
    pub fn builtin() -> &'static Self {
        static BUILTIN: OnceLock<BaseTable> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let table = Self::from_static(BASE_ENTRIES);
            debug!(entries = table.len(), "built-in base table built");
            table
        })
    }

    /// Build a table from trusted static rows without validation.
    ///
    /// Duplicate code points keep the last row.
    #[must_use]
    pub fn from_static(rows: &'static [(u32, &'static str)]) -> Self {
        let mut entries = FxHashMap::default();
        entries.reserve(rows.len());
        for &(code_point, replacement) in rows {
            if entries
                .insert(code_point, Cow::Borrowed(replacement))
                .is_some()
            {
                trace!(code_point, "duplicate base row replaced");
            }
        }
        Self { entries }
    }

    /// Insert an entry, returning the replacement it displaced.
    ///
    /// # Errors
    ///
    /// Rejects ASCII, surrogate and out-of-range code points, and non-ASCII
    /// replacements.
    pub fn insert(
        &mut self,
        code_point: u32,
        replacement: impl Into<Cow<'static, str>>,
    ) -> Result<Option<Cow<'static, str>>, TableErrorKind> {
        let replacement = replacement.into();
        validate_key(code_point)?;
        if !replacement.is_ascii() {
            return Err(TableErrorKind::NonAsciiReplacement(code_point));
        }
        let previous = self.entries.insert(code_point, replacement);
        if previous.is_some() {
            trace!(code_point, "base entry replaced");
        }
        Ok(previous)
    }

    /// Parse a table from the text format described in the module docs.
    ///
    /// # Errors
    ///
    /// Returns the first rejected line.
    pub fn parse(src: &str) -> Result<Self, TableError> {
        let mut table = Self::new();
        for (index, raw) in src.lines().enumerate() {
            let line = index + 1;
            if raw.trim().is_empty() || raw.trim_start().starts_with('#') {
                continue;
            }
            let (key, replacement) = raw.split_once('\t').unwrap_or((raw, ""));
            let code_point =
                parse_code_point(key).map_err(|kind| TableError { line, kind })?;
            table
                .insert(code_point, replacement.to_owned())
                .map_err(|kind| TableError { line, kind })?;
        }
        debug!(entries = table.len(), "base table parsed");
        Ok(table)
    }

    /// The replacement for a code point, if any.
    #[inline]
    #[must_use]
    pub fn get(&self, code_point: u32) -> Option<&str> {
        self.entries.get(&code_point).map(AsRef::as_ref)
    }

    /// Whether the code point has an entry.
    #[must_use]
    pub fn contains(&self, code_point: u32) -> bool {
        self.entries.contains_key(&code_point)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate_key(code_point: u32) -> Result<(), TableErrorKind> {
    match code_point {
        0..=0x7F => Err(TableErrorKind::AsciiKey(code_point)),
        0xD800..=0xDFFF => Err(TableErrorKind::Surrogate(code_point)),
        cp if cp > MAX_CODE_POINT => Err(TableErrorKind::OutOfRange(cp)),
        _ => Ok(()),
    }
}

fn parse_code_point(raw: &str) -> Result<u32, TableErrorKind> {
    let trimmed = raw.trim();
    let digits = trimmed
        .strip_prefix("U+")
        .or_else(|| trimmed.strip_prefix("u+"))
        .unwrap_or(trimmed);
    u32::from_str_radix(digits, 16).map_err(|_| TableErrorKind::InvalidCodePoint(raw.to_owned()))
}
