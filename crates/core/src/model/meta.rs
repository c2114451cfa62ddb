//! Document-level header record.
//!
//! Both records here are field-named maps on the wire. Keys are matched by
//! name, unknown keys are skipped and missing keys fall back to their
//! default, so newer producers can add entries without breaking readers.

use serde::{Deserialize, Serialize};

/// Metadata about the whole document, decoded once per stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Meta {
    /// Page count declared by the producer. Never checked against the
    /// number of page records that actually follow.
    pub pages: i64,
    pub file_name: String,
    pub creator: String,
    pub producer: String,

    // Remaining document info entries. The producer copies every string
    // in the PDF Info dictionary, so any of these may be absent.
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub keywords: Option<String>,
    pub creation_date: Option<String>,
    pub mod_date: Option<String>,

    /// Fonts used by the document. `None` when the key is missing or nil.
    pub font_info: Option<Vec<FontInfo>>,
}

impl Meta {
    /// Fonts used by the document, empty when none were reported.
    pub fn fonts(&self) -> &[FontInfo] {
        self.font_info.as_deref().unwrap_or(&[])
    }
}

/// Information about one font in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FontInfo {
    pub name: String,
    #[serde(rename = "Type")]
    pub font_type: String,
    pub encoding: String,
    pub embedded: bool,
    pub subset: bool,
    pub to_unicode: bool,
}
