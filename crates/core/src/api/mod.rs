//! High-level API module for reading p2m streams.
//!
//! # Example
//!
//! ```ignore
//! use p2m_core::api::{read_pages, ReadOptions};
//!
//! let file = std::fs::File::open("document.p2m")?;
//! let options = ReadOptions {
//!     page_range: Some(ReadOptions::parse_page_range("2-4")?),
//!     ..ReadOptions::default()
//! };
//! for page in read_pages(file, Some(options))? {
//!     println!("{}", page?.text());
//! }
//! ```

pub mod high_level;

// Re-export for convenience
pub use high_level::{
    Document, PageIterator, ReadOptions, read_document, read_document_from_bytes,
    read_document_from_path, read_pages, read_text,
};
