//! Stream model types - document metadata, pages and drawing operations.
//!
//! This module contains the decoded p2m data model:
//! - `meta` - Document header (Meta, FontInfo)
//! - `page` - Page records (Page, Size, Glyph, Rect)
//! - `path` - Drawing operations (Path, PathType, PathOp, Color)

pub mod meta;
pub mod page;
pub mod path;

// Re-export main types for convenience
pub use meta::{FontInfo, Meta};
pub use page::{Glyph, Page, Rect, Size};
pub use path::{Color, Path, PathOp, PathType};
