// crates/extract_marked_comments/src/lib.rs

//! Pulls documentation text out of source files.
//!
//! A source line such as `int x; //# Describes x` carries documentation
//! after the marker token (`//#` by default). Everything up to and including
//! the first marker is code and is dropped; the rest, trimmed, is kept.
//!
//! Line helpers live in [`utils::marker_utils`]; reading files goes through
//! the [`processor::CommentExtractor`] trait.

pub mod processor;
pub mod utils;

pub use processor::{extract_comments, CommentExtractor, DefaultCommentExtractor};
pub use utils::marker_utils::{extract_comment, extract_comments_from_str, split_lines};
