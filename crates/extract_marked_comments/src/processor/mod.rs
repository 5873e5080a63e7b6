mod file_processor;

pub use file_processor::{extract_comments, CommentExtractor, DefaultCommentExtractor};
