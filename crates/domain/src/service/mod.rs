//! Request level operations on articles and comments.

mod article;
mod comment;

pub use article::ArticleService;
pub use comment::CommentService;
