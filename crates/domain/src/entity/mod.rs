//! Stored rows and the rules that guard their mutation.

mod article;
mod comment;

pub use article::Article;
pub use comment::Comment;
