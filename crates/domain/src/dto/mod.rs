//! Transfer shapes exchanged at the HTTP boundary.

mod article_form;
mod comment_dto;

pub use article_form::ArticleForm;
pub use comment_dto::CommentDto;
