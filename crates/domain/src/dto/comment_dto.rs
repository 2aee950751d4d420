use serde::{Deserialize, Serialize};

use crate::entity::Comment;

/// Flat view of a comment plus the id of its article.
///
/// Serialized with camelCase keys: `{id, articleId, nickname, body}`.
#[derive(Serialize, Deserialize, Clone, Default, PartialEq, Eq, Debug)]
#[serde(default, rename_all = "camelCase")]
pub struct CommentDto {
    /// Comment id.
    pub id: Option<i64>,
    /// Id of the parent article.
    pub article_id: Option<i64>,
    /// Author label.
    pub nickname: Option<String>,
    /// Comment text.
    pub body: Option<String>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            article_id: Some(comment.article_id),
            nickname: comment.nickname,
            body: comment.body,
        }
    }
}
