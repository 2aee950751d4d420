use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `article` table.
///
/// `id` is `None` until the store assigns one on first save and never changes afterwards.
#[derive(FromRow, Serialize, Deserialize, Clone, Default, PartialEq, Eq, Debug)]
pub struct Article {
    /// Store assigned identifier.
    pub id: Option<i64>,
    /// Article title.
    pub title: Option<String>,
    /// Article body text.
    pub content: Option<String>,
}

impl Article {
    /// Merge `other` into `self`.
    ///
    /// Each of `title` and `content` is overwritten only when `other` provides a value.
    /// The id is not part of the merge.
    pub fn patch(&mut self, other: &Self) {
        if let Some(title) = &other.title {
            self.title = Some(title.clone());
        }
        if let Some(content) = &other.content {
            self.content = Some(content.clone());
        }
    }
}
