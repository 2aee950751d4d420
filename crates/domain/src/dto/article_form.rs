use serde::{Deserialize, Serialize};

use crate::entity::Article;

/// Inbound article payload.
///
/// Omitted and `null` fields both deserialize to `None`, which a patch treats as "leave unchanged".
#[derive(Serialize, Deserialize, Clone, Default, PartialEq, Eq, Debug)]
#[serde(default)]
pub struct ArticleForm {
    /// Article id, only meaningful for updates.
    pub id: Option<i64>,
    /// Article title.
    pub title: Option<String>,
    /// Article body text.
    pub content: Option<String>,
}

impl ArticleForm {
    /// Convert the form into an entity, keeping whatever id the form carries.
    #[must_use]
    pub fn to_entity(&self) -> Article {
        Article {
            id: self.id,
            title: self.title.clone(),
            content: self.content.clone(),
        }
    }
}
