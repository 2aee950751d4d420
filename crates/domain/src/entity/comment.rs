use sqlx::FromRow;

use crate::dto::CommentDto;
use crate::entity::Article;
use crate::{Error, Result};

/// A row of the `comment` table.
///
/// The parent article is referenced by id only; resolve it through [`crate::store::article`] when needed.
#[derive(FromRow, Clone, Default, PartialEq, Eq, Debug)]
pub struct Comment {
    /// Store assigned identifier.
    pub id: Option<i64>,
    /// Id of the article this comment belongs to.
    pub article_id: i64,
    /// Author label.
    pub nickname: Option<String>,
    /// Comment text.
    pub body: Option<String>,
}

impl Comment {
    /// Build a new comment from `dto`, attached to the already persisted `article`.
    ///
    /// Fails when `dto` carries an id, or when its `article_id` is not the id of `article`.
    /// Nothing is written; persisting the comment is up to the caller.
    pub fn create(dto: &CommentDto, article: &Article) -> Result<Self> {
        if let Some(id) = dto.id {
            return Err(Error::CommentIdPresent(id));
        }
        let article_id = match (dto.article_id, article.id) {
            (Some(declared), Some(actual)) if declared == actual => actual,
            (declared, actual) => return Err(Error::ArticleIdMismatch { declared, actual }),
        };
        Ok(Self {
            id: None,
            article_id,
            nickname: dto.nickname.clone(),
            body: dto.body.clone(),
        })
    }

    /// Merge the provided fields of `dto` into this comment.
    ///
    /// `dto.id` must equal the id of this comment, otherwise nothing is changed.
    pub fn patch(&mut self, dto: &CommentDto) -> Result<()> {
        if self.id.is_none() || self.id != dto.id {
            return Err(Error::CommentIdMismatch {
                target: self.id,
                declared: dto.id,
            });
        }
        if let Some(nickname) = &dto.nickname {
            self.nickname = Some(nickname.clone());
        }
        if let Some(body) = &dto.body {
            self.body = Some(body.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie_article() -> Article {
        Article {
            id: Some(4),
            title: Some("What is your favorite movie?".into()),
            content: Some("comment me".into()),
        }
    }

    fn kim() -> Comment {
        Comment {
            id: Some(2),
            article_id: 4,
            nickname: Some("Kim".into()),
            body: Some("I am Sam".into()),
        }
    }

    #[test]
    fn test_create_attaches_to_article() {
        let dto = CommentDto {
            id: None,
            article_id: Some(4),
            nickname: Some("Kim".into()),
            body: Some("hi".into()),
        };
        let comment = Comment::create(&dto, &movie_article()).unwrap();
        assert_eq!(comment.id, None);
        assert_eq!(comment.article_id, 4);
        assert_eq!(comment.nickname.as_deref(), Some("Kim"));
        assert_eq!(comment.body.as_deref(), Some("hi"));
    }

    #[test]
    fn test_create_allows_empty_fields() {
        let dto = CommentDto {
            article_id: Some(4),
            ..Default::default()
        };
        let comment = Comment::create(&dto, &movie_article()).unwrap();
        assert_eq!(comment.nickname, None);
        assert_eq!(comment.body, None);
    }

    #[test]
    fn test_create_rejects_id() {
        let dto = CommentDto {
            id: Some(10),
            article_id: Some(4),
            nickname: Some("Kim".into()),
            body: Some("hi".into()),
        };
        let err = Comment::create(&dto, &movie_article()).unwrap_err();
        assert!(matches!(err, Error::CommentIdPresent(10)));
        assert!(err.is_validation());
    }

    #[test]
    fn test_create_rejects_article_mismatch() {
        let dto = CommentDto {
            article_id: Some(5),
            nickname: Some("Kim".into()),
            ..Default::default()
        };
        let err = Comment::create(&dto, &movie_article()).unwrap_err();
        assert!(matches!(
            err,
            Error::ArticleIdMismatch {
                declared: Some(5),
                actual: Some(4)
            }
        ));

        let dto = CommentDto::default();
        assert!(Comment::create(&dto, &movie_article()).is_err());

        let unsaved = Article {
            id: None,
            title: Some("title".into()),
            content: Some("content".into()),
        };
        let dto = CommentDto {
            article_id: Some(4),
            ..Default::default()
        };
        assert!(Comment::create(&dto, &unsaved).is_err());
    }

    #[test]
    fn test_patch_only_body() {
        let mut comment = kim();
        comment
            .patch(&CommentDto {
                id: Some(2),
                body: Some("updated".into()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(comment.nickname.as_deref(), Some("Kim"));
        assert_eq!(comment.body.as_deref(), Some("updated"));
    }

    #[test]
    fn test_patch_with_nothing() {
        let mut comment = kim();
        comment
            .patch(&CommentDto {
                id: Some(2),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(comment, kim());
    }

    #[test]
    fn test_patch_id_mismatch_leaves_fields() {
        let mut comment = kim();
        let err = comment
            .patch(&CommentDto {
                id: Some(3),
                nickname: Some("Lee".into()),
                body: Some("x".into()),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(
            err,
            Error::CommentIdMismatch {
                target: Some(2),
                declared: Some(3)
            }
        ));
        assert_eq!(comment, kim());

        assert!(comment.patch(&CommentDto::default()).is_err());
        assert_eq!(comment, kim());
    }

    #[test]
    fn test_patch_does_not_move_comment() {
        let mut comment = kim();
        comment
            .patch(&CommentDto {
                id: Some(2),
                article_id: Some(6),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(comment.article_id, 4);
    }
}
