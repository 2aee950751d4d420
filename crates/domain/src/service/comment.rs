use sqlx::SqlitePool;

use crate::dto::CommentDto;
use crate::entity::Comment;
use crate::store::{article as articles, comment as comments};
use crate::{Error, Result};

/// Comment lookups and writes. Results are mapped to [`CommentDto`].
#[derive(Clone, Debug)]
pub struct CommentService {
    pool: SqlitePool,
}

impl CommentService {
    /// Create a new `CommentService` on top of `pool`.
    #[inline]
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Comments of the article `article_id` in row order. Unknown articles have no comments.
    pub async fn comments(&self, article_id: i64) -> Result<Vec<CommentDto>> {
        let found = comments::find_by_article_id(&self.pool, article_id).await?;
        Ok(found.into_iter().map(CommentDto::from).collect())
    }

    /// Comments written under `nickname` in row order.
    pub async fn by_nickname(&self, nickname: &str) -> Result<Vec<CommentDto>> {
        let found = comments::find_by_nickname(&self.pool, nickname).await?;
        Ok(found.into_iter().map(CommentDto::from).collect())
    }

    /// Attach a new comment built from `dto` to the article `article_id`.
    ///
    /// When `dto` leaves `article_id` out, the comment goes to `article_id`.
    pub async fn create(&self, article_id: i64, dto: CommentDto) -> Result<CommentDto> {
        let mut tx = self.pool.begin().await?;
        let article = articles::find_by_id(&mut *tx, article_id)
            .await?
            .ok_or(Error::ArticleNotFound(article_id))?;

        let dto = CommentDto {
            article_id: dto.article_id.or(Some(article_id)),
            ..dto
        };
        let comment = Comment::create(&dto, &article).inspect_err(|e| {
            tracing::info!(article_id, error = %e, "rejected comment creation");
        })?;
        let created = comments::save(&mut *tx, &comment).await?;
        tx.commit().await?;
        tracing::debug!(id = ?created.id, article_id, "comment created");
        Ok(created.into())
    }

    /// Merge the provided fields of `dto` into the comment `id`.
    pub async fn update(&self, id: i64, dto: CommentDto) -> Result<CommentDto> {
        let mut tx = self.pool.begin().await?;
        let mut target = comments::find_by_id(&mut *tx, id)
            .await?
            .ok_or(Error::CommentNotFound(id))?;

        target.patch(&dto).inspect_err(|e| {
            tracing::info!(id, error = %e, "rejected comment update");
        })?;
        let updated = comments::save(&mut *tx, &target).await?;
        tx.commit().await?;
        Ok(updated.into())
    }

    /// Remove the comment `id` and return its last state.
    pub async fn delete(&self, id: i64) -> Result<CommentDto> {
        let mut tx = self.pool.begin().await?;
        let target = comments::find_by_id(&mut *tx, id)
            .await?
            .ok_or(Error::CommentNotFound(id))?;
        comments::delete(&mut *tx, &target).await?;
        tx.commit().await?;
        Ok(target.into())
    }
}
