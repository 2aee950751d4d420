use sqlx::SqlitePool;

use crate::dto::ArticleForm;
use crate::entity::Article;
use crate::store::article as articles;
use crate::{Error, Result};

/// Looked up after a batch insert to settle it. Store ids are always positive, so the lookup
/// finds nothing and the batch is rolled back.
const SETTLEMENT_ID: i64 = -1;

/// Article lookups and writes.
///
/// Operations that find nothing to act on return `Ok(None)`; `Err` is kept for real failures.
#[derive(Clone, Debug)]
pub struct ArticleService {
    pool: SqlitePool,
}

impl ArticleService {
    /// Create a new `ArticleService` on top of `pool`.
    #[inline]
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All stored articles in row order.
    pub async fn list(&self) -> Result<Vec<Article>> {
        Ok(articles::find_all(&self.pool).await?)
    }

    /// The article with `id`, or `None` when there is none.
    pub async fn get(&self, id: i64) -> Result<Option<Article>> {
        Ok(articles::find_by_id(&self.pool, id).await?)
    }

    /// Store a new article built from `form`.
    ///
    /// Returns `None` without writing anything when the form already carries an id.
    pub async fn create(&self, form: &ArticleForm) -> Result<Option<Article>> {
        let article = form.to_entity();
        if let Some(id) = article.id {
            tracing::info!(id, "article form already carries an id, refusing to create");
            return Ok(None);
        }
        let created = articles::save(&self.pool, &article).await?;
        tracing::debug!(id = ?created.id, "article created");
        Ok(Some(created))
    }

    /// Merge `form` into the article with `id`.
    ///
    /// Returns `None` when no article has that id or when `form.id` is not `id`.
    pub async fn update(&self, id: i64, form: &ArticleForm) -> Result<Option<Article>> {
        let article = form.to_entity();
        tracing::info!(id, ?article, "update article");

        let mut tx = self.pool.begin().await?;
        let target = articles::find_by_id(&mut *tx, id).await?;
        let mut target = match target {
            Some(target) if article.id == Some(id) => target,
            target => {
                tracing::info!(id, ?article, found = target.is_some(), "bad article update request");
                return Ok(None);
            }
        };
        target.patch(&article);
        let updated = articles::save(&mut *tx, &target).await?;
        tx.commit().await?;
        Ok(Some(updated))
    }

    /// Remove the article with `id` and return the removed row, or `None` when there is none.
    pub async fn delete(&self, id: i64) -> Result<Option<Article>> {
        let mut tx = self.pool.begin().await?;
        let Some(target) = articles::find_by_id(&mut *tx, id).await? else {
            tracing::info!(id, "article to delete not found");
            return Ok(None);
        };
        articles::delete(&mut *tx, &target).await?;
        tx.commit().await?;
        Ok(Some(target))
    }

    /// Store every form as a new article within one transaction, then settle the batch.
    ///
    /// Settlement always fails, so this returns [`Error::BatchAborted`] and none of the
    /// articles remain stored. Ids carried by the forms are ignored.
    pub async fn create_articles(&self, forms: &[ArticleForm]) -> Result<Vec<Article>> {
        let batch: Vec<Article> = forms
            .iter()
            .map(|form| Article {
                id: None,
                ..form.to_entity()
            })
            .collect();

        let mut tx = self.pool.begin().await?;
        let mut created = Vec::with_capacity(batch.len());
        for article in &batch {
            created.push(articles::save(&mut *tx, article).await?);
        }

        if articles::find_by_id(&mut *tx, SETTLEMENT_ID).await?.is_none() {
            tracing::warn!(count = created.len(), "payment failed, rolling back article batch");
            tx.rollback().await?;
            return Err(Error::BatchAborted("payment failed".into()));
        }
        tx.commit().await?;
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;
    use crate::store::memory_with_samples;

    async fn service() -> ArticleService {
        ArticleService::new(memory_with_samples().await.unwrap())
    }

    fn form(id: Option<i64>, title: Option<&str>, content: Option<&str>) -> ArticleForm {
        ArticleForm {
            id,
            title: title.map(Into::into),
            content: content.map(Into::into),
        }
    }

    #[tokio::test]
    async fn test_list_and_get() {
        let service = service().await;
        assert_eq!(service.list().await.unwrap().len(), 6);
        let article = service.get(1).await.unwrap().unwrap();
        assert_eq!(article.title.as_deref(), Some("가가가가"));
        assert!(service.get(-1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create() {
        let service = service().await;
        let created = service
            .create(&form(None, Some("라라라라"), Some("4444")))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(created.id, Some(7));
        assert_eq!(service.get(7).await.unwrap(), Some(created));
    }

    #[tokio::test]
    async fn test_create_with_id_is_absent() {
        let service = service().await;
        let created = service.create(&form(Some(7), Some("라라라라"), Some("4444"))).await.unwrap();
        assert!(created.is_none());
        assert_eq!(service.list().await.unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_update_merges_fields() {
        let service = service().await;
        let updated = service
            .update(1, &form(Some(1), None, Some("1234")))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.id, Some(1));
        assert_eq!(updated.title.as_deref(), Some("가가가가"));
        assert_eq!(updated.content.as_deref(), Some("1234"));
        assert_eq!(service.get(1).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_update_missing_row_is_absent() {
        let service = service().await;
        let updated = service.update(42, &form(Some(42), Some("T"), None)).await.unwrap();
        assert!(updated.is_none());
        assert!(logs_contain("bad article update request"));
    }

    #[tokio::test]
    async fn test_update_id_mismatch_is_absent() {
        let service = service().await;
        assert!(service.update(1, &form(Some(2), Some("T"), None)).await.unwrap().is_none());
        assert!(service.update(1, &form(None, Some("T"), None)).await.unwrap().is_none());
        let untouched = service.get(1).await.unwrap().unwrap();
        assert_eq!(untouched.title.as_deref(), Some("가가가가"));
    }

    #[tokio::test]
    async fn test_delete() {
        let service = service().await;
        let removed = service.delete(3).await.unwrap().unwrap();
        assert_eq!(removed.title.as_deref(), Some("다다다다"));
        assert!(service.get(3).await.unwrap().is_none());
        assert!(service.delete(3).await.unwrap().is_none());
    }

    #[tokio::test]
    #[traced_test]
    async fn test_create_articles_rolls_back() {
        let service = service().await;
        let forms = vec![
            form(None, Some("가가가가"), Some("1111")),
            form(None, Some("나나나나"), Some("2222")),
            form(Some(-1), Some("다다다다"), Some("3333")),
        ];
        let err = service.create_articles(&forms).await.unwrap_err();
        assert!(matches!(err, Error::BatchAborted(_)));
        assert!(logs_contain("rolling back article batch"));

        let stored = service.list().await.unwrap();
        assert_eq!(stored.len(), 6);
        assert!(stored.iter().all(|article| article.id.is_some_and(|id| id <= 6)));
        assert!(service.get(-1).await.unwrap().is_none());

        let created = service.create(&form(None, Some("T"), None)).await.unwrap().unwrap();
        assert!(created.id.is_some_and(|id| id > 6));
    }
}
