//! Article endpoints.

use bulletin_domain::{Article, ArticleForm};
use salvo::prelude::*;
use salvo::writing::Json;

use super::{path_id, state};
use crate::{AppError, AppResult};

/// `GET /api/articles`
#[handler]
pub async fn index(depot: &mut Depot) -> AppResult<Json<Vec<Article>>> {
    Ok(Json(state(depot)?.articles.list().await?))
}

/// `GET /api/articles/{article_id}`
#[handler]
pub async fn show(req: &mut Request, depot: &mut Depot) -> AppResult<Json<Article>> {
    let id = path_id(req, "article_id")?;
    let article = state(depot)?.articles.get(id).await?;
    article
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("article {id}")))
}

/// `POST /api/articles`
#[handler]
pub async fn create(req: &mut Request, depot: &mut Depot) -> AppResult<Json<Article>> {
    let form = req.parse_json::<ArticleForm>().await?;
    let created = state(depot)?.articles.create(&form).await?;
    created
        .map(Json)
        .ok_or_else(|| AppError::BadRequest("a new article must not carry an id".into()))
}

/// `PATCH /api/articles/{article_id}`
#[handler]
pub async fn update(req: &mut Request, depot: &mut Depot) -> AppResult<Json<Article>> {
    let id = path_id(req, "article_id")?;
    let form = req.parse_json::<ArticleForm>().await?;
    let updated = state(depot)?.articles.update(id, &form).await?;
    updated
        .map(Json)
        .ok_or_else(|| AppError::BadRequest(format!("cannot update article {id} with form id {:?}", form.id)))
}

/// `DELETE /api/articles/{article_id}`
#[handler]
pub async fn delete(req: &mut Request, depot: &mut Depot) -> AppResult<Json<Article>> {
    let id = path_id(req, "article_id")?;
    let removed = state(depot)?.articles.delete(id).await?;
    removed
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("article {id}")))
}

/// `POST /api/transaction-test`
///
/// Creates every article of the body in one batch. The batch never settles, so this always
/// answers with an error and stores nothing.
#[handler]
pub async fn transaction_test(req: &mut Request, depot: &mut Depot) -> AppResult<Json<Vec<Article>>> {
    let forms = req.parse_json::<Vec<ArticleForm>>().await?;
    let created = state(depot)?.articles.create_articles(&forms).await?;
    Ok(Json(created))
}
