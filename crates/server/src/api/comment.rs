//! Comment endpoints.

use bulletin_domain::CommentDto;
use salvo::prelude::*;
use salvo::writing::Json;

use super::{path_id, state};
use crate::{AppError, AppResult};

/// `GET /api/articles/{article_id}/comments`
#[handler]
pub async fn comments(req: &mut Request, depot: &mut Depot) -> AppResult<Json<Vec<CommentDto>>> {
    let article_id = path_id(req, "article_id")?;
    Ok(Json(state(depot)?.comments.comments(article_id).await?))
}

/// `POST /api/articles/{article_id}/comments`
#[handler]
pub async fn create(req: &mut Request, depot: &mut Depot) -> AppResult<Json<CommentDto>> {
    let article_id = path_id(req, "article_id")?;
    let dto = req.parse_json::<CommentDto>().await?;
    Ok(Json(state(depot)?.comments.create(article_id, dto).await?))
}

/// `PATCH /api/comments/{id}`
#[handler]
pub async fn update(req: &mut Request, depot: &mut Depot) -> AppResult<Json<CommentDto>> {
    let id = path_id(req, "id")?;
    let dto = req.parse_json::<CommentDto>().await?;
    Ok(Json(state(depot)?.comments.update(id, dto).await?))
}

/// `DELETE /api/comments/{id}`
#[handler]
pub async fn delete(req: &mut Request, depot: &mut Depot) -> AppResult<Json<CommentDto>> {
    let id = path_id(req, "id")?;
    Ok(Json(state(depot)?.comments.delete(id).await?))
}

/// `GET /api/comments?nickname={nickname}`
#[handler]
pub async fn by_nickname(req: &mut Request, depot: &mut Depot) -> AppResult<Json<Vec<CommentDto>>> {
    let nickname = req
        .query::<String>("nickname")
        .ok_or(AppError::Param("nickname"))?;
    Ok(Json(state(depot)?.comments.by_nickname(&nickname).await?))
}
