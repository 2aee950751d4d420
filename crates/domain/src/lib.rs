//! Domain layer of the bulletin board.
//!
//! Articles own comments; comments point back at their article by id. The
//! [`store`] module is the persistence collaborator, the [`service`] module
//! orchestrates lookups, validation and writes on top of it.

pub mod dto;
pub mod entity;
mod error;
pub mod service;
pub mod store;

pub use self::dto::{ArticleForm, CommentDto};
pub use self::entity::{Article, Comment};
pub use self::error::Error;
pub use self::service::{ArticleService, CommentService};

/// Result type with [`Error`] as its error type.
pub type Result<T> = std::result::Result<T, Error>;

