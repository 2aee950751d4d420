//! HTTP surface of the bulletin board.
//!
//! ```no_run
//! use bulletin_server::{AppState, Config, route};
//! use salvo::prelude::*;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::from_env()?;
//! let state = AppState::prepare(&config).await?;
//! let acceptor = TcpListener::new(config.listen_addr.clone()).bind().await;
//! Server::new(acceptor).serve(route(state)).await;
//! # Ok(())
//! # }
//! ```

use bulletin_domain::{ArticleService, CommentService, store};
use salvo::affix_state;
use salvo::logging::Logger;
use salvo::prelude::*;
use sqlx::SqlitePool;

pub mod api;
pub mod config;
mod error;

pub use self::config::{Config, ConfigError};
pub use self::error::{AppError, AppResult, ErrorResponse};

/// Services shared by every request, injected into the [`Depot`].
#[derive(Clone, Debug)]
pub struct AppState {
    /// Article operations.
    pub articles: ArticleService,
    /// Comment operations.
    pub comments: CommentService,
}

impl AppState {
    /// Create the services on top of `pool`.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            articles: ArticleService::new(pool.clone()),
            comments: CommentService::new(pool),
        }
    }

    /// Open the database described by `config`, create the tables and load the sample rows
    /// when `config.seed` is set.
    pub async fn prepare(config: &Config) -> Result<Self, bulletin_domain::Error> {
        let pool = store::connect(&config.database_url, config.max_connections).await?;
        store::init_schema(&pool).await?;
        if config.seed {
            store::seed(&pool).await?;
        }
        Ok(Self::new(pool))
    }
}

/// Root router with request logging and `state` injected.
#[must_use]
pub fn route(state: AppState) -> Router {
    Router::new()
        .hoop(Logger::new())
        .hoop(affix_state::inject(state))
        .push(api::router())
}
