use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use db_pool::{create_pool, DbConfig};
use forum_service::config::{Config, LogFormat};
use forum_service::db::ensure_schema;
use forum_service::handlers;
use forum_service::repository::{ForumRepository, SqlxForumRepository};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.default_filter()));
    let registry = tracing_subscriber::registry().with(filter);

    match config.logging.format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

/// Forum Service
///
/// Serves posts, comments and votes as JSON over HTTP, backed by one SQLite file.
///
/// # Routes
///
/// - `GET /`, `GET|POST /api/posts/` - list and create posts
/// - `GET|POST|DELETE /api/post/{post_id}/` - read, edit, delete a post
/// - `POST /api/post/{post_id}/vote/` - vote on a post
/// - `GET /api/post/{post_id}/comments/`, `POST /api/post/{post_id}/comment/` - comments
/// - `POST /api/comment/{comment_id}/vote/` - vote on a comment
/// - `GET /health` - health check
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is the normal case outside local development
    let _ = dotenvy::dotenv();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&config);

    tracing::info!("Starting forum-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    let mut db_cfg = DbConfig::for_service("forum-service", &config.database.url);
    if std::env::var("DB_MAX_CONNECTIONS").is_err() {
        db_cfg.max_connections = config.database.max_connections;
    }
    db_cfg.log_config();

    let pool = create_pool(db_cfg)
        .await
        .context("failed to open forum database")?;
    ensure_schema(&pool)
        .await
        .context("failed to create forum tables")?;

    tracing::info!("Connected to database at {}", config.database.url);

    let repository: Arc<dyn ForumRepository> = Arc::new(SqlxForumRepository::new(pool.clone()));
    let repository_data = web::Data::new(repository);

    let bind_address = config.bind_address();
    tracing::info!("Starting HTTP server at {}", bind_address);

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(repository_data.clone())
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .configure(handlers::configure)
    })
    .bind(&bind_address)
    .with_context(|| format!("failed to bind {}", bind_address))?;

    if let Some(workers) = config.app.workers {
        server = server.workers(workers);
    }

    server.run().await.context("HTTP server error")?;

    tracing::info!("Forum-service shutting down");
    pool.close().await;

    Ok(())
}
