mod core;
mod features;
mod shared;

use crate::core::config::Config;
use crate::core::database;
use crate::core::router::{build_router, AppServices};
use crate::features::auth::{AuthService, PgSessionStore};
use crate::features::categories::CategoryService;
use crate::features::items::ItemService;
use crate::features::menu::{MenuService, PgMenuRepository};
use crate::features::seed::SeedService;
use crate::features::users::PgUserRepository;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .max_blocking_threads(worker_threads * 4)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!(
        "Configuration loaded (tokio_worker_threads={}, pid={})",
        worker_threads,
        std::process::id()
    );

    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    tracing::info!("Running database migrations...");
    database::run_migrations(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
    tracing::info!("Database migrations completed successfully");

    let user_repository = Arc::new(PgUserRepository::new(pool.clone()));
    let menu_repository = Arc::new(PgMenuRepository::new(pool.clone()));
    let session_store = Arc::new(PgSessionStore::new(pool.clone()));

    if config.app.seed_on_startup {
        let report = SeedService::new(user_repository.clone(), menu_repository.clone())
            .run(&config.admin)
            .await
            .map_err(|e| anyhow::anyhow!("Seeding failed: {}", e))?;
        tracing::info!(
            "Seeding finished (admin_created={}, categories={}, items={})",
            report.admin_created,
            report.categories_inserted,
            report.items_inserted
        );
    } else {
        tracing::info!("Seeding disabled (SEED_ON_STARTUP=false)");
    }

    let auth_service = Arc::new(AuthService::new(
        user_repository,
        session_store,
        config.session.ttl,
    ));
    tracing::info!("Auth service initialized");

    let menu_service = Arc::new(MenuService::new(menu_repository.clone()));
    let category_service = Arc::new(CategoryService::new(menu_repository.clone()));
    let item_service = Arc::new(ItemService::new(menu_repository));
    tracing::info!("Menu services initialized");

    let app = build_router(
        AppServices {
            auth: auth_service,
            menu: menu_service,
            categories: category_service,
            items: item_service,
        },
        &config,
    );

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    // Use socket2 for TCP listener configuration
    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    socket.set_nodelay(true)?;

    let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
    socket.set_tcp_keepalive(&keepalive)?;

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);
    tracing::info!(
        "Serving static files from '{}' (admin dashboard at /admin)",
        config.app.static_dir
    );

    axum::serve(listener, app).await?;

    Ok(())
}
