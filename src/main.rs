use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use car_ratings::clients::NhtsaCatalogClient;
use car_ratings::config::{DatabaseConfig, EnvironmentConfig};
use car_ratings::database::DatabaseConnection;
use car_ratings::middleware::cors_middleware;
use car_ratings::{create_app, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("car_ratings=debug,tower_http=info")),
        )
        .init();

    info!("🚗 Car Ratings API");
    info!("================================================");

    let config = EnvironmentConfig::from_env()?;

    let catalog = Arc::new(NhtsaCatalogClient::new(
        config.catalog_base_url.clone(),
        config.catalog_timeout,
    )?);
    info!(
        "📚 Catálogo de vehículos: {} (timeout {:?})",
        config.catalog_base_url, config.catalog_timeout
    );

    let app_state = match DatabaseConfig::from_environment(&config) {
        Some(db_config) => {
            let connection = match DatabaseConnection::connect(&db_config).await {
                Ok(conn) => conn,
                Err(e) => {
                    error!("❌ Error conectando a la base de datos: {}", e);
                    return Err(e);
                }
            };
            AppState::with_postgres(connection.pool().clone(), catalog)
        }
        None => {
            warn!("⚠️ DATABASE_URL no definido, usando almacenamiento en memoria");
            AppState::in_memory(catalog)
        }
    };

    let app = create_app(app_state, cors_middleware(&config.cors_origins));

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{} ({})", addr, config.environment);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("   POST /cars   - Registrar car");
    info!("   GET  /cars   - Listar cars con calificación media");
    info!("   POST /rate   - Calificar car (1-5)");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("❌ failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
