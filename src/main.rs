use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use gerencial_fretes::build_app;
use gerencial_fretes::config::EnvironmentConfig;
use gerencial_fretes::database::DatabaseConnection;
use gerencial_fretes::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚚 Gerencial Fretes - Backend de ciclos de frete");
    info!("================================================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };
    db_connection.run_migrations().await?;

    let state = AppState::new(db_connection.pool().clone(), config.clone());
    let app = build_app(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🔄 Endpoints - Cycles:");
    info!("   POST /api/cycles - Abrir ciclo");
    info!("   GET  /api/cycles - Listar ciclos del actor");
    info!("   GET  /api/cycles/:id - Detalle con totales");
    info!("   PUT  /api/cycles/:id - Editar ciclo");
    info!("   POST /api/cycles/:id/close - Cerrar ciclo");
    info!("   DELETE /api/cycles/:id - Borrar ciclo en cascada");
    info!("💰 Endpoints - Registros del ciclo:");
    info!("   POST /api/cycles/:id/freights - Registrar frete");
    info!("   POST /api/cycles/:id/fuelings - Registrar abastecimiento");
    info!("   POST /api/cycles/:id/expenses - Registrar despesa");
    info!("   PUT  /api/freights/:id | /api/fuelings/:id | /api/expenses/:id");
    info!("🚛 Endpoints - Cadastros:");
    info!("   POST /api/cars | /api/drivers | /api/tires/brands | /api/tires/changes");
    info!("   POST /api/drivers/:id/invite - Enlace de invitación");
    info!("⚙️ Endpoints - Settings:");
    info!("   GET/PUT /api/settings/commission");
    info!("   GET/PUT /api/settings/permissions/:driver_id");
    info!("📊 Endpoints - Dashboard:");
    info!("   GET  /api/dashboard - Resumen del portafolio");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
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
