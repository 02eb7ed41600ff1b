// storefront_server/src/main.rs

use std::sync::Arc;

use actix_web::{web as actix_data, App, HttpServer};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

use storefront_server::config::AppConfig;
use storefront_server::db::{self, PgStore};
use storefront_server::state::AppState;
use storefront_server::web::configure_app_routes;

fn init_tracing(json: bool) {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  let builder = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_span_events(FmtSpan::CLOSE);

  if json {
    builder.json().init();
  } else {
    builder.init();
  }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  let app_config = AppConfig::from_env()?;
  init_tracing(app_config.log_json);

  tracing::info!("Starting storefront server...");

  let db_pool = match db::connect_pool(&app_config).await {
    Ok(pool) => {
      tracing::info!(pool_size = app_config.db_pool_size, "Successfully connected to the database.");
      pool
    }
    Err(e) => {
      tracing::error!(error = %e, "Failed to connect to the database.");
      return Err(e.into());
    }
  };

  db::prepare_database(&db_pool, &app_config).await.map_err(|e| {
    tracing::error!(error = %e, "Failed to prepare the database.");
    e
  })?;

  let store = Arc::new(PgStore::new(db_pool));
  let app_state = AppState::new(store.clone(), store);

  let server_address = app_config.bind_address();
  tracing::info!("Binding server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone()))
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await?;

  Ok(())
}
