use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tokio::sync::watch;

use frcc_api::shutdown::shutdown_signal;
use frcc_api::telemetry::init_telemetry;
use frcc_api::{create_app, AppState};
use frcc_core::jobs::{register_email_jobs, JobRegistry, JobRunner, JobRunnerConfig};
use frcc_core::services::{AuthService, AuthServiceConfig, SessionTokenConfig, SessionTokenService};
use frcc_infra::database::{DatabasePool, MySqlUserRepository};
use frcc_infra::email::{create_email_service, Emailer};
use frcc_infra::queue::create_job_queue;
use frcc_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_telemetry(&config.logging)?;
    config.validate().context("invalid configuration")?;

    tracing::info!(
        environment = %config.environment,
        version = env!("CARGO_PKG_VERSION"),
        "Starting FRCC registration API"
    );

    let database = DatabasePool::new(config.database.clone())
        .await
        .context("failed to connect to the database")?;
    database.ping().await.context("database is not answering")?;
    database
        .ensure_schema()
        .await
        .context("failed to prepare the database schema")?;

    let user_repository = Arc::new(MySqlUserRepository::new(database.get_pool().clone()));
    let job_queue = create_job_queue(&config.queue)
        .await
        .context("failed to create the job queue")?;
    let email_service =
        create_email_service(&config.email).context("failed to create the email service")?;
    let emailer = Arc::new(Emailer::new(email_service, &config.email));

    let mut registry = JobRegistry::new();
    register_email_jobs(&mut registry, emailer);
    tracing::info!(jobs = ?registry.names(), "Job registry ready");

    let token_service = Arc::new(SessionTokenService::new(SessionTokenConfig::from(
        &config.auth.jwt,
    )));
    let auth_service = Arc::new(AuthService::new(
        user_repository,
        job_queue.clone(),
        token_service,
        AuthServiceConfig::default(),
    ));
    let state = web::Data::new(AppState::new(auth_service, config.auth.session.clone()));

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let runner = JobRunner::new(job_queue, Arc::new(registry), JobRunnerConfig::default());
    let runner_task = actix_web::rt::spawn(runner.run(shutdown_rx));

    let bind_address = config.server.bind_address();
    let mut server = HttpServer::new(move || create_app(state.clone()))
        .keep_alive(Duration::from_secs(config.server.keep_alive))
        .client_request_timeout(Duration::from_secs(config.server.request_timeout))
        .shutdown_timeout(config.server.shutdown_timeout)
        .disable_signals();
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }
    let server = server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run();
    let server_handle = server.handle();
    let mut server_task = actix_web::rt::spawn(server);

    tracing::info!(address = %bind_address, "HTTP server listening");

    let server_result = tokio::select! {
        _ = shutdown_signal() => None,
        result = &mut server_task => Some(result),
    };

    let _ = shutdown_tx.send(true);

    let server_result = match server_result {
        Some(result) => result,
        None => {
            server_handle.stop(true).await;
            server_task.await
        }
    };

    if let Err(err) = runner_task.await {
        tracing::error!(error = %err, "Job runner terminated abnormally");
    }

    database.close().await;
    tracing::info!("Server shutdown complete");

    server_result
        .context("HTTP server task failed")?
        .context("HTTP server failed")
}
