//! CLI entrypoint for chat-relay
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use axum::Router;
use clap::Parser;
use relay_application::{
    BackendGateway, CompletionGateway, ConversationOrchestrator, SessionClient,
};
use relay_infrastructure::{ConfigLoader, FileConfig, HttpBackendGateway, HttpCompletionGateway};
use relay_presentation::{Cli, create_router};
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_without_files()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    }
    .context("loading configuration")?;

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(&cli, &config)?;

    if let Some(host) = &cli.host {
        config.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let issues = config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            error!("Invalid configuration: {}", issue);
        }
        let summary: Vec<String> = issues.iter().map(ToString::to_string).collect();
        bail!("invalid configuration: {}", summary.join("; "));
    }

    info!("Starting chat-relay");

    // === Dependency Injection ===
    let backend = Arc::new(
        HttpBackendGateway::new(config.backend.url.clone(), config.backend.timeout())
            .context("building backend client")?,
    );
    let completion = Arc::new(
        HttpCompletionGateway::new(
            config.completion.base_url.clone(),
            config.completion.api_key.clone(),
            config.completion.model.clone(),
            config.completion.timeout(),
        )
        .context("building completion client")?,
    );

    let app = build_app(backend, completion, &config).await?;

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding to {}", addr))?;

    info!(
        model = %config.completion.model,
        backend = %config.backend.url,
        "Listening on http://{}",
        addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("running server")?;

    info!("Shutdown complete");
    Ok(())
}

/// Log into the backend, then build the orchestrator and router.
///
/// A failed login returns before anything is built, so no request can reach
/// the orchestrator without a credential.
async fn build_app<B, C>(
    backend: Arc<B>,
    completion: Arc<C>,
    config: &FileConfig,
) -> Result<Router>
where
    B: BackendGateway + 'static,
    C: CompletionGateway + 'static,
{
    let sessions = Arc::new(SessionClient::new(backend));
    sessions
        .login(&config.backend.login_credentials())
        .await
        .context("logging into backend")?;

    let orchestrator = Arc::new(
        ConversationOrchestrator::new(
            sessions,
            completion,
            &config.conversation.to_conversation_config(),
        )
        .context("building conversation orchestrator")?,
    );

    Ok(create_router(orchestrator, config.server.api_key.clone()))
}

/// Initialize tracing.
///
/// Filter priority: `RUST_LOG`, then `-v` flags, then `logging.level`,
/// then `warn`. When `logging.file` is set, output also goes to that file.
fn init_logging(cli: &Cli, config: &FileConfig) -> Result<Option<WorkerGuard>> {
    let level = cli
        .verbosity_filter()
        .map(str::to_string)
        .or_else(|| config.logging.level.clone())
        .unwrap_or_else(|| "warn".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&level))
        .with_context(|| format!("invalid log level: {}", level))?;

    let (file_layer, guard) = match &config.logging.file {
        Some(file) => {
            let path = Path::new(file);
            let directory = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .with_context(|| format!("logging.file has no file name: {}", file))?;

            let appender = tracing_appender::rolling::never(directory, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(file_layer)
        .try_init()
        .context("initializing logging")?;

    Ok(guard)
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use relay_application::{AuthError, BackendError, CompletionError, NewSession};
    use relay_domain::{Credential, LoginCredentials, Message, SessionHandle};
    use std::sync::Mutex;

    struct ScriptedBackend {
        login: Result<Credential, AuthError>,
    }

    #[async_trait]
    impl BackendGateway for ScriptedBackend {
        async fn login(&self, _credentials: &LoginCredentials) -> Result<Credential, AuthError> {
            self.login.clone()
        }

        async fn create_session(
            &self,
            _credential: &Credential,
            _session: &NewSession,
        ) -> Result<SessionHandle, BackendError> {
            Ok(SessionHandle::new("s-1"))
        }
    }

    #[derive(Default)]
    struct CountingCompletion {
        calls: Mutex<usize>,
    }

    #[async_trait]
    impl CompletionGateway for CountingCompletion {
        async fn complete(&self, _messages: &[Message]) -> Result<String, CompletionError> {
            *self.calls.lock().unwrap() += 1;
            Ok("hello!".to_string())
        }
    }

    fn config() -> FileConfig {
        let mut config = FileConfig::default();
        config.backend.email = "bot@example.com".to_string();
        config.backend.password = "pw".to_string();
        config.completion.api_key = "sk-test".to_string();
        config
    }

    #[tokio::test]
    async fn test_rejected_login_builds_nothing() {
        let backend = Arc::new(ScriptedBackend {
            login: Err(AuthError::Rejected {
                status: 401,
                body: "Invalid email or password".to_string(),
            }),
        });
        let completion = Arc::new(CountingCompletion::default());

        let result = build_app(backend, completion.clone(), &config()).await;

        let err = result.err().unwrap();
        assert!(format!("{err:#}").contains("401"));
        assert_eq!(*completion.calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_successful_login_builds_router() {
        let backend = Arc::new(ScriptedBackend {
            login: Ok(Credential::new("abc")),
        });
        let completion = Arc::new(CountingCompletion::default());

        assert!(build_app(backend, completion, &config()).await.is_ok());
    }
}
