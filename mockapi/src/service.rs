//! Assembles the mock API and runs it over HTTP.
//!
//! [`MockApi::bootstrap`] builds the shared components from a config;
//! [`spawn_http`] runs the whole app on an ephemeral port in a background
//! thread, which is how the client integration tests stand up a backend.

use actix_web::{dev::ServerHandle, middleware::from_fn, web, App, HttpServer};
use std::net::SocketAddr;
use std::sync::mpsc;
use std::thread;

use crate::{
    config::MockApiConfig,
    directory::AccountDirectory,
    error::{ApiError, Result},
    handlers,
    handlers::health::StartedAt,
    middleware::require_access_token,
    registry::RefreshRegistry,
    token::TokenService,
};

#[derive(Clone)]
pub struct MockApi {
    pub directory: AccountDirectory,
    pub tokens: TokenService,
    pub registry: RefreshRegistry,
    pub started_at: StartedAt,
}

impl MockApi {
    pub fn bootstrap(config: &MockApiConfig) -> Result<Self> {
        let directory = AccountDirectory::from_accounts(&config.accounts)?;
        let tokens = TokenService::new(
            config.tokens.secret.as_bytes(),
            config.tokens.access_ttl_secs * 1_000,
            config.tokens.refresh_ttl_secs * 1_000,
        )
        .map_err(|err| ApiError::Config(format!("Token secret rejected: {err}")))?;

        log::info!("Mock API bootstrapped with {} accounts", directory.len());

        Ok(Self {
            directory,
            tokens,
            registry: RefreshRegistry::new(),
            started_at: StartedAt::now(),
        })
    }

    /// Registers app data and the full route tree on an actix app.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.directory.clone()))
            .app_data(web::Data::new(self.tokens.clone()))
            .app_data(web::Data::new(self.registry.clone()))
            .app_data(web::Data::new(self.started_at))
            .service(
                web::scope("/api/v1")
                    .service(handlers::health_check)
                    .service(
                        web::scope("/auth")
                            .service(handlers::student_login)
                            .service(handlers::agent_login)
                            .service(handlers::admin_login)
                            .service(handlers::refresh)
                            .service(
                                web::scope("")
                                    .wrap(from_fn(require_access_token))
                                    .service(handlers::me),
                            ),
                    ),
            );
    }
}

/// Handle to a mock API running in a background thread.
pub struct MockApiHandle {
    local_addr: SocketAddr,
    server: ServerHandle,
}

impl MockApiHandle {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.local_addr)
    }

    pub async fn stop(&self) {
        self.server.stop(true).await;
    }
}

/// Binds an ephemeral loopback port and serves the mock API from a
/// dedicated thread with its own actix system. Returns once the socket
/// is accepting connections.
pub fn spawn_http(api: MockApi) -> std::io::Result<MockApiHandle> {
    let (tx, rx) = mpsc::channel::<std::io::Result<(SocketAddr, ServerHandle)>>();

    thread::spawn(move || {
        let system = actix_rt::System::new();
        system.block_on(async move {
            let api_for_app = api.clone();
            let server = match HttpServer::new(move || {
                let api = api_for_app.clone();
                App::new().configure(|cfg| api.configure(cfg))
            })
            .workers(1)
            .bind(("127.0.0.1", 0))
            {
                Ok(server) => server,
                Err(err) => {
                    let _ = tx.send(Err(err));
                    return;
                }
            };

            let Some(addr) = server.addrs().first().copied() else {
                let _ = tx.send(Err(std::io::Error::new(
                    std::io::ErrorKind::AddrNotAvailable,
                    "no bound address",
                )));
                return;
            };

            let server = server.run();
            let _ = tx.send(Ok((addr, server.handle())));
            let _ = server.await;
        });
    });

    let (local_addr, server) = rx
        .recv()
        .map_err(|_| {
            std::io::Error::new(std::io::ErrorKind::Other, "mock api thread exited early")
        })??;

    log::info!("Mock API listening on {}", local_addr);

    Ok(MockApiHandle { local_addr, server })
}
