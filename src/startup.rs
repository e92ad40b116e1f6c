use std::net::TcpListener;

use actix_session::storage::CookieSessionStore;
use actix_session::SessionMiddleware;
use actix_web::cookie::Key;
use actix_web::dev::Server;
use actix_web::web;
use actix_web::App;
use actix_web::HttpServer;
use secrecy::ExposeSecret;
use secrecy::Secret;
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::records_client::RecordsClient;
use crate::routes::health_check;
use crate::routes::home;
use crate::routes::subscribe;

/// Wrapper for actix's `Server` with access to the bound port. Not to be
/// confused with actix's `App`!
pub struct Application {
    /// Left private; use `get_port` to access
    port: u16,
    server: Server,
}

impl Application {
    /// Bind the listener and build the `Server`; nothing is served until
    /// `run_until_stopped` is awaited
    pub async fn build(cfg: Settings) -> Result<Self, anyhow::Error> {
        let addr = format!("{}:{}", cfg.application.host, cfg.application.port);
        let listener = TcpListener::bind(addr)?;

        // port 0 lets the OS pick; keep what it picked
        let port = listener.local_addr()?.port();

        let records_client = cfg.records_api.client()?;

        let server = run(
            listener,
            records_client,
            cfg.application.session_key,
            cfg.application.secure_cookies,
        )?;

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 { self.port }

    /// Because this consumes `self`, this should be the final function call (or
    /// passed to `tokio::spawn`)
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> { self.server.await }
}

/// The server is not responsible for binding to an address, it only listens to
/// an already bound address.
///
/// Declares all endpoints:
/// - `GET /`: landing page
/// - `POST /subscriptions`: submit the signup widget
/// - `GET /health_check`
pub fn run(
    listener: TcpListener,
    records_client: RecordsClient,
    session_key: Secret<String>,
    secure_cookies: bool,
) -> Result<Server, anyhow::Error> {
    // `Key::from` panics below 64 bytes; `Settings::validate` rules that out
    let secret_key = Key::from(session_key.expose_secret().as_bytes());

    // `Data` is an `Arc`, so every worker shares one client (and its
    // connection pool)
    let records_client = web::Data::new(records_client);

    // one `App` is built per worker, hence the closure and the clones
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(secure_cookies)
                    .build(),
            )
            .route("/", web::get().to(home))
            .route("/health_check", web::get().to(health_check))
            .route("/subscriptions", web::post().to(subscribe))
            .app_data(records_client.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
