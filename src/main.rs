use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, middleware, web};

use rollcall::auth::password::SharedPassword;
use rollcall::auth::rate_limit::RateLimiter;
use rollcall::config::{AppConfig, BackendKind};
use rollcall::roster::Roster;
use rollcall::store::{Backend, MemoryStore, PgStore};
use rollcall::{db, routes};

fn startup_error(msg: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::other(msg.to_string())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let _ = dotenvy::dotenv();
    env_logger::init();

    let config = AppConfig::from_env().map_err(startup_error)?;

    let backend = match config.backend {
        BackendKind::Postgres => {
            let url = config.database_url.as_deref().unwrap_or_default();
            let pool = db::init_pool(url).await.map_err(startup_error)?;
            db::run_migrations(&pool).await.map_err(startup_error)?;
            if config.seed_demo {
                db::seed_demo(&pool).await.map_err(startup_error)?;
            }
            Backend::Postgres(PgStore::new(pool))
        }
        BackendKind::Memory => {
            log::warn!("Using the in-memory backend; data is lost on restart");
            if config.seed_demo {
                Backend::Memory(MemoryStore::with_demo_data())
            } else {
                Backend::Memory(MemoryStore::new())
            }
        }
    };
    log::info!("Backend: {}", backend.name());

    let roster = web::Data::new(Roster::new(backend, config.ladder.clone(), config.duplicates));
    roster.refresh().await;

    // Argon2 is slow on purpose; hash once, off the executor.
    let plain = config.shared_password.clone();
    let password = tokio::task::spawn_blocking(move || SharedPassword::new(&plain))
        .await
        .map_err(startup_error)?
        .map_err(startup_error)?;
    let password = web::Data::new(password);
    let limiter = web::Data::new(RateLimiter::new());

    let secret_key = config.session_key.clone();
    log::info!("Starting server at http://{}", config.bind_addr);

    HttpServer::new(move || {
        let session_mw = SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
            .cookie_secure(false)
            .cookie_http_only(true)
            .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(roster.clone())
            .app_data(password.clone())
            .app_data(limiter.clone())
            .service(actix_files::Files::new("/static", "./static"))
            .configure(routes::configure)
            .default_service(web::to(routes::not_found))
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
