use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use portfolio_api_rust::config;
use portfolio_api_rust::database::manager::DatabaseManager;
use portfolio_api_rust::handlers::public;
use portfolio_api_rust::middleware::jwt_auth_middleware;
use portfolio_api_rust::services::cloudinary::MAX_IMAGE_BYTES;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, SECRET_KEY, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("Starting portfolio API in {:?} mode", config.environment);

    // A failed migration should not stop the process: /health keeps
    // reporting unavailable until the database comes back.
    if let Err(e) = DatabaseManager::migrate().await {
        tracing::error!("Could not apply migrations at startup: {}", e);
    }

    let app = app();

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app() -> Router {
    Router::new()
        .route("/", get(public::root_get))
        .route("/health", get(public::health_get))
        .merge(auth_public_routes())
        .merge(portfolio_public_routes())
        .merge(protected_routes())
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

fn cors_layer() -> CorsLayer {
    let origins = &config::config().server.cors_origins;
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let parsed: Vec<axum::http::HeaderValue> = origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(parsed))
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
}

fn auth_public_routes() -> Router {
    use axum::routing::post;
    use portfolio_api_rust::handlers::public::auth;

    Router::new()
        .route("/auth/register", post(auth::register_post))
        .route("/auth/login", post(auth::login_post))
}

fn portfolio_public_routes() -> Router {
    use portfolio_api_rust::handlers::public::portfolio;

    Router::new()
        .route("/portfolio/:username", get(portfolio::profile_get))
        .route("/portfolio/:username/projects", get(portfolio::projects_get))
        .route(
            "/portfolio/:username/projects/featured",
            get(portfolio::featured_projects_get),
        )
        .route(
            "/portfolio/:username/projects/:project_id",
            get(portfolio::project_get),
        )
        .route(
            "/portfolio/:username/technologies",
            get(portfolio::technologies_get),
        )
        .route("/portfolio/:username/socials", get(portfolio::socials_get))
        .route(
            "/portfolio/:username/work-experiences",
            get(portfolio::work_experiences_get),
        )
        .route("/portfolio/:username/clients", get(portfolio::clients_get))
}

fn protected_routes() -> Router {
    use axum::routing::post;
    use portfolio_api_rust::handlers::protected::{
        auth, clients, images, profile, projects, socials, technologies, work_experiences,
    };

    Router::new()
        .route("/api/auth/whoami", get(auth::whoami_get))
        .route(
            "/api/profile",
            get(profile::profile_get)
                .post(profile::profile_post)
                .patch(profile::profile_patch),
        )
        .route(
            "/api/projects",
            get(projects::projects_get).post(projects::project_post),
        )
        .route("/api/projects/featured", get(projects::featured_projects_get))
        .route(
            "/api/projects/:project_id",
            get(projects::project_get)
                .patch(projects::project_patch)
                .delete(projects::project_delete),
        )
        .route(
            "/api/technologies",
            get(technologies::technologies_get).post(technologies::technology_post),
        )
        .route(
            "/api/technologies/:technology_id",
            get(technologies::technology_get)
                .patch(technologies::technology_patch)
                .delete(technologies::technology_delete),
        )
        .route(
            "/api/socials",
            get(socials::socials_get).post(socials::social_post),
        )
        .route(
            "/api/socials/:social_id",
            get(socials::social_get)
                .patch(socials::social_patch)
                .delete(socials::social_delete),
        )
        .route(
            "/api/work-experiences",
            get(work_experiences::work_experiences_get)
                .post(work_experiences::work_experience_post),
        )
        .route(
            "/api/work-experiences/:work_experience_id",
            get(work_experiences::work_experience_get)
                .patch(work_experiences::work_experience_patch)
                .delete(work_experiences::work_experience_delete),
        )
        .route(
            "/api/clients",
            get(clients::clients_get).post(clients::client_post),
        )
        .route(
            "/api/clients/:client_id",
            get(clients::client_get)
                .patch(clients::client_patch)
                .delete(clients::client_delete),
        )
        // Body limit sits above MAX_IMAGE_BYTES so oversized uploads get the
        // JSON validation error, not a bare 413 from the extractor
        .route(
            "/api/images/upload",
            post(images::image_upload_post)
                .layer(DefaultBodyLimit::max(2 * MAX_IMAGE_BYTES)),
        )
        .route_layer(axum::middleware::from_fn(jwt_auth_middleware))
}
