use migration::{Migrator, MigratorTrait};
use poem::{listener::TcpListener, Route, Server};
use poem_openapi::OpenApiService;
use sea_orm::Database;

use pyquest_backend::api::{AssistantApi, AuthApi, HealthApi, ProgressApi, QuestsApi};
use pyquest_backend::app_data::AppData;
use pyquest_backend::config::{init_logging, AppSettings, SystemEnvironment};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging().expect("Failed to initialize logging");

    let settings =
        AppSettings::from_provider(&SystemEnvironment).expect("Failed to load settings");

    let db = Database::connect(&settings.database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!(database_url = %settings.database_url, "Connected to database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    tracing::info!("Database migrations completed");

    let app_data =
        AppData::init(db, settings.clone()).expect("Failed to initialize application data");

    let auth_api = AuthApi::new(
        app_data.credential_store.clone(),
        app_data.token_service.clone(),
        app_data.progress_service.clone(),
    );
    let progress_api = ProgressApi::new(
        app_data.token_service.clone(),
        app_data.progress_service.clone(),
    );
    let assistant_api = AssistantApi::new(
        app_data.token_service.clone(),
        app_data.progress_service.clone(),
        app_data.gemini_service.clone(),
    );

    let api_service = OpenApiService::new(
        (HealthApi, auth_api, QuestsApi, progress_api, assistant_api),
        "PyQuest API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(settings.public_url.clone());

    // Swagger UI generated from the OpenAPI service
    let ui = api_service.swagger_ui();

    let app = Route::new()
        .nest("/api", api_service)
        .nest("/swagger", ui);

    tracing::info!(addr = %settings.bind_addr, "Starting server");

    Server::new(TcpListener::bind(settings.bind_addr.clone()))
        .run(app)
        .await
}
