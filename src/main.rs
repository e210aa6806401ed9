use lending_ledger::{
    adapters::logging::NotificationService as LoggingNotificationService,
    adapters::memory::EligibilityService as MemoryEligibilityService,
    api::{handlers::AppState, router::create_router},
    application::circulation::ServiceDependencies,
    domain::{BorrowerId, LendingLedger},
};
use std::sync::{Arc, Mutex};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lending_ledger=debug,tower_http=debug,axum=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Initialize adapters
    let eligibility_service = Arc::new(MemoryEligibilityService::new());
    let notification_service = Arc::new(LoggingNotificationService::new());

    // Seed active borrower accounts from the environment (comma-separated IDs)
    if let Ok(seed) = std::env::var("ACTIVE_BORROWERS") {
        for id in seed.split(',').map(str::trim).filter(|id| !id.is_empty()) {
            eligibility_service.activate(BorrowerId::new(id));
        }
        tracing::info!("Seeded active borrowers from ACTIVE_BORROWERS");
    }

    // The ledger state is scoped to this composition, not process-global
    let ledger = Arc::new(Mutex::new(LendingLedger::new()));

    // Create service dependencies
    let service_deps = ServiceDependencies {
        ledger,
        eligibility_service,
        notification_service,
    };

    // Create application state
    let app_state = Arc::new(AppState { service_deps });

    // Create router
    let app = create_router(app_state);

    // Server configuration
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".into());
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    // Start server
    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
