use campusdesk::router::init_router;
use campusdesk::state::init_app_state;
use campusdesk::{cli, config};
use dotenvy::dotenv;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let args: Vec<String> = std::env::args().collect();

    // Check if this is a CLI command
    if args.len() > 1 && args[1] == "create-hod" {
        handle_create_hod(args).await;
        return;
    }

    // Normal server startup
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                // axum logs rejections from built-in extractors with the `axum::rejection`
                // target, at `TRACE` level. `axum::rejection=trace` enables showing those events
                format!(
                    "{}=debug,tower_http=debug,axum::rejection=trace",
                    env!("CARGO_CRATE_NAME")
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = init_app_state().await;

    sqlx::migrate!("./migrations")
        .run(&state.db)
        .await
        .expect("Failed to run database migrations");

    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3500").await.unwrap();
    println!("🚀 Server running on http://localhost:3500");
    println!("📚 Swagger UI available at http://localhost:3500/swagger-ui");
    println!("📖 Scalar UI available at http://localhost:3500/scalar");
    axum::serve(listener, app).await.unwrap();
}

async fn handle_create_hod(args: Vec<String>) {
    if args.len() != 7 {
        eprintln!(
            "Usage: {} create-hod <username> <name> <email> <department> <password>",
            args[0]
        );
        std::process::exit(1);
    }

    let username = &args[2];
    let name = &args[3];
    let email = &args[4];
    let department = &args[5];
    let password = &args[6];

    let pool = config::database::init_db_pool().await;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    match cli::create_hod(&pool, username, name, email, department, password).await {
        Ok(_) => {
            println!("✅ HOD created successfully!");
            println!("   Username: {}", username);
            println!("   Department: {}", department);
        }
        Err(e) => {
            eprintln!("❌ Error creating HOD: {}", e);
            std::process::exit(1);
        }
    }
}
