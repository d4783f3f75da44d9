#[tokio::main]
async fn main() {
    // .env is optional; absence is not an error
    let _ = dotenvy::dotenv();

    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    match qamatch_dataprep::run().await {
        Ok(summary) => {
            tracing::info!(
                "Dataset preparation finished: {} train, {} test, {} answer classes",
                summary.train_rows,
                summary.test_rows,
                summary.answer_rows
            );
        }
        Err(e) => {
            tracing::error!("Dataset preparation failed: {}", e);
            std::process::exit(1);
        }
    }
}
