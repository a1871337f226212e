// carom-client/examples/table_board.rs
// Print the live table board of a running backend

use carom_client::{ClientConfig, TableSessionController, TableStatus};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let base_url =
        std::env::var("CAROM_API_URL").unwrap_or_else(|_| "http://localhost:8080/api".to_string());

    let mut config = ClientConfig::new(&base_url);
    if let Ok(token) = std::env::var("CAROM_TOKEN") {
        config = config.with_token(token);
    }

    let mut controller = TableSessionController::new(config.build_http_client());
    let report = controller.refresh().await?;

    if !report.session_failures.is_empty() {
        for (table_id, err) in &report.session_failures {
            tracing::warn!(table_id, error = %err, "session unavailable");
        }
    }

    for entry in controller.tables() {
        let table = &entry.table;
        match (&entry.current_session, table.status) {
            (Some(session), TableStatus::Occupied) => {
                println!(
                    "#{:<3} {:<16} OCCUPIED  since {}  ({}/h)",
                    table.id,
                    table.name,
                    session.start_time.format("%H:%M"),
                    table.price_per_hour,
                );
            }
            _ => {
                println!(
                    "#{:<3} {:<16} {:?}  ({}/h)",
                    table.id, table.name, table.status, table.price_per_hour,
                );
            }
        }
    }

    Ok(())
}
