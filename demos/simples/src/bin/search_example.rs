use confluence_client::prelude::*;
use std::env;
use std::error::Error;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_logger();

    let cfg = Config::new();
    info!("Loaded config → {}", cfg.rest_api.base_url);
    let client = Client::from_config(&cfg)?;

    let cql = env::args()
        .nth(1)
        .unwrap_or_else(|| "type=page order by lastmodified desc".to_string());

    info!("Searching with CQL: {}", cql);
    let results = match client.search(&cql, "", &["space"], 10).await {
        Ok(results) => results,
        Err(e) => {
            error!("Search failed: {}", e);
            if let Some(body) = e.body_text() {
                error!("Server said: {}", body);
            }
            return Err(Box::new(e) as Box<dyn Error>);
        }
    };

    info!(
        "{} of {} results in {} ms",
        results.results.len(),
        results.total_size,
        results.search_duration
    );
    for hit in &results.results {
        info!(
            "[{}] {} ({}) {}",
            hit.content.space.key, hit.title, hit.content.id, hit.url
        );
    }

    Ok(())
}
