use confluence_client::prelude::*;
use std::error::Error;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_logger();

    let cfg = Config::new();
    let client = Client::from_config(&cfg)?;

    let spaces = client.get_spaces().await?;
    info!("Found {} spaces", spaces.len());

    for space in spaces.iter().filter(|s| s.space_type == "global") {
        let contents = client.get_space_content(&space.key).await?;
        info!(
            "{} - {}: {} pages, {} blog posts",
            space.key,
            space.name,
            contents.page.results.len(),
            contents.blogpost.results.len()
        );
    }

    Ok(())
}
