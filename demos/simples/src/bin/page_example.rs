use confluence_client::prelude::*;
use std::env;
use std::error::Error;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_logger();

    let cfg = Config::new();
    let client = Client::from_config(&cfg)?;

    let space_key = env::var("CONFLUENCE_SPACE").unwrap_or_else(|_| "DEV".to_string());
    let title = "Client example page";

    let existing = client.get_page_id_by_title(&space_key, title).await?;
    let page = if existing.is_empty() {
        info!("Creating page '{}' in {}", title, space_key);
        let draft = Content::new_page(
            &space_key,
            title,
            "<p>Created by the <strong>confluence-client</strong> demo &amp; friends.</p>",
        );
        client.create_content(&draft).await?
    } else {
        info!("Page already exists with id {}", existing);
        client
            .get_content(&existing, &["body.storage", "version", "space"])
            .await?
    };

    let update = page
        .with_storage_value("<p>Updated by the demo.</p>")
        .next_version();
    let updated = client.update_content(&update).await?;
    info!("Page {} now at version {}", updated.id, updated.version.number);

    let children = client.get_content_children_pages(&updated.id, &[]).await?;
    info!("Page has {} children", children.len());

    if env::var("CONFLUENCE_DELETE_DEMO_PAGE").is_ok() {
        client.delete_content(&updated.id).await?;
        info!("Page {} deleted", updated.id);
    }

    Ok(())
}
