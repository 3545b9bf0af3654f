use crate::common::basic_client;
use confluence_client::prelude::*;
use mockito::{Matcher, Server};

const SPACES_JSON: &str = r#"{
    "results": [
        {"id": 1, "key": "DEV", "name": "Development", "type": "global",
         "_links": {"webui": "/display/DEV", "self": "http://wiki/rest/api/space/DEV"}},
        {"id": 2, "key": "~jdoe", "name": "Personal", "type": "personal"}
    ],
    "start": 0,
    "limit": 25,
    "size": 2,
    "_links": {"self": "http://wiki/rest/api/space", "base": "http://wiki", "context": ""}
}"#;

#[tokio::test]
async fn test_get_spaces() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/rest/api/space")
        .with_status(200)
        .with_body(SPACES_JSON)
        .create_async()
        .await;

    let spaces = basic_client(&server).get_spaces().await.unwrap();

    assert_eq!(spaces.len(), 2);
    assert_eq!(spaces[0].key, "DEV");
    assert_eq!(spaces[0].links.webui, "/display/DEV");
    assert_eq!(spaces[1].space_type, "personal");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_spaces_with_filters() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/rest/api/space")
        .match_query(Matcher::Exact("spaceKey=DEV,OPS&type=global&start=25&limit=25".into()))
        .with_status(200)
        .with_body(SPACES_JSON)
        .create_async()
        .await;

    let query = SpaceQuery::new()
        .with_space_keys(&["DEV", "OPS"])
        .with_space_type("global")
        .with_start(25)
        .with_limit(25);
    let spaces = basic_client(&server).get_spaces_with(&query).await.unwrap();

    assert_eq!(spaces.pagination.size, 2);
    assert_eq!(spaces.links.base, "http://wiki");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_space_content() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/rest/api/space/DEV/content")
        .with_status(200)
        .with_body(
            r#"{
                "page": {"results": [{"id": "65538", "type": "page", "status": "current", "title": "Development Home"}], "start": 0, "limit": 25, "size": 1},
                "blogpost": {"results": [{"id": "7", "type": "blogpost", "title": "Weekly"}], "start": 0, "limit": 25, "size": 1},
                "_links": {"base": "http://wiki", "context": ""}
            }"#,
        )
        .create_async()
        .await;

    let contents = basic_client(&server).get_space_content("DEV").await.unwrap();

    assert_eq!(contents.page.results[0].title, "Development Home");
    assert_eq!(contents.blogpost.results[0].content_type, "blogpost");
    assert_eq!(contents.page.pagination.size, 1);
    mock.assert_async().await;
}
