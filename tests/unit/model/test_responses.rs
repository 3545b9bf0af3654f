use confluence_client::model::responses::{
    ContentResults, ResultPagination, SearchResults, SpaceContents, Spaces,
};

#[test]
fn test_pagination_next_page() {
    let full = ResultPagination {
        start: 0,
        limit: 25,
        size: 25,
    };
    assert!(full.may_have_more());
    assert_eq!(full.next_start(), 25);

    let last = ResultPagination {
        start: 25,
        limit: 25,
        size: 3,
    };
    assert!(!last.may_have_more());
    assert_eq!(last.next_start(), 28);

    assert!(!ResultPagination::default().may_have_more());
}

#[test]
fn test_pagination_keeps_start_separate_from_size() {
    let pagination: ResultPagination =
        serde_json::from_str(r#"{"start": 50, "limit": 25, "size": 10}"#).unwrap();
    assert_eq!(pagination.start, 50);
    assert_eq!(pagination.size, 10);

    let json = serde_json::to_value(pagination).unwrap();
    assert_eq!(json["start"], 50);
    assert_eq!(json["size"], 10);
}

#[test]
fn test_content_results_deserialization() {
    let json = r#"{
        "results": [
            {"id": "101", "type": "page", "status": "current", "title": "Home"},
            {"id": "102", "type": "page", "status": "current", "title": "Notes"}
        ],
        "start": 0,
        "limit": 25,
        "size": 2,
        "_links": {"base": "https://wiki.example.com"}
    }"#;

    let results: ContentResults = serde_json::from_str(json).unwrap();
    assert_eq!(results.len(), 2);
    assert!(!results.is_empty());
    assert_eq!(results.pagination.size, 2);
    assert_eq!(results.pagination.limit, 25);
    let titles: Vec<&str> = results.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Home", "Notes"]);
}

#[test]
fn test_empty_content_results() {
    let results: ContentResults = serde_json::from_str(r#"{"results": []}"#).unwrap();
    assert!(results.is_empty());
    assert_eq!(results.pagination, ResultPagination::default());
}

#[test]
fn test_spaces_deserialization() {
    let json = r#"{
        "results": [
            {
                "id": 98306,
                "key": "DEV",
                "name": "Development",
                "type": "global",
                "_links": {"webui": "/display/DEV", "self": "https://wiki.example.com/rest/api/space/DEV"},
                "_expandable": {"homepage": "/rest/api/content/65538"}
            }
        ],
        "start": 0,
        "limit": 25,
        "size": 1,
        "_links": {"self": "https://wiki.example.com/rest/api/space", "base": "https://wiki.example.com", "context": ""}
    }"#;

    let spaces: Spaces = serde_json::from_str(json).unwrap();
    assert_eq!(spaces.results.len(), 1);
    let space = &spaces.results[0];
    assert_eq!(space.id, 98306);
    assert_eq!(space.key, "DEV");
    assert_eq!(space.space_type, "global");
    assert_eq!(space.links.webui, "/display/DEV");
    assert_eq!(space.expandable.homepage, "/rest/api/content/65538");
    assert_eq!(spaces.pagination.size, 1);
    assert_eq!(spaces.links.base, "https://wiki.example.com");
    assert_eq!(spaces.links.self_link, "https://wiki.example.com/rest/api/space");
}

#[test]
fn test_space_contents_deserialization() {
    let json = r#"{
        "page": {
            "results": [
                {
                    "id": "65538",
                    "type": "page",
                    "status": "current",
                    "title": "Development Home",
                    "extensions": {"position": 0},
                    "_links": {"webui": "/display/DEV/Development+Home", "tinyui": "/x/AgAB"}
                }
            ],
            "start": 0,
            "limit": 25,
            "size": 1,
            "_links": {"self": "https://wiki.example.com/rest/api/space/DEV/content/page"}
        },
        "blogpost": {
            "results": [],
            "start": 0,
            "limit": 25,
            "size": 0
        },
        "_links": {"base": "https://wiki.example.com", "context": ""}
    }"#;

    let contents: SpaceContents = serde_json::from_str(json).unwrap();
    assert_eq!(contents.page.results.len(), 1);
    let page = &contents.page.results[0];
    assert_eq!(page.id, "65538");
    assert_eq!(page.title, "Development Home");
    assert_eq!(page.extensions["position"], 0);
    assert_eq!(page.links.tinyui, "/x/AgAB");
    assert!(contents.blogpost.results.is_empty());
    assert_eq!(contents.links.base, "https://wiki.example.com");
}

#[test]
fn test_search_results_deserialization() {
    let json = r#"{
        "results": [
            {
                "content": {"id": "123", "type": "page", "status": "current", "title": "Runbook"},
                "title": "@@@hl@@@Runbook@@@endhl@@@",
                "excerpt": "steps to restart",
                "url": "/display/OPS/Runbook",
                "resultGlobalContainer": {"title": "Operations", "displayUrl": "/display/OPS"},
                "entityType": "content",
                "iconCssClass": "aui-icon content-type-page",
                "lastModified": "2024-03-07T10:15:00.000Z",
                "friendlyLastModified": "Mar 07, 2024"
            }
        ],
        "start": 0,
        "limit": 25,
        "size": 1,
        "totalSize": 1,
        "cqlQuery": "type=page",
        "searchDuration": 12
    }"#;

    let results: SearchResults = serde_json::from_str(json).unwrap();
    assert_eq!(results.total_size, 1);
    assert_eq!(results.cql_query, "type=page");
    assert_eq!(results.search_duration, 12);
    assert_eq!(results.pagination.size, 1);

    let hit = &results.results[0];
    assert_eq!(hit.content.id, "123");
    assert_eq!(hit.content.title, "Runbook");
    assert_eq!(hit.result_global_container.display_url, "/display/OPS");
    assert_eq!(hit.entity_type, "content");
    assert_eq!(hit.icon_css_class, "aui-icon content-type-page");
    assert_eq!(hit.friendly_last_modified, "Mar 07, 2024");
}

#[test]
fn test_search_duration_alias() {
    let results: SearchResults =
        serde_json::from_str(r#"{"results": [], "SearchDuration": 7}"#).unwrap();
    assert_eq!(results.search_duration, 7);
    assert_eq!(results.total_size, 0);
}

#[test]
fn test_search_results_tolerate_null_fields() {
    let json = r#"{
        "results": [
            {
                "content": {"id": "123", "type": "page", "title": "Runbook", "space": null, "ancestors": null},
                "title": "Runbook",
                "excerpt": null,
                "url": "/display/OPS/Runbook",
                "resultGlobalContainer": null,
                "entityType": "content",
                "iconCssClass": null,
                "lastModified": null,
                "friendlyLastModified": null
            }
        ],
        "start": 0,
        "limit": null,
        "size": 1,
        "totalSize": 1,
        "cqlQuery": null,
        "searchDuration": null
    }"#;

    let results: SearchResults = serde_json::from_str(json).unwrap();
    let hit = &results.results[0];
    assert_eq!(hit.title, "Runbook");
    assert!(hit.excerpt.is_empty());
    assert!(hit.last_modified.is_empty());
    assert!(hit.result_global_container.title.is_empty());
    assert!(hit.content.space.key.is_empty());
    assert!(hit.content.ancestors.is_empty());
    assert_eq!(results.pagination.limit, 0);
    assert_eq!(results.search_duration, 0);
    assert!(results.cql_query.is_empty());
}

#[test]
fn test_spaces_tolerate_null_fields() {
    let json = r#"{
        "results": [{"id": null, "key": "DEV", "name": null, "_links": null, "_expandable": null}],
        "_links": null
    }"#;

    let spaces: Spaces = serde_json::from_str(json).unwrap();
    assert_eq!(spaces.results[0].key, "DEV");
    assert_eq!(spaces.results[0].id, 0);
    assert!(spaces.results[0].name.is_empty());
    assert!(spaces.links.base.is_empty());
}

#[test]
fn test_pagination_next_start_saturates() {
    let pagination = ResultPagination {
        start: u32::MAX - 1,
        limit: 25,
        size: 25,
    };
    assert_eq!(pagination.next_start(), u32::MAX);
}
