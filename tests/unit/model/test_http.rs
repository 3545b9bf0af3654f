use confluence_client::application::auth::AuthMethod;
use confluence_client::error::AppError;
use confluence_client::model::http::{HttpClient, classify_status, normalize_endpoint};
use confluence_client::model::requests::QueryParams;
use reqwest::StatusCode;

#[test]
fn normalize_appends_api_root() {
    let url = normalize_endpoint("https://wiki.example.com").unwrap();
    assert_eq!(url.as_str(), "https://wiki.example.com/rest/api");
}

#[test]
fn normalize_adds_single_separator() {
    let without = normalize_endpoint("https://wiki.example.com/confluence").unwrap();
    let with = normalize_endpoint("https://wiki.example.com/confluence/").unwrap();
    let doubled = normalize_endpoint("https://wiki.example.com/confluence//").unwrap();

    assert_eq!(without.as_str(), "https://wiki.example.com/confluence/rest/api");
    assert_eq!(without, with);
    assert_eq!(without, doubled);
}

#[test]
fn normalize_is_stable_across_constructions() {
    let first = normalize_endpoint("http://localhost:8090/wiki").unwrap();
    let second = normalize_endpoint("http://localhost:8090/wiki").unwrap();
    assert_eq!(first, second);
    assert_eq!(first.as_str(), "http://localhost:8090/wiki/rest/api");
}

#[test]
fn normalize_drops_query_and_fragment() {
    let url = normalize_endpoint("https://wiki.example.com/wiki?os_authType=basic#top").unwrap();
    assert_eq!(url.as_str(), "https://wiki.example.com/wiki/rest/api");
}

#[test]
fn normalize_rejects_invalid_locations() {
    for location in ["", "not a url", "/relative/path", "mailto:someone@example.com", "ftp://files.example.com"] {
        let err = normalize_endpoint(location).unwrap_err();
        assert!(
            matches!(err, AppError::InvalidEndpoint(_)),
            "{location} should be rejected"
        );
    }
}

#[test]
fn url_joins_segments_without_double_slashes() {
    let core = HttpClient::new("https://wiki.example.com/", AuthMethod::token("t")).unwrap();

    let url = core.url(&["content", "123", "child", "page"], None).unwrap();
    assert_eq!(
        url.as_str(),
        "https://wiki.example.com/rest/api/content/123/child/page"
    );
}

#[test]
fn url_encodes_segments() {
    let core = HttpClient::new("https://wiki.example.com", AuthMethod::token("t")).unwrap();

    let url = core.url(&["space", "my space/x", "content"], None).unwrap();
    assert_eq!(
        url.as_str(),
        "https://wiki.example.com/rest/api/space/my%20space%2Fx/content"
    );
}

#[test]
fn url_applies_query() {
    let core = HttpClient::new("https://wiki.example.com", AuthMethod::token("t")).unwrap();
    let query = QueryParams::new().with_list("expand", &["space", "version"]);

    let url = core.url(&["content", "42"], Some(&query)).unwrap();
    assert_eq!(
        url.as_str(),
        "https://wiki.example.com/rest/api/content/42?expand=space,version"
    );
}

#[test]
fn classify_success_statuses_return_body() {
    for status in [
        StatusCode::OK,
        StatusCode::CREATED,
        StatusCode::PARTIAL_CONTENT,
        StatusCode::NO_CONTENT,
        StatusCode::RESET_CONTENT,
    ] {
        let body = classify_status(status, b"payload".to_vec()).unwrap();
        assert_eq!(body, b"payload", "status {status}");
    }
}

#[test]
fn classify_known_failures_keep_body() {
    let err = classify_status(StatusCode::UNAUTHORIZED, b"denied".to_vec()).unwrap_err();
    assert!(matches!(err, AppError::AuthenticationFailed { .. }));
    assert_eq!(err.body(), Some(&b"denied"[..]));

    let err = classify_status(StatusCode::SERVICE_UNAVAILABLE, b"down".to_vec()).unwrap_err();
    assert!(matches!(err, AppError::ServiceUnavailable { .. }));
    assert!(err.to_string().contains("503 Service Unavailable"));
    assert_eq!(err.body(), Some(&b"down"[..]));

    let err = classify_status(StatusCode::INTERNAL_SERVER_ERROR, b"boom".to_vec()).unwrap_err();
    assert!(matches!(err, AppError::InternalServerError { .. }));
    assert!(err.to_string().contains("500 Internal Server Error"));
    assert_eq!(err.body(), Some(&b"boom"[..]));
}

#[test]
fn classify_other_statuses_are_unknown() {
    for (code, text) in [
        (400, "400 Bad Request"),
        (403, "403 Forbidden"),
        (404, "404 Not Found"),
        (409, "409 Conflict"),
        (502, "502 Bad Gateway"),
    ] {
        let status = StatusCode::from_u16(code).unwrap();
        let err = classify_status(status, b"detail".to_vec()).unwrap_err();
        match &err {
            AppError::UnknownStatus { status, body } => {
                assert_eq!(status, text);
                assert_eq!(body, b"detail");
            }
            other => panic!("Unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains(text));
    }
}
