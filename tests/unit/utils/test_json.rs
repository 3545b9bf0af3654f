use confluence_client::presentation::Content;
use confluence_client::utils::json::{to_storage_json, unescape_markup};

#[test]
fn test_unescape_markup_in_storage_value() {
    let input = br#"{"body":{"storage":{"value":"\u003cac:structured-macro ac:name=\"info\"\u003e\u0026nbsp;\u003c/ac:structured-macro\u003e"}}}"#;
    let output = String::from_utf8(unescape_markup(input)).unwrap();
    assert_eq!(
        output,
        r#"{"body":{"storage":{"value":"<ac:structured-macro ac:name=\"info\">&nbsp;</ac:structured-macro>"}}}"#
    );
}

#[test]
fn test_unescape_markup_leaves_plain_json() {
    let input = br#"{"title":"Plain title","version":{"number":2}}"#;
    assert_eq!(unescape_markup(input), input.to_vec());
}

#[test]
fn test_unescape_markup_truncated_escape() {
    let input = br#""\u003""#;
    assert_eq!(unescape_markup(input), input.to_vec());
}

#[test]
fn test_storage_json_of_content_keeps_markup() {
    let page = Content::new_page("DEV", "Tom & Jerry", "<p>1 < 2 & 3 > 2</p>");
    let payload = String::from_utf8(to_storage_json(&page).unwrap()).unwrap();

    assert!(payload.contains(r#""title":"Tom & Jerry""#));
    assert!(payload.contains(r#""value":"<p>1 < 2 & 3 > 2</p>""#));
    assert!(!payload.contains(r"\u0026"));
    assert!(!payload.contains(r"\u003c"));

    let decoded: Content = serde_json::from_str(&payload).unwrap();
    assert_eq!(decoded.body.storage.value, "<p>1 < 2 & 3 > 2</p>");
}
