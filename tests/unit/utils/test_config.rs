use confluence_client::utils::config::{env_value, get_env_or_default, get_env_or_none};
use std::env;

#[test]
fn test_get_env_or_default_missing() {
    let value: u64 = get_env_or_default("CONFLUENCE_TEST_MISSING_TIMEOUT", 30);
    assert_eq!(value, 30);
}

#[test]
fn test_get_env_or_default_parses() {
    unsafe {
        env::set_var("CONFLUENCE_TEST_TIMEOUT_SET", "45");
    }
    let value: u64 = get_env_or_default("CONFLUENCE_TEST_TIMEOUT_SET", 30);
    assert_eq!(value, 45);
    unsafe {
        env::remove_var("CONFLUENCE_TEST_TIMEOUT_SET");
    }
}

#[test]
fn test_get_env_or_default_invalid_uses_default() {
    unsafe {
        env::set_var("CONFLUENCE_TEST_TIMEOUT_INVALID", "soon");
    }
    let value: u64 = get_env_or_default("CONFLUENCE_TEST_TIMEOUT_INVALID", 30);
    assert_eq!(value, 30);
    unsafe {
        env::remove_var("CONFLUENCE_TEST_TIMEOUT_INVALID");
    }
}

#[test]
fn test_get_env_or_none() {
    unsafe {
        env::set_var("CONFLUENCE_TEST_TOKEN_BLANK", "   ");
        env::set_var("CONFLUENCE_TEST_TOKEN_SET", "abc");
    }
    assert_eq!(get_env_or_none::<String>("CONFLUENCE_TEST_TOKEN_BLANK"), None);
    assert_eq!(
        get_env_or_none::<String>("CONFLUENCE_TEST_TOKEN_SET").as_deref(),
        Some("abc")
    );
    assert_eq!(get_env_or_none::<String>("CONFLUENCE_TEST_TOKEN_MISSING"), None);
    unsafe {
        env::remove_var("CONFLUENCE_TEST_TOKEN_BLANK");
        env::remove_var("CONFLUENCE_TEST_TOKEN_SET");
    }
}

#[test]
fn test_blank_value_counts_as_unset() {
    unsafe {
        env::set_var("CONFLUENCE_TEST_BASE_URL_BLANK", "  ");
    }
    assert_eq!(env_value("CONFLUENCE_TEST_BASE_URL_BLANK"), None);
    assert_eq!(
        get_env_or_default(
            "CONFLUENCE_TEST_BASE_URL_BLANK",
            String::from("http://localhost:8090")
        ),
        "http://localhost:8090"
    );
    unsafe {
        env::remove_var("CONFLUENCE_TEST_BASE_URL_BLANK");
    }
}

#[test]
fn test_env_value_keeps_raw_value() {
    unsafe {
        env::set_var("CONFLUENCE_TEST_PASSWORD_RAW", " secret ");
    }
    assert_eq!(
        env_value("CONFLUENCE_TEST_PASSWORD_RAW").as_deref(),
        Some(" secret ")
    );
    unsafe {
        env::remove_var("CONFLUENCE_TEST_PASSWORD_RAW");
    }
}
