/// Path appended to the base location to reach the REST API root
pub const API_ROOT_SUFFIX: &str = "rest/api";
/// Value sent in the `Accept` header of every request
pub const ACCEPT_HEADER_VALUE: &str = "application/json, */*";
/// Value sent in the `Content-Type` header of write requests
pub const JSON_CONTENT_TYPE: &str = "application/json";
/// Name of the session cookie used by token authentication
pub const TOKEN_COOKIE_NAME: &str = "studio.crowd.tokenkey";
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = concat!("confluence-client/", env!("CARGO_PKG_VERSION"));
/// Default timeout in seconds for REST requests built from [`crate::application::config::Config`]
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Date format used by the `postingDay` query parameter
pub const POSTING_DAY_FORMAT: &str = "%Y-%m-%d";
/// Content type used when looking a page up by title
pub const PAGE_CONTENT_TYPE: &str = "page";
/// Body representation understood by the storage editor
pub const STORAGE_REPRESENTATION: &str = "storage";
