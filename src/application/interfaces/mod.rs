/// Content service interface
pub mod content;
/// Search service interface
pub mod search;
/// Space service interface
pub mod space;

pub use content::ContentService;
pub use search::SearchService;
pub use space::SpaceService;
