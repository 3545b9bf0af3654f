/// Content (page, blog post) models
pub mod content;
/// Search hit models
pub mod search;
/// Space models
pub mod space;

pub use content::*;
pub use search::*;
pub use space::*;
