//! Category directory: the static table of Play Store categories and the
//! lookup that turns free-form names into canonical store ids.

pub mod directory;
pub mod keywords;
pub mod resolve;

pub use directory::{Category, CategoryDirectory};
pub use keywords::keyword_variants;
pub use resolve::{normalize, resolve, NotFound, Resolution};
