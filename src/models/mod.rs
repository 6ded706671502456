mod analytics;
mod listing;
mod product;
mod relations;

pub use analytics::*;
pub use listing::*;
pub use product::*;
pub use relations::*;
