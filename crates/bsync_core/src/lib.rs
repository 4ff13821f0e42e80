pub mod error;
pub mod source;
pub mod types;

pub use error::Error;
pub use source::ArticleSource;
pub use types::{normalize, ArticleRecord, NormalizedArticle};

pub type Result<T> = std::result::Result<T, Error>;
