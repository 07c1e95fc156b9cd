pub mod lookup;
pub mod sources;

pub use lookup::NewsLookup;
pub use sources::newsapi::NewsApiSource;

pub mod prelude {
    pub use super::lookup::NewsLookup;
    pub use super::sources::newsapi::NewsApiSource;
    pub use ct_core::{Article, Digest, Error, NewsReport, NewsSource, Result, Topic};
}
