//! Article, category and tag access for the content front-end

mod identity;
mod service;
mod store;

pub use identity::{IdentityProvider, StaticIdentity};
pub use service::{ArticleInput, ArticlePage, ArticleService, ArticleSummary, Taxonomy, DEFAULT_PAGE_SIZE};
pub use store::{ArticleRecord, ArticleRow, ArticleStore, Category, MemoryStore, NewArticle, Tag};
