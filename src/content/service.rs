//! Article operations built on an [`ArticleStore`]

use log::{debug, error};
use serde::{Deserialize, Serialize};

use super::identity::IdentityProvider;
use super::store::{ArticleRecord, ArticleStore, Category, NewArticle, Tag};
use crate::error::ContentResult;

/// Default page size for article listings
pub const DEFAULT_PAGE_SIZE: usize = 2;

/// Editable article fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleInput {
    pub title: String,
    pub content: String,
    /// 0 means "no category"
    pub category_id: u64,
    pub tags: Vec<u64>,
}

/// Article as presented in a listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleSummary {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub owner_token: String,
    /// First linked category
    pub category: Option<u64>,
    pub tags: Vec<u64>,
}

/// One page of non-archived articles plus the overall count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticlePage {
    pub articles: Vec<ArticleSummary>,
    pub total: usize,
}

/// Create/list/update/archive articles on behalf of one client
pub struct ArticleService<S, I> {
    store: S,
    identity: I,
}

impl<S: ArticleStore, I: IdentityProvider> ArticleService<S, I> {
    pub fn new(store: S, identity: I) -> Self {
        Self { store, identity }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Insert the article owned by the current client, then link its
    /// category and tags
    pub fn create_article(&mut self, input: &ArticleInput) -> ContentResult<ArticleRecord> {
        let result = self.try_create(input);
        if let Err(e) = &result {
            error!("creating article '{}' failed: {}", input.title, e);
        }
        result
    }

    fn try_create(&mut self, input: &ArticleInput) -> ContentResult<ArticleRecord> {
        let record = self.store.insert_article(NewArticle {
            title: input.title.clone(),
            content: input.content.clone(),
            owner_token: self.identity.client_token(),
        })?;

        self.store.insert_category_link(record.id, input.category_id)?;

        if !input.tags.is_empty() {
            self.store.insert_tag_links(record.id, &input.tags)?;
        }

        debug!("created article {}", record.id);
        Ok(record)
    }

    /// Page `page` (1-based) of `limit` non-archived articles
    pub fn list_articles(&self, page: usize, limit: usize) -> ContentResult<ArticlePage> {
        let total = self.store.count_active()?;
        if page == 0 || limit == 0 {
            return Ok(ArticlePage { articles: Vec::new(), total });
        }

        let from = (page - 1).saturating_mul(limit);
        let to = from.saturating_add(limit - 1);

        let articles = self
            .store
            .select_active(from, to)?
            .into_iter()
            .map(|row| ArticleSummary {
                id: row.id,
                title: row.title,
                content: row.content,
                owner_token: row.owner_token,
                category: row.category_ids.first().copied(),
                tags: row.tag_ids,
            })
            .collect();

        Ok(ArticlePage { articles, total })
    }

    /// First page with the default page size
    pub fn first_page(&self) -> ContentResult<ArticlePage> {
        self.list_articles(1, DEFAULT_PAGE_SIZE)
    }

    /// Overwrite title/content and replace all category and tag links
    pub fn update_article(&mut self, id: u64, input: &ArticleInput) -> ContentResult<()> {
        self.store.update_article(id, &input.title, &input.content)?;

        self.store.delete_category_links(id)?;
        if input.category_id != 0 {
            self.store.insert_category_link(id, input.category_id)?;
        }

        self.store.delete_tag_links(id)?;
        if !input.tags.is_empty() {
            self.store.insert_tag_links(id, &input.tags)?;
        }

        debug!("updated article {}", id);
        Ok(())
    }

    /// Soft delete: the row stays but no longer appears in listings
    pub fn archive_article(&mut self, id: u64) -> ContentResult<()> {
        self.store.set_archived(id, true)?;
        debug!("archived article {}", id);
        Ok(())
    }

    pub fn taxonomy(&self) -> Taxonomy<'_, S> {
        Taxonomy::new(&self.store)
    }
}

/// Read-only category and tag lookup
pub struct Taxonomy<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S: ArticleStore + ?Sized> Taxonomy<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub fn categories(&self) -> ContentResult<Vec<Category>> {
        self.store.categories()
    }

    pub fn tags(&self) -> ContentResult<Vec<Tag>> {
        self.store.tags()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{MemoryStore, StaticIdentity};
    use crate::error::ContentError;

    fn service() -> ArticleService<MemoryStore, StaticIdentity> {
        let store = MemoryStore::with_taxonomy(
            vec![
                Category { id: 1, name: "Finance".into() },
                Category { id: 2, name: "Housing".into() },
            ],
            vec![
                Tag { id: 10, name: "mortgage".into() },
                Tag { id: 11, name: "savings".into() },
                Tag { id: 12, name: "rates".into() },
            ],
        );
        ArticleService::new(store, StaticIdentity::new("client-abc"))
    }

    fn input(title: &str, category_id: u64, tags: Vec<u64>) -> ArticleInput {
        ArticleInput {
            title: title.into(),
            content: format!("{} body", title),
            category_id,
            tags,
        }
    }

    #[test]
    fn test_create_stamps_owner_and_links() {
        let mut svc = service();
        let record = svc.create_article(&input("First", 1, vec![10, 12])).unwrap();

        assert_eq!(record.owner_token, "client-abc");

        let page = svc.first_page().unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.articles[0].category, Some(1));
        assert_eq!(page.articles[0].tags, vec![10, 12]);
    }

    #[test]
    fn test_create_without_tags() {
        let mut svc = service();
        svc.create_article(&input("Plain", 2, vec![])).unwrap();
        assert!(svc.first_page().unwrap().articles[0].tags.is_empty());
    }

    #[test]
    fn test_create_with_unknown_category_fails() {
        let mut svc = service();
        let err = svc.create_article(&input("Bad", 9, vec![])).unwrap_err();
        assert!(matches!(err, ContentError::Store { .. }));
    }

    #[test]
    fn test_pagination() {
        let mut svc = service();
        for t in ["a", "b", "c", "d", "e"] {
            svc.create_article(&input(t, 1, vec![])).unwrap();
        }

        let titles = |page: &ArticlePage| -> Vec<String> {
            page.articles.iter().map(|a| a.title.clone()).collect()
        };

        let p1 = svc.list_articles(1, 2).unwrap();
        assert_eq!(titles(&p1), vec!["a", "b"]);
        assert_eq!(p1.total, 5);

        let p3 = svc.list_articles(3, 2).unwrap();
        assert_eq!(titles(&p3), vec!["e"]);

        let p4 = svc.list_articles(4, 2).unwrap();
        assert!(p4.articles.is_empty());
        assert_eq!(p4.total, 5);

        let p0 = svc.list_articles(0, 2).unwrap();
        assert!(p0.articles.is_empty());
        assert_eq!(p0.total, 5);
    }

    #[test]
    fn test_update_replaces_links() {
        let mut svc = service();
        let id = svc.create_article(&input("Old", 1, vec![10, 11])).unwrap().id;

        svc.update_article(id, &input("New", 2, vec![12])).unwrap();
        let article = &svc.first_page().unwrap().articles[0];
        assert_eq!(article.title, "New");
        assert_eq!(article.content, "New body");
        assert_eq!(article.category, Some(2));
        assert_eq!(article.tags, vec![12]);

        // Category 0 and empty tags clear the links
        svc.update_article(id, &input("Bare", 0, vec![])).unwrap();
        let article = &svc.first_page().unwrap().articles[0];
        assert_eq!(article.category, None);
        assert!(article.tags.is_empty());
    }

    #[test]
    fn test_update_unknown_article() {
        let mut svc = service();
        let err = svc.update_article(7, &input("x", 1, vec![])).unwrap_err();
        assert!(matches!(err, ContentError::ArticleNotFound { id: 7 }));
    }

    #[test]
    fn test_archive_hides_article() {
        let mut svc = service();
        let keep = svc.create_article(&input("keep", 1, vec![])).unwrap().id;
        let gone = svc.create_article(&input("gone", 1, vec![])).unwrap().id;

        svc.archive_article(gone).unwrap();

        let page = svc.list_articles(1, 10).unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.articles[0].id, keep);
        assert!(svc.store().article(gone).unwrap().is_archived);

        assert!(svc.archive_article(99).is_err());
    }

    #[test]
    fn test_taxonomy_lookup() {
        let svc = service();
        let taxonomy = svc.taxonomy();
        assert_eq!(taxonomy.categories().unwrap().len(), 2);
        assert_eq!(taxonomy.tags().unwrap()[0].name, "mortgage");
    }
}
