//! Article/taxonomy table access
//!
//! [`ArticleStore`] mirrors the operations the hosted tables expose: row
//! inserts and updates, link table maintenance and a ranged select of
//! non-archived articles with an exact count.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{ContentError, ContentResult};

/// Row as inserted into the articles table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewArticle {
    pub title: String,
    pub content: String,
    pub owner_token: String,
}

/// Stored article row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub owner_token: String,
    pub is_archived: bool,
}

/// Article joined with its category and tag links
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleRow {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub owner_token: String,
    pub category_ids: Vec<u64>,
    pub tag_ids: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: u64,
    pub name: String,
}

/// Backing table API for articles, link tables and taxonomy
pub trait ArticleStore {
    /// Insert an article and return the stored row
    fn insert_article(&mut self, article: NewArticle) -> ContentResult<ArticleRecord>;

    /// Overwrite title and content
    fn update_article(&mut self, id: u64, title: &str, content: &str) -> ContentResult<()>;

    fn set_archived(&mut self, id: u64, archived: bool) -> ContentResult<()>;

    fn insert_category_link(&mut self, article_id: u64, category_id: u64) -> ContentResult<()>;

    fn delete_category_links(&mut self, article_id: u64) -> ContentResult<()>;

    fn insert_tag_links(&mut self, article_id: u64, tag_ids: &[u64]) -> ContentResult<()>;

    fn delete_tag_links(&mut self, article_id: u64) -> ContentResult<()>;

    /// Non-archived articles at positions `from..=to` in id order
    fn select_active(&self, from: usize, to: usize) -> ContentResult<Vec<ArticleRow>>;

    /// Number of non-archived articles
    fn count_active(&self) -> ContentResult<usize>;

    fn categories(&self) -> ContentResult<Vec<Category>>;

    fn tags(&self) -> ContentResult<Vec<Tag>>;
}

/// In-process store with foreign-key checks on link inserts
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    articles: BTreeMap<u64, ArticleRecord>,
    category_links: Vec<(u64, u64)>,
    tag_links: Vec<(u64, u64)>,
    categories: Vec<Category>,
    tags: Vec<Tag>,
    next_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with category and tag lookup rows
    pub fn with_taxonomy(categories: Vec<Category>, tags: Vec<Tag>) -> Self {
        Self {
            categories,
            tags,
            ..Self::default()
        }
    }

    /// Raw row lookup, archived rows included
    pub fn article(&self, id: u64) -> Option<&ArticleRecord> {
        self.articles.get(&id)
    }

    fn require_article(&self, id: u64) -> ContentResult<()> {
        if self.articles.contains_key(&id) {
            Ok(())
        } else {
            Err(ContentError::ArticleNotFound { id })
        }
    }

    fn fk_violation(table: &str, id: u64) -> ContentError {
        ContentError::Store {
            message: format!("foreign key violation: no {} with id {}", table, id),
        }
    }

    fn joined(&self, record: &ArticleRecord) -> ArticleRow {
        let links = |table: &[(u64, u64)]| -> Vec<u64> {
            table
                .iter()
                .filter(|(article_id, _)| *article_id == record.id)
                .map(|(_, id)| *id)
                .collect()
        };

        ArticleRow {
            id: record.id,
            title: record.title.clone(),
            content: record.content.clone(),
            owner_token: record.owner_token.clone(),
            category_ids: links(&self.category_links),
            tag_ids: links(&self.tag_links),
        }
    }
}

impl ArticleStore for MemoryStore {
    fn insert_article(&mut self, article: NewArticle) -> ContentResult<ArticleRecord> {
        self.next_id += 1;
        let record = ArticleRecord {
            id: self.next_id,
            title: article.title,
            content: article.content,
            owner_token: article.owner_token,
            is_archived: false,
        };
        self.articles.insert(record.id, record.clone());
        Ok(record)
    }

    fn update_article(&mut self, id: u64, title: &str, content: &str) -> ContentResult<()> {
        let record = self
            .articles
            .get_mut(&id)
            .ok_or(ContentError::ArticleNotFound { id })?;
        record.title = title.to_string();
        record.content = content.to_string();
        Ok(())
    }

    fn set_archived(&mut self, id: u64, archived: bool) -> ContentResult<()> {
        let record = self
            .articles
            .get_mut(&id)
            .ok_or(ContentError::ArticleNotFound { id })?;
        record.is_archived = archived;
        Ok(())
    }

    fn insert_category_link(&mut self, article_id: u64, category_id: u64) -> ContentResult<()> {
        self.require_article(article_id)?;
        if !self.categories.iter().any(|c| c.id == category_id) {
            return Err(Self::fk_violation("category", category_id));
        }
        self.category_links.push((article_id, category_id));
        Ok(())
    }

    fn delete_category_links(&mut self, article_id: u64) -> ContentResult<()> {
        self.category_links.retain(|(id, _)| *id != article_id);
        Ok(())
    }

    fn insert_tag_links(&mut self, article_id: u64, tag_ids: &[u64]) -> ContentResult<()> {
        self.require_article(article_id)?;
        // All-or-nothing, like a multi-row insert
        if let Some(&missing) = tag_ids.iter().find(|&&t| !self.tags.iter().any(|tag| tag.id == t)) {
            return Err(Self::fk_violation("tag", missing));
        }
        self.tag_links.extend(tag_ids.iter().map(|&t| (article_id, t)));
        Ok(())
    }

    fn delete_tag_links(&mut self, article_id: u64) -> ContentResult<()> {
        self.tag_links.retain(|(id, _)| *id != article_id);
        Ok(())
    }

    fn select_active(&self, from: usize, to: usize) -> ContentResult<Vec<ArticleRow>> {
        if to < from {
            return Ok(Vec::new());
        }
        Ok(self
            .articles
            .values()
            .filter(|a| !a.is_archived)
            .skip(from)
            .take((to - from).saturating_add(1))
            .map(|a| self.joined(a))
            .collect())
    }

    fn count_active(&self) -> ContentResult<usize> {
        Ok(self.articles.values().filter(|a| !a.is_archived).count())
    }

    fn categories(&self) -> ContentResult<Vec<Category>> {
        Ok(self.categories.clone())
    }

    fn tags(&self) -> ContentResult<Vec<Tag>> {
        Ok(self.tags.clone())
    }
}
