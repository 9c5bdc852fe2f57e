//! Editorial data model for Petals Magazine.
//!
//! All content is static and compiled in: a fixed article catalog and a
//! deterministically generated 39-issue archive. Nothing here is created,
//! mutated, or destroyed at runtime.

pub mod article;
pub mod issue;

pub use article::{ARTICLES, Article, Category, article_by_id, articles, hero_slides, next_article};
pub use issue::{
    ISSUE_COUNT, Issue, Season, articles_in_issue, issue_by_number, issues, latest_issue,
};
