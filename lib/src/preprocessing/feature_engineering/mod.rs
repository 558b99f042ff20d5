//! Keyword-driven features.
//!
//! Two families are derived from cleaned skills and certification text:
//! per-category keyword counts ([`SkillCategorizer`]) and weighted role
//! scores ([`RoleScorer`]). Both read their keywords from [`KeywordTables`].

mod keywords;
mod role_scores;
mod skill_categories;

pub use keywords::{KeywordTables, RoleKeywords, SkillCategory, BUILTIN_TABLES_VERSION};
pub use role_scores::RoleScorer;
pub use skill_categories::SkillCategorizer;
