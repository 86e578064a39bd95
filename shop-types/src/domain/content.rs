//! Editorial content: articles grouped by topic.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Article {
    pub article_pk: i64,
    pub title: String,
    pub body: String,
    pub author: Option<String>,
    #[schema(value_type = Option<String>, example = "2024-05-01T12:00:00")]
    pub published: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Topic {
    pub topic_pk: i64,
    #[schema(example = "Care guides")]
    pub name: String,
}
