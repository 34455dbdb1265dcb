use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A published dispatch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dispatch {
    pub id: i64,
    pub nation: String,
    pub category: i32,
    pub subcategory: i32,
    pub title: String,
    pub text: String,
    pub created_by: String,
    pub modified_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDispatch {
    pub nation: String,
    pub title: String,
    pub text: String,
    pub category: i32,
    pub subcategory: i32,
}

impl NewDispatch {
    pub fn new(
        nation: impl Into<String>,
        title: impl Into<String>,
        text: impl Into<String>,
        category: i32,
        subcategory: i32,
    ) -> Self {
        Self {
            nation: nation.into(),
            title: title.into(),
            text: text.into(),
            category,
            subcategory,
        }
    }
}

/// Replacement content for an existing dispatch.
///
/// `id` only selects the `/dispatches/{id}` path; it is not part of the body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditDispatch {
    #[serde(skip)]
    pub id: i64,
    pub title: String,
    pub text: String,
    pub category: i32,
    pub subcategory: i32,
}

impl EditDispatch {
    pub fn new(
        id: i64,
        title: impl Into<String>,
        text: impl Into<String>,
        category: i32,
        subcategory: i32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            text: text.into(),
            category,
            subcategory,
        }
    }
}

/// Job record returned for every dispatch mutation.
///
/// The server processes dispatch jobs asynchronously, so `dispatch_id` and
/// `error` are empty until the job has run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchStatus {
    pub id: i64,
    pub action: String,
    pub status: String,
    #[serde(default)]
    pub dispatch_id: Option<i64>,
    #[serde(default)]
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}
