use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored telegram template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub nation: String,
    pub tgid: i64,
    pub key: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTemplate {
    pub nation: String,
    pub tgid: i64,
    pub key: String,
    pub description: String,
}

impl NewTemplate {
    pub fn new(
        nation: impl Into<String>,
        tgid: i64,
        key: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            nation: nation.into(),
            tgid,
            key: key.into(),
            description: description.into(),
        }
    }
}

/// `id` selects the `/templates/{id}` path and is not serialized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditTemplate {
    #[serde(skip)]
    pub id: String,
    pub nation: String,
    pub tgid: i64,
    pub key: String,
    pub description: String,
}

impl EditTemplate {
    pub fn new(
        id: impl Into<String>,
        nation: impl Into<String>,
        tgid: i64,
        key: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            nation: nation.into(),
            tgid,
            key: key.into(),
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn edit_template_omits_id_from_body() {
        let edit = EditTemplate::new("tmpl_1", "testlandia", 31337, "secret", "welcome");
        assert_eq!(
            serde_json::to_value(&edit).unwrap(),
            json!({
                "nation": "testlandia",
                "tgid": 31337,
                "key": "secret",
                "description": "welcome",
            })
        );
    }

    #[test]
    fn template_record_decodes() {
        let t: Template = serde_json::from_value(json!({
            "id": "tmpl_1",
            "nation": "testlandia",
            "tgid": 31337,
            "key": "secret",
            "description": "welcome",
            "created_at": "2024-03-01T00:00:00Z",
            "modified_at": "2024-03-02T00:00:00Z",
        }))
        .unwrap();
        assert_eq!(t.id, "tmpl_1");
        assert_eq!(t.tgid, 31337);
        assert!(t.modified_at > t.created_at);
    }
}
