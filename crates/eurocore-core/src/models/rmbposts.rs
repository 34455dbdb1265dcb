use serde::{Deserialize, Serialize};

/// A regional message board post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RmbPost {
    pub nation: String,
    pub region: String,
    pub text: String,
}

impl RmbPost {
    pub fn new(
        nation: impl Into<String>,
        region: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            nation: nation.into(),
            region: region.into(),
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_flat_fields() {
        let post = RmbPost::new("testlandia", "the_pacific", "hello");
        assert_eq!(
            serde_json::to_value(&post).unwrap(),
            json!({"nation": "testlandia", "region": "the_pacific", "text": "hello"})
        );
    }
}
