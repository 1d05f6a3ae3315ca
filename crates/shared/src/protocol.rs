use serde::{Deserialize, Serialize};

/// Response body of the fact endpoint. Only `text` is required; the other
/// fields are metadata some endpoints include and are passed through as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_body_with_only_text() {
        let fact: FactResponse =
            serde_json::from_str(r#"{"text":"Bees can recognize human faces."}"#).expect("decode");
        assert_eq!(fact.text, "Bees can recognize human faces.");
        assert_eq!(fact.id, None);
        assert_eq!(fact.permalink, None);
    }

    #[test]
    fn decodes_full_endpoint_body() {
        let body = r#"{
            "id": "5b1386f7",
            "text": "Bananas are curved because they grow towards the sun.",
            "source": "djtech.net",
            "source_url": "http://www.djtech.net/humor/useless_facts.htm",
            "language": "en",
            "permalink": "https://uselessfacts.jsph.pl/api/v2/facts/5b1386f7"
        }"#;
        let fact: FactResponse = serde_json::from_str(body).expect("decode");
        assert_eq!(
            fact.text,
            "Bananas are curved because they grow towards the sun."
        );
        assert_eq!(fact.language.as_deref(), Some("en"));
    }
}
