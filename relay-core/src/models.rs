use serde::{Deserialize, Serialize};

/// Inbound request body: `{"prompt": "<string>"}`
#[derive(Debug, Clone, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub prompt: String,
}

/// Success response body: `{"text": "<string>"}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AskResponse {
    pub text: String,
}

/// Request payload for the Gemini generateContent API
#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Build a payload carrying exactly one user prompt, verbatim
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.into()),
                }],
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: Option<String>,
}

/// Response from the Gemini generateContent API.
///
/// Every level is optional: the only path the relay relies on is
/// `candidates[0].content.parts[0].text`, and a response missing any
/// level of it is still a valid success.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate, if present
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_carries_prompt_verbatim() {
        let request = GenerateContentRequest::from_prompt("Hello, \"world\"");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({"contents": [{"parts": [{"text": "Hello, \"world\""}]}]})
        );
    }

    #[test]
    fn first_text_extracts_nested_field() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {
                    "parts": [{"text": "answer"}],
                    "role": "model"
                },
                "finishReason": "STOP"
            }]
        }))
        .unwrap();
        assert_eq!(response.first_text(), Some("answer"));
    }

    #[test]
    fn first_text_handles_empty_response() {
        let response: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(response.first_text(), None);
    }

    #[test]
    fn first_text_handles_missing_parts() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{"content": {"parts": []}}]
        }))
        .unwrap();
        assert_eq!(response.first_text(), None);

        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{}]
        }))
        .unwrap();
        assert_eq!(response.first_text(), None);
    }

    #[test]
    fn askrequest_defaults_missing_prompt_to_empty() {
        let request: AskRequest = serde_json::from_str("{}").unwrap();
        assert!(request.prompt.is_empty());
    }
}
