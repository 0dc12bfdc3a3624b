//! Rendered prompt and its provider-specific payload shapes.
//!
//! A prompt is rendered once per call; adapters then pick the shape their
//! API wants: Studio-style `contents` or an OpenAI-style `messages` entry.

use serde::{Deserialize, Serialize};

use crate::instructions::render_prompt;

/// The single user turn sent to a provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prompt {
    text: String,
}

impl Prompt {
    /// Render the prompt template from an instruction and the user text.
    pub fn render(instruction: &str, message: &str) -> Self {
        Self {
            text: render_prompt(instruction, message),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Studio `contents` list: one user turn with one text part.
    pub fn to_studio_contents(&self) -> Vec<StudioContent> {
        vec![StudioContent {
            role: "user".to_string(),
            parts: vec![StudioPart {
                text: self.text.clone(),
            }],
        }]
    }

    /// OpenAI chat `messages` list: one user message.
    pub fn to_chat_messages(&self) -> Vec<ChatMessage> {
        vec![ChatMessage {
            role: "user".to_string(),
            content: self.text.clone(),
        }]
    }
}

/// One entry of a Studio `contents` array.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudioContent {
    pub role: String,
    pub parts: Vec<StudioPart>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudioPart {
    pub text: String,
}

/// One OpenAI-format chat message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_studio_shape() {
        let prompt = Prompt::render("Fix it.", "teh cat");
        let value = serde_json::to_value(prompt.to_studio_contents()).unwrap();
        assert_eq!(
            value,
            json!([{ "role": "user", "parts": [{ "text": "Fix it.\n\nUser text:\nteh cat" }] }])
        );
    }

    #[test]
    fn test_chat_shape() {
        let prompt = Prompt::render("Fix it.", "teh cat");
        let value = serde_json::to_value(prompt.to_chat_messages()).unwrap();
        assert_eq!(
            value,
            json!([{ "role": "user", "content": "Fix it.\n\nUser text:\nteh cat" }])
        );
    }
}
