//! Request and response envelopes of the supported API styles

use serde::Serialize;
use serde_json::Value;

use domain::ProviderKind;

/// Wire format of a provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiStyle {
    /// `choices[0].message.content`, bearer auth
    ChatCompletions,
    /// `content[0].text`, API-key header plus version header
    Messages,
}

impl ApiStyle {
    /// Wire format used by a provider
    #[must_use]
    pub const fn for_provider(kind: ProviderKind) -> Self {
        match kind {
            ProviderKind::OpenAi | ProviderKind::Groq => Self::ChatCompletions,
            ProviderKind::Anthropic => Self::Messages,
        }
    }

    /// JSON pointer of the answer text in a success response
    #[must_use]
    pub const fn answer_pointer(&self) -> &'static str {
        match self {
            Self::ChatCompletions => "/choices/0/message/content",
            Self::Messages => "/content/0/text",
        }
    }

    /// Build the request body for a single-turn question
    pub fn request_body(&self, model: &str, prompt: &str, max_tokens: u32) -> Value {
        let messages = [UserMessage {
            role: "user",
            content: prompt,
        }];
        let body = match self {
            Self::ChatCompletions => serde_json::to_value(ChatCompletionsRequest {
                model,
                messages: &messages,
                max_tokens,
            }),
            Self::Messages => serde_json::to_value(MessagesRequest {
                model,
                max_tokens,
                messages: &messages,
            }),
        };
        // Serializing plain structs of strings and integers cannot fail
        body.unwrap_or(Value::Null)
    }

    /// Pull the answer text out of a success response
    #[must_use]
    pub fn extract_answer<'a>(&self, body: &'a Value) -> Option<&'a str> {
        body.pointer(self.answer_pointer()).and_then(Value::as_str)
    }

    /// Model name reported by the provider, if any
    #[must_use]
    pub fn reported_model(body: &Value) -> Option<&str> {
        body.get("model").and_then(Value::as_str)
    }
}

#[derive(Debug, Serialize)]
struct UserMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionsRequest<'a> {
    model: &'a str,
    messages: &'a [UserMessage<'a>],
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: &'a [UserMessage<'a>],
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn styles_per_provider() {
        assert_eq!(
            ApiStyle::for_provider(ProviderKind::OpenAi),
            ApiStyle::ChatCompletions
        );
        assert_eq!(ApiStyle::for_provider(ProviderKind::Groq), ApiStyle::ChatCompletions);
        assert_eq!(ApiStyle::for_provider(ProviderKind::Anthropic), ApiStyle::Messages);
    }

    #[test]
    fn chat_completions_body() {
        let body = ApiStyle::ChatCompletions.request_body("gpt-3.5-turbo", "What is 2+2?", 500);
        assert_eq!(
            body,
            json!({
                "model": "gpt-3.5-turbo",
                "messages": [{"role": "user", "content": "What is 2+2?"}],
                "max_tokens": 500
            })
        );
    }

    #[test]
    fn messages_body() {
        let body = ApiStyle::Messages.request_body("claude-3-haiku-20240307", "Hi", 500);
        assert_eq!(
            body,
            json!({
                "model": "claude-3-haiku-20240307",
                "max_tokens": 500,
                "messages": [{"role": "user", "content": "Hi"}]
            })
        );
    }

    #[test]
    fn extracts_choice_content() {
        let body = json!({"choices": [{"message": {"role": "assistant", "content": "4"}}]});
        assert_eq!(ApiStyle::ChatCompletions.extract_answer(&body), Some("4"));
    }

    #[test]
    fn extracts_first_content_block() {
        let body = json!({"content": [{"type": "text", "text": "Four"}, {"type": "text", "text": "x"}]});
        assert_eq!(ApiStyle::Messages.extract_answer(&body), Some("Four"));
    }

    #[test]
    fn missing_shape_yields_none() {
        assert_eq!(ApiStyle::ChatCompletions.extract_answer(&json!({"choices": []})), None);
        assert_eq!(ApiStyle::Messages.extract_answer(&json!({"content": [{"type": "image"}]})), None);
        assert_eq!(ApiStyle::Messages.extract_answer(&json!("text")), None);
    }

    #[test]
    fn reported_model() {
        assert_eq!(ApiStyle::reported_model(&json!({"model": "m1"})), Some("m1"));
        assert_eq!(ApiStyle::reported_model(&json!({})), None);
    }
}
