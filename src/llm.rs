use serde::Serialize;
use reqwest::Client;
use crate::error::{Result, AppError};

const MODEL: &str = "deepseek/deepseek-chat-v3-0324";
const MAX_TOKENS: u32 = 512;
const TEMPERATURE: f32 = 0.2;

const SYSTEM_PROMPT: &str = "\
You extract calendar events from Korean university notices and similar text. \
An event is anything with a name and a start time; the end time may be absent.

Output one event per line in exactly this format:
Name | Start | End
Use an empty field after the last separator when the end is unknown. \
Do not add numbering, commentary, or markdown. \
If the text contains no events, output exactly: []";

#[derive(Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    max_tokens: u32,
    temperature: f32,
}

/// Send user text to the chat-completion API and return the raw reply.
pub async fn call_openrouter(api_key: &str, text: &str) -> Result<String> {
    let client = Client::new();
    let body = ChatRequest {
        model: MODEL.into(),
        messages: vec![
            Message {
                role: "system".into(),
                content: SYSTEM_PROMPT.into(),
            },
            Message {
                role: "user".into(),
                content: text.into(),
            },
        ],
        max_tokens: MAX_TOKENS,
        temperature: TEMPERATURE,
    };

    let res = client
        .post("https://openrouter.ai/api/v1/chat/completions")
        .bearer_auth(api_key)
        .json(&body)
        .send()
        .await?
        .error_for_status()
        .map_err(|e| AppError::Llm(e.to_string()))?;

    let json: serde_json::Value = res.json().await?;
    let reply = json["choices"][0]["message"]["content"]
        .as_str()
        .ok_or_else(|| AppError::Llm("Invalid response format from LLM".to_string()))?
        .to_string();

    Ok(reply)
}
