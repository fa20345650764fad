use serde::Serialize;

use crate::error::{AppError, Result};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Event {
    pub name: String,
    pub start: String,
    pub end: String,
}

/// Parse a model reply of `Name | Start | End` lines into events.
///
/// The reply is never executed or evaluated; it is validated line by
/// line, and a single malformed line rejects the whole reply. A reply
/// of `[]` (possibly inside a code fence) means no events.
pub fn parse_events(reply: &str) -> Result<Vec<Event>> {
    let trimmed = strip_code_fence(reply.trim());

    if trimmed.is_empty() || trimmed == "[]" {
        return Ok(Vec::new());
    }

    let mut events = Vec::new();
    for line in trimmed.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('|').map(str::trim).collect();
        let &[name, start, end] = fields.as_slice() else {
            return Err(AppError::Parse(format!(
                "Malformed event line in LLM reply: {:?}",
                line
            )));
        };
        if name.is_empty() || start.is_empty() {
            return Err(AppError::Parse(format!(
                "Event line missing name or start: {:?}",
                line
            )));
        }

        events.push(Event {
            name: name.to_string(),
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    Ok(events)
}

// Models wrap plain-text replies in fences often enough to be worth handling.
fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let Some(inner) = rest.strip_suffix("```") else {
        return text;
    };
    // Drop an optional language tag on the opening fence line.
    match inner.split_once('\n') {
        Some((first, body)) if !first.contains('|') => body.trim(),
        _ => inner.trim(),
    }
}
