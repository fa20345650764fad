use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

use crate::events::Event;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub keyword: String,
    pub start_date: NaiveDate,
}

/// One matching notice. `date` keeps the site's native formatting.
#[derive(Debug, Serialize)]
pub struct Post {
    pub title: String,
    pub link: String,
    pub date: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct EventsResponse {
    pub events: Vec<Event>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_request_parses_iso_date() {
        let req: SearchRequest =
            serde_json::from_str(r#"{"keyword":"장학","start_date":"2024-05-01"}"#).unwrap();
        assert_eq!(req.keyword, "장학");
        assert_eq!(req.start_date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    }

    #[test]
    fn search_request_rejects_non_iso_date() {
        let result: Result<SearchRequest, _> =
            serde_json::from_str(r#"{"keyword":"장학","start_date":"2024.05.01"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn post_serializes_expected_fields() {
        let post = Post {
            title: "t".into(),
            link: "https://example.ac.kr/1".into(),
            date: "2024-05-10".into(),
            content: "".into(),
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "t",
                "link": "https://example.ac.kr/1",
                "date": "2024-05-10",
                "content": ""
            })
        );
    }
}
