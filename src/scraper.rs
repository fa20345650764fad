use reqwest::{Client, ClientBuilder};
use scraper::{Html, Selector};
use std::time::Duration;
use once_cell::sync::Lazy;
use crate::error::Result;

// Create a static client to reuse connections
static CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .timeout(Duration::from_secs(10))
        .connect_timeout(Duration::from_secs(5))
        .pool_max_idle_per_host(10)
        .build()
        .expect("Failed to build HTTP client")
});

static PARAGRAPH_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("p").expect("Failed to parse paragraph selector")
});

/// Fetch a page body, treating non-2xx statuses as errors.
pub async fn fetch_html(url: &str) -> Result<String> {
    let response = CLIENT.get(url).send().await?.error_for_status()?;
    let html = response.text().await?;
    Ok(html)
}

/// Concatenate the text of every paragraph inside the first element
/// matching `container`, joined with newlines. An absent container
/// yields an empty string rather than an error.
pub fn extract_paragraphs(html: &str, container: &Selector) -> String {
    let document = Html::parse_document(html);

    let Some(element) = document.select(container).next() else {
        return String::new();
    };

    element
        .select(&PARAGRAPH_SELECTOR)
        .map(|p| p.text().collect::<String>().trim().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conbody() -> Selector {
        Selector::parse("div#conbody").unwrap()
    }

    #[test]
    fn joins_paragraph_texts_with_newlines() {
        let html = r#"
            <html><body>
              <div id="conbody">
                <p>First line.</p>
                <div><p> Nested line. </p></div>
                <p>Last line.</p>
              </div>
            </body></html>
        "#;
        let content = extract_paragraphs(html, &conbody());
        assert_eq!(content, "First line.\nNested line.\nLast line.");
    }

    #[test]
    fn missing_container_yields_empty_string() {
        let html = "<html><body><p>orphan</p></body></html>";
        assert_eq!(extract_paragraphs(html, &conbody()), "");
    }

    #[test]
    fn container_without_paragraphs_yields_empty_string() {
        let html = r#"<div id="conbody"><span>no paragraphs here</span></div>"#;
        assert_eq!(extract_paragraphs(html, &conbody()), "");
    }
}
