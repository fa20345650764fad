use chrono::NaiveDate;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::debug;

use crate::scraper::extract_paragraphs;
use super::{ListingEntry, NoticeSite};

const BASE_URL: &str = "https://cs.dongduk.ac.kr";
const LISTING_URL: &str = "https://cs.dongduk.ac.kr/bbs_shop/list.htm?board_code=board3";
const DATE_FORMAT: &str = "%Y-%m-%d";

static ITEM_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("ul.lst-board.lst-body > li").expect("Failed to parse item selector")
});

static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("div.td.col_subject a span").expect("Failed to parse title selector")
});

static DATE_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("div.td.inf.col_date").expect("Failed to parse date selector")
});

static LINK_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("div.td.col_subject a").expect("Failed to parse link selector")
});

static CONTENT_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("div#conbody").expect("Failed to parse content selector")
});

/// Dongduk CS department notice board. Detail links are relative hrefs
/// resolved against the site origin; post dates use dashed ISO format.
pub struct Dongduk;

impl NoticeSite for Dongduk {
    fn name(&self) -> &'static str {
        "dongduk"
    }

    fn listing_url(&self) -> &'static str {
        LISTING_URL
    }

    fn parse_listing(&self, html: &str) -> Vec<ListingEntry> {
        let document = Html::parse_document(html);
        let mut entries = Vec::new();

        for item in document.select(&ITEM_SELECTOR) {
            let Some(title_tag) = item.select(&TITLE_SELECTOR).next() else {
                continue;
            };
            let Some(date_tag) = item.select(&DATE_SELECTOR).next() else {
                continue;
            };

            let title = title_tag.text().collect::<String>().trim().to_string();
            let date_text = date_tag.text().collect::<String>().trim().to_string();

            let Ok(date) = NaiveDate::parse_from_str(&date_text, DATE_FORMAT) else {
                debug!("dongduk: skipping row with unparseable date {:?}", date_text);
                continue;
            };

            let Some(href) = item
                .select(&LINK_SELECTOR)
                .next()
                .and_then(|a| a.value().attr("href"))
            else {
                continue;
            };

            entries.push(ListingEntry {
                title,
                link: format!("{}{}", BASE_URL, href),
                date_text,
                date,
            });
        }

        entries
    }

    fn extract_content(&self, html: &str) -> String {
        extract_paragraphs(html, &CONTENT_SELECTOR)
    }
}
