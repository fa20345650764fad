use chrono::NaiveDate;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use serde::Deserialize;
use tracing::debug;

use crate::scraper::extract_paragraphs;
use super::{ListingEntry, NoticeSite};

const LISTING_URL: &str = "https://web.kangnam.ac.kr/menu/f19069e6134f8f8aa7f689a4a675e66f.do";
const DETAIL_URL: &str = "https://web.kangnam.ac.kr/menu/board/info/f19069e6134f8f8aa7f689a4a675e66f.do";
const DATE_FORMAT: &str = "%Y.%m.%d";

static ITEM_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("ul.tbody > li").expect("Failed to parse item selector")
});

static ANCHOR_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("a.detailLink").expect("Failed to parse anchor selector")
});

static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("strong.tit").expect("Failed to parse title selector")
});

static DATE_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("span.date").expect("Failed to parse date selector")
});

static CONTENT_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("div.board-view-con").expect("Failed to parse content selector")
});

/// The board renders anchors with `href="javascript:void(0)"`; the real
/// post identifiers live in a `data-params` attribute holding
/// single-quoted JSON.
#[derive(Deserialize)]
struct DetailParams {
    #[serde(rename = "encMenuSeq")]
    enc_menu_seq: String,
    #[serde(rename = "encMenuBoardSeq")]
    enc_menu_board_seq: String,
}

fn detail_url_from_params(raw: &str) -> Option<String> {
    // Normalize the single-quoted blob to valid JSON before parsing.
    let normalized = raw.replace('\'', "\"");
    let params: DetailParams = serde_json::from_str(&normalized).ok()?;
    Some(format!(
        "{}?scrtWrtiYn=false&encMenuSeq={}&encMenuBoardSeq={}",
        DETAIL_URL, params.enc_menu_seq, params.enc_menu_board_seq
    ))
}

/// Kangnam university notice board. Unlike Dongduk, the listing hrefs
/// are not usable as links; detail URLs are rebuilt from data attributes,
/// and post dates use dotted format.
pub struct Kangnam;

impl NoticeSite for Kangnam {
    fn name(&self) -> &'static str {
        "kangnam"
    }

    fn listing_url(&self) -> &'static str {
        LISTING_URL
    }

    fn parse_listing(&self, html: &str) -> Vec<ListingEntry> {
        let document = Html::parse_document(html);
        let mut entries = Vec::new();

        for item in document.select(&ITEM_SELECTOR) {
            let Some(anchor) = item.select(&ANCHOR_SELECTOR).next() else {
                continue;
            };
            let Some(title_tag) = anchor.select(&TITLE_SELECTOR).next() else {
                continue;
            };
            let Some(date_tag) = item.select(&DATE_SELECTOR).next() else {
                continue;
            };

            let title = title_tag.text().collect::<String>().trim().to_string();
            let date_text = date_tag.text().collect::<String>().trim().to_string();

            let Ok(date) = NaiveDate::parse_from_str(&date_text, DATE_FORMAT) else {
                debug!("kangnam: skipping row with unparseable date {:?}", date_text);
                continue;
            };

            let Some(link) = anchor
                .value()
                .attr("data-params")
                .and_then(detail_url_from_params)
            else {
                debug!("kangnam: skipping row without usable data-params");
                continue;
            };

            entries.push(ListingEntry {
                title,
                link,
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
