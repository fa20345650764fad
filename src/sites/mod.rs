pub mod dongduk;
pub mod kangnam;

use chrono::NaiveDate;

pub use dongduk::Dongduk;
pub use kangnam::Kangnam;

/// One row of a notice-board listing page, with its date already parsed
/// and its detail link already absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub title: String,
    pub link: String,
    pub date_text: String,
    pub date: NaiveDate,
}

/// A scrapable notice board. Each institution supplies its own listing
/// URL, row selectors, link construction, and detail-page container.
///
/// `parse_listing` never fails: rows missing a title or date node, rows
/// whose date text does not parse in the site's format, and rows whose
/// link cannot be built are skipped.
pub trait NoticeSite: Send + Sync {
    fn name(&self) -> &'static str;

    fn listing_url(&self) -> &'static str;

    fn parse_listing(&self, html: &str) -> Vec<ListingEntry>;

    /// Extract the post body from a detail page. An absent content
    /// container yields an empty string.
    fn extract_content(&self, html: &str) -> String;
}
