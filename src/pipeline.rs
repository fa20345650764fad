use futures::stream::{self, StreamExt};
use chrono::NaiveDate;
use tracing::{info, warn};

use crate::api::models::Post;
use crate::error::Result;
use crate::scraper::fetch_html;
use crate::sites::{ListingEntry, NoticeSite};

/// Upper bound on in-flight detail-page fetches per request.
const MAX_CONCURRENT_FETCHES: usize = 8;

/// A listing row qualifies when the keyword is a case-insensitive
/// substring of its title and its date is strictly after the base date.
pub fn matches(entry: &ListingEntry, keyword: &str, start_date: NaiveDate) -> bool {
    entry.title.to_lowercase().contains(&keyword.to_lowercase()) && entry.date > start_date
}

/// Result of one search: the surviving posts, plus how many matched
/// listing rows were dropped because their detail fetch failed.
pub struct SearchOutcome {
    pub posts: Vec<Post>,
    pub dropped: usize,
}

/// Fetch a site's listing, filter it, then fetch every retained post's
/// detail page through a bounded fan-out. A listing fetch failure
/// aborts the request; a detail fetch failure drops that post only,
/// keeping the rest of the batch.
pub async fn search_site(
    site: &dyn NoticeSite,
    keyword: &str,
    start_date: NaiveDate,
) -> Result<SearchOutcome> {
    let listing_html = fetch_html(site.listing_url()).await?;

    let entries: Vec<ListingEntry> = site
        .parse_listing(&listing_html)
        .into_iter()
        .filter(|entry| matches(entry, keyword, start_date))
        .collect();

    info!(
        site = site.name(),
        matched = entries.len(),
        "listing filtered, fetching detail pages"
    );

    let results: Vec<Option<(usize, Post)>> = stream::iter(entries.into_iter().enumerate())
        .map(|(idx, entry)| async move {
            match fetch_html(&entry.link).await {
                Ok(detail_html) => Some((
                    idx,
                    Post {
                        title: entry.title,
                        link: entry.link,
                        date: entry.date_text,
                        content: site.extract_content(&detail_html),
                    },
                )),
                Err(e) => {
                    warn!(
                        site = site.name(),
                        link = %entry.link,
                        "detail fetch failed, dropping post: {}", e
                    );
                    None
                }
            }
        })
        .buffer_unordered(MAX_CONCURRENT_FETCHES)
        .collect()
        .await;

    Ok(collect_outcome(results))
}

/// Restore listing order and account for dropped posts.
/// buffer_unordered completes out of order, and each `None` is a
/// matched row whose detail fetch failed.
fn collect_outcome(results: Vec<Option<(usize, Post)>>) -> SearchOutcome {
    let dropped = results.iter().filter(|r| r.is_none()).count();

    let mut kept: Vec<(usize, Post)> = results.into_iter().flatten().collect();
    kept.sort_by_key(|(idx, _)| *idx);

    SearchOutcome {
        posts: kept.into_iter().map(|(_, post)| post).collect(),
        dropped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, date: NaiveDate) -> ListingEntry {
        ListingEntry {
            title: title.to_string(),
            link: "https://example.ac.kr/post/1".to_string(),
            date_text: date.format("%Y-%m-%d").to_string(),
            date,
        }
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn keyword_match_is_case_insensitive_substring() {
        let e = entry("2024 장학금 Scholarship 안내", d(2024, 5, 10));
        assert!(matches(&e, "scholarship", d(2024, 1, 1)));
        assert!(matches(&e, "SCHOLAR", d(2024, 1, 1)));
        assert!(matches(&e, "장학금", d(2024, 1, 1)));
        assert!(!matches(&e, "등록금", d(2024, 1, 1)));
    }

    #[test]
    fn date_filter_is_strictly_after() {
        let e = entry("공지", d(2024, 5, 10));
        assert!(matches(&e, "공지", d(2024, 5, 9)));
        assert!(!matches(&e, "공지", d(2024, 5, 10)));
        assert!(!matches(&e, "공지", d(2024, 5, 11)));
    }

    fn post(title: &str) -> Post {
        Post {
            title: title.to_string(),
            link: "https://example.ac.kr/post/1".to_string(),
            date: "2024-05-10".to_string(),
            content: String::new(),
        }
    }

    #[test]
    fn outcome_restores_listing_order_and_counts_drops() {
        let results = vec![
            Some((2, post("third"))),
            None,
            Some((0, post("first"))),
            None,
        ];

        let outcome = collect_outcome(results);
        let titles: Vec<_> = outcome.posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "third"]);
        assert_eq!(outcome.dropped, 2);
    }

    #[test]
    fn outcome_with_no_failures_drops_nothing() {
        let outcome = collect_outcome(vec![Some((0, post("only")))]);
        assert_eq!(outcome.posts.len(), 1);
        assert_eq!(outcome.dropped, 0);
    }
}
