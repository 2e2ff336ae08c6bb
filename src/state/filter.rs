//! Free-text page filtering.
//!
//! A pure derivation step: the filtered view is recomputed from the catalog
//! and the query on every change, and the caller reconciles the page cursor
//! afterwards. No ranking is applied; catalog order is preserved.

use crate::content::TopicPage;

/// Return the pages matching the query, in catalog order.
///
/// The query is trimmed and lowercased. An empty normalized query returns the
/// full catalog. A page matches when the query is a substring of its title,
/// subtitle, any search term, or any section heading or body.
///
pub fn filter_pages(catalog: &[TopicPage], query: &str) -> Vec<TopicPage> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return catalog.to_vec();
    }

    catalog
        .iter()
        .filter(|page| page_matches(page, &query))
        .cloned()
        .collect()
}

/// Check a single page against a normalized (trimmed, lowercased) query.
///
fn page_matches(page: &TopicPage, query: &str) -> bool {
    page.title.to_lowercase().contains(query)
        || page.subtitle.to_lowercase().contains(query)
        || page.search_terms.iter().any(|term| term.contains(query))
        || page.sections.iter().any(|section| {
            section.heading.to_lowercase().contains(query)
                || section.body.to_lowercase().contains(query)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::catalog;

    #[test]
    fn test_empty_query_returns_full_catalog() {
        let pages = catalog();
        assert_eq!(filter_pages(&pages, ""), pages);
        assert_eq!(filter_pages(&pages, "   "), pages);
    }

    #[test]
    fn test_result_is_subsequence_in_catalog_order() {
        let pages = catalog();
        let filtered = filter_pages(&pages, "e");
        let mut catalog_iter = pages.iter();
        for page in &filtered {
            assert!(
                catalog_iter.any(|p| p.id == page.id),
                "filtered result out of catalog order"
            );
        }
    }

    #[test]
    fn test_query_is_case_insensitive_and_trimmed() {
        let pages = catalog();
        let lower = filter_pages(&pages, "outlook");
        let shouty = filter_pages(&pages, "  OUTLOOK  ");
        assert_eq!(lower, shouty);
        assert!(!lower.is_empty());
    }

    #[test]
    fn test_matches_section_body_text() {
        // "hourly" appears only in the automation page body.
        let pages = catalog();
        let filtered = filter_pages(&pages, "hourly");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "automation");
    }

    #[test]
    fn test_python_query_matches_only_automation() {
        let pages = catalog();
        let filtered = filter_pages(&pages, "python");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "automation");
    }

    #[test]
    fn test_matches_search_term_substring() {
        // Query must match as a substring of a term, not the other way around.
        let pages = catalog();
        let filtered = filter_pages(&pages, "quickst");
        assert!(filtered.iter().any(|p| p.id == "user-guide"));
    }

    #[test]
    fn test_no_match_yields_empty_view() {
        let pages = catalog();
        assert!(filter_pages(&pages, "zzz-no-match").is_empty());
    }

    #[test]
    fn test_diagram_page_matches_without_sections() {
        let pages = catalog();
        let filtered = filter_pages(&pages, "mermaid");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "workflow");
    }
}
