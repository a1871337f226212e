//! Spring-style page envelope
//!
//! The backend pages `/products` and `/invoices` responses; the shape is
//! tolerated loosely because older deployments omit some counters.

use serde::{Deserialize, Serialize};

/// One page of a server-side paged listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    /// Zero-based page index
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    /// Absent on some backends; see [`Page::is_last`]
    #[serde(default)]
    pub last: Option<bool>,
}

impl<T> Page<T> {
    /// Whether this is the final page. When the backend does not report
    /// `last`, a short page is taken as the end of the listing.
    pub fn is_last(&self, requested_size: usize) -> bool {
        self.last.unwrap_or(self.content.len() < requested_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_spring_page() {
        let json = r#"{
            "content": [1, 2, 3],
            "number": 0,
            "size": 10,
            "totalElements": 3,
            "totalPages": 1,
            "last": true
        }"#;
        let page: Page<i32> = serde_json::from_str(json).unwrap();
        assert_eq!(page.content, vec![1, 2, 3]);
        assert_eq!(page.total_pages, 1);
        assert!(page.is_last(10));
    }

    #[test]
    fn test_is_last_falls_back_to_short_page() {
        let full: Page<i32> = Page {
            content: vec![0; 10],
            number: 0,
            size: 10,
            total_elements: 0,
            total_pages: 0,
            last: None,
        };
        assert!(!full.is_last(10));

        let short = Page::<i32> {
            content: vec![0; 3],
            ..full
        };
        assert!(short.is_last(10));
    }

    #[test]
    fn test_reported_last_wins_over_heuristic() {
        let page: Page<i32> = Page {
            content: vec![0; 10],
            number: 4,
            size: 10,
            total_elements: 50,
            total_pages: 5,
            last: Some(true),
        };
        assert!(page.is_last(10));
    }
}
