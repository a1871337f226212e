//! Client-side catalog filtering and paging
//!
//! The product list is fetched in full and then filtered and paged
//! locally; these helpers keep that logic out of view code.

use crate::models::product::Product;

/// Distinct, trimmed category names in first-seen order. Blank
/// categories are skipped.
pub fn collect_categories(products: &[Product]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for product in products {
        if let Some(category) = &product.category {
            let normalized = category.trim();
            if !normalized.is_empty() && !categories.iter().any(|c| c == normalized) {
                categories.push(normalized.to_string());
            }
        }
    }
    categories
}

/// Products matching the selected category; `None` selects everything.
pub fn filter_by_category<'a>(products: &'a [Product], category: Option<&str>) -> Vec<&'a Product> {
    match category {
        None => products.iter().collect(),
        Some(selected) => products
            .iter()
            .filter(|p| p.category.as_deref().map(str::trim) == Some(selected))
            .collect(),
    }
}

/// Number of pages needed for `len` items, never less than one.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    len.div_ceil(page_size).max(1)
}

/// One page of a slice. Pages are 1-based and clamped into range, so an
/// out-of-range request returns the nearest valid page rather than
/// nothing.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page_size == 0 || items.is_empty() {
        return &[];
    }
    let page = page.clamp(1, total_pages(items.len(), page_size));
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn product(id: i64, category: Option<&str>) -> Product {
        Product {
            id,
            name: format!("p{id}"),
            price: Money::from_units(10_000),
            description: None,
            category: category.map(String::from),
            image_url: None,
        }
    }

    #[test]
    fn test_collect_categories_trims_and_dedupes() {
        let products = vec![
            product(1, Some("Drinks")),
            product(2, Some("  Drinks ")),
            product(3, Some("Snacks")),
            product(4, Some("   ")),
            product(5, None),
        ];
        assert_eq!(collect_categories(&products), vec!["Drinks", "Snacks"]);
    }

    #[test]
    fn test_filter_by_category() {
        let products = vec![
            product(1, Some("Drinks")),
            product(2, Some("Snacks")),
            product(3, Some("Drinks")),
        ];
        let drinks = filter_by_category(&products, Some("Drinks"));
        assert_eq!(drinks.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(filter_by_category(&products, None).len(), 3);
    }

    #[test]
    fn test_paginate_pages_and_clamps() {
        let items: Vec<i32> = (1..=25).collect();
        assert_eq!(paginate(&items, 1, 10), &items[0..10]);
        assert_eq!(paginate(&items, 3, 10), &items[20..25]);
        // Out-of-range pages clamp to the nearest valid page
        assert_eq!(paginate(&items, 9, 10), &items[20..25]);
        assert_eq!(paginate(&items, 0, 10), &items[0..10]);
    }

    #[test]
    fn test_paginate_edge_cases() {
        let empty: Vec<i32> = Vec::new();
        assert!(paginate(&empty, 1, 10).is_empty());
        assert!(paginate(&[1, 2, 3], 1, 0).is_empty());
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(25, 10), 3);
    }
}
