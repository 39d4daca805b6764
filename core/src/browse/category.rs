use crate::browse::pagination::{page_count, page_slice, PRODUCTS_PER_PAGE};
use crate::catalog::ProductRecord;
use std::ops::RangeInclusive;

/// Records carrying exactly `label` as their category, in catalog order.
pub fn filter_by_category(catalog: &[ProductRecord], label: &str) -> Vec<ProductRecord> {
    catalog
        .iter()
        .filter(|record| record.in_category(label))
        .cloned()
        .collect()
}

pub fn no_products_message(category: &str) -> String {
    format!("No products found in {category} category.")
}

/// Result of activating a category trigger.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryOutcome {
    /// Nothing matched; only the message is rendered, no pager.
    Empty { category: String, message: String },
    Browse(CategoryBrowseState),
}

/// Filtered, paginated view keyed by one category label.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBrowseState {
    category: String,
    all_filtered: Vec<ProductRecord>,
    page: usize,
    per_page: usize,
    total_pages: usize,
}

impl CategoryBrowseState {
    /// Filters the catalog by the trimmed label and opens page 1.
    pub fn open(catalog: &[ProductRecord], label: &str) -> CategoryOutcome {
        Self::open_with_page_size(catalog, label, PRODUCTS_PER_PAGE)
    }

    pub fn open_with_page_size(
        catalog: &[ProductRecord],
        label: &str,
        per_page: usize,
    ) -> CategoryOutcome {
        let category = label.trim().to_string();
        let all_filtered = filter_by_category(catalog, &category);
        if all_filtered.is_empty() {
            let message = no_products_message(&category);
            return CategoryOutcome::Empty { category, message };
        }

        let total_pages = page_count(all_filtered.len(), per_page);
        CategoryOutcome::Browse(Self {
            category,
            all_filtered,
            page: 1,
            per_page,
            total_pages,
        })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn all_filtered(&self) -> &[ProductRecord] {
        &self.all_filtered
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// One pager control per page, ascending.
    pub fn page_numbers(&self) -> RangeInclusive<usize> {
        1..=self.total_pages
    }

    /// Switches to `page`. The pager only offers valid pages; anything else
    /// is still applied and renders as an empty slice.
    pub fn select_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn current_page_items(&self) -> &[ProductRecord] {
        page_slice(&self.all_filtered, self.page, self.per_page)
    }
}
