use serde::{Deserialize, Serialize};

/// Product entry as published in the static catalog.
///
/// Only `price` is required; the display fields fall back to empty strings
/// and a missing `category` never matches a filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ProductRecord {
    pub fn new(
        image: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        category: Option<String>,
    ) -> Self {
        Self {
            image: image.into(),
            name: name.into(),
            description: description.into(),
            price,
            category,
        }
    }

    /// Price rendered with a literal dollar prefix and no rounding.
    pub fn price_label(&self) -> String {
        format!("Price: ${}", self.price)
    }

    pub fn image_alt(&self) -> &str {
        &self.name
    }

    /// True when the record carries exactly this category label.
    pub fn in_category(&self, label: &str) -> bool {
        self.category.as_deref() == Some(label)
    }
}
