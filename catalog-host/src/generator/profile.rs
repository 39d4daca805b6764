use crate::generator::template::{image_path, product_name, ADJECTIVES, DEFAULT_CATEGORIES, NOUNS};
use anyhow::ensure;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use storecore::ProductRecord;

/// Configuration for generating a demo catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub count: usize,
    pub seed: u64,
    pub categories: Vec<String>,
    pub min_price: f64,
    pub max_price: f64,
    /// Share of records published without a category.
    pub uncategorized: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 40,
            seed: 0,
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            min_price: 5.0,
            max_price: 250.0,
            uncategorized: 0.1,
        }
    }
}

fn pick_category(rng: &mut StdRng, config: &GeneratorConfig) -> Option<String> {
    if config.categories.is_empty() || rng.gen_bool(config.uncategorized.clamp(0.0, 1.0)) {
        return None;
    }
    let index = rng.gen_range(0..config.categories.len());
    Some(config.categories[index].clone())
}

pub fn build_catalog_from_config(config: &GeneratorConfig) -> anyhow::Result<Vec<ProductRecord>> {
    ensure!(
        config.min_price >= 0.0 && config.min_price < config.max_price,
        "price range {}..{} is empty",
        config.min_price,
        config.max_price
    );

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut products = Vec::with_capacity(config.count);

    for index in 0..config.count {
        let name = product_name(
            rng.gen_range(0..ADJECTIVES.len()),
            rng.gen_range(0..NOUNS.len()),
        );
        let cents = (rng.gen_range(config.min_price..config.max_price) * 100.0).round();
        let category = pick_category(&mut rng, config);
        let description = match &category {
            Some(category) => format!("{name} from our {category} range."),
            None => format!("{name}, while stocks last."),
        };
        products.push(ProductRecord::new(
            image_path(index),
            name,
            description,
            cents / 100.0,
            category,
        ));
    }

    Ok(products)
}
