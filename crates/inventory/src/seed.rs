//! Sample catalog generation for demos and local runs.

use crate::model::{Category, Product, ProductId};
use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

struct Template {
    name: &'static str,
    category: Category,
    /// Whole currency units.
    base_price: i64,
    base_stock: i64,
}

const fn template(
    name: &'static str,
    category: Category,
    base_price: i64,
    base_stock: i64,
) -> Template {
    Template {
        name,
        category,
        base_price,
        base_stock,
    }
}

const TEMPLATES: [Template; 15] = [
    template("MacBook Pro", Category::Electronics, 1299, 25),
    template("iPhone 15", Category::Electronics, 799, 50),
    template("Wireless Headphones", Category::Electronics, 199, 75),
    template("Cotton T-Shirt", Category::Apparel, 25, 100),
    template("Denim Jeans", Category::Apparel, 89, 60),
    template("Running Shoes", Category::Apparel, 120, 45),
    template("Organic Pizza", Category::Food, 18, 30),
    template("Fresh Burger", Category::Food, 12, 40),
    template("Coffee Beans", Category::Food, 15, 80),
    template("Programming Book", Category::Books, 45, 35),
    template("Fiction Novel", Category::Books, 22, 55),
    template("Garden Chair", Category::HomeAndGarden, 75, 20),
    template("Plant Pot", Category::HomeAndGarden, 18, 90),
    template("Football", Category::Sports, 35, 65),
    template("Basketball", Category::Sports, 28, 70),
];

/// Roughly 115 days.
const MAX_AGE_MS: i64 = 10_000_000_000;

/// Generates `count` products cycling through a fixed set of templates.
///
/// Ids are `product-1` through `product-<count>`. Stock and price are jittered around
/// each template (stock by up to 20 units, never below zero; price by up to 25.00,
/// never below 0.01), and `created_at` falls somewhere in the last ~115 days before
/// `now`.
pub fn sample_products<R: Rng>(count: usize, rng: &mut R, now: DateTime<Utc>) -> Vec<Product> {
    (0..count)
        .map(|index| {
            let template = &TEMPLATES[index % TEMPLATES.len()];
            let variation: u8 = rng.gen_range(1..=3);
            let name = if variation > 1 {
                format!("{} v{variation}", template.name)
            } else {
                template.name.to_string()
            };
            let stock = (template.base_stock + rng.gen_range(-20..20)).max(0);
            let cents = (template.base_price * 100 + rng.gen_range(-2500..2500)).max(1);
            let age = Duration::milliseconds(rng.gen_range(0..MAX_AGE_MS));

            Product {
                id: ProductId::new(format!("product-{}", index + 1)),
                description: Some(format!(
                    "High-quality {} with excellent features and durability.",
                    template.name.to_lowercase()
                )),
                name,
                category: template.category,
                stock_quantity: u32::try_from(stock).unwrap_or(0),
                price: Decimal::new(cents, 2),
                created_at: now - age,
                updated_at: now,
            }
        })
        .collect()
}

/// [`sample_products`] with a seeded RNG when `seed` is given, entropy otherwise.
pub fn seeded_catalog(count: usize, seed: Option<u64>) -> Vec<Product> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    sample_products(count, &mut rng, Utc::now())
}
