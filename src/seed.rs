//! Demo catalogue: random products with a month of price history each.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rand::seq::SliceRandom;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, Set, TransactionTrait};
use uuid::Uuid;

use crate::entity::{
    price_history::{self, PricePoint, PricePoints},
    products::{self, Features, Retailer, Retailers},
};

pub const PRODUCT_COUNT: usize = 18;
pub const HISTORY_DAYS: i64 = 30;
const MIN_HISTORY_PRICE: f64 = 5.0;

static CATEGORIES: [&str; 5] = ["Laptops", "Headphones", "Smart Home", "Fitness", "Photography"];

static FEATURE_SETS: [[&str; 3]; 5] = [
    ["Lightweight", "All-day battery", "Retina display"],
    ["Noise-cancelling", "Bluetooth 5.3", "30h battery"],
    ["Matter-ready", "Voice control", "Energy saver"],
    ["GPS", "Heart-rate", "Waterproof"],
    ["4K video", "Stabilization", "Fast autofocus"],
];

#[derive(Debug, Clone, PartialEq)]
pub struct SeedProduct {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image: String,
    pub rating: f64,
    pub features: Vec<String>,
    pub retailers: Vec<Retailer>,
}

impl SeedProduct {
    fn into_active(self, id: Uuid, now: DateTime<Utc>) -> products::ActiveModel {
        let now = now.fixed_offset();
        products::ActiveModel {
            id: Set(id),
            title: Set(self.title),
            description: Set(Some(self.description)),
            price: Set(self.price),
            category: Set(self.category),
            in_stock: Set(true),
            image: Set(Some(self.image)),
            rating: Set(self.rating),
            features: Set(Features(self.features)),
            retailers: Set(Retailers(self.retailers)),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }
}

/// Seeds the catalogue when the products table is empty. Returns how many
/// products were inserted.
pub async fn seed_if_empty(conn: &DatabaseConnection) -> anyhow::Result<usize> {
    let existing = products::Entity::find().count(conn).await?;
    if existing > 0 {
        tracing::debug!(existing, "catalogue already seeded");
        return Ok(0);
    }

    let (product_rows, history_rows) = build_rows(&mut rand::thread_rng(), Utc::now());
    let inserted = product_rows.len();

    let txn = conn.begin().await?;
    products::Entity::insert_many(product_rows)
        .exec_without_returning(&txn)
        .await?;
    price_history::Entity::insert_many(history_rows)
        .exec_without_returning(&txn)
        .await?;
    txn.commit().await?;

    tracing::info!(products = inserted, "seeded demo catalogue");
    Ok(inserted)
}

fn build_rows<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
) -> (Vec<products::ActiveModel>, Vec<price_history::ActiveModel>) {
    let catalogue = sample_products(rng, PRODUCT_COUNT);
    let mut product_rows = Vec::with_capacity(catalogue.len());
    let mut history_rows = Vec::with_capacity(catalogue.len());
    for product in catalogue {
        let id = Uuid::new_v4();
        let history = price_walk(rng, product.price, now);
        history_rows.push(price_history::ActiveModel {
            id: Set(Uuid::new_v4()),
            product_id: Set(id),
            history: Set(PricePoints(history)),
        });
        product_rows.push(product.into_active(id, now));
    }
    (product_rows, history_rows)
}

pub fn sample_products<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<SeedProduct> {
    (0..count)
        .map(|i| {
            let category = *CATEGORIES.choose(rng).unwrap_or(&CATEGORIES[0]);
            let features = FEATURE_SETS.choose(rng).unwrap_or(&FEATURE_SETS[0]);
            let price = round_cents(rng.gen_range(39.0..=1999.0));
            let rating = (rng.gen_range(3.9..=4.9_f64) * 10.0).round() / 10.0;

            let retailers = vec![
                Retailer {
                    name: "Amazon".into(),
                    price,
                    url: Some("https://amazon.com".into()),
                },
                Retailer {
                    name: "BestBuy".into(),
                    price: round_cents(price * rng.gen_range(0.95..=1.05)),
                    url: Some("https://bestbuy.com".into()),
                },
                Retailer {
                    name: "Walmart".into(),
                    price: round_cents(price * rng.gen_range(0.9..=1.1)),
                    url: Some("https://walmart.com".into()),
                },
            ];

            SeedProduct {
                title: format!("Product {} {}", i + 1, category),
                description: format!(
                    "Premium {} item with modern features.",
                    category.to_lowercase()
                ),
                price,
                category: category.to_string(),
                image: format!("https://picsum.photos/seed/{}/600/400", i + 341),
                rating,
                features: features.iter().map(|f| f.to_string()).collect(),
                retailers,
            }
        })
        .collect()
}

/// One point per day ending at `now`, oldest first, drifting up to 5% a day.
pub fn price_walk<R: Rng + ?Sized>(rng: &mut R, start: f64, now: DateTime<Utc>) -> Vec<PricePoint> {
    let mut price = start;
    (0..HISTORY_DAYS)
        .map(|day| {
            let drift = rng.gen_range(-0.05..=0.05);
            price = round_cents(price * (1.0 + drift)).max(MIN_HISTORY_PRICE);
            PricePoint {
                date: now - Duration::days(HISTORY_DAYS - 1 - day),
                price,
            }
        })
        .collect()
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn sample_products_stay_within_catalogue_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let items = sample_products(&mut rng, PRODUCT_COUNT);
        assert_eq!(items.len(), PRODUCT_COUNT);

        for (i, item) in items.iter().enumerate() {
            assert!(CATEGORIES.contains(&item.category.as_str()));
            assert!((39.0..=1999.0).contains(&item.price));
            assert!((0.0..=5.0).contains(&item.rating));
            assert!((3.9..=4.9).contains(&item.rating));
            assert_eq!(item.features.len(), 3);
            assert_eq!(item.retailers.len(), 3);
            assert_eq!(item.retailers[0].price, item.price);
            assert_eq!(item.title, format!("Product {} {}", i + 1, item.category));
        }
    }

    #[test]
    fn price_walk_covers_thirty_days_oldest_first() {
        let mut rng = StdRng::seed_from_u64(11);
        let now = Utc::now();
        let history = price_walk(&mut rng, 120.0, now);

        assert_eq!(history.len(), HISTORY_DAYS as usize);
        assert_eq!(history.last().map(|p| p.date), Some(now));
        assert!(history.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn price_walk_never_drops_below_floor() {
        let mut rng = StdRng::seed_from_u64(3);
        let history = price_walk(&mut rng, 5.0, Utc::now());
        assert!(history.iter().all(|p| p.price >= MIN_HISTORY_PRICE));
    }
}
