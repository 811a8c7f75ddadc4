//! Catalog parts and result pages.

use serde::{Deserialize, Serialize};

use crate::ids::PartId;
use crate::search::SortMode;

/// A gym equipment part as served by the catalog service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog ID.
    pub id: PartId,
    /// Equipment manufacturer title.
    pub gym_manufacturer: String,
    /// Unit price.
    pub price: f64,
    /// Parts manufacturer title.
    pub parts_manufacturer: String,
    /// Vendor code.
    pub vendor_code: String,
    /// Display name.
    pub name: String,
    /// Long description.
    #[serde(default)]
    pub description: String,
    /// JSON-encoded array of image URLs.
    #[serde(default)]
    pub images: String,
    /// Units in stock.
    #[serde(default)]
    pub in_stock: i64,
    /// Bestseller flag.
    #[serde(default)]
    pub bestseller: bool,
    /// New arrival flag.
    #[serde(default, rename = "new")]
    pub is_new: bool,
    /// Popularity score, higher is more popular.
    #[serde(default)]
    pub popularity: i64,
    /// Compatibility note.
    #[serde(default)]
    pub compatibility: String,
}

impl Product {
    /// Decode the image URL list. Malformed payloads yield no images.
    pub fn image_urls(&self) -> Vec<String> {
        serde_json::from_str(&self.images).unwrap_or_default()
    }

    /// First image, used by list and slider cards.
    pub fn cover_image(&self) -> Option<String> {
        self.image_urls().into_iter().next()
    }

    /// Whether at least one unit is in stock.
    pub fn is_available(&self) -> bool {
        self.in_stock > 0
    }

    /// Price formatted for display.
    pub fn price_display(&self) -> String {
        format_price(self.price)
    }
}

/// Format a price with space-separated thousands, rounded up to a whole unit.
pub fn format_price(price: f64) -> String {
    let whole = price.ceil().max(0.0) as u64;
    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }

    out
}

/// One page of catalog results plus the total match count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductListing {
    /// Total number of matching parts across all pages.
    pub count: u64,
    /// Parts on this page.
    pub rows: Vec<Product>,
}

impl ProductListing {
    /// Create a listing.
    pub fn new(count: u64, rows: Vec<Product>) -> Self {
        Self { count, rows }
    }

    /// Check if this page has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows on this page.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Reorder the rows of this page in place.
    ///
    /// Only the fetched page is reordered; other pages are untouched.
    pub fn sort_by_mode(&mut self, mode: SortMode) {
        match mode {
            SortMode::Cheap => self.rows.sort_by(|a, b| a.price.total_cmp(&b.price)),
            SortMode::Expensive => self.rows.sort_by(|a, b| b.price.total_cmp(&a.price)),
            SortMode::Popular => self.rows.sort_by(|a, b| b.popularity.cmp(&a.popularity)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::part;

    fn ids(listing: &ProductListing) -> Vec<i64> {
        listing.rows.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_sort_modes() {
        let mut listing =
            ProductListing::new(3, vec![part(1, 300.0, 5), part(2, 100.0, 9), part(3, 200.0, 1)]);

        listing.sort_by_mode(SortMode::Cheap);
        assert_eq!(ids(&listing), vec![2, 3, 1]);

        listing.sort_by_mode(SortMode::Expensive);
        assert_eq!(ids(&listing), vec![1, 3, 2]);

        listing.sort_by_mode(SortMode::Popular);
        assert_eq!(ids(&listing), vec![2, 1, 3]);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let mut listing =
            ProductListing::new(3, vec![part(1, 100.0, 1), part(2, 100.0, 1), part(3, 50.0, 1)]);

        listing.sort_by_mode(SortMode::Cheap);
        assert_eq!(ids(&listing), vec![3, 1, 2]);

        listing.sort_by_mode(SortMode::Popular);
        assert_eq!(ids(&listing), vec![3, 1, 2]);
    }

    #[test]
    fn test_product_from_catalog_json() {
        let json = r#"{
            "id": 7,
            "gym_manufacturer": "Precor",
            "price": 4200,
            "parts_manufacturer": "Grips",
            "vendor_code": "PX-7",
            "name": "Grip set",
            "description": "Rubber grips",
            "images": "[\"a.png\"]",
            "in_stock": 0,
            "bestseller": true,
            "new": true,
            "popularity": 12,
            "compatibility": "Precor 9.31"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.id, PartId::new(7));
        assert!(product.is_new);
        assert!(!product.is_available());
        assert_eq!(product.cover_image().as_deref(), Some("a.png"));
    }

    #[test]
    fn test_image_urls_tolerates_garbage() {
        let mut p = part(1, 10.0, 0);
        p.images = "not json".to_string();
        assert!(p.image_urls().is_empty());
        assert_eq!(p.cover_image(), None);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0.0), "0");
        assert_eq!(format_price(999.0), "999");
        assert_eq!(format_price(1500.0), "1 500");
        assert_eq!(format_price(1234567.2), "1 234 568");
    }
}
