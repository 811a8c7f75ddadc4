//! Shared fixtures for unit tests.

use crate::catalog::Product;
use crate::ids::PartId;

pub(crate) fn part(id: i64, price: f64, popularity: i64) -> Product {
    Product {
        id: PartId::new(id),
        gym_manufacturer: "Technogym".to_string(),
        price,
        parts_manufacturer: "Rollers".to_string(),
        vendor_code: format!("VC-{}", id),
        name: format!("Part {}", id),
        description: String::new(),
        images: r#"["https://img.example/1.png","https://img.example/2.png"]"#.to_string(),
        in_stock: 3,
        bestseller: false,
        is_new: false,
        popularity,
        compatibility: String::new(),
    }
}
