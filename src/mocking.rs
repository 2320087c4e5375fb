/**
 * Mock Product Generation
 *
 * Generates synthetic product records for seeding and demos. Pure with
 * respect to external state; the only effect is drawing from the thread
 * RNG.
 */

use axum::response::Json;
use rand::Rng;
use serde::Serialize;
use uuid::Uuid;

/// Product titles the generator draws from
const TITLES: &[&str] = &[
    "Teclado mecánico",
    "Mouse inalámbrico",
    "Monitor 24\"",
    "Auriculares",
    "Silla ergonómica",
    "Lámpara de escritorio",
    "Parlante bluetooth",
    "Cargador rápido",
    "Mochila urbana",
    "Termo acero",
];

/// Departments the generator draws from
const CATEGORIES: &[&str] = &[
    "Electrónica",
    "Hogar",
    "Oficina",
    "Deportes",
    "Juguetes",
    "Jardín",
];

/// Description fragments; one is appended to the title
const DESCRIPTIONS: &[&str] = &[
    "Diseño compacto y materiales de primera calidad.",
    "Ideal para el uso diario en casa u oficina.",
    "Edición limitada con garantía extendida.",
    "Gran relación precio-calidad, envío inmediato.",
    "Resistente, liviano y fácil de transportar.",
];

/// Synthetic product record
#[derive(Debug, Clone, Serialize)]
pub struct MockProduct {
    /// Product title
    pub title: String,
    /// Product description
    pub description: String,
    /// Price in [1, 200], 2-decimal precision
    pub price: f64,
    /// Unique product code (UUID)
    pub code: String,
    /// Units in stock, in [1, 100]
    pub stock: u32,
    /// Department
    pub category: String,
}

/// Generate one synthetic product
pub fn generate_product() -> MockProduct {
    let mut rng = rand::rng();

    let title = TITLES[rng.random_range(0..TITLES.len())];
    let description = DESCRIPTIONS[rng.random_range(0..DESCRIPTIONS.len())];
    let category = CATEGORIES[rng.random_range(0..CATEGORIES.len())];

    // Price in [1, 200] rounded to cents
    let price = (rng.random_range(1.0_f64..=200.0) * 100.0).round() / 100.0;

    MockProduct {
        title: title.to_string(),
        description: format!("{title}. {description}"),
        price,
        code: Uuid::new_v4().to_string(),
        stock: rng.random_range(1..=100),
        category: category.to_string(),
    }
}

/// Generate `count` synthetic products
pub fn generate_products(count: usize) -> Vec<MockProduct> {
    (0..count).map(|_| generate_product()).collect()
}

/// Response for the mock-products endpoint
#[derive(Debug, Serialize)]
pub struct MockProductsResponse {
    /// Always "success"
    pub status: String,
    /// Generated products
    pub payload: Vec<MockProduct>,
}

/// Handler for `GET /api/mockingproducts`: returns 100 generated products
pub async fn mocking_products() -> Json<MockProductsResponse> {
    Json(MockProductsResponse {
        status: "success".to_string(),
        payload: generate_products(100),
    })
}
