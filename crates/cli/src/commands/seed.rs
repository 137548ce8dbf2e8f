//! Demo catalog seeding.
//!
//! Inserts a couple of brands, products, and a rental item so a fresh
//! database has something to browse. Safe to skip in production; not safe
//! to run twice (slugs are unique).

use rust_decimal::Decimal;

use maru_core::ResourceKind;
use maru_server::db::{brands, products, rentals, resources};

use super::CliError;

/// Insert the demo catalog.
///
/// # Errors
///
/// Returns an error if any insert fails (including slug conflicts from a
/// previous run).
pub async fn run() -> Result<(), CliError> {
    let pool = super::connect().await?;

    tracing::info!("Seeding demo catalog...");

    let artek = brands::create(
        &pool,
        brands::BrandParams {
            slug: "artek".to_string(),
            name: "Artek".to_string(),
            country: Some("Finland".to_string()),
            description: Some("Finnish design house founded in 1935.".to_string()),
            logo_url: None,
        },
    )
    .await?;

    let fritz = brands::create(
        &pool,
        brands::BrandParams {
            slug: "fritz-hansen".to_string(),
            name: "Fritz Hansen".to_string(),
            country: Some("Denmark".to_string()),
            description: Some("Danish furniture maker since 1872.".to_string()),
            logo_url: None,
        },
    )
    .await?;

    let stool = products::create(
        &pool,
        products::ProductParams {
            brand_id: artek.id,
            slug: "stool-60".to_string(),
            name: "Stool 60".to_string(),
            category: "seating".to_string(),
            description: Some("Alvar Aalto's three-legged birch stool.".to_string()),
            price: Decimal::from(390_000),
            discount_price: None,
            images: vec![],
            is_published: true,
        },
    )
    .await?;

    products::create(
        &pool,
        products::ProductParams {
            brand_id: fritz.id,
            slug: "series-7-chair".to_string(),
            name: "Series 7 Chair".to_string(),
            category: "seating".to_string(),
            description: Some("Arne Jacobsen's pressure-moulded veneer chair.".to_string()),
            price: Decimal::from(780_000),
            discount_price: Some(Decimal::from(690_000)),
            images: vec![],
            is_published: true,
        },
    )
    .await?;

    rentals::create_item(
        &pool,
        rentals::RentalItemParams {
            product_id: stool.id,
            monthly_fee: Decimal::from(29_000),
            deposit: Decimal::from(100_000),
            min_months: 3,
            is_available: true,
        },
    )
    .await?;

    resources::create(
        &pool,
        resources::ResourceParams {
            title: "2025 Catalog".to_string(),
            kind: ResourceKind::Catalog,
            file_url: "/uploads/catalog-2025.pdf".to_string(),
            file_size_bytes: 12_582_912,
        },
    )
    .await?;

    tracing::info!("Seed complete");
    Ok(())
}
