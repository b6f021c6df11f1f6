//! Seed the catalog with demo products.
//!
//! Inserts a small demo catalog across the three storefront categories so a
//! fresh database has something to render. Idempotence is intentional-ish:
//! re-running adds another copy; wipe the table first if that matters.

use rust_decimal::Decimal;

use shopper_api::db::products::{NewProduct, ProductRepository};

use super::{CommandError, database_url};

fn demo_catalog() -> Vec<NewProduct> {
    [
        (
            "Striped Flutter Sleeve Blouse",
            "women",
            "50.00",
            "80.50",
        ),
        ("Colourblocked Hooded Sweatshirt", "women", "85.00", "120.50"),
        ("Printed Wrap Midi Dress", "women", "60.00", "100.50"),
        ("Satin Overshirt", "women", "75.00", "110.00"),
        ("Green Bomber Jacket", "men", "85.00", "120.50"),
        ("Slim Fit Checked Shirt", "men", "45.00", "70.50"),
        ("Half Sleeves T-Shirt", "men", "30.00", "50.50"),
        ("Hooded Puffer Jacket", "kid", "55.00", "80.50"),
        ("Mutton Colourblocked Sweatshirt", "kid", "40.00", "60.50"),
    ]
    .into_iter()
    .map(|(name, category, new_price, old_price)| NewProduct {
        name: name.to_string(),
        image: format!(
            "https://images.shopper.example/{}.png",
            name.to_lowercase().replace(' ', "_")
        ),
        category: category.to_string(),
        new_price: new_price.parse::<Decimal>().unwrap_or_default(),
        old_price: old_price.parse::<Decimal>().unwrap_or_default(),
    })
    .collect()
}

/// Insert the demo catalog.
///
/// # Errors
///
/// Returns `CommandError` if the database URL is missing, the connection
/// fails, or an insert fails.
pub async fn run() -> Result<(), CommandError> {
    dotenvy::dotenv().ok();

    let database_url = database_url()?;

    tracing::info!("Connecting to database...");
    let pool = shopper_api::db::create_pool(&database_url).await?;

    let repo = ProductRepository::new(&pool);
    let catalog = demo_catalog();
    let count = catalog.len();

    for product in catalog {
        let created = repo.create(&product).await?;
        tracing::info!(id = %created.id, name = %created.name, "seeded product");
    }

    tracing::info!("Seeded {count} products");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_catalog_covers_every_category() {
        let catalog = demo_catalog();
        for category in ["men", "women", "kid"] {
            assert!(catalog.iter().any(|p| p.category == category));
        }
    }

    #[test]
    fn demo_catalog_prices_parse() {
        for product in demo_catalog() {
            assert!(product.new_price > Decimal::ZERO);
            assert!(product.old_price > product.new_price);
        }
    }
}
