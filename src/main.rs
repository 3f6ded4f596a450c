//! Demo: seeds a small catalog, opens the details screen for one item, builds an
//! order and submits it.

use food_details::details::{DetailsConfig, FoodDetails};
use food_details::lifecycle::{setup_tracing, FoodSystem, SystemConfig};
use food_details::model::{ExtraId, FoodId};
use tracing::{error, info, Instrument};

const CATALOG: &str = r#"[
    {
        "id": 1,
        "name": "Ao molho",
        "description": "Macarrão ao molho branco, fughi e cheiro verde das montanhas.",
        "price": 19.9,
        "category": 1,
        "image_url": "https://storage.googleapis.com/golden-wind/bootcamp-gostack/desafio-gorestaurant-mobile/food1.png",
        "thumbnail_url": "https://storage.googleapis.com/golden-wind/bootcamp-gostack/desafio-gorestaurant-mobile/ao_molho.png",
        "extras": [
            { "id": 1, "name": "Bacon", "value": 1.5 },
            { "id": 2, "name": "Frango", "value": 2.0 }
        ]
    },
    {
        "id": 2,
        "name": "Veggie",
        "description": "Macarrão com pimentão, ervilha e ervas finas colhidas no himalaia.",
        "price": 21.9,
        "category": 2,
        "image_url": "https://storage.googleapis.com/golden-wind/bootcamp-gostack/desafio-gorestaurant-mobile/food2.png",
        "thumbnail_url": "https://storage.googleapis.com/golden-wind/bootcamp-gostack/desafio-gorestaurant-mobile/veggie.png",
        "extras": [
            { "id": 3, "name": "Bacon", "value": 1.5 }
        ]
    }
]"#;

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let system = FoodSystem::new(SystemConfig::default());
    system.seed_catalog(CATALOG).await.map_err(|e| e.to_string())?;

    let details = FoodDetails::new(system.api(), DetailsConfig::default());

    let span = tracing::info_span!("food_details", food_id = 1);
    async {
        details.load(FoodId(1)).await.map_err(|e| e.to_string())?;

        details.increment_extra(ExtraId(1)).map_err(|e| e.to_string())?;
        details.increment_extra(ExtraId(1)).map_err(|e| e.to_string())?;
        details.increment_food();

        let favorited = details
            .toggle_favorite()
            .map_err(|e| e.to_string())?
            .settled()
            .await
            .map_err(|e| e.to_string())?;
        info!(icon = favorited.icon_name(), "Favorite updated");

        if let Some(view) = details.view() {
            info!(name = %view.name, quantity = view.food_quantity, total = %view.total, "Screen ready");
        }

        match details.finish_order().await {
            Ok(order_id) => info!(%order_id, "Order placed"),
            Err(e) => error!(error = %e, "Order failed"),
        }
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    // The screen holds store clients; release it before shutdown.
    drop(details);
    system.shutdown().await?;

    info!("Demo completed");
    Ok(())
}
