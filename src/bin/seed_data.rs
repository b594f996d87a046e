//! Seed data script - populates the database with a small review graph
//!
//! Run with: cargo run --bin seed-data
//!
//! This creates:
//! - 2 customers
//! - 2 items
//! - 3 reviews linking them
//!
//! and prints the serialized form of the first customer, item and review.

use anyhow::{Context, Result};
use clap::Parser;
use customer_reviews::{
    config, db,
    dto::{CreateCustomerRequest, CreateItemRequest, CreateReviewRequest},
    AppServices,
};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "seed-data", about = "Populate the review database with demo rows", version)]
struct Cli {
    /// Overrides the configured database URL
    #[arg(long)]
    database_url: Option<String>,

    /// Print serialized JSON on a single line
    #[arg(long)]
    compact: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut cfg = config::load_config().context("failed to load configuration")?;
    if let Some(url) = cli.database_url {
        cfg.database_url = url;
    }
    config::init_tracing(cfg.log_level(), cfg.log_json);

    info!("Connecting to database: {}", cfg.database_url());
    let pool = db::establish_connection_from_app_config(&cfg)
        .await
        .context("failed to connect to database")?;
    if cfg.auto_migrate {
        db::run_migrations(&pool)
            .await
            .context("failed to run migrations")?;
    } else {
        info!("auto_migrate disabled; expecting the schema to exist");
    }

    let pool = Arc::new(pool);
    let services = AppServices::new(pool.clone());

    let ada = services
        .customers
        .create_customer(CreateCustomerRequest {
            name: Some("Ada".to_string()),
        })
        .await?;
    let grace = services
        .customers
        .create_customer(CreateCustomerRequest {
            name: Some("Grace".to_string()),
        })
        .await?;

    let widget = services
        .items
        .create_item(CreateItemRequest {
            name: Some("Widget".to_string()),
            price: Some(9.99),
        })
        .await?;
    let gadget = services
        .items
        .create_item(CreateItemRequest {
            name: Some("Gadget".to_string()),
            price: Some(24.5),
        })
        .await?;

    let mut first_review = None;
    for (customer_id, item_id, comment) in [
        (ada.id, widget.id, "Great"),
        (ada.id, gadget.id, "Too loud"),
        (grace.id, widget.id, "Does what it says"),
    ] {
        let review = services
            .reviews
            .create_review(CreateReviewRequest {
                comment: Some(comment.to_string()),
                customer_id,
                item_id,
            })
            .await?;
        info!("  Created {}", review);
        first_review.get_or_insert(review.id);
    }

    let documents = [
        ("customer", services.customers.serialize_customer(ada.id).await?),
        ("item", services.items.serialize_item(widget.id).await?),
        (
            "review",
            services
                .reviews
                .serialize_review(first_review.context("no review was created")?)
                .await?,
        ),
    ];

    for (label, value) in documents {
        let rendered = if cli.compact {
            serde_json::to_string(&value)?
        } else {
            serde_json::to_string_pretty(&value)?
        };
        println!("{}: {}", label, rendered);
    }

    info!("=== Seed Data Complete ===");
    Ok(())
}
