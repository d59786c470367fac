//! The `check` command: probe both collaborators without processing anything.

use anyhow::{Context, Result};

use crate::domain::models::Config;
use crate::infrastructure::database;
use crate::infrastructure::salesforce::SalesforceClient;

pub async fn execute(config: &Config, json: bool) -> Result<()> {
    let pool = database::create_pool(&config.database)
        .await
        .context("failed to connect to the queue store")?;
    let db_result = database::verify_connection(&pool).await;
    pool.close().await;
    db_result.context("queue store connection check failed")?;

    SalesforceClient::login(&config.salesforce)
        .await
        .context("Salesforce login check failed")?;

    if json {
        println!(
            "{}",
            serde_json::json!({ "database": "ok", "salesforce": "ok" })
        );
    } else {
        println!("Database connection: ok");
        println!("Salesforce login: ok");
    }

    Ok(())
}
