//! The `run` command: the Run Driver for one reconciliation pass.

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::domain::models::Config;
use crate::infrastructure::database::{self, SqlConversionQueue};
use crate::infrastructure::salesforce::SalesforceClient;
use crate::services::Reconciler;

/// Establish the store pool and the CRM session, run the loop once, tear
/// down. Exit code 0 whether zero, some, or all items succeeded; only a
/// fatal Init-phase error propagates.
pub async fn execute(config: &Config, json: bool) -> Result<()> {
    let pool = database::create_pool(&config.database)
        .await
        .context("failed to connect to the queue store")?;
    database::run_migrations(&pool)
        .await
        .context("failed to apply queue store migrations")?;

    let queue = Arc::new(SqlConversionQueue::new(pool.clone()));

    let crm = match SalesforceClient::login(&config.salesforce).await {
        Ok(client) => Arc::new(client),
        Err(err) => {
            pool.close().await;
            return Err(err).context("Salesforce login failed");
        }
    };

    let reconciler = Reconciler::new(queue, crm, config.conversion.create_opportunity);
    let result = reconciler.run().await;

    // Teardown happens whatever the loop did.
    pool.close().await;

    let summary = result.context("reconciliation run failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else if summary.pending == 0 {
        println!("No leads pending conversion.");
    } else {
        println!(
            "Processed {} lead(s): {} converted, {} failed, {} unresolved.",
            summary.pending, summary.converted, summary.failed, summary.unresolved
        );
    }

    Ok(())
}
