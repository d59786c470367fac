//! The `status` command: inspect the queue without touching it.

use anyhow::{Context, Result};
use clap::Args;
use comfy_table::{presets, Cell, ContentArrangement, Table};

use crate::domain::models::Config;
use crate::domain::ports::ConversionQueue;
use crate::infrastructure::database::{self, SqlConversionQueue};

#[derive(Args)]
pub struct StatusArgs {
    /// Maximum number of pending rows to list
    #[arg(long, default_value_t = 50)]
    pub limit: usize,
}

pub async fn execute(config: &Config, args: &StatusArgs, json: bool) -> Result<()> {
    let pool = database::create_pool(&config.database)
        .await
        .context("failed to connect to the queue store")?;
    database::run_migrations(&pool)
        .await
        .context("failed to apply queue store migrations")?;

    let queue = SqlConversionQueue::new(pool.clone());
    let pending = queue
        .fetch_pending()
        .await
        .context("failed to read pending queue")?;
    let error_count = queue
        .count_errors()
        .await
        .context("failed to count error sink")?;
    pool.close().await;

    if json {
        let payload = serde_json::json!({
            "pending": pending.len(),
            "errors": error_count,
            "leads": pending.iter().take(args.limit).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    if pending.is_empty() {
        println!("No leads pending conversion.");
    } else {
        let mut table = Table::new();
        table
            .load_preset(presets::NOTHING)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("LEAD ID"),
                Cell::new("CLIENT ID"),
                Cell::new("ENQUEUED"),
            ]);
        for lead in pending.iter().take(args.limit) {
            table.add_row(vec![
                Cell::new(&lead.lead_id),
                Cell::new(&lead.client_id),
                Cell::new(lead.created_date.to_rfc3339()),
            ]);
        }
        println!("{} lead(s) pending conversion:", pending.len());
        println!("{table}");
        if pending.len() > args.limit {
            println!("... and {} more", pending.len() - args.limit);
        }
    }
    println!("{error_count} row(s) in the error sink.");

    Ok(())
}
