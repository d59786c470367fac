//! SQL implementation of the conversion queue port.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use crate::domain::errors::QueueError;
use crate::domain::models::{ConversionErrorRecord, PendingLead};
use crate::domain::ports::ConversionQueue;
use crate::infrastructure::database::utils::parse_datetime;

/// sqlx-backed implementation of [`ConversionQueue`].
///
/// Every mutation runs as its own implicit transaction: the loop depends on
/// each record's fate being committed before the next item starts.
pub struct SqlConversionQueue {
    pool: SqlitePool,
}

impl SqlConversionQueue {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_lead(row: &sqlx::sqlite::SqliteRow) -> Result<PendingLead, QueueError> {
        Ok(PendingLead {
            lead_id: row.get("SF_LeadId"),
            client_id: row.get("SecureSite_ClientId__c"),
            created_date: parse_datetime(row.get::<String, _>("Created_Date").as_str())?,
        })
    }

    /// Number of rows currently in the pending queue.
    pub async fn count_pending(&self) -> Result<i64, QueueError> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM sf_leads_pending_conversion")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.0)
    }

    /// Number of rows accumulated in the error sink.
    pub async fn count_errors(&self) -> Result<i64, QueueError> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM sf_leads_conversion_errors")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.0)
    }
}

#[async_trait]
impl ConversionQueue for SqlConversionQueue {
    async fn fetch_pending(&self) -> Result<Vec<PendingLead>, QueueError> {
        let rows = sqlx::query(
            "SELECT SF_LeadId, SecureSite_ClientId__c, Created_Date \
             FROM sf_leads_pending_conversion \
             ORDER BY Created_Date, SF_LeadId",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_lead).collect()
    }

    async fn delete_pending(&self, lead_id: &str) -> Result<(), QueueError> {
        // No rows affected is fine: re-runs after a partial failure may
        // delete keys that are already gone.
        sqlx::query("DELETE FROM sf_leads_pending_conversion WHERE SF_LeadId = ?")
            .bind(lead_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn insert_error(&self, record: &ConversionErrorRecord) -> Result<(), QueueError> {
        sqlx::query(
            "INSERT INTO sf_leads_conversion_errors \
             (SF_LeadId, SecureSite_ClientId__c, Created_Date, Error_Date, Error_Message) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&record.lead_id)
        .bind(&record.client_id)
        .bind(record.created_date.to_rfc3339())
        .bind(record.error_date.to_rfc3339())
        .bind(&record.message)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
