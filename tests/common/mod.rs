//! Shared test fixtures: in-memory queue store, scripted CRM mock, and a
//! fault-injecting queue wrapper.

// Not every test binary uses every fixture.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use leadconvert::domain::errors::{CrmError, QueueError};
use leadconvert::domain::models::{ConversionErrorRecord, PendingLead};
use leadconvert::domain::ports::{ConversionQueue, ConvertLeadError, ConvertLeadResult, CrmClient};

/// Create an in-memory queue store with migrations applied.
pub async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePool::connect("sqlite::memory:")
        .await
        .expect("failed to create test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("failed to run migrations");

    pool
}

/// Insert a pending lead directly, the way the upstream enqueuer would.
pub async fn seed_lead(pool: &SqlitePool, lead_id: &str, client_id: &str, created: &str) {
    sqlx::query(
        "INSERT INTO sf_leads_pending_conversion (SF_LeadId, SecureSite_ClientId__c, Created_Date) \
         VALUES (?, ?, ?)",
    )
    .bind(lead_id)
    .bind(client_id)
    .bind(created)
    .execute(pool)
    .await
    .expect("failed to seed pending lead");
}

pub async fn count_pending(pool: &SqlitePool) -> i64 {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM sf_leads_pending_conversion")
        .fetch_one(pool)
        .await
        .expect("failed to count pending");
    row.0
}

pub async fn fetch_error_rows(pool: &SqlitePool) -> Vec<(String, String, String, String)> {
    sqlx::query_as(
        "SELECT SF_LeadId, SecureSite_ClientId__c, Created_Date, Error_Message \
         FROM sf_leads_conversion_errors ORDER BY id",
    )
    .fetch_all(pool)
    .await
    .expect("failed to fetch error rows")
}

pub fn datetime(s: &str) -> DateTime<Utc> {
    s.parse().expect("invalid test datetime")
}

/// Scripted behavior for one lead id.
#[derive(Debug, Clone)]
pub enum ScriptedConversion {
    Success {
        account_id: &'static str,
        contact_id: &'static str,
        opportunity_id: Option<&'static str>,
    },
    BusinessFailure(&'static str),
    TransportFailure(&'static str),
}

/// Scripted mock of the CRM port, recording every call it receives.
pub struct MockCrmClient {
    converted_status: String,
    fail_status_resolution: bool,
    scripts: HashMap<String, ScriptedConversion>,
    pub status_calls: AtomicUsize,
    /// (lead_id, converted_status, create_opportunity) per convert call.
    pub convert_calls: Mutex<Vec<(String, String, bool)>>,
}

impl MockCrmClient {
    pub fn new(converted_status: &str) -> Self {
        Self {
            converted_status: converted_status.to_string(),
            fail_status_resolution: false,
            scripts: HashMap::new(),
            status_calls: AtomicUsize::new(0),
            convert_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_status_resolution() -> Self {
        Self {
            fail_status_resolution: true,
            ..Self::new("unused")
        }
    }

    pub fn script(mut self, lead_id: &str, conversion: ScriptedConversion) -> Self {
        self.scripts.insert(lead_id.to_string(), conversion);
        self
    }

    pub fn convert_call_count(&self) -> usize {
        self.convert_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CrmClient for MockCrmClient {
    async fn resolve_converted_status(&self) -> Result<String, CrmError> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_status_resolution {
            return Err(CrmError::Auth("login refused".to_string()));
        }
        Ok(self.converted_status.clone())
    }

    async fn convert_lead(
        &self,
        lead_id: &str,
        converted_status: &str,
        create_opportunity: bool,
    ) -> Result<ConvertLeadResult, CrmError> {
        self.convert_calls.lock().unwrap().push((
            lead_id.to_string(),
            converted_status.to_string(),
            create_opportunity,
        ));

        match self.scripts.get(lead_id) {
            Some(ScriptedConversion::Success {
                account_id,
                contact_id,
                opportunity_id,
            }) => Ok(ConvertLeadResult {
                success: true,
                account_id: Some((*account_id).to_string()),
                contact_id: Some((*contact_id).to_string()),
                opportunity_id: opportunity_id.map(ToString::to_string),
                errors: vec![],
            }),
            Some(ScriptedConversion::BusinessFailure(message)) => Ok(ConvertLeadResult {
                success: false,
                errors: vec![ConvertLeadError {
                    message: (*message).to_string(),
                }],
                ..ConvertLeadResult::default()
            }),
            Some(ScriptedConversion::TransportFailure(message)) => {
                Err(CrmError::Transport((*message).to_string()))
            }
            None => Ok(ConvertLeadResult {
                success: true,
                account_id: Some(format!("001{lead_id}")),
                contact_id: Some(format!("003{lead_id}")),
                opportunity_id: None,
                errors: vec![],
            }),
        }
    }
}

/// Queue wrapper that counts mutations and optionally makes them fail,
/// simulating a transient store fault.
pub struct InstrumentedQueue {
    inner: Arc<dyn ConversionQueue>,
    pub fail_deletes: bool,
    pub fail_inserts: bool,
    pub deletes: AtomicUsize,
    pub inserts: AtomicUsize,
}

impl InstrumentedQueue {
    pub fn new(inner: Arc<dyn ConversionQueue>) -> Self {
        Self {
            inner,
            fail_deletes: false,
            fail_inserts: false,
            deletes: AtomicUsize::new(0),
            inserts: AtomicUsize::new(0),
        }
    }

    pub fn failing_deletes(inner: Arc<dyn ConversionQueue>) -> Self {
        Self {
            fail_deletes: true,
            ..Self::new(inner)
        }
    }

    pub fn failing_inserts(inner: Arc<dyn ConversionQueue>) -> Self {
        Self {
            fail_inserts: true,
            ..Self::new(inner)
        }
    }

    pub fn mutation_count(&self) -> usize {
        self.deletes.load(Ordering::SeqCst) + self.inserts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConversionQueue for InstrumentedQueue {
    async fn fetch_pending(&self) -> Result<Vec<PendingLead>, QueueError> {
        self.inner.fetch_pending().await
    }

    async fn delete_pending(&self, lead_id: &str) -> Result<(), QueueError> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        if self.fail_deletes {
            return Err(QueueError::QueryFailed(sqlx::Error::PoolClosed));
        }
        self.inner.delete_pending(lead_id).await
    }

    async fn insert_error(&self, record: &ConversionErrorRecord) -> Result<(), QueueError> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        if self.fail_inserts {
            return Err(QueueError::QueryFailed(sqlx::Error::PoolClosed));
        }
        self.inner.insert_error(record).await
    }
}
