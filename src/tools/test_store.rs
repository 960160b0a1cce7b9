// ABOUTME: FakeStore - an in-memory SqlStore for tests that records every
// ABOUTME: statement and returns canned rows, counts, or failures.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::{Row, SqlStore};

#[derive(Default)]
pub struct FakeStore {
    rows: Vec<Row>,
    affected: u64,
    fail: Option<String>,
    calls: Mutex<Vec<(String, Vec<Value>)>>,
}

impl FakeStore {
    pub fn with_rows(rows: Vec<Row>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    pub fn with_affected(affected: u64) -> Self {
        Self {
            affected,
            ..Self::default()
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn last_call(&self) -> (String, Vec<Value>) {
        self.calls.lock().unwrap().last().cloned().expect("no statement executed")
    }

    fn record(&self, sql: &str, params: &[Value]) -> Result<(), anyhow::Error> {
        self.calls
            .lock()
            .unwrap()
            .push((sql.to_string(), params.to_vec()));
        match &self.fail {
            Some(message) => Err(anyhow::anyhow!("{}", message)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl SqlStore for FakeStore {
    async fn query(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>, anyhow::Error> {
        self.record(sql, params)?;
        Ok(self.rows.clone())
    }

    async fn execute(&self, sql: &str, params: &[Value]) -> Result<u64, anyhow::Error> {
        self.record(sql, params)?;
        Ok(self.affected)
    }
}
