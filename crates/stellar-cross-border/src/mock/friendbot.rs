use crate::error::CrossBorderError;
use crate::friendbot::Faucet;
use async_trait::async_trait;
use std::sync::Mutex;

/// Faucet that either always fails with the given error or records every
/// account it was asked to fund.
pub struct MockFaucet {
    error: Option<CrossBorderError>,
    funded: Mutex<Vec<String>>,
}

impl MockFaucet {
    pub fn new(error: Option<CrossBorderError>) -> Self {
        Self {
            error,
            funded: Mutex::new(Vec::new()),
        }
    }

    pub fn funded(&self) -> Vec<String> {
        self.funded.lock().unwrap().clone()
    }
}

#[async_trait]
impl Faucet for MockFaucet {
    async fn fund(&self, account_id: &str) -> Result<(), CrossBorderError> {
        if let Some(error) = &self.error {
            return Err(error.clone());
        }
        self.funded.lock().unwrap().push(account_id.to_string());
        Ok(())
    }
}
