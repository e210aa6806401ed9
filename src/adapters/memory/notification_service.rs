use crate::domain::value_objects::BorrowerId;
use crate::ports::notification_service::{NotificationService as NotificationServiceTrait, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// Recording implementation of NotificationService
///
/// Does not deliver anything. Stores every (borrower, message) pair
/// so tests can assert on the exact notifications sent.
pub struct NotificationService {
    sent: Mutex<Vec<(BorrowerId, String)>>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
        }
    }

    /// All notifications recorded so far, in send order
    pub fn sent(&self) -> Vec<(BorrowerId, String)> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationServiceTrait for NotificationService {
    /// Record the notification without delivering it
    async fn notify(&self, borrower_id: &BorrowerId, message: &str) -> Result<()> {
        self.sent
            .lock()
            .unwrap()
            .push((borrower_id.clone(), message.to_string()));
        Ok(())
    }
}
