use crate::domain::value_objects::BorrowerId;
use crate::ports::eligibility_service::{EligibilityService as EligibilityServiceTrait, Result};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;

/// In-memory implementation of EligibilityService
///
/// Supports stateful testing by storing borrower IDs.
/// Borrowers can be activated and deactivated at runtime.
pub struct EligibilityService {
    active_borrowers: Mutex<HashSet<BorrowerId>>,
}

impl EligibilityService {
    pub fn new() -> Self {
        Self {
            active_borrowers: Mutex::new(HashSet::new()),
        }
    }

    /// Mark a borrower account as active
    pub fn activate(&self, borrower_id: BorrowerId) {
        self.active_borrowers.lock().unwrap().insert(borrower_id);
    }

    /// Mark a borrower account as inactive
    pub fn deactivate(&self, borrower_id: &BorrowerId) {
        self.active_borrowers.lock().unwrap().remove(borrower_id);
    }
}

impl Default for EligibilityService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EligibilityServiceTrait for EligibilityService {
    /// Check if the borrower is in the active set
    async fn is_active(&self, borrower_id: &BorrowerId) -> Result<bool> {
        Ok(self.active_borrowers.lock().unwrap().contains(borrower_id))
    }
}
