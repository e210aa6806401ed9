mod circulation_service;
mod errors;
mod fee_quote;

pub use circulation_service::{
    BorrowOutcome, ReturnOutcome, ServiceDependencies, available_copies, borrow_book,
    register_copies, return_book,
};
pub use errors::{CirculationError, Result};
pub use fee_quote::quote_late_fee;
