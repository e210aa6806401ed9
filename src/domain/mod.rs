pub mod commands;
pub mod errors;
pub mod late_fee;
pub mod ledger;
pub mod value_objects;

pub use errors::*;
pub use ledger::*;
pub use value_objects::*;
