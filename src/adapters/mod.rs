pub mod logging;
pub mod memory;
