pub mod aggregate;
pub mod analysis;
pub mod month;
pub mod parameters;
pub mod state;
pub mod transaction;
