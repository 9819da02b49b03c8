//! Activities module - ledger transaction records and rejection reasons.

mod activities_constants;
mod activities_errors;
mod activities_model;


pub use activities_constants::*;
pub use activities_errors::ActivityError;
pub use activities_model::{Activity, ActivityType};
