//! Accounts module - the ledger model, its service, and the service trait.

mod accounts_model;
mod accounts_service;
mod accounts_traits;



// Re-export the public interface
pub use accounts_model::Account;
pub use accounts_service::AccountService;
pub use accounts_traits::AccountServiceTrait;
