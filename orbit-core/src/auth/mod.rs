//! Accounts: password hashing plus the register/login flow.

pub mod hasher;
pub mod service;

pub use hasher::CredentialHasher;
pub use service::AuthService;
