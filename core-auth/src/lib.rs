//! # Local Account Module
//!
//! A plain local CRUD cache for registration and login, persisted through
//! the host's [`KeyValueStore`](bridge_traits::KeyValueStore). This is the
//! demo app's account surface, not a credential system: passwords are
//! stored verbatim and nothing here talks to a network.

pub mod error;
pub mod store;
pub mod types;

pub use error::{AuthError, Result};
pub use store::AccountStore;
pub use types::{Account, AccountId, AccountSummary};
