//! Local account CRUD cache over a host key-value store.
//!
//! The store mirrors its backing keys into memory on first use and writes
//! through on every mutation. Corrupt stored JSON resets to an empty cache
//! rather than failing the host; storage failures on writes do propagate,
//! since losing a registration silently would be worse than surfacing it.

use crate::error::{AuthError, Result};
use crate::types::{Account, AccountSummary};
use bridge_traits::KeyValueStore;
use core_runtime::events::{AuthEvent, CoreEvent, EventBus};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Key holding the JSON array of registered accounts.
pub const ACCOUNTS_KEY: &str = "citysound.accounts";
/// Key holding the JSON of the currently signed-in summary (or `null`).
pub const CURRENT_KEY: &str = "citysound.current";

#[derive(Default)]
struct CacheState {
    loaded: bool,
    accounts: Vec<Account>,
    current: Option<AccountSummary>,
}

/// Local registration/login cache.
///
/// All operations lazily load the backing store exactly once per instance.
/// Unlike the playback session, errors here are surfaced to the caller; the
/// UI renders them as form messages.
pub struct AccountStore {
    store: Arc<dyn KeyValueStore>,
    state: Mutex<CacheState>,
    events: Option<EventBus>,
}

impl AccountStore {
    /// Create a store without event-bus reporting.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            state: Mutex::new(CacheState::default()),
            events: None,
        }
    }

    /// Create a store that emits [`AuthEvent`]s on the given bus.
    pub fn with_events(store: Arc<dyn KeyValueStore>, events: EventBus) -> Self {
        Self {
            store,
            state: Mutex::new(CacheState::default()),
            events: Some(events),
        }
    }

    /// Register a new account and sign it in.
    ///
    /// # Errors
    ///
    /// [`AuthError::EmailTaken`] when an account with `email` exists;
    /// storage and serialization failures propagate.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AccountSummary> {
        let mut state = self.state.lock().await;
        self.load_if_needed(&mut state).await?;

        if state.accounts.iter().any(|a| a.email == email) {
            return Err(AuthError::EmailTaken(email.to_string()));
        }

        let account = Account::new(name, email, password);
        let summary = AccountSummary::from(&account);
        debug!(account = %account.id, "registering account");

        // Newest first, matching how the roster is rendered.
        state.accounts.insert(0, account);
        state.current = Some(summary.clone());

        self.persist_accounts(&state).await?;
        self.persist_current(&state).await?;
        self.emit(AuthEvent::Registered {
            account_id: summary.id.to_string(),
        });
        Ok(summary)
    }

    /// Sign in an existing account.
    ///
    /// # Errors
    ///
    /// [`AuthError::UnknownAccount`] when no account matches `email`,
    /// [`AuthError::WrongPassword`] when the password differs.
    pub async fn login(&self, email: &str, password: &str) -> Result<AccountSummary> {
        let mut state = self.state.lock().await;
        self.load_if_needed(&mut state).await?;

        let account = state
            .accounts
            .iter()
            .find(|a| a.email == email)
            .ok_or_else(|| AuthError::UnknownAccount(email.to_string()))?;
        if account.password != password {
            return Err(AuthError::WrongPassword);
        }

        let summary = AccountSummary::from(account);
        state.current = Some(summary.clone());
        self.persist_current(&state).await?;
        self.emit(AuthEvent::SignedIn {
            account_id: summary.id.to_string(),
        });
        Ok(summary)
    }

    /// Sign out the current account. Signing out while nobody is signed in
    /// is a no-op.
    pub async fn logout(&self) -> Result<()> {
        let mut state = self.state.lock().await;
        self.load_if_needed(&mut state).await?;

        if state.current.take().is_some() {
            self.persist_current(&state).await?;
            self.emit(AuthEvent::SignedOut);
        }
        Ok(())
    }

    /// The currently signed-in account, if any.
    pub async fn current(&self) -> Result<Option<AccountSummary>> {
        let mut state = self.state.lock().await;
        self.load_if_needed(&mut state).await?;
        Ok(state.current.clone())
    }

    /// Number of registered accounts.
    pub async fn account_count(&self) -> Result<usize> {
        let mut state = self.state.lock().await;
        self.load_if_needed(&mut state).await?;
        Ok(state.accounts.len())
    }

    async fn load_if_needed(&self, state: &mut CacheState) -> Result<()> {
        if state.loaded {
            return Ok(());
        }

        state.accounts = match self.store.get(ACCOUNTS_KEY).await? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!(error = %e, "resetting corrupt account roster");
                Vec::new()
            }),
            None => Vec::new(),
        };
        state.current = match self.store.get(CURRENT_KEY).await? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!(error = %e, "resetting corrupt signed-in record");
                None
            }),
            None => None,
        };
        state.loaded = true;
        Ok(())
    }

    async fn persist_accounts(&self, state: &CacheState) -> Result<()> {
        let raw = serde_json::to_string(&state.accounts)?;
        self.store.set(ACCOUNTS_KEY, &raw).await?;
        Ok(())
    }

    async fn persist_current(&self, state: &CacheState) -> Result<()> {
        let raw = serde_json::to_string(&state.current)?;
        self.store.set(CURRENT_KEY, &raw).await?;
        Ok(())
    }

    fn emit(&self, event: AuthEvent) {
        if let Some(events) = &self.events {
            events.emit(CoreEvent::Auth(event)).ok();
        }
    }
}
