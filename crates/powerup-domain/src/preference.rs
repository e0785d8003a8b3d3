use powerup_core::{PowerUpError, PowerUpResult, Scope, ScopedStore, Visibility};

/// Store key holding the selected IDE moniker
pub const IDE_PREFERENCE_KEY: &str = "ide";

/// Board-level IDE preference on top of the host's scoped store
pub struct PreferenceStore<'a, S: ScopedStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: ScopedStore + ?Sized> PreferenceStore<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Stored moniker for a board. Read failures resolve to `None`.
    pub async fn load(&self, board_id: &str) -> Option<String> {
        let scope = Scope::board(board_id);
        match self
            .store
            .get(&scope, Visibility::Shared, IDE_PREFERENCE_KEY)
            .await
        {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Could not read IDE preference for {}: {}", scope, e);
                None
            }
        }
    }

    /// Persist a moniker for a board. Any string is accepted.
    pub async fn save(&self, board_id: &str, moniker: &str) -> PowerUpResult<()> {
        let scope = Scope::board(board_id);
        self.store
            .set(&scope, Visibility::Shared, IDE_PREFERENCE_KEY, moniker)
            .await
            .map_err(|e| match e {
                PowerUpError::StoreUnavailable(msg) => PowerUpError::StoreUnavailable(msg),
                other => PowerUpError::StoreUnavailable(other.to_string()),
            })?;
        tracing::info!("Saved IDE preference '{}' for {}", moniker, scope);
        Ok(())
    }
}
