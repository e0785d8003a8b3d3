//! Board settings form: choose which IDE "Start Work" opens.

use crate::ide::{IdeRecord, IdeRegistry};
use crate::preference::PreferenceStore;
use powerup_core::{HostUi, PowerUpError, PowerUpResult, ScopedStore};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingsState {
    IdleDisplaying,
    Saving,
    Closed,
}

/// One entry of the IDE selection control
#[derive(Debug, Clone, Serialize)]
pub struct SettingsOption {
    pub moniker: &'static str,
    pub label: &'static str,
    pub selected: bool,
    pub separator_after: bool,
}

pub struct SettingsController<'a> {
    registry: &'a IdeRegistry,
    store: &'a dyn ScopedStore,
    board_id: String,
    /// Last value known to be persisted, shown again if a save fails
    persisted: &'static str,
    selected: &'static str,
    state: SettingsState,
}

impl<'a> SettingsController<'a> {
    /// Load the board preference and reflect it into the selection
    pub async fn open(
        registry: &'a IdeRegistry,
        store: &'a dyn ScopedStore,
        board_id: impl Into<String>,
    ) -> Self {
        let board_id = board_id.into();
        let stored = PreferenceStore::new(store).load(&board_id).await;
        let selected = match stored.as_deref().and_then(|m| registry.lookup(m)) {
            Some(record) => record.moniker,
            None => registry.default_record().moniker,
        };

        tracing::debug!("Settings opened for board {} with '{}'", board_id, selected);

        Self {
            registry,
            store,
            board_id,
            persisted: selected,
            selected,
            state: SettingsState::IdleDisplaying,
        }
    }

    pub fn state(&self) -> SettingsState {
        self.state
    }

    pub fn board_id(&self) -> &str {
        &self.board_id
    }

    pub fn selected(&self) -> &IdeRecord {
        self.registry.resolve(Some(self.selected))
    }

    pub fn options(&self) -> Vec<SettingsOption> {
        self.registry
            .all()
            .iter()
            .map(|record| SettingsOption {
                moniker: record.moniker,
                label: record.ide_name,
                selected: record.moniker == self.selected,
                separator_after: record.sep_after,
            })
            .collect()
    }

    /// Change the selection. Only catalogue monikers are offered by the control.
    pub fn select(&mut self, moniker: &str) -> PowerUpResult<()> {
        self.ensure_idle()?;
        let record = self.registry.lookup(moniker).ok_or_else(|| {
            PowerUpError::Validation(format!("Unknown IDE moniker: {}", moniker))
        })?;
        self.selected = record.moniker;
        Ok(())
    }

    /// Persist the selection and close the surface.
    ///
    /// On failure the form stays open showing the previously saved value.
    pub async fn save(&mut self, host: &dyn HostUi) -> PowerUpResult<()> {
        self.ensure_idle()?;
        self.state = SettingsState::Saving;

        let result = PreferenceStore::new(self.store)
            .save(&self.board_id, self.selected)
            .await;
        match result {
            Ok(()) => {
                self.persisted = self.selected;
                self.state = SettingsState::Closed;
                host.close_popup();
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Settings save failed for board {}: {}", self.board_id, e);
                self.selected = self.persisted;
                self.state = SettingsState::IdleDisplaying;
                Err(e)
            }
        }
    }

    fn ensure_idle(&self) -> PowerUpResult<()> {
        match self.state {
            SettingsState::IdleDisplaying => Ok(()),
            SettingsState::Saving => Err(PowerUpError::Validation(
                "A save is already in progress".to_string(),
            )),
            SettingsState::Closed => Err(PowerUpError::Validation(
                "Settings have been closed".to_string(),
            )),
        }
    }
}
