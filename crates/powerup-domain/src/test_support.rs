use async_trait::async_trait;
use powerup_core::{
    CardFields, CardHandle, CardSource, HostUi, Notice, Popup, PowerUpError, PowerUpResult, Scope,
    ScopedStore, Visibility,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Map-backed store whose writes can be switched off
#[derive(Default)]
pub(crate) struct MapStore {
    values: Mutex<HashMap<(Scope, Visibility, String), String>>,
    fail_writes: AtomicBool,
    fail_reads: AtomicBool,
}

impl MapStore {
    pub(crate) fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl ScopedStore for MapStore {
    async fn get(
        &self,
        scope: &Scope,
        visibility: Visibility,
        key: &str,
    ) -> PowerUpResult<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(PowerUpError::StoreUnavailable("reads disabled".to_string()));
        }
        let values = self.values.lock().unwrap();
        Ok(values
            .get(&(scope.clone(), visibility, key.to_string()))
            .cloned())
    }

    async fn set(
        &self,
        scope: &Scope,
        visibility: Visibility,
        key: &str,
        value: &str,
    ) -> PowerUpResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(PowerUpError::StoreUnavailable("writes disabled".to_string()));
        }
        self.values
            .lock()
            .unwrap()
            .insert((scope.clone(), visibility, key.to_string()), value.to_string());
        Ok(())
    }
}

/// Card source serving fixed cards keyed by handle
#[derive(Default)]
pub(crate) struct FixedCards {
    cards: HashMap<String, CardFields>,
}

impl FixedCards {
    pub(crate) fn with_card(mut self, handle: &str, fields: CardFields) -> Self {
        self.cards.insert(handle.to_string(), fields);
        self
    }
}

#[async_trait]
impl CardSource for FixedCards {
    async fn card_fields(&self, card: &CardHandle) -> PowerUpResult<CardFields> {
        self.cards
            .get(card.as_str())
            .cloned()
            .ok_or_else(|| PowerUpError::NotFound(format!("card {}", card)))
    }
}

/// Host that records every request made of it
#[derive(Default)]
pub(crate) struct RecordingHost {
    pub(crate) popups: Mutex<Vec<Popup>>,
    pub(crate) notices: Mutex<Vec<Notice>>,
    pub(crate) navigations: Mutex<Vec<String>>,
    pub(crate) closed: AtomicBool,
    pub(crate) refuse_navigation: AtomicBool,
}

impl RecordingHost {
    pub(crate) fn navigations(&self) -> Vec<String> {
        self.navigations.lock().unwrap().clone()
    }

    pub(crate) fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub(crate) fn was_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

impl HostUi for RecordingHost {
    fn popup(&self, popup: &Popup) -> PowerUpResult<()> {
        self.popups.lock().unwrap().push(popup.clone());
        Ok(())
    }

    fn close_popup(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    fn notify(&self, notice: &Notice) {
        self.notices.lock().unwrap().push(notice.clone());
    }

    fn navigate(&self, uri: &str) -> PowerUpResult<()> {
        if self.refuse_navigation.load(Ordering::SeqCst) {
            return Err(PowerUpError::Navigation("no handler registered".to_string()));
        }
        self.navigations.lock().unwrap().push(uri.to_string());
        Ok(())
    }
}
