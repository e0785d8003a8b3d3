use crate::card_context::CardContext;
use crate::deep_link::{self, Route};
use crate::ide::{IdeRecord, IdeRegistry};
use crate::preference::PreferenceStore;
use powerup_core::{CardHandle, CardSource, HostUi, Notice, PowerUpResult, ScopedStore};
use serde::Serialize;

pub const START_WORK_CONTROLLER: &str = "startWork";
pub const START_WORK_ACTION: &str = "open";

/// Result of a successful launch
#[derive(Debug, Clone, Serialize)]
pub struct LaunchOutcome {
    pub ide: IdeRecord,
    pub link: String,
    pub card: CardContext,
}

/// Route for starting work on a card
pub fn start_work_route(context: &CardContext) -> Route {
    Route::new(START_WORK_CONTROLLER)
        .with_action(START_WORK_ACTION)
        .with_params(context.query_params())
}

/// Resolves the board's IDE, reads the card, and sends the host to the link
pub struct Launcher<'a> {
    registry: &'a IdeRegistry,
    store: &'a dyn ScopedStore,
    cards: &'a dyn CardSource,
    host: &'a dyn HostUi,
}

impl<'a> Launcher<'a> {
    pub fn new(
        registry: &'a IdeRegistry,
        store: &'a dyn ScopedStore,
        cards: &'a dyn CardSource,
        host: &'a dyn HostUi,
    ) -> Self {
        Self {
            registry,
            store,
            cards,
            host,
        }
    }

    /// IDE a board would launch right now
    pub async fn resolve_ide(&self, board_id: &str) -> &'a IdeRecord {
        let preference = PreferenceStore::new(self.store).load(board_id).await;
        self.pick(preference.as_deref())
    }

    fn pick(&self, preference: Option<&str>) -> &'a IdeRecord {
        let registry: &'a IdeRegistry = self.registry;
        if let Some(record) = preference.and_then(|moniker| registry.lookup(moniker)) {
            return record;
        }
        if let Some(moniker) = preference {
            tracing::info!("Stored IDE '{}' is no longer supported", moniker);
        }
        registry.default_record()
    }

    pub async fn launch(&self, board_id: &str, card: &CardHandle) -> PowerUpResult<LaunchOutcome> {
        let ide = self.resolve_ide(board_id).await;

        let context = match CardContext::extract(self.cards, card).await {
            Ok(context) => context,
            Err(e) => {
                tracing::error!("Launch aborted for card {}: {}", card, e);
                self.host
                    .notify(&Notice::error(format!("Could not start work: {}", e)));
                return Err(e);
            }
        };

        let route = start_work_route(&context);
        debug_assert!(!ide.protocol.is_empty(), "IDE protocol must not be empty");
        debug_assert!(!route.controller.is_empty(), "route controller must not be empty");
        let link = deep_link::build(ide.protocol, &route);

        if let Err(e) = self.host.navigate(&link) {
            tracing::error!("Could not open {} link: {}", ide.ide_name, e);
            self.host.notify(&Notice::error(format!(
                "Could not open {}. Is the CodeStream extension installed? {}",
                ide.ide_name, ide.download_url
            )));
            return Err(e);
        }

        tracing::info!(
            board = board_id,
            ide = ide.moniker,
            card = %card,
            "Started work in {}",
            ide.ide_name
        );

        Ok(LaunchOutcome {
            ide: *ide,
            link,
            card: context,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SettingsController;
    use crate::test_support::{FixedCards, MapStore, RecordingHost};
    use powerup_core::{CardFields, PowerUpError};
    use std::sync::atomic::Ordering;

    const SCENARIO_LINK: &str = "vscode://codestream.codestream/startWork/open?1=1&providerId=trello%2Acom&id=abc123&tokenId=xYz9&title=Fix%20bug&body=&url=https%3A%2F%2Ftrello.com%2Fc%2FxYz9";

    fn scenario_cards() -> FixedCards {
        FixedCards::default().with_card(
            "abc123",
            CardFields {
                id: Some("abc123".to_string()),
                short_link: Some("xYz9".to_string()),
                name: Some("Fix bug".to_string()),
                desc: Some(String::new()),
                url: Some("https://trello.com/c/xYz9".to_string()),
            },
        )
    }

    async fn save_pref(store: &MapStore, board: &str, moniker: &str) {
        PreferenceStore::new(store).save(board, moniker).await.unwrap();
    }

    #[tokio::test]
    async fn test_vscode_scenario_link() {
        let registry = IdeRegistry::builtin();
        let store = MapStore::default();
        let cards = scenario_cards();
        let host = RecordingHost::default();
        save_pref(&store, "B1", "vsc").await;

        let launcher = Launcher::new(&registry, &store, &cards, &host);
        let outcome = launcher
            .launch("B1", &CardHandle::new("abc123"))
            .await
            .unwrap();

        assert!(outcome.link.starts_with(SCENARIO_LINK));
        assert_eq!(host.navigations(), vec![outcome.link.clone()]);
        assert!(host.notices().is_empty());
    }

    #[tokio::test]
    async fn test_preferred_ide_protocol_is_used() {
        let registry = IdeRegistry::builtin();
        let store = MapStore::default();
        let cards = scenario_cards();
        let host = RecordingHost::default();
        save_pref(&store, "B1", "idea").await;

        let outcome = Launcher::new(&registry, &store, &cards, &host)
            .launch("B1", &CardHandle::new("abc123"))
            .await
            .unwrap();

        assert_eq!(outcome.ide.moniker, "idea");
        assert!(outcome
            .link
            .starts_with("jetbrains://idea/codestream/startWork/open?1=1&providerId="));
    }

    #[tokio::test]
    async fn test_missing_preference_uses_default() {
        let registry = IdeRegistry::builtin();
        let store = MapStore::default();
        let cards = scenario_cards();
        let host = RecordingHost::default();

        let outcome = Launcher::new(&registry, &store, &cards, &host)
            .launch("never-saved", &CardHandle::new("abc123"))
            .await
            .unwrap();

        assert!(outcome.link.starts_with(registry.default_record().protocol));
    }

    #[tokio::test]
    async fn test_unknown_preference_uses_default() {
        let registry = IdeRegistry::builtin();
        let store = MapStore::default();
        let cards = scenario_cards();
        let host = RecordingHost::default();
        save_pref(&store, "B1", "retired-ide").await;

        let outcome = Launcher::new(&registry, &store, &cards, &host)
            .launch("B1", &CardHandle::new("abc123"))
            .await
            .unwrap();

        assert_eq!(outcome.ide.moniker, "vsc");
        assert!(outcome.link.starts_with("vscode://codestream.codestream/"));
    }

    #[tokio::test]
    async fn test_unreadable_store_uses_default() {
        let registry = IdeRegistry::builtin();
        let store = MapStore::default();
        let cards = scenario_cards();
        let host = RecordingHost::default();
        save_pref(&store, "B1", "idea").await;
        store.fail_reads(true);

        let outcome = Launcher::new(&registry, &store, &cards, &host)
            .launch("B1", &CardHandle::new("abc123"))
            .await
            .unwrap();

        assert_eq!(outcome.ide.moniker, "vsc");
    }

    #[tokio::test]
    async fn test_configured_default_ide() {
        let store = MapStore::default();
        let cards = scenario_cards();
        let host = RecordingHost::default();

        let registry = IdeRegistry::builtin().with_default(Some("pycharm"));
        let launcher = Launcher::new(&registry, &store, &cards, &host);
        assert_eq!(launcher.resolve_ide("B1").await.moniker, "pycharm");

        let registry = IdeRegistry::builtin().with_default(Some("not-an-ide"));
        let launcher = Launcher::new(&registry, &store, &cards, &host);
        assert_eq!(launcher.resolve_ide("B1").await.moniker, "vsc");
    }

    #[tokio::test]
    async fn test_settings_and_launch_agree_on_configured_default() {
        let registry = IdeRegistry::builtin().with_default(Some("pycharm"));
        let store = MapStore::default();
        let cards = scenario_cards();
        let host = RecordingHost::default();

        let launcher = Launcher::new(&registry, &store, &cards, &host);
        let settings = SettingsController::open(&registry, &store, "B1").await;

        assert_eq!(settings.selected().moniker, "pycharm");
        assert_eq!(
            settings.selected().moniker,
            launcher.resolve_ide("B1").await.moniker
        );
    }

    #[tokio::test]
    async fn test_empty_title_and_description_keep_keys() {
        let registry = IdeRegistry::builtin();
        let store = MapStore::default();
        let cards = FixedCards::default().with_card(
            "bare",
            CardFields {
                id: Some("bare".to_string()),
                ..Default::default()
            },
        );
        let host = RecordingHost::default();

        let outcome = Launcher::new(&registry, &store, &cards, &host)
            .launch("B1", &CardHandle::new("bare"))
            .await
            .unwrap();

        assert!(outcome.link.contains("&title=&body=&url="));
        assert!(outcome.link.ends_with("url="));
    }

    #[tokio::test]
    async fn test_card_failure_aborts_without_navigation() {
        let registry = IdeRegistry::builtin();
        let store = MapStore::default();
        let cards = FixedCards::default();
        let host = RecordingHost::default();

        let result = Launcher::new(&registry, &store, &cards, &host)
            .launch("B1", &CardHandle::new("missing"))
            .await;

        assert!(matches!(result, Err(PowerUpError::CardContextUnavailable(_))));
        assert!(host.navigations().is_empty());
        let notices = host.notices();
        assert_eq!(notices.len(), 1);
        assert!(notices[0].message.starts_with("Could not start work"));
    }

    #[tokio::test]
    async fn test_navigation_failure_is_reported() {
        let registry = IdeRegistry::builtin();
        let store = MapStore::default();
        let cards = scenario_cards();
        let host = RecordingHost::default();
        host.refuse_navigation.store(true, Ordering::SeqCst);

        let result = Launcher::new(&registry, &store, &cards, &host)
            .launch("B1", &CardHandle::new("abc123"))
            .await;

        assert!(matches!(result, Err(PowerUpError::Navigation(_))));
        let notices = host.notices();
        assert_eq!(notices.len(), 1);
        assert!(notices[0].message.contains("VS Code"));
    }

    #[tokio::test]
    async fn test_launch_rereads_card() {
        let registry = IdeRegistry::builtin();
        let store = MapStore::default();
        let host = RecordingHost::default();

        let first = FixedCards::default().with_card(
            "c",
            CardFields {
                name: Some("Old title".to_string()),
                ..Default::default()
            },
        );
        let second = FixedCards::default().with_card(
            "c",
            CardFields {
                name: Some("New title".to_string()),
                ..Default::default()
            },
        );

        let a = Launcher::new(&registry, &store, &first, &host)
            .launch("B1", &CardHandle::new("c"))
            .await
            .unwrap();
        let b = Launcher::new(&registry, &store, &second, &host)
            .launch("B1", &CardHandle::new("c"))
            .await
            .unwrap();

        assert!(a.link.contains("title=Old%20title"));
        assert!(b.link.contains("title=New%20title"));
    }
}
