//! Host capabilities this Power-Up answers.
//!
//! The host asks for a capability by name; each one maps to a single handler
//! with a fixed input and output type.

use crate::launch::{LaunchOutcome, Launcher};
use powerup_core::{CardHandle, HostUi, Popup, PowerUpError, PowerUpResult};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub const SETTINGS_TITLE: &str = "CodeStream Settings";
pub const SETTINGS_URL: &str = "./settings.html";
pub const SETTINGS_HEIGHT: u32 = 184;
pub const START_WORK_TEXT: &str = "Start Work";
pub const START_WORK_ICON: &str = "./images/icon-gray.svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Capability {
    CardButtons,
    ShowSettings,
}

impl Capability {
    pub const ALL: [Capability; 2] = [Capability::CardButtons, Capability::ShowSettings];

    /// Name the host uses when requesting the capability
    pub fn host_name(self) -> &'static str {
        match self {
            Self::CardButtons => "card-buttons",
            Self::ShowSettings => "show-settings",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.host_name())
    }
}

impl FromStr for Capability {
    type Err = PowerUpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|cap| cap.host_name() == s)
            .ok_or_else(|| PowerUpError::NotFound(format!("capability '{}'", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonAction {
    StartWork,
}

/// Declarative card button
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardButton {
    pub text: &'static str,
    pub icon: &'static str,
    pub action: ButtonAction,
}

/// `card-buttons`: the buttons shown on every card
pub fn card_buttons() -> Vec<CardButton> {
    vec![CardButton {
        text: START_WORK_TEXT,
        icon: START_WORK_ICON,
        action: ButtonAction::StartWork,
    }]
}

/// `show-settings`: description of the settings popup
pub fn settings_popup() -> Popup {
    Popup {
        title: SETTINGS_TITLE.to_string(),
        url: SETTINGS_URL.to_string(),
        height: SETTINGS_HEIGHT,
    }
}

/// Ask the host to render the settings popup
pub fn show_settings(host: &dyn HostUi) -> PowerUpResult<Popup> {
    let popup = settings_popup();
    host.popup(&popup)?;
    Ok(popup)
}

/// Run the action bound to a card button
pub async fn press_button(
    action: ButtonAction,
    launcher: &Launcher<'_>,
    board_id: &str,
    card: &CardHandle,
) -> PowerUpResult<LaunchOutcome> {
    match action {
        ButtonAction::StartWork => launcher.launch(board_id, card).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ide::IdeRegistry;
    use crate::test_support::{FixedCards, MapStore, RecordingHost};
    use powerup_core::CardFields;

    #[test]
    fn test_capability_names_round_trip() {
        for cap in Capability::ALL {
            assert_eq!(cap.host_name().parse::<Capability>().unwrap(), cap);
        }
        assert!("card-badges".parse::<Capability>().is_err());
        assert!("authorization-status".parse::<Capability>().is_err());
    }

    #[test]
    fn test_card_buttons() {
        let buttons = card_buttons();
        assert_eq!(buttons.len(), 1);
        assert_eq!(buttons[0].text, "Start Work");
        assert_eq!(buttons[0].action, ButtonAction::StartWork);
    }

    #[test]
    fn test_show_settings_renders_popup() {
        let host = RecordingHost::default();
        let popup = show_settings(&host).unwrap();
        assert_eq!(popup.url, "./settings.html");
        assert_eq!(host.popups.lock().unwrap().as_slice(), &[popup]);
    }

    #[tokio::test]
    async fn test_start_work_button_launches() {
        let registry = IdeRegistry::builtin();
        let store = MapStore::default();
        let cards = FixedCards::default().with_card(
            "c1",
            CardFields {
                id: Some("c1".to_string()),
                ..Default::default()
            },
        );
        let host = RecordingHost::default();
        let launcher = Launcher::new(&registry, &store, &cards, &host);

        let outcome = press_button(
            ButtonAction::StartWork,
            &launcher,
            "B1",
            &CardHandle::new("c1"),
        )
        .await
        .unwrap();
        assert!(outcome.link.contains("&id=c1&"));
        assert_eq!(host.navigations().len(), 1);
    }
}
