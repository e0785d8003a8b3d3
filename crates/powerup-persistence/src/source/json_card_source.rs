use crate::store::AtomicWriter;
use async_trait::async_trait;
use powerup_core::{CardFields, CardHandle, CardSource, PowerUpError, PowerUpResult};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Accepted file shapes: a board export, a bare card list, or one card
#[derive(Deserialize)]
#[serde(untagged)]
enum CardDocument {
    Board { cards: Vec<CardFields> },
    List(Vec<CardFields>),
    Single(CardFields),
}

impl CardDocument {
    fn into_cards(self) -> Vec<CardFields> {
        match self {
            Self::Board { cards } | Self::List(cards) => cards,
            Self::Single(card) => vec![card],
        }
    }
}

/// Card source backed by an exported board JSON file.
/// The file is read again on every request so edits show up immediately.
#[derive(Debug, Clone)]
pub struct JsonCardSource {
    path: PathBuf,
}

impl JsonCardSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn matches(card: &CardFields, handle: &CardHandle) -> bool {
        let wanted = Some(handle.as_str());
        card.id.as_deref() == wanted || card.short_link.as_deref() == wanted
    }
}

#[async_trait]
impl CardSource for JsonCardSource {
    async fn card_fields(&self, card: &CardHandle) -> PowerUpResult<CardFields> {
        let bytes = AtomicWriter::read_all(&self.path).await.map_err(|e| {
            PowerUpError::CardContextUnavailable(format!("{}: {}", self.path.display(), e))
        })?;
        let document: CardDocument = serde_json::from_slice(&bytes).map_err(|e| {
            PowerUpError::CardContextUnavailable(format!(
                "{} is not a card export: {}",
                self.path.display(),
                e
            ))
        })?;

        document
            .into_cards()
            .into_iter()
            .find(|fields| Self::matches(fields, card))
            .ok_or_else(|| {
                PowerUpError::CardContextUnavailable(format!(
                    "card {} not found in {}",
                    card,
                    self.path.display()
                ))
            })
    }
}
