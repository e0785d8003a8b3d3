use crate::deep_link::QueryParam;
use powerup_core::{CardHandle, CardSource, PowerUpError, PowerUpResult};
use serde::Serialize;

/// Identifies the board product to the desktop application
pub const PROVIDER_ID: &str = "trello*com";

/// Snapshot of the card a launch starts work on. Missing fields are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CardContext {
    pub provider_id: &'static str,
    pub id: String,
    pub short_id: String,
    pub title: String,
    pub description: String,
    pub url: String,
}

impl CardContext {
    /// Read the card fresh from `source`
    pub async fn extract<C>(source: &C, card: &CardHandle) -> PowerUpResult<Self>
    where
        C: CardSource + ?Sized,
    {
        let fields = source.card_fields(card).await.map_err(|e| match e {
            PowerUpError::CardContextUnavailable(msg) => PowerUpError::CardContextUnavailable(msg),
            other => PowerUpError::CardContextUnavailable(format!("card {}: {}", card, other)),
        })?;

        let context = Self {
            provider_id: PROVIDER_ID,
            id: fields.id.unwrap_or_default(),
            short_id: fields.short_link.unwrap_or_default(),
            title: fields.name.unwrap_or_default(),
            description: fields.desc.unwrap_or_default(),
            url: fields.url.unwrap_or_default(),
        };

        tracing::debug!(
            card = %card,
            id = %context.id,
            short_id = %context.short_id,
            "Extracted card context"
        );

        Ok(context)
    }

    /// Query parameters in the order the desktop application expects
    pub fn query_params(&self) -> Vec<QueryParam> {
        vec![
            QueryParam {
                key: "providerId",
                value: self.provider_id.to_string(),
            },
            QueryParam {
                key: "id",
                value: self.id.clone(),
            },
            QueryParam {
                key: "tokenId",
                value: self.short_id.clone(),
            },
            QueryParam {
                key: "title",
                value: self.title.clone(),
            },
            QueryParam {
                key: "body",
                value: self.description.clone(),
            },
            QueryParam {
                key: "url",
                value: self.url.clone(),
            },
        ]
    }
}
