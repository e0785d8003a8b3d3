use crate::PowerUpResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Namespace a stored value belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum Scope {
    Board(String),
    Card(String),
    Organization(String),
    Member(String),
}

impl Scope {
    pub fn board(id: impl Into<String>) -> Self {
        Self::Board(id.into())
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Board(id) | Self::Card(id) | Self::Organization(id) | Self::Member(id) => id,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Board(_) => "board",
            Self::Card(_) => "card",
            Self::Organization(_) => "organization",
            Self::Member(_) => "member",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind(), self.id())
    }
}

/// Who can see a stored value within its scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Shared,
    Private,
}

impl Visibility {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Shared => "shared",
            Self::Private => "private",
        }
    }
}

/// Asynchronous key-value store with scoped namespaces.
/// The host serializes writes per key; callers never hold locks across calls.
#[async_trait]
pub trait ScopedStore: Send + Sync {
    /// Read a value, `None` when the key was never written
    async fn get(
        &self,
        scope: &Scope,
        visibility: Visibility,
        key: &str,
    ) -> PowerUpResult<Option<String>>;

    /// Write a value, replacing whatever was stored under the key
    async fn set(
        &self,
        scope: &Scope,
        visibility: Visibility,
        key: &str,
        value: &str,
    ) -> PowerUpResult<()>;
}

/// Opaque reference to the card the user is looking at
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardHandle(pub String);

impl CardHandle {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Card fields as the board product reports them. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFields {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "shortLink")]
    pub short_link: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Live card data access
#[async_trait]
pub trait CardSource: Send + Sync {
    /// Read the current fields of a card. Implementations must not cache.
    async fn card_fields(&self, card: &CardHandle) -> PowerUpResult<CardFields>;
}
