pub mod config;
pub mod error;
pub mod host;
pub mod result;
pub mod traits;

pub use config::AppConfig;
pub use error::PowerUpError;
pub use host::{HostUi, Notice, NoticeLevel, Popup};
pub use result::PowerUpResult;
pub use traits::{CardFields, CardHandle, CardSource, Scope, ScopedStore, Visibility};
