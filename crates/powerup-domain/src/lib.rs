pub mod capabilities;
pub mod card_context;
pub mod deep_link;
pub mod ide;
pub mod launch;
pub mod preference;
pub mod settings;

#[cfg(test)]
mod test_support;

pub use capabilities::{ButtonAction, Capability, CardButton};
pub use card_context::{CardContext, PROVIDER_ID};
pub use deep_link::{QueryParam, Route};
pub use ide::{IdeRecord, IdeRegistry, CATALOG};
pub use launch::{LaunchOutcome, Launcher};
pub use preference::{PreferenceStore, IDE_PREFERENCE_KEY};
pub use settings::{SettingsController, SettingsOption, SettingsState};
