pub mod capabilities;
pub mod ide;
pub mod launch;
pub mod pref;
pub mod settings;
