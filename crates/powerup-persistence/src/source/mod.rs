pub mod json_card_source;

pub use json_card_source::JsonCardSource;
