pub mod download_indicator;
pub mod settings_item;
