// src/config/mod.rs
pub mod item;
pub mod settings;

// Re-export commonly used types
pub use item::{ItemId, ItemRecord};
pub use settings::Settings;
