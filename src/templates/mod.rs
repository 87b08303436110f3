pub mod components;
pub mod details;
pub mod format;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::card;
pub use layouts::desktop::desktop_layout;
