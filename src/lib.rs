pub mod backdrop;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod log;
pub mod overlay;
pub mod schedule;
pub mod scroll;
pub mod store;
pub mod theme;
pub mod typing;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

#[cfg(not(target_arch = "wasm32"))]
pub mod host;

pub use error::Error;
