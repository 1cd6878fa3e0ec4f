pub mod calc;
pub mod model;
pub mod render;
pub mod session;
pub mod validate;

#[cfg(feature = "full")]
pub mod fetch_data;

#[cfg(feature = "wasm")]
pub mod wasm;
