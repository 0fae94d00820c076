pub use client::CircleCiClient;
pub use error::CircleCiError;

mod client;
mod error;
