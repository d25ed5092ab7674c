//! Champion catalog loader: fetches the Data Dragon catalog once per caller
//! request and hands back an immutable snapshot.

mod client;
mod error;
mod provider;

pub use client::{DDRAGON_BASE_URL, DEFAULT_LOCALE, DdragonClient};
pub use error::CatalogError;
pub use provider::CatalogProvider;
