//! HTTP gateway over the champion catalog and the composition store.
//!
//! Routes are thin pass-throughs to the Data Dragon provider plus a small
//! composition API (roll, save, delete, list) backed by the storage port.

#![allow(missing_docs)]

mod http;
mod settings;
mod state;

pub use http::{
    ApiMessage, HealthResponse, RollRequest, RollResponse, SaveCompositionRequest, router,
    run_http,
};
pub use settings::{
    GatewaySettings, ProviderSettings, Settings, StorageSettings, load_settings, settings_path,
};
pub use state::AppState;
