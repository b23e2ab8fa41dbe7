//! Custom extractors for Axum handlers.

pub mod id_path;
pub mod query_params;
pub mod strict_json;

pub use id_path::IdPath;
pub use query_params::QueryParams;
pub use strict_json::{JSON_CONTENT_TYPE, StrictJson};
