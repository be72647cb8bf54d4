//! Service module

mod condense_api_service;

pub use condense_api_service::{CondenseApiService, CondenseApiServiceFull};
