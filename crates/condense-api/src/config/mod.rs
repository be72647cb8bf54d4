//! Config module

mod constants;
mod env;

pub use constants::{
  DEFAULT_BIND_ADDR, DEFAULT_DATABASE_PATH, ENV_API_KEY, ENV_BASE_URL, ENV_BIND_ADDR,
  ENV_COLLECTION, ENV_DATABASE_PATH, ENV_MODEL, ENV_TIMEOUT_SECS,
};
pub use env::Config;
