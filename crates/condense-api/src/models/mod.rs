//! モデルモジュール

mod request;
mod response;

pub use request::SummarizeRequest;
pub use response::SummarizeResponse;
