mod client;
mod errors;
mod index;
pub mod query;
pub mod response;
pub mod serialize;
mod service;
pub mod types;

pub use self::client::EsClient;
pub use self::errors::Error;
pub use self::query::{DateParams, DateRange, Page, RecordParams, DEFAULT_LIMIT};
pub use self::service::FinanceService;
