pub mod auth;

pub use auth::{authorize_url, exchange, ExchangeResult, RemoteExchangeError};
