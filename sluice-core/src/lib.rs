mod as_value;
mod client;
mod config;
mod driver;
mod params;
mod row;
mod util;
mod value;

pub use ::anyhow::Context as ErrorContext;
pub use as_value::*;
pub use client::*;
pub use config::*;
pub use driver::*;
pub use params::*;
pub use row::*;
pub use util::*;
pub use value::*;
pub mod stream {
    pub use ::futures::stream::*;
}
pub use ::futures::future;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
