mod client;
mod config;
mod driver;
mod row_wrap;
mod value_wrap;

pub use client::*;
pub use config::*;
pub use driver::*;
