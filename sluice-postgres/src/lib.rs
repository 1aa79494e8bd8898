mod client;
mod config;
mod driver;
mod util;
mod value_holder;

pub use client::*;
pub use config::*;
pub use driver::*;
pub use value_holder::*;
