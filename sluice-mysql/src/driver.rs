use crate::{MySQLClient, MySQLConfig};
use sluice_core::{Driver, Placeholder};

#[derive(Clone, Copy, Default)]
pub struct MySQLDriver;

impl MySQLDriver {
    pub const fn new() -> Self {
        Self
    }
}

impl Driver for MySQLDriver {
    type Config = MySQLConfig;
    type Client = MySQLClient;

    const NAME: &'static str = "mysql";
    const PLACEHOLDER: Placeholder = Placeholder::Question;
}
