use crate::{PostgresClient, PostgresConfig};
use sluice_core::{Driver, Placeholder};

#[derive(Clone, Copy, Default)]
pub struct PostgresDriver;

impl PostgresDriver {
    pub const fn new() -> Self {
        Self
    }
}

impl Driver for PostgresDriver {
    type Config = PostgresConfig;
    type Client = PostgresClient;

    const NAME: &'static str = "postgres";
    const PLACEHOLDER: Placeholder = Placeholder::Dollar;
}
