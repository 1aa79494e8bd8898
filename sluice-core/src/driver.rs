use crate::{Client, Placeholder};

pub trait Driver: Send + Sync + 'static {
    type Config: Send + Sync;
    type Client: Client<Driver = Self>;

    /// URL scheme identifying the backend.
    const NAME: &'static str;
    /// Positional marker style the backend expects after `{name}` rewriting.
    const PLACEHOLDER: Placeholder;
}
