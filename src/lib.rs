//! Sluice: a uniform async client over relational databases.
//!
//! Sluice wraps the native Postgres and MySQL drivers behind one [`Client`]
//! contract: pooled connections, streaming reads, batched writes and
//! `{name}` query parameters rewritten into each backend's positional
//! markers. Pooling, transactions and the wire protocols belong to the
//! wrapped drivers; Sluice only adds the common surface and the parameter
//! translation.
//!
//! ```rust,ignore
//! use sluice::{Client, NamedParamsBatch, params, scoped};
//! use sluice::postgres::{PostgresClient, PostgresConfig};
//!
//! let config = PostgresConfig::from_env()?;
//! scoped::<PostgresClient, _, _, _>(&config, |client| async move {
//!     let batch = NamedParamsBatch::new(vec![
//!         params! { "id" => 1_i64, "label" => "one" },
//!         params! { "id" => 2_i64, "label" => "two" },
//!     ])?;
//!     client.write("insert into t values ({id}, {label})", &batch).await?;
//!     let rows = client
//!         .fetch_all("select * from t where id > {min}", &params! { "min" => 0_i64 })
//!         .await?;
//!     Ok(rows.len())
//! })
//! .await?;
//! ```

pub use sluice_core::*;
pub use sluice_core::{params, truncate_long};

#[cfg(feature = "mysql")]
pub use sluice_mysql as mysql;
#[cfg(feature = "postgres")]
pub use sluice_postgres as postgres;
