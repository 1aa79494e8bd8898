use crate::{PostgresConfig, PostgresDriver, ValueHolder, util::row_to_values};
use async_stream::try_stream;
use deadpool_postgres::{Manager, ManagerConfig, Pool, RecyclingMethod};
use sluice_core::{
    Client, Driver, Error, ErrorContext, NamedParams, NamedParamsBatch, Result, RowLabeled,
    RowNames, RowsAffected,
    stream::{Stream, StreamExt, TryStreamExt},
    truncate_long,
};
use std::{pin::pin, sync::Arc};
use tokio_postgres::{NoTls, SimpleQueryMessage};

/// Pooled Postgres client. Cloning shares the pool.
#[derive(Clone)]
pub struct PostgresClient {
    pool: Pool,
}

impl Client for PostgresClient {
    type Driver = PostgresDriver;

    async fn connect(config: &PostgresConfig) -> Result<Self> {
        let context = || format!("While trying to connect to `{}:{}`", config.host, config.port);
        let manager = Manager::from_config(
            config.pg_config(),
            NoTls,
            ManagerConfig {
                recycling_method: RecyclingMethod::Fast,
            },
        );
        let pool = Pool::builder(manager)
            .max_size(config.pool_max_size)
            .build()
            .with_context(context)?;
        // Reserve the minimum number of connections upfront so bad
        // credentials fail here and not on the first query.
        let mut reserved = Vec::new();
        for _ in 0..config.pool_min_size.max(1) {
            let connection = pool.get().await.map_err(|e| {
                let e = Error::new(e).context(context());
                log::error!("{:#}", e);
                e
            })?;
            reserved.push(connection);
        }
        drop(reserved);
        Ok(Self { pool })
    }

    async fn close(&self) -> Result<()> {
        self.pool.close();
        Ok(())
    }

    fn fetch(
        &self,
        query: &str,
        params: &NamedParams,
    ) -> impl Stream<Item = Result<RowLabeled>> + Send {
        let rendered = params
            .render(query, <Self::Driver as Driver>::PLACEHOLDER)
            .map_err(Error::from);
        let values: Vec<ValueHolder> = params.as_tuple().into_iter().map(ValueHolder).collect();
        let pool = self.pool.clone();
        let context = Arc::new(format!(
            "While fetching the query:\n{}",
            truncate_long!(query)
        ));
        try_stream! {
            let sql = rendered?;
            let client = pool.get().await?;
            let stream = client.query_raw(sql.as_str(), values).await?;
            let mut stream = pin!(stream);
            let mut labels: Option<RowNames> = None;
            while let Some(row) = stream.next().await.transpose()? {
                let labels = labels.get_or_insert_with(|| {
                    row.columns().iter().map(|c| c.name().to_string()).collect()
                });
                yield RowLabeled {
                    labels: labels.clone(),
                    values: row_to_values(row)?,
                };
            }
        }
        .map_err(move |e: Error| {
            let e = e.context(context.clone());
            log::error!("{:#}", e);
            e
        })
    }

    async fn write(&self, stmt: &str, batch: &NamedParamsBatch) -> Result<RowsAffected> {
        let context = || format!("While writing the statement:\n{}", truncate_long!(stmt));
        let sql = batch
            .render(stmt, <Self::Driver as Driver>::PLACEHOLDER)
            .map_err(|e| {
                let e = Error::new(e).context(context());
                log::error!("{:#}", e);
                e
            })?;
        let mut client = self.pool.get().await.with_context(context)?;
        let transaction = client.transaction().await.with_context(context)?;
        let prepared = transaction.prepare(&sql).await.with_context(context)?;
        let mut affected = RowsAffected::default();
        for row in batch.value_rows() {
            let rows_affected = transaction
                .execute_raw(&prepared, row.into_iter().map(ValueHolder))
                .await
                .with_context(context)?;
            affected.extend([RowsAffected {
                rows_affected,
                // Postgres reports inserted ids through RETURNING only.
                last_affected_id: None,
            }]);
        }
        transaction.commit().await.with_context(context)?;
        Ok(affected)
    }

    async fn execute(&self, stmt: &str) -> Result<RowsAffected> {
        let context = || format!("While running the statement:\n{}", truncate_long!(stmt));
        let client = self.pool.get().await.with_context(context)?;
        let messages = client.simple_query(stmt).await.with_context(context)?;
        let mut affected = RowsAffected::default();
        for message in messages {
            if let SimpleQueryMessage::CommandComplete(count) = message {
                affected.rows_affected += count;
            }
        }
        Ok(affected)
    }
}
