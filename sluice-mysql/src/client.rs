use crate::{
    MySQLConfig, MySQLDriver,
    row_wrap::RowWrap,
    value_wrap::to_params,
};
use async_stream::try_stream;
use mysql_async::{Pool, prelude::Queryable};
use sluice_core::{
    Client, Driver, Error, ErrorContext, NamedParams, NamedParamsBatch, Result, RowLabeled,
    RowsAffected,
    stream::{Stream, StreamExt, TryStreamExt},
    truncate_long,
};
use std::sync::Arc;

/// Pooled MySQL client. Cloning shares the pool.
#[derive(Clone)]
pub struct MySQLClient {
    pool: Pool,
}

impl Client for MySQLClient {
    type Driver = MySQLDriver;

    async fn connect(config: &MySQLConfig) -> Result<Self> {
        let context = || format!("While trying to connect to `{}:{}`", config.host, config.port);
        let pool = Pool::new(config.opts());
        // The pool connects lazily, ping once so bad credentials fail here
        // and not on the first query.
        let mut connection = pool.get_conn().await.map_err(|e| {
            let e = Error::new(e).context(context());
            log::error!("{:#}", e);
            e
        })?;
        connection.ping().await.with_context(context)?;
        drop(connection);
        Ok(Self { pool })
    }

    async fn close(&self) -> Result<()> {
        self.pool.clone().disconnect().await.map_err(Into::into)
    }

    fn fetch(
        &self,
        query: &str,
        params: &NamedParams,
    ) -> impl Stream<Item = Result<RowLabeled>> + Send {
        let rendered = params
            .render(query, <Self::Driver as Driver>::PLACEHOLDER)
            .map_err(Error::from);
        let values = to_params(params.as_tuple());
        let pool = self.pool.clone();
        let context = Arc::new(format!(
            "While fetching the query:\n{}",
            truncate_long!(query)
        ));
        try_stream! {
            let sql = rendered?;
            let values = values?;
            let mut connection = pool.get_conn().await?;
            let mut stream = connection.exec_stream::<RowWrap, _, _>(sql, values).await?;
            while let Some(row) = stream.next().await.transpose()? {
                yield row.0;
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
        let rows = batch
            .value_rows()
            .into_iter()
            .map(to_params)
            .collect::<Result<Vec<_>>>()?;
        let mut connection = self.pool.get_conn().await.with_context(context)?;
        let statement = connection.prep(sql).await.with_context(context)?;
        let mut affected = RowsAffected::default();
        for row in rows {
            connection
                .exec_drop(&statement, row)
                .await
                .with_context(context)?;
            affected.extend([RowsAffected {
                rows_affected: connection.affected_rows(),
                last_affected_id: connection.last_insert_id().map(|v| v as i64),
            }]);
        }
        Ok(affected)
    }

    async fn execute(&self, stmt: &str) -> Result<RowsAffected> {
        let context = || format!("While running the statement:\n{}", truncate_long!(stmt));
        let mut connection = self.pool.get_conn().await.with_context(context)?;
        let mut result = connection.query_iter(stmt).await.with_context(context)?;
        let affected = RowsAffected {
            rows_affected: result.affected_rows(),
            last_affected_id: result.last_insert_id().map(|v| v as i64),
        };
        result.drop_result().await.with_context(context)?;
        Ok(affected)
    }
}
