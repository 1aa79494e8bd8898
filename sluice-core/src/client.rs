use crate::{
    Driver, NamedParams, NamedParamsBatch, Result, RowLabeled, RowsAffected,
    stream::{Stream, TryStreamExt},
};
use std::future::Future;

/// A pooled handle onto one backend, selected at construction time.
///
/// Implementations wrap the native driver's pool; they never implement
/// pooling, transactions or the wire protocol themselves. Cloning a client
/// clones the pool handle, not the connections.
pub trait Client: Clone + Send + Sync + Sized + 'static {
    type Driver: Driver;

    /// Build the backend pool with at least one connection established, so
    /// bad credentials fail here rather than on the first query.
    fn connect(
        config: &<Self::Driver as Driver>::Config,
    ) -> impl Future<Output = Result<Self>> + Send;

    /// Release the pool. Every handle cloned from this client is closed too.
    fn close(&self) -> impl Future<Output = Result<()>> + Send;

    /// Execute the query and stream the rows without buffering the full
    /// result set.
    ///
    /// `{name}` placeholders are rewritten into the backend's positional
    /// markers before the driver is touched, so translation errors surface
    /// as the first stream item and no connection is acquired for them.
    fn fetch(
        &self,
        query: &str,
        params: &NamedParams,
    ) -> impl Stream<Item = Result<RowLabeled>> + Send;

    /// Execute the query and collect all the rows. Be careful using this for
    /// large result sets, prefer [`Client::fetch`].
    fn fetch_all(
        &self,
        query: &str,
        params: &NamedParams,
    ) -> impl Future<Output = Result<Vec<RowLabeled>>> + Send {
        self.fetch(query, params).try_collect()
    }

    /// Run a write statement once per batch row, all rows sharing the first
    /// row's positional assignment.
    fn write(
        &self,
        stmt: &str,
        batch: &NamedParamsBatch,
    ) -> impl Future<Output = Result<RowsAffected>> + Send;

    /// Run a parameterless statement. Useful to change the database in some
    /// way, e.g. ALTER, CREATE, DROP statements.
    fn execute(&self, stmt: &str) -> impl Future<Output = Result<RowsAffected>> + Send;
}

/// Scoped pool lifecycle: connect, run the task, then release the pool on
/// every exit path. The task's error wins over a close failure.
pub async fn scoped<C, F, Fut, T>(config: &<C::Driver as Driver>::Config, task: F) -> Result<T>
where
    C: Client,
    F: FnOnce(C) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let client = C::connect(config).await?;
    let result = task(client.clone()).await;
    let closed = client.close().await;
    if let Err(e) = &closed {
        log::error!("{:#}", e);
    }
    let value = result?;
    closed?;
    Ok(value)
}
