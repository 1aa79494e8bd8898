use crate::ValueHolder;
use sluice_core::{Error, Result, Row};

pub(crate) fn row_to_values(row: tokio_postgres::Row) -> Result<Row> {
    (0..row.len())
        .map(|i| match row.try_get::<_, ValueHolder>(i) {
            Ok(v) => Ok(v.0),
            Err(..) => {
                let col = &row.columns()[i];
                Err(Error::msg(format!(
                    "Could not deserialize column {} `{}` of type `{}`",
                    i,
                    col.name(),
                    col.type_()
                )))
            }
        })
        .collect()
}
