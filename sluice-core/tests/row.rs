#[cfg(test)]
mod tests {
    use sluice_core::{RowLabeled, RowNames, RowsAffected, Value};

    fn sample_row() -> RowLabeled {
        let labels: RowNames = ["id".to_string(), "name".to_string()].into_iter().collect();
        RowLabeled::new(
            labels,
            vec![Value::Int64(Some(7)), Value::Varchar(Some("seven".into()))].into(),
        )
    }

    #[test]
    fn get_column_by_name() {
        let row = sample_row();
        assert_eq!(row.get_column("id"), Some(&Value::Int64(Some(7))));
        assert_eq!(row.get_column("missing"), None);
    }

    #[test]
    fn typed_get() {
        let row = sample_row();
        let id: i64 = row.get("id").unwrap();
        assert_eq!(id, 7);
        let name: String = row.get("name").unwrap();
        assert_eq!(name, "seven");
        assert!(row.get::<i64>("name").is_err());
        assert!(row.get::<i64>("missing").is_err());
    }

    #[test]
    fn rows_affected_extend() {
        let mut total = RowsAffected::default();
        total.extend([
            RowsAffected {
                rows_affected: 2,
                last_affected_id: Some(10),
            },
            RowsAffected {
                rows_affected: 3,
                last_affected_id: None,
            },
        ]);
        assert_eq!(total.rows_affected, 5);
        assert_eq!(total.last_affected_id, Some(10));
        // The most recent reported id wins, a missing one never clears it.
        total.extend([RowsAffected {
            rows_affected: 1,
            last_affected_id: Some(42),
        }]);
        assert_eq!(total.rows_affected, 6);
        assert_eq!(total.last_affected_id, Some(42));
    }
}
