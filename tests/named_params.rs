#[cfg(test)]
mod tests {
    use sluice::{NamedParamsBatch, Placeholder, Value, params};

    #[test]
    fn named_params() {
        let params = params! { "a" => 1, "b" => 2, "c" => 3 };
        assert_eq!(params.position("a"), Some(1));
        assert_eq!(params.position("b"), Some(2));
        assert_eq!(params.position("c"), Some(3));
    }

    #[test]
    fn query_generator() {
        let query = "select * from test where col = {foo} and col_two = {bar}";
        let params = params! { "foo" => "hello", "bar" => "world" };
        let parsed = params.render(query, Placeholder::Dollar).unwrap();
        assert_eq!(parsed, "select * from test where col = $1 and col_two = $2");
        assert!(!parsed.contains('{'));
        assert!(!parsed.contains('}'));
    }

    #[test]
    fn params_tuple() {
        let params = params! { "foo" => "hello", "bar" => "world" };
        assert_eq!(
            params.as_tuple(),
            vec![
                Value::Varchar(Some("hello".into())),
                Value::Varchar(Some("world".into())),
            ]
        );
    }

    #[test]
    fn batch_write_rendering() {
        let batch = NamedParamsBatch::new(vec![
            params! { "foo" => "hello", "bar" => "world" },
            params! { "foo" => "foo", "bar" => "bar" },
        ])
        .unwrap();
        let parsed = batch
            .render("insert into t values ({foo}, {bar})", Placeholder::Dollar)
            .unwrap();
        assert_eq!(parsed, "insert into t values ($1, $2)");
        assert_eq!(batch.value_rows().len(), 2);
    }
}
