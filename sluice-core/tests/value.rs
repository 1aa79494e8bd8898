#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use sluice_core::{AsValue, Value};
    use time::macros::{date, datetime, time};
    use uuid::Uuid;

    #[test]
    fn value_null() {
        assert_eq!(Value::Null, Value::Null);
        assert_ne!(Value::Float32(Some(1.0)), Value::Null);
        assert!(Value::Null.is_null());
        assert!(Value::Int64(None).is_null());
        assert!(!Value::Int64(Some(0)).is_null());
    }

    #[test]
    fn value_bool() {
        let val: Value = true.into();
        assert_eq!(val, Value::Boolean(Some(true)));
        assert_ne!(val, Value::Boolean(Some(false)));
        assert_ne!(val, Value::Boolean(None));
        let var: bool = AsValue::try_from_value(val).unwrap();
        assert!(var);
        assert!(bool::try_from_value((1 as i8).into()).unwrap());
        assert!(!bool::try_from_value((0 as i32).into()).unwrap());
        assert!(bool::try_from_value((9 as u64).into()).unwrap());
        assert!(bool::try_from_value((0.5 as f32).into()).is_err());
    }

    #[test]
    fn value_integers() {
        let val: Value = (-32768 as i16).into();
        assert_eq!(val, Value::Int16(Some(-32768)));
        let var: i16 = AsValue::try_from_value(val).unwrap();
        assert_eq!(var, -32768);
        // Lossless widening and range checked narrowing.
        assert_eq!(i64::try_from_value((99 as u8).into()).unwrap(), 99);
        assert_eq!(u8::try_from_value((255 as i64).into()).unwrap(), 255);
        assert!(u8::try_from_value((256 as i64).into()).is_err());
        assert!(u32::try_from_value((-1 as i32).into()).is_err());
        assert!(i32::try_from_value((0.1 as f64).into()).is_err());
    }

    #[test]
    fn value_floats() {
        let val: Value = (0.25 as f64).into();
        assert_eq!(val, Value::Float64(Some(0.25)));
        assert_eq!(f64::try_from_value((0.5 as f32).into()).unwrap(), 0.5);
        assert!(f32::try_from_value((0.5 as f64).into()).is_err());
        assert!(f64::try_from_value((1 as i32).into()).is_err());
    }

    #[test]
    fn value_decimal() {
        let var = Decimal::new(1234, 2);
        let val: Value = var.into();
        assert_eq!(val, Value::Decimal(Some(Decimal::new(1234, 2))));
        let back: Decimal = AsValue::try_from_value(val).unwrap();
        assert_eq!(back, var);
        assert_eq!(
            Decimal::try_from_value((7 as i64).into()).unwrap(),
            Decimal::from(7)
        );
    }

    #[test]
    fn value_strings() {
        let val: Value = "hello".into();
        assert_eq!(val, Value::Varchar(Some("hello".into())));
        let var: String = AsValue::try_from_value(val).unwrap();
        assert_eq!(var, "hello");
        // Text transported as raw bytes decodes too.
        let var: String =
            AsValue::try_from_value(Value::Blob(Some(b"world".to_vec().into()))).unwrap();
        assert_eq!(var, "world");
        assert!(String::try_from_value(Value::Blob(Some(vec![0xff, 0xfe].into()))).is_err());
    }

    #[test]
    fn value_blob() {
        let val: Value = vec![1u8, 2, 3].into();
        assert_eq!(val, Value::Blob(Some(vec![1, 2, 3].into())));
        let var: Vec<u8> = AsValue::try_from_value(val).unwrap();
        assert_eq!(var, vec![1, 2, 3]);
    }

    #[test]
    fn value_temporal() {
        let val: Value = date!(2024 - 02 - 29).into();
        assert_eq!(val, Value::Date(Some(date!(2024 - 02 - 29))));
        let val: Value = time!(23:59:59).into();
        assert_eq!(val, Value::Time(Some(time!(23:59:59))));
        let var = datetime!(2024-02-29 12:00:00);
        let val: Value = var.into();
        assert_eq!(val, Value::Timestamp(Some(var)));
        let back: time::PrimitiveDateTime = AsValue::try_from_value(val).unwrap();
        assert_eq!(back, var);
    }

    #[test]
    fn value_uuid() {
        let var = Uuid::from_u128(0x1234_5678_9abc_def0_1234_5678_9abc_def0);
        let val: Value = var.into();
        assert_eq!(val, Value::Uuid(Some(var)));
        let back: Uuid = AsValue::try_from_value(val).unwrap();
        assert_eq!(back, var);
    }

    #[test]
    fn value_option() {
        let val: Value = Option::<i32>::None.into();
        assert_eq!(val, Value::Int32(None));
        assert!(val.is_null());
        let var: Option<i32> = AsValue::try_from_value(val).unwrap();
        assert_eq!(var, None);
        let var: Option<i32> = AsValue::try_from_value(Some(5).as_value()).unwrap();
        assert_eq!(var, Some(5));
    }

    #[test]
    fn value_same_type() {
        assert!(Value::Int32(None).same_type(&Value::Int32(Some(1))));
        assert!(!Value::Int32(None).same_type(&Value::Int64(None)));
    }
}
