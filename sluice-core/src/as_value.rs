use crate::{Error, Result, Value};
use rust_decimal::Decimal;
use std::{any, borrow::Cow};
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};
use uuid::Uuid;

/// Conversion seam between native Rust types and the dynamically typed
/// [`Value`] representation that backs query parameters and row decoding.
///
/// # Error semantics
/// - Integer narrowing is range checked, the error names both the offending
///   value and the target type.
/// - A type accepts its canonical `Value` variant plus lossless alternates
///   (any integer width for integers, UTF-8 blobs for `String`).
pub trait AsValue {
    /// A NULL-like value variant for this type, used to keep the column type
    /// when representing absent data.
    fn as_empty_value() -> Value;
    /// Convert this value into its owned [`Value`] representation.
    fn as_value(self) -> Value;
    /// Attempt to convert a dynamic [`Value`] into `Self`.
    fn try_from_value(value: Value) -> Result<Self>
    where
        Self: Sized;
}

fn mismatch<T>(value: &Value) -> Error {
    Error::msg(format!(
        "Cannot convert the value `{:?}` into {}",
        value,
        any::type_name::<T>()
    ))
}

fn as_integer(value: &Value) -> Option<i128> {
    match value {
        Value::Int8(Some(v)) => Some(*v as i128),
        Value::Int16(Some(v)) => Some(*v as i128),
        Value::Int32(Some(v)) => Some(*v as i128),
        Value::Int64(Some(v)) => Some(*v as i128),
        Value::UInt8(Some(v)) => Some(*v as i128),
        Value::UInt16(Some(v)) => Some(*v as i128),
        Value::UInt32(Some(v)) => Some(*v as i128),
        Value::UInt64(Some(v)) => Some(*v as i128),
        _ => None,
    }
}

macro_rules! as_value_integer {
    ($ty:ty, $variant:ident) => {
        impl AsValue for $ty {
            fn as_empty_value() -> Value {
                Value::$variant(None)
            }
            fn as_value(self) -> Value {
                Value::$variant(Some(self))
            }
            fn try_from_value(value: Value) -> Result<Self> {
                as_integer(&value)
                    .and_then(|v| <$ty>::try_from(v).ok())
                    .ok_or_else(|| mismatch::<$ty>(&value))
            }
        }
    };
}

as_value_integer!(i8, Int8);
as_value_integer!(i16, Int16);
as_value_integer!(i32, Int32);
as_value_integer!(i64, Int64);
as_value_integer!(u8, UInt8);
as_value_integer!(u16, UInt16);
as_value_integer!(u32, UInt32);
as_value_integer!(u64, UInt64);

macro_rules! as_value_exact {
    ($ty:ty, $variant:ident) => {
        impl AsValue for $ty {
            fn as_empty_value() -> Value {
                Value::$variant(None)
            }
            fn as_value(self) -> Value {
                Value::$variant(Some(self))
            }
            fn try_from_value(value: Value) -> Result<Self> {
                match value {
                    Value::$variant(Some(v)) => Ok(v),
                    other => Err(mismatch::<$ty>(&other)),
                }
            }
        }
    };
}

as_value_exact!(f32, Float32);
as_value_exact!(Date, Date);
as_value_exact!(Time, Time);
as_value_exact!(PrimitiveDateTime, Timestamp);
as_value_exact!(OffsetDateTime, TimestampWithTimezone);
as_value_exact!(Uuid, Uuid);

impl AsValue for bool {
    fn as_empty_value() -> Value {
        Value::Boolean(None)
    }
    fn as_value(self) -> Value {
        Value::Boolean(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Boolean(Some(v)) => Ok(v),
            other => as_integer(&other)
                .map(|v| v != 0)
                .ok_or_else(|| mismatch::<bool>(&other)),
        }
    }
}

impl AsValue for f64 {
    fn as_empty_value() -> Value {
        Value::Float64(None)
    }
    fn as_value(self) -> Value {
        Value::Float64(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Float64(Some(v)) => Ok(v),
            Value::Float32(Some(v)) => Ok(v as f64),
            other => Err(mismatch::<f64>(&other)),
        }
    }
}

impl AsValue for Decimal {
    fn as_empty_value() -> Value {
        Value::Decimal(None)
    }
    fn as_value(self) -> Value {
        Value::Decimal(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Decimal(Some(v)) => Ok(v),
            other => as_integer(&other)
                .map(Decimal::from)
                .ok_or_else(|| mismatch::<Decimal>(&other)),
        }
    }
}

impl AsValue for String {
    fn as_empty_value() -> Value {
        Value::Varchar(None)
    }
    fn as_value(self) -> Value {
        Value::Varchar(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Varchar(Some(v)) => Ok(v),
            // MySQL transports text columns as raw bytes.
            Value::Blob(Some(v)) => {
                String::from_utf8(v.into_vec()).map_err(|e| Error::new(e).context(
                    "While decoding a binary column into a String",
                ))
            }
            other => Err(mismatch::<String>(&other)),
        }
    }
}

impl AsValue for &str {
    fn as_empty_value() -> Value {
        Value::Varchar(None)
    }
    fn as_value(self) -> Value {
        Value::Varchar(Some(self.to_owned()))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        Err(mismatch::<&str>(&value))
    }
}

impl AsValue for Cow<'_, str> {
    fn as_empty_value() -> Value {
        Value::Varchar(None)
    }
    fn as_value(self) -> Value {
        Value::Varchar(Some(self.into_owned()))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        Ok(String::try_from_value(value)?.into())
    }
}

impl AsValue for Vec<u8> {
    fn as_empty_value() -> Value {
        Value::Blob(None)
    }
    fn as_value(self) -> Value {
        Value::Blob(Some(self.into()))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Blob(Some(v)) => Ok(v.into_vec()),
            Value::Varchar(Some(v)) => Ok(v.into_bytes()),
            other => Err(mismatch::<Vec<u8>>(&other)),
        }
    }
}

impl AsValue for &[u8] {
    fn as_empty_value() -> Value {
        Value::Blob(None)
    }
    fn as_value(self) -> Value {
        Value::Blob(Some(self.into()))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        Err(mismatch::<&[u8]>(&value))
    }
}

impl<T: AsValue> AsValue for Option<T> {
    fn as_empty_value() -> Value {
        T::as_empty_value()
    }
    fn as_value(self) -> Value {
        match self {
            Some(v) => v.as_value(),
            None => T::as_empty_value(),
        }
    }
    fn try_from_value(value: Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            T::try_from_value(value).map(Some)
        }
    }
}

impl AsValue for Value {
    fn as_empty_value() -> Value {
        Value::Null
    }
    fn as_value(self) -> Value {
        self
    }
    fn try_from_value(value: Value) -> Result<Self> {
        Ok(value)
    }
}

macro_rules! impl_from_for_value {
    ($($ty:ty),+ $(,)?) => {
        $(impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                value.as_value()
            }
        })+
    };
}

impl_from_for_value!(
    bool,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    u64,
    f32,
    f64,
    Decimal,
    String,
    &str,
    Vec<u8>,
    &[u8],
    Date,
    Time,
    PrimitiveDateTime,
    OffsetDateTime,
    Uuid,
);

impl<T> From<Option<T>> for Value
where
    T: AsValue,
{
    fn from(value: Option<T>) -> Self {
        value.as_value()
    }
}
