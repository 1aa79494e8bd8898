use mysql_async::{FromValueError, Params};
use sluice_core::{Error, Value};
use time::{Date, Month, PrimitiveDateTime, Time};

pub(crate) struct ValueWrap(pub(crate) Value);

impl From<Value> for ValueWrap {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
impl From<ValueWrap> for Value {
    fn from(value: ValueWrap) -> Self {
        value.0
    }
}

impl mysql_async::prelude::FromValue for ValueWrap {
    type Intermediate = ValueWrap;
}

impl TryFrom<mysql_async::Value> for ValueWrap {
    type Error = FromValueError;
    fn try_from(value: mysql_async::Value) -> Result<Self, Self::Error> {
        Ok(match value {
            mysql_async::Value::NULL => Value::Null,
            // Text columns travel as raw bytes, `AsValue` decodes them on
            // the way out.
            mysql_async::Value::Bytes(v) => Value::Blob(Some(v.into())),
            mysql_async::Value::Int(v) => Value::Int64(Some(v)),
            mysql_async::Value::UInt(v) => Value::UInt64(Some(v)),
            mysql_async::Value::Float(v) => Value::Float32(Some(v)),
            mysql_async::Value::Double(v) => Value::Float64(Some(v)),
            mysql_async::Value::Date(year, month, day, hour, minute, second, microsecond) => {
                let month = Month::try_from(month).map_err(|_| FromValueError(value.clone()))?;
                let date = Date::from_calendar_date(year as _, month, day)
                    .map_err(|_| FromValueError(value.clone()))?;
                let time = Time::from_hms_micro(hour, minute, second, microsecond)
                    .map_err(|_| FromValueError(value.clone()))?;
                Value::Timestamp(Some(PrimitiveDateTime::new(date, time)))
            }
            mysql_async::Value::Time(..) => return Err(FromValueError(value)),
        }
        .into())
    }
}

impl TryFrom<ValueWrap> for mysql_async::Value {
    type Error = Error;

    fn try_from(value: ValueWrap) -> Result<Self, Self::Error> {
        type MySQLValue = mysql_async::Value;
        fn timestamp(v: PrimitiveDateTime) -> Result<MySQLValue, Error> {
            let year = v.year();
            if year < 0 || year > u16::MAX as i32 {
                return Err(Error::msg(format!(
                    "The date {} is out of range for MySQL",
                    v
                )));
            }
            Ok(MySQLValue::Date(
                year as _,
                v.month().into(),
                v.day(),
                v.hour(),
                v.minute(),
                v.second(),
                v.microsecond(),
            ))
        }
        Ok(match value.0 {
            _ if value.0.is_null() => MySQLValue::NULL,
            Value::Boolean(Some(v)) => MySQLValue::from(v),
            Value::Int8(Some(v)) => MySQLValue::from(v),
            Value::Int16(Some(v)) => MySQLValue::from(v),
            Value::Int32(Some(v)) => MySQLValue::from(v),
            Value::Int64(Some(v)) => MySQLValue::from(v),
            Value::UInt8(Some(v)) => MySQLValue::from(v),
            Value::UInt16(Some(v)) => MySQLValue::from(v),
            Value::UInt32(Some(v)) => MySQLValue::from(v),
            Value::UInt64(Some(v)) => MySQLValue::from(v),
            Value::Float32(Some(v)) => MySQLValue::from(v),
            Value::Float64(Some(v)) => MySQLValue::from(v),
            Value::Decimal(Some(v)) => MySQLValue::from(v),
            Value::Varchar(Some(v)) => MySQLValue::from(v),
            Value::Blob(Some(v)) => MySQLValue::from(v.into_vec()),
            Value::Date(Some(v)) => MySQLValue::from(v),
            Value::Time(Some(v)) => MySQLValue::from(v),
            Value::Timestamp(Some(v)) => timestamp(v)?,
            Value::TimestampWithTimezone(Some(v)) => {
                let v = v.to_offset(time::UtcOffset::UTC);
                timestamp(PrimitiveDateTime::new(v.date(), v.time()))?
            }
            Value::Uuid(Some(v)) => MySQLValue::from(v.hyphenated().to_string()),
            other => {
                return Err(Error::msg(format!(
                    "The value `{:?}` is not supported by MySQL",
                    other
                )));
            }
        })
    }
}

pub(crate) fn to_params(values: Vec<Value>) -> sluice_core::Result<Params> {
    if values.is_empty() {
        return Ok(Params::Empty);
    }
    Ok(Params::Positional(
        values
            .into_iter()
            .map(|v| ValueWrap(v).try_into())
            .collect::<sluice_core::Result<_>>()?,
    ))
}
