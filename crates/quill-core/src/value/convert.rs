//! Conversions from Rust and serde values.

use chrono::{DateTime, Utc};

use super::{Callable, ErrorValue, List, Object, Record, Scalar, Value};

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        Self::Scalar(scalar)
    }
}

/// Clones the handle: a borrowed list or record keeps its identity.
impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

impl From<List> for Value {
    fn from(list: List) -> Self {
        Self::List(list)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Self::Object(object)
    }
}

impl From<ErrorValue> for Value {
    fn from(error: ErrorValue) -> Self {
        Self::Object(Object::Error(error))
    }
}

impl From<Callable> for Value {
    fn from(callable: Callable) -> Self {
        Self::Scalar(Scalar::Callable(callable))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Scalar(Scalar::Bool(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Scalar(Scalar::Number(value))
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Scalar(Scalar::Number(f64::from(value)))
    }
}

macro_rules! impl_from_lossless {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::Scalar(Scalar::Number(f64::from(value)))
                }
            }
        )*
    };
}

impl_from_lossless!(i8, i16, i32, u8, u16, u32);

// Integers wider than 53 bits lose precision the same way a double does.
macro_rules! impl_from_wide {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                #[allow(clippy::cast_precision_loss)]
                fn from(value: $ty) -> Self {
                    Self::Scalar(Scalar::Number(value as f64))
                }
            }
        )*
    };
}

impl_from_wide!(i64, u64, isize, usize);

impl From<i128> for Value {
    fn from(value: i128) -> Self {
        Self::Scalar(Scalar::BigInt(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Scalar(Scalar::Text(value.to_owned()))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Scalar(Scalar::Text(value))
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::Scalar(Scalar::Text(value.clone()))
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Self::Scalar(Scalar::Text(value.to_string()))
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Object(Object::Date(value))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Self::null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::null(),
            serde_json::Value::Bool(b) => Self::from(b),
            serde_json::Value::Number(n) => match n.as_f64() {
                Some(f) => Self::from(f),
                None => Self::text(n.to_string()),
            },
            serde_json::Value::String(s) => Self::from(s),
            serde_json::Value::Array(items) => Self::list(items),
            serde_json::Value::Object(map) => Self::record(map),
        }
    }
}
