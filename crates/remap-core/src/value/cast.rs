use super::Value;
use crate::{schema::Type, Error, Result};

impl Value {
    /// Coerces a value into the representation of `ty`.
    ///
    /// Primitives convert between each other where the value survives the
    /// trip: integers widen and narrow with range checks, floats narrow only
    /// when integral, anything formats into a string and strings parse back.
    /// Container values pass through when their shape matches `ty`; their
    /// contents are left to the caller. Null always stays null.
    pub fn cast(self, ty: &Type) -> Result<Value> {
        match (ty, self) {
            (_, Value::Null) => Ok(Value::Null),

            (Type::Bool, Value::Bool(v)) => Ok(Value::Bool(v)),
            (Type::Bool, Value::String(v)) => match v.trim() {
                "true" => Ok(Value::Bool(true)),
                "false" => Ok(Value::Bool(false)),
                _ => Err(Error::type_conversion(Value::String(v), "bool")),
            },

            (Type::I32, Value::I32(v)) => Ok(Value::I32(v)),
            (Type::I32, Value::I64(v)) => match i32::try_from(v) {
                Ok(v) => Ok(Value::I32(v)),
                Err(_) => Err(Error::type_conversion(Value::I64(v), "i32")),
            },
            (Type::I32, Value::F64(v)) => {
                if v.fract() == 0.0 && v >= i32::MIN as f64 && v <= i32::MAX as f64 {
                    Ok(Value::I32(v as i32))
                } else {
                    Err(Error::type_conversion(Value::F64(v), "i32"))
                }
            }
            (Type::I32, Value::String(v)) => match v.trim().parse::<i32>() {
                Ok(parsed) => Ok(Value::I32(parsed)),
                Err(_) => Err(Error::type_conversion(Value::String(v), "i32")),
            },

            (Type::I64, Value::I32(v)) => Ok(Value::I64(v.into())),
            (Type::I64, Value::I64(v)) => Ok(Value::I64(v)),
            (Type::I64, Value::F64(v)) => {
                // i64::MAX is not representable as f64; the bound is exclusive.
                if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
                    Ok(Value::I64(v as i64))
                } else {
                    Err(Error::type_conversion(Value::F64(v), "i64"))
                }
            }
            (Type::I64, Value::String(v)) => match v.trim().parse::<i64>() {
                Ok(parsed) => Ok(Value::I64(parsed)),
                Err(_) => Err(Error::type_conversion(Value::String(v), "i64")),
            },

            (Type::F64, Value::I32(v)) => Ok(Value::F64(v.into())),
            (Type::F64, Value::I64(v)) => Ok(Value::F64(v as f64)),
            (Type::F64, Value::F64(v)) => Ok(Value::F64(v)),
            (Type::F64, Value::String(v)) => match v.trim().parse::<f64>() {
                Ok(parsed) => Ok(Value::F64(parsed)),
                Err(_) => Err(Error::type_conversion(Value::String(v), "f64")),
            },

            (Type::String, Value::String(v)) => Ok(Value::String(v)),
            (Type::String, Value::Bool(v)) => Ok(Value::String(v.to_string())),
            (Type::String, Value::I32(v)) => Ok(Value::String(v.to_string())),
            (Type::String, Value::I64(v)) => Ok(Value::String(v.to_string())),
            (Type::String, Value::F64(v)) => Ok(Value::String(v.to_string())),

            (Type::List(_), value @ Value::List(_)) => Ok(value),
            (Type::Map(..), value @ Value::Map(_)) => Ok(value),
            (Type::Model(_), value @ Value::Record(_)) => Ok(value),

            (ty, value) => Err(Error::type_conversion(value, ty.to_string())),
        }
    }
}
