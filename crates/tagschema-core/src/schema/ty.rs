use super::Result;
use crate::{row::Value, sql, Error};

use std::fmt;

/// Storage kinds of column values.
///
/// Every stored [`Value`] has exactly one kind. Two columns are compatible
/// for row conversion when they have the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Bool,
    Int,
    Uint,
    Float,
    String,
    Uuid,
    Blob,
}

/// Describes the logical type of a column.
///
/// `TypeInfo` sits between two representations of a value:
///
/// 1. **[`Value`]**: the internal storage value kept in tag-keyed rows. It
///    only knows the storage [`Kind`] (`Int`, `String`, ...).
///
/// 2. **[`sql::Value`]**: the external scalar exchanged with the SQL engine,
///    which carries a width (`I8`, `I32`, `F32`, ...).
///
/// The descriptor refines a kind with the parameters of the external type it
/// was declared with, so a column declared `VARCHAR(20)` keeps its maximum
/// length and exports as `VARCHAR(20)` again:
///
/// ```text
/// sql::Type::Integer(4)    ↔  TypeInfo::Int(4)       ↔  Kind::Int
/// sql::Type::VarChar(20)   ↔  TypeInfo::Text(Some(20)) ↔ Kind::String
/// sql::Type::Text          ↔  TypeInfo::Text(None)   ↔  Kind::String
/// ```
///
/// Conversions never coerce across kinds: a string scalar is not parsed into
/// an integer column, an unsigned scalar is not accepted by a signed column.
/// Values that do not fit the declared width or length are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeInfo {
    /// A boolean value
    Bool,

    /// A signed integer of `n` bytes (1, 2, 4 or 8)
    Int(u8),

    /// An unsigned integer of `n` bytes (1, 2, 4 or 8)
    Uint(u8),

    /// A floating point number of `n` bytes (4 or 8)
    Float(u8),

    /// Text with an optional maximum length in characters
    Text(Option<u64>),

    /// 128-bit universally unique identifier
    Uuid,

    /// Binary data with an optional maximum length in bytes
    Blob(Option<u64>),
}

impl TypeInfo {
    /// Returns the storage kind of values of this type.
    pub const fn kind(&self) -> Kind {
        match self {
            TypeInfo::Bool => Kind::Bool,
            TypeInfo::Int(_) => Kind::Int,
            TypeInfo::Uint(_) => Kind::Uint,
            TypeInfo::Float(_) => Kind::Float,
            TypeInfo::Text(_) => Kind::String,
            TypeInfo::Uuid => Kind::Uuid,
            TypeInfo::Blob(_) => Kind::Blob,
        }
    }

    /// Maps an external type identifier to a type descriptor.
    pub fn from_sql_type(ty: &sql::Type) -> Result<TypeInfo> {
        match *ty {
            sql::Type::Boolean => Ok(TypeInfo::Bool),
            sql::Type::Integer(n @ (1 | 2 | 4 | 8)) => Ok(TypeInfo::Int(n)),
            sql::Type::UnsignedInteger(n @ (1 | 2 | 4 | 8)) => Ok(TypeInfo::Uint(n)),
            sql::Type::Float(n @ (4 | 8)) => Ok(TypeInfo::Float(n)),
            sql::Type::Text => Ok(TypeInfo::Text(None)),
            sql::Type::VarChar(n) => Ok(TypeInfo::Text(Some(n))),
            sql::Type::Uuid => Ok(TypeInfo::Uuid),
            sql::Type::Blob => Ok(TypeInfo::Blob(None)),
            sql::Type::VarBinary(n) => Ok(TypeInfo::Blob(Some(n))),
            _ => Err(Error::unsupported_type(format!(
                "{ty:?} has no type descriptor"
            ))),
        }
    }

    /// Returns the external type identifier this descriptor exports as.
    pub fn to_sql_type(&self) -> sql::Type {
        match *self {
            TypeInfo::Bool => sql::Type::Boolean,
            TypeInfo::Int(n) => sql::Type::Integer(n),
            TypeInfo::Uint(n) => sql::Type::UnsignedInteger(n),
            TypeInfo::Float(n) => sql::Type::Float(n),
            TypeInfo::Text(None) => sql::Type::Text,
            TypeInfo::Text(Some(n)) => sql::Type::VarChar(n),
            TypeInfo::Uuid => sql::Type::Uuid,
            TypeInfo::Blob(None) => sql::Type::Blob,
            TypeInfo::Blob(Some(n)) => sql::Type::VarBinary(n),
        }
    }

    /// Verifies that `value` is a valid stored value of this type.
    pub fn check(&self, value: &Value) -> Result<()> {
        match (self, value) {
            (TypeInfo::Bool, Value::Bool(_)) => Ok(()),
            (TypeInfo::Int(n), Value::Int(v)) => {
                let (min, max) = int_range(*n);
                if *v < min || *v > max {
                    return Err(out_of_range(v, self));
                }
                Ok(())
            }
            (TypeInfo::Uint(n), Value::Uint(v)) => {
                if *v > uint_max(*n) {
                    return Err(out_of_range(v, self));
                }
                Ok(())
            }
            (TypeInfo::Float(4), Value::Float(v)) => {
                // Only doubles a single precision column holds exactly
                if v.is_finite() && f64::from(*v as f32) != *v {
                    return Err(Error::value_conversion(format!(
                        "{v} is not representable as {self}"
                    )));
                }
                Ok(())
            }
            (TypeInfo::Float(_), Value::Float(_)) => Ok(()),
            (TypeInfo::Text(max_len), Value::String(v)) => match max_len {
                Some(max) if v.chars().count() as u64 > *max => Err(Error::value_conversion(
                    format!("text of {} characters exceeds {self}", v.chars().count()),
                )),
                _ => Ok(()),
            },
            (TypeInfo::Uuid, Value::Uuid(_)) => Ok(()),
            (TypeInfo::Blob(max_len), Value::Blob(v)) => match max_len {
                Some(max) if v.len() as u64 > *max => Err(Error::value_conversion(format!(
                    "binary value of {} bytes exceeds {self}",
                    v.len()
                ))),
                _ => Ok(()),
            },
            _ => Err(Error::value_conversion(format!(
                "expected {:?}, found {:?}",
                self.kind(),
                value.kind()
            ))),
        }
    }

    /// Renders a stored value as an external scalar of this type's width.
    pub fn to_sql(&self, value: &Value) -> Result<sql::Value> {
        self.check(value)?;

        Ok(match (self, value) {
            (TypeInfo::Bool, Value::Bool(v)) => sql::Value::Bool(*v),
            (TypeInfo::Int(1), Value::Int(v)) => sql::Value::I8(narrow(*v, self)?),
            (TypeInfo::Int(2), Value::Int(v)) => sql::Value::I16(narrow(*v, self)?),
            (TypeInfo::Int(4), Value::Int(v)) => sql::Value::I32(narrow(*v, self)?),
            (TypeInfo::Int(_), Value::Int(v)) => sql::Value::I64(*v),
            (TypeInfo::Uint(1), Value::Uint(v)) => sql::Value::U8(narrow(*v, self)?),
            (TypeInfo::Uint(2), Value::Uint(v)) => sql::Value::U16(narrow(*v, self)?),
            (TypeInfo::Uint(4), Value::Uint(v)) => sql::Value::U32(narrow(*v, self)?),
            (TypeInfo::Uint(_), Value::Uint(v)) => sql::Value::U64(*v),
            (TypeInfo::Float(4), Value::Float(v)) => sql::Value::F32(*v as f32),
            (TypeInfo::Float(_), Value::Float(v)) => sql::Value::F64(*v),
            (TypeInfo::Text(_), Value::String(v)) => sql::Value::String(v.clone()),
            (TypeInfo::Uuid, Value::Uuid(v)) => sql::Value::Uuid(*v),
            (TypeInfo::Blob(_), Value::Blob(v)) => sql::Value::Bytes(v.clone()),
            // `check` rejects every other pairing
            _ => unreachable!("type descriptor {self:?} accepted {value:?}"),
        })
    }

    /// Parses an external scalar into a stored value of this type.
    ///
    /// `NULL` has no stored representation; callers handle it before
    /// converting.
    pub fn from_sql(&self, value: sql::Value) -> Result<Value> {
        let stored = match (self, value) {
            (TypeInfo::Bool, sql::Value::Bool(v)) => Value::Bool(v),
            (TypeInfo::Int(_), sql::Value::I8(v)) => Value::Int(v.into()),
            (TypeInfo::Int(_), sql::Value::I16(v)) => Value::Int(v.into()),
            (TypeInfo::Int(_), sql::Value::I32(v)) => Value::Int(v.into()),
            (TypeInfo::Int(_), sql::Value::I64(v)) => Value::Int(v),
            (TypeInfo::Uint(_), sql::Value::U8(v)) => Value::Uint(v.into()),
            (TypeInfo::Uint(_), sql::Value::U16(v)) => Value::Uint(v.into()),
            (TypeInfo::Uint(_), sql::Value::U32(v)) => Value::Uint(v.into()),
            (TypeInfo::Uint(_), sql::Value::U64(v)) => Value::Uint(v),
            (TypeInfo::Float(_), sql::Value::F32(v)) => Value::Float(v.into()),
            (TypeInfo::Float(_), sql::Value::F64(v)) => Value::Float(v),
            (TypeInfo::Text(_), sql::Value::String(v)) => Value::String(v),
            (TypeInfo::Uuid, sql::Value::Uuid(v)) => Value::Uuid(v),
            (TypeInfo::Blob(_), sql::Value::Bytes(v)) => Value::Blob(v),
            (_, value) => {
                return Err(Error::value_conversion(format!(
                    "cannot convert {} to {self}",
                    value.type_name()
                )))
            }
        };

        self.check(&stored)?;
        Ok(stored)
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeInfo::Bool => f.write_str("BOOLEAN"),
            TypeInfo::Int(n) => write!(f, "INTEGER({n})"),
            TypeInfo::Uint(n) => write!(f, "UNSIGNED INTEGER({n})"),
            TypeInfo::Float(n) => write!(f, "FLOAT({n})"),
            TypeInfo::Text(None) => f.write_str("TEXT"),
            TypeInfo::Text(Some(n)) => write!(f, "VARCHAR({n})"),
            TypeInfo::Uuid => f.write_str("UUID"),
            TypeInfo::Blob(None) => f.write_str("BLOB"),
            TypeInfo::Blob(Some(n)) => write!(f, "VARBINARY({n})"),
        }
    }
}

fn int_range(bytes: u8) -> (i64, i64) {
    match bytes {
        1 => (i8::MIN.into(), i8::MAX.into()),
        2 => (i16::MIN.into(), i16::MAX.into()),
        4 => (i32::MIN.into(), i32::MAX.into()),
        _ => (i64::MIN, i64::MAX),
    }
}

fn uint_max(bytes: u8) -> u64 {
    match bytes {
        1 => u8::MAX.into(),
        2 => u16::MAX.into(),
        4 => u32::MAX.into(),
        _ => u64::MAX,
    }
}

fn narrow<S, T>(value: S, ty: &TypeInfo) -> Result<T>
where
    S: Copy + fmt::Display,
    T: TryFrom<S>,
{
    T::try_from(value).map_err(|_| out_of_range(&value, ty))
}

fn out_of_range(value: &dyn fmt::Display, ty: &TypeInfo) -> Error {
    Error::value_conversion(format!("{value} is out of range for {ty}"))
}
