/// Column types as declared to, and reported by, the SQL engine.
///
/// These are the external type identifiers found in `CREATE TABLE`
/// statements and result set descriptions. Each supported identifier maps to
/// one [`TypeInfo`](crate::schema::TypeInfo) and back; see
/// [`TypeInfo::from_sql_type`](crate::schema::TypeInfo::from_sql_type).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Type {
    /// A boolean value
    Boolean,

    /// A signed integer of `n` bytes
    Integer(u8),

    /// An unsigned integer of `n` bytes
    UnsignedInteger(u8),

    /// A floating point number of `n` bytes
    Float(u8),

    /// Unconstrained text type
    Text,

    /// Text type with an explicit maximum length
    VarChar(u64),

    /// 128-bit universally unique identifier (UUID)
    Uuid,

    /// Unconstrained binary type
    Blob,

    /// Binary type with an explicit maximum length
    VarBinary(u64),

    /// User-specified unrecognized type
    Custom(String),
}
