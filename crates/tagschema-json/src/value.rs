use tagschema_core::{sql, Error, Result};

use serde_json::{Map, Number, Value as Json};

/// Builds the JSON object for one row. `NULL` columns are omitted.
pub(crate) fn row_object(columns: &[sql::Column], row: &[sql::Value]) -> Result<Map<String, Json>> {
    if columns.len() != row.len() {
        tagschema_core::bail!(
            "row has {} values but the export has {} columns",
            row.len(),
            columns.len()
        );
    }

    let mut object = Map::with_capacity(columns.len());

    for (column, value) in columns.iter().zip(row) {
        if value.is_null() {
            continue;
        }

        let json = to_json(value).map_err(|err| err.with_column(&column.name))?;
        object.insert(column.name.clone(), json);
    }

    Ok(object)
}

fn to_json(value: &sql::Value) -> Result<Json> {
    Ok(match value {
        sql::Value::Null => Json::Null,
        sql::Value::Bool(v) => Json::Bool(*v),
        sql::Value::I8(v) => Json::from(*v),
        sql::Value::I16(v) => Json::from(*v),
        sql::Value::I32(v) => Json::from(*v),
        sql::Value::I64(v) => Json::from(*v),
        sql::Value::U8(v) => Json::from(*v),
        sql::Value::U16(v) => Json::from(*v),
        sql::Value::U32(v) => Json::from(*v),
        sql::Value::U64(v) => Json::from(*v),
        sql::Value::F32(v) => float(f64::from(*v))?,
        sql::Value::F64(v) => float(*v)?,
        sql::Value::String(v) => Json::String(v.clone()),
        sql::Value::Bytes(v) => Json::Array(v.iter().map(|b| Json::from(*b)).collect()),
        sql::Value::Uuid(v) => Json::String(v.hyphenated().to_string()),
    })
}

fn float(v: f64) -> Result<Json> {
    Number::from_f64(v)
        .map(Json::Number)
        .ok_or_else(|| Error::value_conversion(format!("{v} cannot be represented in JSON")))
}
