use agency_core_api::AgentCode;
use heapless::String as HeaplessString;
use sqlx::{postgres::PgRow, Row};
use std::error::Error;
use std::str::FromStr;

/// Conversion of a database row into a model
pub trait TryFromRow<R>: Sized {
    fn try_from_row(row: &R) -> Result<Self, Box<dyn Error + Send + Sync>>;
}

/// Reads a bounded text column, failing when the value exceeds `N` bytes
pub fn get_heapless_string<const N: usize>(
    row: &PgRow,
    col_name: &str,
) -> Result<HeaplessString<N>, Box<dyn Error + Send + Sync>> {
    let s: &str = row.try_get(col_name)?;
    HeaplessString::from_str(s)
        .map_err(|_| format!("Value for column '{col_name}' is too long (max {N} bytes)").into())
}

/// Nullable variant of [`get_heapless_string`]
pub fn get_optional_heapless_string<const N: usize>(
    row: &PgRow,
    col_name: &str,
) -> Result<Option<HeaplessString<N>>, Box<dyn Error + Send + Sync>> {
    let s: Option<&str> = row.try_get(col_name)?;
    s.map(HeaplessString::from_str)
        .transpose()
        .map_err(|_| format!("Value for column '{col_name}' is too long (max {N} bytes)").into())
}

/// Reads and validates an agent code column
pub fn get_agent_code(row: &PgRow, col_name: &str) -> Result<AgentCode, Box<dyn Error + Send + Sync>> {
    let s: &str = row.try_get(col_name)?;
    Ok(AgentCode::parse(s)?)
}

/// Reads a SMALLINT hierarchy level
pub fn get_level(row: &PgRow, col_name: &str) -> Result<u8, Box<dyn Error + Send + Sync>> {
    let level: i16 = row.try_get(col_name)?;
    u8::try_from(level)
        .map_err(|_| format!("Value for column '{col_name}' is not a valid level: {level}").into())
}
