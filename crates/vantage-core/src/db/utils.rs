//! Row decoding and shared statements.

use std::{fmt::Display, str::FromStr};

use jiff::Timestamp;
use rusqlite::{Row, Transaction, params, types::Type};

use crate::error::{DatabaseResultExt, Result};

const TOUCH_PROJECT_SQL: &str = "UPDATE projects SET updated_at = ?1 WHERE id = ?2";
const TOUCH_PROJECT_BY_MILESTONE_SQL: &str =
    "UPDATE projects SET updated_at = ?1 WHERE id = (SELECT project_id FROM milestones WHERE id = ?2)";

/// Reads a text column and parses it, turning parse failures into a
/// conversion error for that column.
pub(super) fn parse_column<T>(row: &Row<'_>, idx: usize) -> rusqlite::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw: String = row.get(idx)?;
    raw.parse::<T>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            Type::Text,
            format!("Invalid value '{raw}': {e}").into(),
        )
    })
}

/// Same as [`parse_column`] for nullable columns.
pub(super) fn parse_optional_column<T>(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    let raw: Option<String> = row.get(idx)?;
    raw.map(|raw| {
        raw.parse::<T>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                idx,
                Type::Text,
                format!("Invalid value '{raw}': {e}").into(),
            )
        })
    })
    .transpose()
}

/// Reads an integer id column.
pub(super) fn id_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<u64> {
    let raw: i64 = row.get(idx)?;
    u64::try_from(raw).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, Type::Integer, Box::new(e))
    })
}

/// Records activity on a project.
pub(super) fn touch_project(tx: &Transaction<'_>, project_id: u64, now: Timestamp) -> Result<()> {
    tx.execute(TOUCH_PROJECT_SQL, params![now.to_string(), project_id as i64])
        .db_context("Failed to update project timestamp")?;
    Ok(())
}

/// Records activity on the project owning `milestone_id`.
pub(super) fn touch_project_of(
    tx: &Transaction<'_>,
    milestone_id: u64,
    now: Timestamp,
) -> Result<()> {
    tx.execute(
        TOUCH_PROJECT_BY_MILESTONE_SQL,
        params![now.to_string(), milestone_id as i64],
    )
    .db_context("Failed to update project timestamp")?;
    Ok(())
}
