//! Schema migrations
//!
//! Each migration is a SQL file compiled into the binary. The highest
//! applied version lives in `PRAGMA user_version`, so opening an existing
//! database only runs what is missing.

use log::info;
use rusqlite::Connection;

use crate::domain::ports::{StoreError, StoreResult};

/// SQL scripts in apply order; script `n` upgrades the schema to version `n + 1`
const SCRIPTS: &[&str] = &[include_str!("0001_init.sql")];

/// Schema version this binary migrates to
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn latest_version() -> u32 {
    SCRIPTS.len() as u32
}

/// Bring the schema up to [`latest_version`]
///
/// Pending scripts run in one transaction. A database already written by a
/// newer binary is refused rather than touched.
pub fn apply_migrations(conn: &mut Connection) -> StoreResult<()> {
    let from = current_user_version(conn)?;
    let to = latest_version();

    if from > to {
        return Err(StoreError::UnsupportedSchemaVersion {
            db_version: from,
            latest_supported: to,
        });
    }
    if from == to {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for (version, sql) in (1..=to).zip(SCRIPTS).skip(from as usize) {
        tx.execute_batch(sql)?;
        tx.pragma_update(None, "user_version", version)?;
    }
    tx.commit()?;

    info!("event=db_migrate module=db status=ok from={from} to={to}");
    Ok(())
}

/// Schema version recorded in the database (0 for a fresh file)
pub fn current_user_version(conn: &Connection) -> StoreResult<u32> {
    Ok(conn.pragma_query_value(None, "user_version", |row| row.get(0))?)
}
