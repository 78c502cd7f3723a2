use rusqlite::{functions::FunctionFlags, Connection, Error as SqlError};

use crate::io::wkb::wkb_kind;

/// Register `ST_GeometryType(geom)`, returning the upper-case WKB type name
/// (`LINESTRING`, `MULTIPOLYGON`, ...) of a geometry blob. Non-blob or
/// unreadable input raises an SQL error, so a `CHECK` using it rejects the row.
pub(super) fn register_spatial_functions(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        "ST_GeometryType",
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC | FunctionFlags::SQLITE_INNOCUOUS,
        |ctx| {
            let blob = ctx.get_raw(0).as_blob()
                .map_err(|e| SqlError::UserFunctionError(e.into()))?;
            let kind = wkb_kind(blob)
                .map_err(|e| SqlError::UserFunctionError(e.into()))?;
            Ok(kind.as_str())
        },
    )
}
