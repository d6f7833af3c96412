use launchpad_domain::{AppId, ApplicationRecord, NewApplication};
use rusqlite::types::Type;
use rusqlite::{params, Connection, Result, Row};

const SELECT_COLUMNS: &str = "SELECT id, picture, title, subtitle, cwd, command FROM applications";

pub fn insert_application(conn: &Connection, app: &NewApplication) -> Result<i64> {
    conn.execute(
        "INSERT INTO applications (picture, title, subtitle, cwd, command)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![app.picture, app.title, app.subtitle, app.cwd, app.command],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update_application(conn: &Connection, id: i64, app: &NewApplication) -> Result<usize> {
    conn.execute(
        "UPDATE applications
         SET picture = ?2, title = ?3, subtitle = ?4, cwd = ?5, command = ?6
         WHERE id = ?1",
        params![id, app.picture, app.title, app.subtitle, app.cwd, app.command],
    )
}

pub fn count_applications(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM applications", [], |row| row.get(0))
}

pub fn list_applications(
    conn: &Connection,
    offset: i64,
    limit: i64,
) -> Result<Vec<ApplicationRecord>> {
    let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} ORDER BY id ASC LIMIT ?1 OFFSET ?2"))?;
    let rows = stmt.query_map(params![limit, offset], application_from_row)?;
    rows.collect()
}

pub fn find_application_by_id(conn: &Connection, id: i64) -> Result<Option<ApplicationRecord>> {
    let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} WHERE id = ?1"))?;
    let mut rows = stmt.query(params![id])?;
    if let Some(row) = rows.next()? {
        return Ok(Some(application_from_row(row)?));
    }
    Ok(None)
}

fn application_from_row(row: &Row<'_>) -> Result<ApplicationRecord> {
    let id_value: i64 = row.get(0)?;
    let id = AppId::new(id_value).map_err(|error| {
        rusqlite::Error::FromSqlConversionFailure(0, Type::Integer, Box::new(error))
    })?;
    Ok(ApplicationRecord {
        id,
        picture: row.get(1)?,
        title: row.get(2)?,
        subtitle: row.get(3)?,
        cwd: row.get(4)?,
        command: row.get(5)?,
    })
}
