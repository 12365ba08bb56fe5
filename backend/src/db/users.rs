use rusqlite::{params, Connection, OptionalExtension};

#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
}

pub fn find_by_username(
    conn: &Connection,
    username: &str,
) -> Result<Option<UserRecord>, rusqlite::Error> {
    conn.query_row(
        "SELECT id, username, password_hash FROM users WHERE username = ?1",
        params![username],
        |row| {
            Ok(UserRecord {
                id: row.get(0)?,
                username: row.get(1)?,
                password_hash: row.get(2)?,
            })
        },
    )
    .optional()
}

/// Inserts a user and returns its id. Fails with a constraint violation when
/// the username is taken.
pub fn insert(conn: &Connection, username: &str, password_hash: &str) -> Result<i64, rusqlite::Error> {
    conn.execute(
        "INSERT INTO users (username, password_hash) VALUES (?1, ?2)",
        params![username, password_hash],
    )?;
    Ok(conn.last_insert_rowid())
}
