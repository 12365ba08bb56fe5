use chrono::NaiveDate;
use common::model::job::{Job, JobId, JobStatus};
use common::requests::{JobDraft, JobEdit};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};

const COLUMNS: &str = "id, title, company, location, status, date_applied, notes, user_id";

fn job_from_row(row: &Row<'_>) -> Result<Job, rusqlite::Error> {
    let status: String = row.get(4)?;
    let status = status
        .parse::<JobStatus>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?;

    Ok(Job {
        id: row.get(0)?,
        title: row.get(1)?,
        company: row.get(2)?,
        location: row.get(3)?,
        status,
        date_applied: row.get(5)?,
        notes: row.get(6)?,
        user_id: row.get(7)?,
    })
}

/// All jobs owned by `user_id`, in insertion order. Display order is the
/// client's concern.
pub fn list_for_user(conn: &Connection, user_id: i64) -> Result<Vec<Job>, rusqlite::Error> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {COLUMNS} FROM jobs WHERE user_id = ?1 ORDER BY id"
    ))?;
    let jobs = stmt
        .query_map(params![user_id], job_from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(jobs)
}

pub fn find_for_user(
    conn: &Connection,
    id: JobId,
    user_id: i64,
) -> Result<Option<Job>, rusqlite::Error> {
    conn.query_row(
        &format!("SELECT {COLUMNS} FROM jobs WHERE id = ?1 AND user_id = ?2"),
        params![id, user_id],
        job_from_row,
    )
    .optional()
}

/// Persists a draft and returns the stored record. A draft without a date is
/// stamped with `today`.
pub fn insert(
    conn: &Connection,
    user_id: i64,
    draft: &JobDraft,
    today: NaiveDate,
) -> Result<Job, rusqlite::Error> {
    conn.execute(
        "INSERT INTO jobs (title, company, location, status, date_applied, notes, user_id)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            draft.title.trim(),
            draft.company.trim(),
            draft.location,
            draft.status.as_str(),
            draft.date_applied.unwrap_or(today),
            draft.notes,
            user_id,
        ],
    )?;
    let id = conn.last_insert_rowid();
    find_for_user(conn, id, user_id)?.ok_or(rusqlite::Error::QueryReturnedNoRows)
}

/// Applies a status/notes edit. `None` when the job does not exist or belongs
/// to someone else.
pub fn update_for_user(
    conn: &Connection,
    id: JobId,
    user_id: i64,
    edit: &JobEdit,
) -> Result<Option<Job>, rusqlite::Error> {
    let changed = conn.execute(
        "UPDATE jobs SET status = ?1, notes = ?2 WHERE id = ?3 AND user_id = ?4",
        params![edit.status.as_str(), edit.notes, id, user_id],
    )?;
    if changed == 0 {
        return Ok(None);
    }
    find_for_user(conn, id, user_id)
}

pub fn delete_for_user(conn: &Connection, id: JobId, user_id: i64) -> Result<bool, rusqlite::Error> {
    let deleted = conn.execute(
        "DELETE FROM jobs WHERE id = ?1 AND user_id = ?2",
        params![id, user_id],
    )?;
    Ok(deleted > 0)
}
