use membership_core::db::migrations::latest_version;
use membership_core::db::{open_db, open_db_in_memory, DbError};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_creates_member_table() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "member");
}

#[test]
fn member_table_marks_only_exit_date_and_photo_nullable() {
    let conn = open_db_in_memory().unwrap();

    let mut stmt = conn.prepare("PRAGMA table_info(member);").unwrap();
    let columns: Vec<(String, bool)> = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>("name")?,
                row.get::<_, i64>("notnull")? == 1,
            ))
        })
        .unwrap()
        .collect::<rusqlite::Result<_>>()
        .unwrap();

    let nullable: Vec<&str> = columns
        .iter()
        .filter(|(name, not_null)| !not_null && name != "id")
        .map(|(name, _)| name.as_str())
        .collect();
    assert_eq!(nullable, vec!["date_exit", "photo"]);
    assert_eq!(columns.len(), 10);
}

#[test]
fn reopening_file_store_keeps_existing_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("members.db");

    let conn = open_db(&path).unwrap();
    conn.execute(
        "INSERT INTO member (full_name, first_name, last_name, address, phone_number, dob, date_joined)
         VALUES ('Ada Byron', 'Ada', 'Byron', '12 St James Sq', '0207 946 0000', '1815-12-10', '2020-01-01');",
        [],
    )
    .unwrap();
    drop(conn);

    let conn = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn), latest_version());
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM member;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn store_created_before_version_tracking_is_adopted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE member (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            full_name TEXT NOT NULL,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            address TEXT NOT NULL,
            phone_number TEXT NOT NULL,
            dob TEXT NOT NULL,
            date_joined TEXT NOT NULL,
            date_exit TEXT,
            photo TEXT
        );
        INSERT INTO member (full_name, first_name, last_name, address, phone_number, dob, date_joined, date_exit, photo)
        VALUES ('Old Timer', 'Old', 'Timer', 'Main St', '5550000', '1950-01-01', '1999-09-09', NULL, '');",
    )
    .unwrap();
    drop(conn);

    let conn = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn), latest_version());
    let name: String = conn
        .query_row("SELECT full_name FROM member WHERE id = 1;", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(name, "Old Timer");
}

#[test]
fn opening_store_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
