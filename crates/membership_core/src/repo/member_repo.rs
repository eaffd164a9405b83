//! Member repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Insert, fully replace, look up, search and aggregate `member` rows.
//! - Map rows to typed records and projections.
//!
//! # Invariants
//! - Insert and update bind the nine member columns in the same fixed order.
//! - Updates overwrite every column; there is no partial update.
//! - Optional columns round-trip as SQL NULL <-> `None`.

use crate::db::migrations::{current_user_version, latest_version};
use crate::db::DbError;
use crate::model::member::{
    Member, MemberFields, MemberId, MemberListing, MemberStats, MemberSummary,
};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const MEMBER_TABLE: &str = "member";

/// Columns every member store must expose, in bind order after `id`.
const MEMBER_COLUMNS: &[&str] = &[
    "id",
    "full_name",
    "first_name",
    "last_name",
    "address",
    "phone_number",
    "dob",
    "date_joined",
    "date_exit",
    "photo",
];

const MEMBER_SELECT_SQL: &str = "SELECT
    id,
    full_name,
    first_name,
    last_name,
    address,
    phone_number,
    dob,
    date_joined,
    date_exit,
    photo
FROM member";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for member persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Full update targeted an id that is not in the store.
    NotFound(MemberId),
    InvalidData(String),
    /// Connection was not bootstrapped through `open_db*`.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "member not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted member data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "member store is not initialized: schema version {actual_version}, expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "member store is missing table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "member store table `{table}` is missing column `{column}`")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for member records.
pub trait MemberRepository {
    /// Fetches one member by id; `Ok(None)` when no such id exists.
    fn get_member(&self, id: MemberId) -> RepoResult<Option<Member>>;
    /// Lists summaries whose full name contains `term`, or all of them when
    /// `term` is absent or empty.
    fn search_members(&self, term: Option<&str>) -> RepoResult<Vec<MemberSummary>>;
    /// Lists every member as a name/dates row.
    fn list_members(&self) -> RepoResult<Vec<MemberListing>>;
    /// Inserts when `id` is `None`, otherwise replaces every field of `id`.
    ///
    /// Returns the id of the written record.
    fn save_member(&self, fields: &MemberFields, id: Option<MemberId>) -> RepoResult<MemberId>;
    /// Returns the member count and the latest join date.
    fn member_stats(&self) -> RepoResult<MemberStats>;
}

/// SQLite-backed member repository borrowing the process-wide connection.
pub struct SqliteMemberRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteMemberRepository<'conn> {
    /// Constructs a repository over a connection returned by `open_db*`.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations were not applied.
    /// - `MissingRequiredTable`/`MissingRequiredColumn` when the schema is
    ///   not the member schema.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl MemberRepository for SqliteMemberRepository<'_> {
    fn get_member(&self, id: MemberId) -> RepoResult<Option<Member>> {
        let member = self
            .conn
            .query_row(
                &format!("{MEMBER_SELECT_SQL} WHERE id = ?1;"),
                [id],
                parse_member_row,
            )
            .optional()?;
        Ok(member)
    }

    fn search_members(&self, term: Option<&str>) -> RepoResult<Vec<MemberSummary>> {
        let term = term.filter(|value| !value.is_empty());

        let mut stmt = match term {
            Some(_) => self.conn.prepare(
                "SELECT id, full_name, first_name, last_name
                 FROM member
                 WHERE full_name LIKE ?1
                 ORDER BY id ASC;",
            )?,
            None => self.conn.prepare(
                "SELECT id, full_name, first_name, last_name
                 FROM member
                 ORDER BY id ASC;",
            )?,
        };

        let summaries = match term {
            Some(value) => stmt
                .query_map([format!("%{value}%")], parse_summary_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?,
            None => stmt
                .query_map([], parse_summary_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?,
        };

        Ok(summaries)
    }

    fn list_members(&self) -> RepoResult<Vec<MemberListing>> {
        let mut stmt = self.conn.prepare(
            "SELECT full_name, date_joined, date_exit
             FROM member
             ORDER BY id ASC;",
        )?;

        let listings = stmt
            .query_map([], |row| {
                Ok(MemberListing {
                    full_name: row.get("full_name")?,
                    date_joined: row.get("date_joined")?,
                    date_exit: row.get("date_exit")?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(listings)
    }

    fn save_member(&self, fields: &MemberFields, id: Option<MemberId>) -> RepoResult<MemberId> {
        match id {
            Some(id) => {
                let changed = self.conn.execute(
                    "UPDATE member
                     SET
                        full_name = ?1,
                        first_name = ?2,
                        last_name = ?3,
                        address = ?4,
                        phone_number = ?5,
                        dob = ?6,
                        date_joined = ?7,
                        date_exit = ?8,
                        photo = ?9
                     WHERE id = ?10;",
                    params![
                        fields.full_name.as_str(),
                        fields.first_name.as_str(),
                        fields.last_name.as_str(),
                        fields.address.as_str(),
                        fields.phone_number.as_str(),
                        fields.date_of_birth.as_str(),
                        fields.date_joined.as_str(),
                        fields.date_exit.as_deref(),
                        fields.photo.as_deref(),
                        id,
                    ],
                )?;

                if changed == 0 {
                    return Err(RepoError::NotFound(id));
                }
                Ok(id)
            }
            None => {
                self.conn.execute(
                    "INSERT INTO member (
                        full_name,
                        first_name,
                        last_name,
                        address,
                        phone_number,
                        dob,
                        date_joined,
                        date_exit,
                        photo
                    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9);",
                    params![
                        fields.full_name.as_str(),
                        fields.first_name.as_str(),
                        fields.last_name.as_str(),
                        fields.address.as_str(),
                        fields.phone_number.as_str(),
                        fields.date_of_birth.as_str(),
                        fields.date_joined.as_str(),
                        fields.date_exit.as_deref(),
                        fields.photo.as_deref(),
                    ],
                )?;
                Ok(self.conn.last_insert_rowid())
            }
        }
    }

    fn member_stats(&self) -> RepoResult<MemberStats> {
        let (count, last_join_date) = self.conn.query_row(
            "SELECT COUNT(*), MAX(date_joined) FROM member;",
            [],
            |row| Ok((row.get::<_, i64>(0)?, row.get::<_, Option<String>>(1)?)),
        )?;

        let count = u64::try_from(count).map_err(|_| {
            RepoError::InvalidData(format!("negative member count `{count}`"))
        })?;

        Ok(MemberStats {
            count,
            last_join_date,
        })
    }
}

fn parse_member_row(row: &Row<'_>) -> rusqlite::Result<Member> {
    Ok(Member {
        id: row.get("id")?,
        fields: MemberFields {
            full_name: row.get("full_name")?,
            first_name: row.get("first_name")?,
            last_name: row.get("last_name")?,
            address: row.get("address")?,
            phone_number: row.get("phone_number")?,
            date_of_birth: row.get("dob")?,
            date_joined: row.get("date_joined")?,
            date_exit: row.get("date_exit")?,
            photo: row.get("photo")?,
        },
    })
}

fn parse_summary_row(row: &Row<'_>) -> rusqlite::Result<MemberSummary> {
    Ok(MemberSummary {
        id: row.get("id")?,
        full_name: row.get("full_name")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
    })
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version = current_user_version(conn)?;
    if actual_version < expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let table_exists: bool = conn.query_row(
        "SELECT EXISTS(
            SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1
        );",
        [MEMBER_TABLE],
        |row| row.get(0),
    )?;
    if !table_exists {
        return Err(RepoError::MissingRequiredTable(MEMBER_TABLE));
    }

    let mut stmt = conn.prepare(&format!("PRAGMA table_info({MEMBER_TABLE});"))?;
    let present = stmt
        .query_map([], |row| row.get::<_, String>("name"))?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    if let Some(column) = MEMBER_COLUMNS
        .iter()
        .copied()
        .find(|column| !present.iter().any(|name| name.as_str() == *column))
    {
        return Err(RepoError::MissingRequiredColumn {
            table: MEMBER_TABLE,
            column,
        });
    }

    Ok(())
}
