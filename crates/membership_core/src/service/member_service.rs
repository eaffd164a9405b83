//! Member use-case service.
//!
//! # Responsibility
//! - Expose member lookups, search, listing and stats to presentation code.
//! - Convert store write failures into a `SaveOutcome` instead of an error.
//! - Run validation before any write requested through `submit_member`.
//!
//! # Invariants
//! - `save_member` and `submit_member` never return `Err` and never panic.
//! - Nothing is persisted while validation reports an error.
//! - Log events carry member ids only, never personal fields.

use crate::model::member::{
    Member, MemberFields, MemberId, MemberListing, MemberStats, MemberSummary,
};
use crate::model::validation::{validate_member, MemberFieldError};
use crate::repo::member_repo::{MemberRepository, RepoResult};
use log::{error, info};

/// Result envelope for one save request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    /// Whether the record was written.
    pub ok: bool,
    /// Id of the written record on success.
    pub member_id: Option<MemberId>,
    /// Human-readable result; carries the store error message on failure.
    pub message: String,
}

impl SaveOutcome {
    fn success(member_id: MemberId) -> Self {
        Self {
            ok: true,
            member_id: Some(member_id),
            message: "Member saved successfully".to_string(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            member_id: None,
            message: message.into(),
        }
    }
}

/// Result of the validate-then-save form flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; every violated rule is listed and nothing was written.
    Rejected(Vec<MemberFieldError>),
    /// Validation passed and the save was attempted.
    Saved(SaveOutcome),
}

impl SubmitOutcome {
    /// Returns whether the record ended up persisted.
    pub fn is_persisted(&self) -> bool {
        matches!(self, Self::Saved(outcome) if outcome.ok)
    }
}

/// Member service facade over a repository implementation.
pub struct MemberService<R: MemberRepository> {
    repo: R,
}

impl<R: MemberRepository> MemberService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Gets one member by id; `Ok(None)` for unknown ids.
    pub fn get_member(&self, id: MemberId) -> RepoResult<Option<Member>> {
        self.repo.get_member(id)
    }

    /// Searches member summaries by full-name substring.
    ///
    /// A `None` or empty term lists every member.
    pub fn search_members(&self, term: Option<&str>) -> RepoResult<Vec<MemberSummary>> {
        self.repo.search_members(term)
    }

    /// Lists every member with join/exit dates.
    pub fn list_members(&self) -> RepoResult<Vec<MemberListing>> {
        self.repo.list_members()
    }

    /// Returns member count and latest join date.
    pub fn member_stats(&self) -> RepoResult<MemberStats> {
        self.repo.member_stats()
    }

    /// Inserts (`id = None`) or fully replaces (`id = Some`) a member.
    ///
    /// Store failures are reported through the returned outcome and the log,
    /// never as an error.
    pub fn save_member(&self, fields: &MemberFields, id: Option<MemberId>) -> SaveOutcome {
        let mode = if id.is_some() { "update" } else { "insert" };
        match self.repo.save_member(fields, id) {
            Ok(member_id) => {
                info!("event=member_save module=service status=ok mode={mode} member_id={member_id}");
                SaveOutcome::success(member_id)
            }
            Err(err) => {
                error!("event=member_save module=service status=error mode={mode} error={err}");
                SaveOutcome::failure(err.to_string())
            }
        }
    }

    /// Validates `fields` and saves them only when every rule passes.
    pub fn submit_member(&self, fields: &MemberFields, id: Option<MemberId>) -> SubmitOutcome {
        let errors = validate_member(fields);
        if !errors.is_empty() {
            info!(
                "event=member_submit module=service status=rejected error_count={}",
                errors.len()
            );
            return SubmitOutcome::Rejected(errors);
        }

        SubmitOutcome::Saved(self.save_member(fields, id))
    }
}
