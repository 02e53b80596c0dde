//! Read-modify-write of a user's group and role lists.
//!
//! The API has no add/remove endpoints for these relations; the full list is
//! sent back with a PATCH. Two reads and one write run without any locking,
//! so a concurrent change between the read and the write is lost.

use akc_client::models::PatchedUserRequest;
use akc_client::{ApiClient, Patch, Record, RecordExt};
use serde_json::Value;
use tracing::debug;

use crate::{CliError, CliResult};

use super::{require_record, Lookup};

/// List field on the user record being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationField {
    /// `groups`: group UUIDs.
    Groups,
    /// `roles`: role UUIDs.
    Roles,
}

impl RelationField {
    /// Field name on the user record.
    pub fn key(self) -> &'static str {
        match self {
            Self::Groups => "groups",
            Self::Roles => "roles",
        }
    }

    fn patch(self, list: Vec<Value>) -> PatchedUserRequest {
        let mut patch = PatchedUserRequest::default();
        match self {
            Self::Groups => patch.groups = Patch::Set(list),
            Self::Roles => patch.roles = Patch::Set(list),
        }
        patch
    }
}

/// Result of [`fetch_patch`].
#[derive(Debug)]
pub struct Patched {
    /// The user as fetched, before the write.
    pub user: Record,
    /// Whether a PATCH was sent.
    pub written: bool,
}

/// Fetches a user, applies `mutate` to one of its lists and writes the list
/// back when `mutate` reports a change.
pub async fn fetch_patch<F>(
    client: &ApiClient,
    user: &str,
    field: RelationField,
    mutate: F,
) -> CliResult<Patched>
where
    F: FnOnce(&mut Vec<Value>) -> bool,
{
    let record = require_record(client.users(), Lookup::user(user), "User", user).await?;
    let mut list = record.list(field.key());

    if !mutate(&mut list) {
        return Ok(Patched {
            user: record,
            written: false,
        });
    }

    let id = record.text("pk");
    debug!(user = %id, field = field.key(), len = list.len(), "writing relation list");
    client
        .users()
        .partial_update(&id, &field.patch(list))
        .await?;

    Ok(Patched {
        user: record,
        written: true,
    })
}

/// Appends `pk` unless already present.
pub fn insert(pk: Value) -> impl FnOnce(&mut Vec<Value>) -> bool {
    move |list| {
        if list.contains(&pk) {
            false
        } else {
            list.push(pk);
            true
        }
    }
}

/// Removes the first occurrence of `pk`, if any.
pub fn remove(pk: Value) -> impl FnOnce(&mut Vec<Value>) -> bool {
    move |list| match list.iter().position(|v| *v == pk) {
        Some(index) => {
            list.remove(index);
            true
        }
        None => false,
    }
}

/// Fetches a group or role and returns it with its primary key.
pub(crate) async fn fetch_target(
    client: &ApiClient,
    field: RelationField,
    raw: &str,
) -> CliResult<(Record, Value)> {
    let (endpoint, resource_type) = match field {
        RelationField::Groups => (client.groups(), "Group"),
        RelationField::Roles => (client.roles(), "Role"),
    };

    let record = require_record(endpoint, Lookup::uuid_or("name", raw), resource_type, raw).await?;
    let pk = record.pk().cloned().ok_or_else(|| CliError::NotFound {
        resource_type,
        id: raw.to_string(),
    })?;
    Ok((record, pk))
}
