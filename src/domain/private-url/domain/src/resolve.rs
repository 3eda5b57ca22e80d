// Copyright Datavault Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use datavault_auth::{
    CommandUnauthorizedError,
    PRIVATE_URL_USER_PREFIX,
    PrivateUrlUser,
    RoleAssignee,
    RoleAssignment,
};
use datavault_datasets::{Dataset, DatasetId, DatasetVersion};

use crate::{PrivateUrl, PrivateUrlRedirectData};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Returned when no draft dataset page can be linked to, either because
/// there is no draft or because the dataset's persistent identifier is
/// unusable
pub const UNKNOWN_DRAFT_PAGE: &str = "UNKNOWN";

/// Rendering of a fully absent [`datavault_datasets::GlobalId`]. Kept as a
/// string comparison for compatibility with links already in the wild; do
/// not build new logic on top of it.
const DEGENERATE_GLOBAL_ID: &str = "null:null/null";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// A draft dataset version together with the dataset it belongs to
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DraftVersion<'a> {
    pub dataset: &'a Dataset,
    pub version: &'a DatasetVersion,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Resolves a role assignee identifier string to the anonymous Private URL
/// assignee it denotes.
///
/// The identifier is expected to contain [`PRIVATE_URL_USER_PREFIX`]
/// followed by a dataset id, `:privateUrl42` for example. The number is all
/// there is to associate the identifier with a dataset; with the role
/// assignment itself in hand, use
/// [`private_url_user_from_role_assignment`] instead.
pub fn identifier_to_role_assignee(identifier: &str) -> Option<RoleAssignee> {
    let Some((_, suffix)) = identifier.split_once(PRIVATE_URL_USER_PREFIX) else {
        tracing::debug!(identifier, "Could not find a dataset id in identifier");
        return None;
    };

    match suffix.parse::<i64>() {
        Ok(dataset_id) => Some(RoleAssignee::PrivateUrl(PrivateUrlUser::new(
            DatasetId::new(dataset_id),
        ))),
        Err(error) => {
            tracing::debug!(identifier, %error, "Could not find a dataset id in identifier");
            None
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// The dataset a role assignment is defined on, if its definition point is
/// a dataset at all
pub fn dataset_from_role_assignment(
    role_assignment: Option<&RoleAssignment>,
) -> Option<&Dataset> {
    role_assignment?.definition_point.as_ref()?.as_dataset()
}

/// The latest version of the assignment's dataset, only when that version
/// is a draft
pub fn draft_version_from_role_assignment(
    role_assignment: Option<&RoleAssignment>,
) -> Option<DraftVersion<'_>> {
    let dataset = dataset_from_role_assignment(role_assignment)?;

    if let Some(version) = dataset.latest_version()
        && version.is_draft()
    {
        return Some(DraftVersion { dataset, version });
    }

    tracing::debug!(dataset_id = %dataset.id, "Couldn't find a draft version, returning nothing");
    None
}

/// Derives the anonymous Private URL assignee from the assignment's dataset,
/// regardless of who the assignment's declared assignee is
pub fn private_url_user_from_role_assignment(
    role_assignment: Option<&RoleAssignment>,
) -> Option<PrivateUrlUser> {
    let dataset = dataset_from_role_assignment(role_assignment)?;
    Some(PrivateUrlUser::new(dataset.id))
}

/// Type-narrowing shortcut for when the assignee is already known: returns
/// it only if it actually is a Private URL user
pub fn private_url_user_from_assignee(
    role_assignment: Option<&RoleAssignment>,
    role_assignee: &RoleAssignee,
) -> Option<PrivateUrlUser> {
    role_assignment?;
    role_assignee.as_private_url_user().copied()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Relative URL of the assignment's draft dataset page, or
/// [`UNKNOWN_DRAFT_PAGE`]
pub fn draft_dataset_page_from_role_assignment(
    role_assignment: Option<&RoleAssignment>,
) -> String {
    draft_url(draft_version_from_role_assignment(role_assignment))
}

/// Relative URL of a draft's dataset page, or [`UNKNOWN_DRAFT_PAGE`]
pub fn draft_url(draft: Option<DraftVersion<'_>>) -> String {
    let Some(draft) = draft else {
        return UNKNOWN_DRAFT_PAGE.to_string();
    };

    let persistent_id = draft.dataset.global_id.to_string();
    if persistent_id == DEGENERATE_GLOBAL_ID {
        return UNKNOWN_DRAFT_PAGE.to_string();
    }

    format!("/dataset.xhtml?persistentId={persistent_id}&version=DRAFT")
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Assembles assignee and draft page URL into redirect data. Construction
/// failures are logged and suppressed; the UI treats an absent result as
/// "this Private URL goes nowhere".
pub fn redirect_data_from_role_assignment(
    role_assignment: Option<&RoleAssignment>,
) -> Option<PrivateUrlRedirectData> {
    let private_url_user = private_url_user_from_role_assignment(role_assignment);
    let draft_dataset_page = draft_dataset_page_from_role_assignment(role_assignment);

    match PrivateUrlRedirectData::new(private_url_user, Some(draft_dataset_page)) {
        Ok(redirect_data) => Some(redirect_data),
        Err(error) => {
            tracing::info!(%error, "Failed to assemble private url redirect data");
            None
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// The full Private URL descriptor for an assignment, requiring the site
/// base URL, a dataset definition point, and a token on the assignment
pub fn private_url_from_role_assignment(
    role_assignment: Option<&RoleAssignment>,
    site_url: Option<&str>,
) -> Option<PrivateUrl> {
    let Some(site_url) = site_url else {
        tracing::info!("Site URL is not configured, cannot construct a private url");
        return None;
    };

    let role_assignment = role_assignment?;
    let dataset = dataset_from_role_assignment(Some(role_assignment))?;

    let Some(token) = role_assignment.private_url_token else {
        tracing::info!(
            assignee = %role_assignment.assignee.identifier(),
            "Role assignment carries no token, cannot construct a private url",
        );
        return None;
    };

    Some(PrivateUrl::new(
        role_assignment.clone(),
        dataset.clone(),
        site_url,
        token,
    ))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Flattens a command denial into the CamelCase names of all permissions it
/// required, across all affected objects. Order is unspecified.
pub fn required_permissions(error: &CommandUnauthorizedError) -> Vec<String> {
    error
        .required_permissions
        .values()
        .flat_map(|permissions| permissions.iter().map(|permission| permission.name()))
        .collect()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
