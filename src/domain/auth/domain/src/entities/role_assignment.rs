// Copyright Datavault Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::{DateTime, Utc};
use datavault_datasets::Dataset;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{PrivateUrlUser, RoleAssignee};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Domain object a role assignment applies to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefinitionPoint {
    Dataset(Dataset),
    Collection { alias: String },
    File { id: i64 },
}

impl DefinitionPoint {
    pub fn as_dataset(&self) -> Option<&Dataset> {
        match self {
            Self::Dataset(dataset) => Some(dataset),
            _ => None,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Grant of a role to an assignee on a definition point.
///
/// The `private_url_token` is only present on assignments that back a
/// Private URL. The token is the secret part of the shareable link, the
/// assignee is the anonymous user the token authenticates as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub assignee: RoleAssignee,
    pub role: String,
    pub definition_point: Option<DefinitionPoint>,
    pub private_url_token: Option<Uuid>,
    pub assigned_at: DateTime<Utc>,
}

impl RoleAssignment {
    pub fn new(
        assignee: RoleAssignee,
        role: impl Into<String>,
        definition_point: Option<DefinitionPoint>,
        assigned_at: DateTime<Utc>,
    ) -> Self {
        Self {
            assignee,
            role: role.into(),
            definition_point,
            private_url_token: None,
            assigned_at,
        }
    }

    /// The assignment backing a Private URL: an anonymous member of the
    /// dataset, with a freshly minted token
    pub fn for_private_url(dataset: Dataset, assigned_at: DateTime<Utc>) -> Self {
        let assignee = RoleAssignee::PrivateUrl(PrivateUrlUser::new(dataset.id));

        Self {
            assignee,
            role: "member".to_string(),
            definition_point: Some(DefinitionPoint::Dataset(dataset)),
            private_url_token: Some(Uuid::new_v4()),
            assigned_at,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
