// Copyright Datavault Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use datavault_auth::RoleAssignment;
use datavault_datasets::Dataset;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Everything the UI needs to present a Private URL to the dataset owner:
/// the backing role assignment, the dataset it grants access to, and the
/// shareable absolute link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateUrl {
    pub token: Uuid,
    pub link: String,
    pub dataset: Dataset,
    pub role_assignment: RoleAssignment,
}

impl PrivateUrl {
    pub fn new(
        role_assignment: RoleAssignment,
        dataset: Dataset,
        site_url: &str,
        token: Uuid,
    ) -> Self {
        let link = format!("{site_url}/privateurl.xhtml?token={token}");

        Self {
            token,
            link,
            dataset,
            role_assignment,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
