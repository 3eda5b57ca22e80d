// Copyright Datavault Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use datavault_datasets::DatasetId;
use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Namespace prefix of Private URL assignee identifiers.
///
/// The leading `:` marks the builtin namespace that is otherwise reserved
/// for the predefined assignees (`:guest` and friends). A Private URL user
/// differs from those in that its identifier varies with the dataset it is
/// tied to: `:privateUrl42` for dataset 42.
pub const PRIVATE_URL_USER_PREFIX: &str = ":privateUrl";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// The anonymous holder of a Private URL to a draft dataset version.
///
/// This value is never stored. It is constructed on demand, either from the
/// dataset a role assignment points at or by parsing the dataset id back out
/// of an identifier string.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrivateUrlUser {
    pub dataset_id: DatasetId,
}

impl PrivateUrlUser {
    pub fn new(dataset_id: DatasetId) -> Self {
        Self { dataset_id }
    }

    pub fn identifier(&self) -> String {
        format!("{PRIVATE_URL_USER_PREFIX}{}", self.dataset_id)
    }

    pub fn display_name(&self) -> &'static str {
        "Private URL Enabled"
    }
}

impl std::fmt::Display for PrivateUrlUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{PRIVATE_URL_USER_PREFIX}{}", self.dataset_id)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
