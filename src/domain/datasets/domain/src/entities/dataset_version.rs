// Copyright Datavault Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    Serialize,
    Deserialize,
)]
pub enum DatasetVersionState {
    Draft,
    Released,
    Deaccessioned,
    Archived,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// One version of a dataset's metadata and files.
///
/// A dataset has at most one unreleased version at any time, and when it
/// exists it is always the latest one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetVersion {
    pub number: u64,
    pub state: DatasetVersionState,
    pub created_at: DateTime<Utc>,
}

impl DatasetVersion {
    pub fn new(number: u64, state: DatasetVersionState, created_at: DateTime<Utc>) -> Self {
        Self {
            number,
            state,
            created_at,
        }
    }

    pub fn is_draft(&self) -> bool {
        self.state == DatasetVersionState::Draft
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
