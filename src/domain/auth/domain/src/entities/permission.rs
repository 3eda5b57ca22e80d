// Copyright Datavault Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Actions the authorization layer can require on a domain object.
///
/// The `Display` names are the CamelCase wire names, not human-readable
/// labels.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    Serialize,
    Deserialize,
)]
pub enum Permission {
    AddCollection,
    AddDataset,
    ViewUnpublishedCollection,
    ViewUnpublishedDataset,
    DownloadFile,
    EditCollection,
    EditDataset,
    ManageCollectionPermissions,
    ManageDatasetPermissions,
    ManageFilePermissions,
    PublishCollection,
    PublishDataset,
    DeleteCollection,
    DeleteDatasetDraft,
}

impl Permission {
    pub fn name(&self) -> String {
        self.to_string()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
