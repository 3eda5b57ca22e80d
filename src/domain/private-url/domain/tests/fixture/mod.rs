// Copyright Datavault Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::{TimeZone, Utc};
use datavault_auth::RoleAssignment;
use datavault_datasets::{
    Dataset,
    DatasetId,
    DatasetVersion,
    DatasetVersionState,
    GlobalId,
};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub fn dataset(id: i64, global_id: GlobalId, latest_state: DatasetVersionState) -> Dataset {
    let t = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();

    Dataset::new(
        DatasetId::new(id),
        global_id,
        [
            DatasetVersion::new(1, DatasetVersionState::Released, t),
            DatasetVersion::new(2, latest_state, t),
        ],
    )
}

pub fn draft_dataset(id: i64) -> Dataset {
    dataset(
        id,
        GlobalId::new("doi", "10.5", "ABC123"),
        DatasetVersionState::Draft,
    )
}

pub fn private_url_assignment(dataset: Dataset) -> RoleAssignment {
    let t = Utc.with_ymd_and_hms(2026, 2, 1, 9, 30, 0).unwrap();

    RoleAssignment::for_private_url(dataset, t)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
