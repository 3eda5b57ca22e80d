// Copyright Datavault Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::{DatasetVersion, GlobalId};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Internal surrogate id of a dataset.
///
/// This is the number a Private URL role assignee identifier embeds, e.g.
/// `:privateUrl42` for dataset 42.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatasetId(i64);

impl DatasetId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for DatasetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for DatasetId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// A dataset with its version history, newest version first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub id: DatasetId,
    pub global_id: GlobalId,
    versions: Vec<DatasetVersion>,
}

impl Dataset {
    pub fn new(
        id: DatasetId,
        global_id: GlobalId,
        versions: impl IntoIterator<Item = DatasetVersion>,
    ) -> Self {
        let mut versions: Vec<_> = versions.into_iter().collect();
        versions.sort_by(|a, b| b.number.cmp(&a.number));

        Self {
            id,
            global_id,
            versions,
        }
    }

    pub fn latest_version(&self) -> Option<&DatasetVersion> {
        self.versions.first()
    }

    pub fn versions(&self) -> &[DatasetVersion] {
        &self.versions
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::DatasetVersionState;

    #[test]
    fn latest_version_is_highest_number() {
        let t = Utc::now();
        let dataset = Dataset::new(
            DatasetId::new(1),
            GlobalId::unregistered(),
            [
                DatasetVersion::new(1, DatasetVersionState::Released, t),
                DatasetVersion::new(2, DatasetVersionState::Draft, t),
            ],
        );

        pretty_assertions::assert_eq!(Some(2), dataset.latest_version().map(|v| v.number));
    }

    #[test]
    fn latest_version_of_empty_history() {
        let dataset = Dataset::new(DatasetId::new(1), GlobalId::unregistered(), []);

        assert_eq!(None, dataset.latest_version());
    }

    #[test]
    fn dataset_id_round_trips_through_i64() {
        let id = DatasetId::from(42);
        pretty_assertions::assert_eq!(42, id.as_i64());
        pretty_assertions::assert_eq!(DatasetId::new(42), id);
        pretty_assertions::assert_eq!("42", id.to_string());
    }
}
