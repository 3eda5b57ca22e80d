// Copyright Datavault Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::str::FromStr;

use datavault_auth::Permission;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_names_are_camel_case() {
    pretty_assertions::assert_eq!("ViewUnpublishedDataset", Permission::ViewUnpublishedDataset.name());
    pretty_assertions::assert_eq!("DownloadFile", Permission::DownloadFile.name());
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_parse_from_name() {
    assert_eq!(
        Ok(Permission::EditDataset),
        Permission::from_str("EditDataset")
    );
    assert!(Permission::from_str("edit_dataset").is_err());
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
