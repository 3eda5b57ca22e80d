// Copyright Datavault Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use datavault_auth::PrivateUrlUser;
use datavault_datasets::{DatasetId, DatasetVersionState, GlobalId};
use datavault_private_url::{
    DraftVersion,
    UNKNOWN_DRAFT_PAGE,
    draft_dataset_page_from_role_assignment,
    draft_url,
    redirect_data_from_role_assignment,
};

mod fixture;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_draft_url_with_complete_persistent_id() {
    let dataset = fixture::draft_dataset(42);
    let draft = DraftVersion {
        dataset: &dataset,
        version: dataset.latest_version().unwrap(),
    };

    pretty_assertions::assert_eq!(
        "/dataset.xhtml?persistentId=doi:10.5/ABC123&version=DRAFT",
        draft_url(Some(draft)),
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_draft_url_with_degenerate_persistent_id() {
    let dataset = fixture::dataset(42, GlobalId::unregistered(), DatasetVersionState::Draft);
    assert_eq!("null:null/null", dataset.global_id.to_string());

    let draft = DraftVersion {
        dataset: &dataset,
        version: dataset.latest_version().unwrap(),
    };

    pretty_assertions::assert_eq!(UNKNOWN_DRAFT_PAGE, draft_url(Some(draft)));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_draft_url_without_draft() {
    pretty_assertions::assert_eq!(UNKNOWN_DRAFT_PAGE, draft_url(None));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_draft_page_from_assignment_without_draft() {
    let released = fixture::private_url_assignment(fixture::dataset(
        42,
        GlobalId::new("doi", "10.5", "ABC123"),
        DatasetVersionState::Released,
    ));

    pretty_assertions::assert_eq!(
        UNKNOWN_DRAFT_PAGE,
        draft_dataset_page_from_role_assignment(Some(&released)),
    );
    pretty_assertions::assert_eq!(
        UNKNOWN_DRAFT_PAGE,
        draft_dataset_page_from_role_assignment(None),
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_redirect_data_for_complete_assignment() {
    let assignment = fixture::private_url_assignment(fixture::draft_dataset(42));

    let redirect_data = redirect_data_from_role_assignment(Some(&assignment)).unwrap();

    pretty_assertions::assert_eq!(
        PrivateUrlUser::new(DatasetId::new(42)),
        redirect_data.private_url_user,
    );
    pretty_assertions::assert_eq!(
        "/dataset.xhtml?persistentId=doi:10.5/ABC123&version=DRAFT",
        redirect_data.draft_dataset_page_to_be_redirected_to,
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_redirect_data_is_suppressed_without_assignment() {
    assert!(redirect_data_from_role_assignment(None).is_none());
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_redirect_data_still_assembles_without_draft() {
    // No draft is not a construction failure: the page degrades to the
    // sentinel while the assignee is still derived from the dataset
    let released = fixture::private_url_assignment(fixture::dataset(
        42,
        GlobalId::new("doi", "10.5", "ABC123"),
        DatasetVersionState::Released,
    ));

    let redirect_data = redirect_data_from_role_assignment(Some(&released)).unwrap();

    pretty_assertions::assert_eq!(
        UNKNOWN_DRAFT_PAGE,
        redirect_data.draft_dataset_page_to_be_redirected_to,
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
