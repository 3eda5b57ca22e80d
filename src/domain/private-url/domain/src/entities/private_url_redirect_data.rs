// Copyright Datavault Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use datavault_auth::PrivateUrlUser;
use serde::{Deserialize, Serialize};
use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Where a visitor following a Private URL ends up: authenticated as the
/// anonymous assignee, redirected to the draft dataset page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateUrlRedirectData {
    pub private_url_user: PrivateUrlUser,
    pub draft_dataset_page_to_be_redirected_to: String,
}

impl PrivateUrlRedirectData {
    /// Validated constructor naming the precondition that failed, so the
    /// caller can log something more useful than a catch-all
    pub fn new(
        private_url_user: Option<PrivateUrlUser>,
        draft_dataset_page_to_be_redirected_to: Option<String>,
    ) -> Result<Self, RedirectDataError> {
        let Some(private_url_user) = private_url_user else {
            return Err(RedirectDataError::MissingPrivateUrlUser);
        };
        let Some(draft_dataset_page_to_be_redirected_to) = draft_dataset_page_to_be_redirected_to
        else {
            return Err(RedirectDataError::MissingRedirectPage);
        };

        Ok(Self {
            private_url_user,
            draft_dataset_page_to_be_redirected_to,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RedirectDataError {
    #[error("a PrivateUrlUser is required")]
    MissingPrivateUrlUser,

    #[error("a draft dataset page to be redirected to is required")]
    MissingRedirectPage,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
