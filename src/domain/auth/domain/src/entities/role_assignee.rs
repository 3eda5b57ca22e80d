// Copyright Datavault Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::PrivateUrlUser;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Subject a role can be granted to.
///
/// Identifier conventions: `@name` for registered users, `&alias` for
/// explicit groups, and the builtin `:` namespace for everything the system
/// defines itself (`:guest`, `:privateUrl<N>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleAssignee {
    PrivateUrl(PrivateUrlUser),
    User { name: String },
    Group { alias: String },
    Guest,
}

impl RoleAssignee {
    pub fn user(name: impl Into<String>) -> Self {
        Self::User { name: name.into() }
    }

    pub fn group(alias: impl Into<String>) -> Self {
        Self::Group {
            alias: alias.into(),
        }
    }

    pub fn identifier(&self) -> String {
        match self {
            Self::PrivateUrl(user) => user.identifier(),
            Self::User { name } => format!("@{name}"),
            Self::Group { alias } => format!("&{alias}"),
            Self::Guest => ":guest".to_string(),
        }
    }

    pub fn as_private_url_user(&self) -> Option<&PrivateUrlUser> {
        match self {
            Self::PrivateUrl(user) => Some(user),
            _ => None,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
