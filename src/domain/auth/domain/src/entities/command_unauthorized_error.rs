// Copyright Datavault Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::Permission;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Denial raised by the command-authorization layer.
///
/// Carries, per affected object identifier, the set of permissions the
/// failed command required. Iteration order of the map and the sets is
/// unspecified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("user is not authorized to execute command '{command_name}'")]
pub struct CommandUnauthorizedError {
    pub command_name: String,
    pub required_permissions: HashMap<String, HashSet<Permission>>,
}

impl CommandUnauthorizedError {
    pub fn new(
        command_name: impl Into<String>,
        required_permissions: HashMap<String, HashSet<Permission>>,
    ) -> Self {
        Self {
            command_name: command_name.into(),
            required_permissions,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
