// Copyright Datavault Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod command_unauthorized_error;
mod permission;
mod private_url_user;
mod role_assignee;
mod role_assignment;

pub use command_unauthorized_error::*;
pub use permission::*;
pub use private_url_user::*;
pub use role_assignee::*;
pub use role_assignment::*;
