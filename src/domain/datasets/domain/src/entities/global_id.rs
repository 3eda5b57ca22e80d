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

/// Persistent identifier of a dataset, e.g. `doi:10.5/ABC123`.
///
/// All three components are optional because a dataset that was never
/// registered with an external resolver has none of them. Rendering an
/// incomplete identifier substitutes the literal string `null` for each
/// missing component, so a fully absent identifier displays as
/// `null:null/null`. Downstream code relies on that exact rendering when
/// deciding whether a link can be built, so it must not change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GlobalId {
    protocol: Option<String>,
    authority: Option<String>,
    identifier: Option<String>,
}

impl GlobalId {
    pub fn new(
        protocol: impl Into<String>,
        authority: impl Into<String>,
        identifier: impl Into<String>,
    ) -> Self {
        Self {
            protocol: Some(protocol.into()),
            authority: Some(authority.into()),
            identifier: Some(identifier.into()),
        }
    }

    /// An identifier with no components, rendering as `null:null/null`
    pub fn unregistered() -> Self {
        Self::default()
    }

    pub fn protocol(&self) -> Option<&str> {
        self.protocol.as_deref()
    }

    pub fn authority(&self) -> Option<&str> {
        self.authority.as_deref()
    }

    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    pub fn is_complete(&self) -> bool {
        self.protocol.is_some() && self.authority.is_some() && self.identifier.is_some()
    }

    /// Parses a `<protocol>:<authority>/<identifier>` string
    pub fn parse(s: &str) -> Result<Self, GlobalIdParseError> {
        let (protocol, rest) = s
            .split_once(':')
            .ok_or_else(|| GlobalIdParseError::new(s))?;
        let (authority, identifier) = rest
            .split_once('/')
            .ok_or_else(|| GlobalIdParseError::new(s))?;

        if protocol.is_empty() || authority.is_empty() || identifier.is_empty() {
            return Err(GlobalIdParseError::new(s));
        }

        Ok(Self::new(protocol, authority, identifier))
    }
}

impl std::fmt::Display for GlobalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const NULL: &str = "null";

        write!(
            f,
            "{}:{}/{}",
            self.protocol.as_deref().unwrap_or(NULL),
            self.authority.as_deref().unwrap_or(NULL),
            self.identifier.as_deref().unwrap_or(NULL),
        )
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid persistent identifier: '{value}'")]
pub struct GlobalIdParseError {
    pub value: String,
}

impl GlobalIdParseError {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_null_components() {
        pretty_assertions::assert_eq!("null:null/null", GlobalId::unregistered().to_string());
    }

    #[test]
    fn parse_rejects_partial_ids() {
        assert!(GlobalId::parse("doi").is_err());
        assert!(GlobalId::parse("doi:10.5").is_err());
        assert!(GlobalId::parse(":10.5/ABC123").is_err());
    }

    #[test]
    fn parse_display_round_trip() {
        let id = GlobalId::parse("doi:10.5/ABC123").unwrap();
        assert!(id.is_complete());
        pretty_assertions::assert_eq!("doi:10.5/ABC123", id.to_string());
    }

    #[test]
    fn exposes_components() {
        let id = GlobalId::parse("doi:10.5/ABC123").unwrap();
        pretty_assertions::assert_eq!(Some("doi"), id.protocol());
        pretty_assertions::assert_eq!(Some("10.5"), id.authority());
        pretty_assertions::assert_eq!(Some("ABC123"), id.identifier());

        assert_eq!(None, GlobalId::unregistered().protocol());
    }
}
