//! Viewer role and identity context

use serde::{Deserialize, Serialize};

/// Which side of the marketplace the viewer is acting as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    /// The service-providing party; owns availability windows.
    Fixer,
    /// The service-seeking party; initiates bookings.
    Requester,
}

/// The viewer's role plus the identities relevant to slot ownership.
///
/// Supplied by an external collaborator and re-read on every derivation;
/// the engine treats it as read-only ambient input. A `role` of `None`
/// means the collaborator could not resolve a role, in which case every
/// click dispatches to a no-op rather than guessing a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleContext {
    /// Resolved viewer role, if any.
    pub role: Option<Role>,
    /// The fixer whose calendar is being viewed.
    pub fixer_id: String,
    /// The viewer's requester identity, when acting as a requester.
    pub requester_id: Option<String>,
}

impl RoleContext {
    /// Context for a fixer viewing their own calendar.
    pub fn fixer(fixer_id: impl Into<String>) -> Self {
        Self { role: Some(Role::Fixer), fixer_id: fixer_id.into(), requester_id: None }
    }

    /// Context for a requester viewing a fixer's calendar.
    pub fn requester(fixer_id: impl Into<String>, requester_id: impl Into<String>) -> Self {
        Self {
            role: Some(Role::Requester),
            fixer_id: fixer_id.into(),
            requester_id: Some(requester_id.into()),
        }
    }

    /// Whether the viewer is acting as the fixer.
    pub fn is_fixer(&self) -> bool {
        self.role == Some(Role::Fixer)
    }

    /// Whether the viewer is acting as a requester.
    pub fn is_requester(&self) -> bool {
        self.role == Some(Role::Requester)
    }

    /// The viewer's requester id, if acting as a requester.
    pub fn viewer_requester(&self) -> Option<&str> {
        if self.is_requester() {
            self.requester_id.as_deref()
        } else {
            None
        }
    }
}
