//! Catalog resource wrappers
//!
//! One wrapper per catalog entity type (panels, families, users), each
//! exposing one method per REST operation over the shared [`RestClient`].

use std::fmt;

pub mod families;
pub mod models;
pub mod panels;
pub mod users;

pub use families::{FamilyClient, FamilySearchParams};
pub use panels::{PanelClient, PanelSearchParams};
pub use users::UserClient;

/// How an ACL update is applied to the current permission set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AclAction {
    /// Replace the member's permissions with the given set.
    Set,
    /// Add the given permissions to the member's set.
    Add,
    /// Remove the given permissions from the member's set.
    Remove,
    /// Clear every permission for the member.
    Reset,
}

impl fmt::Display for AclAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AclAction::Set => write!(f, "SET"),
            AclAction::Add => write!(f, "ADD"),
            AclAction::Remove => write!(f, "REMOVE"),
            AclAction::Reset => write!(f, "RESET"),
        }
    }
}
