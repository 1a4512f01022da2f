use std::fmt::{Display, Formatter};

use crate::permissions::Role;

/// A label that can only be changed through bot commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProtectedLabel {
    /// Set with `/lgtm` by a reviewer.
    Lgtm,
    /// Set with `/approve` by an approver.
    Approved,
    /// Set with `/hold` by an approver, blocks merging.
    Hold,
}

impl ProtectedLabel {
    pub const ALL: [ProtectedLabel; 3] = [Self::Lgtm, Self::Approved, Self::Hold];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Lgtm => "lgtm",
            Self::Approved => "approved",
            Self::Hold => "hold",
        }
    }

    /// Returns `None` for labels that are not protected.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|label| label.name() == name)
    }

    /// Role that a user needs to change this label.
    pub fn required_role(&self) -> Role {
        match self {
            Self::Lgtm => Role::Reviewer,
            Self::Approved | Self::Hold => Role::Approver,
        }
    }
}

impl Display for ProtectedLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LabelModification {
    Add(ProtectedLabel),
    Remove(ProtectedLabel),
}
