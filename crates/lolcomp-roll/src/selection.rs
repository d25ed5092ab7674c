//! Selection state: the set of currently toggled role filters.

use std::collections::BTreeSet;

use lolcomp_types::Role;

/// Toggled role filters. Order-irrelevant, starts empty, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    roles: BTreeSet<Role>,
}

impl Selection {
    /// Empty selection (no filters active).
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip one role in or out of the selection.
    pub fn toggle(&mut self, role: Role) {
        if !self.roles.remove(&role) {
            self.roles.insert(role);
        }
    }

    pub fn contains(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// True when every role is toggled, which filters nothing out.
    pub fn covers_all_roles(&self) -> bool {
        self.roles.len() == Role::ALL.len()
    }

    /// Selected roles in canonical order.
    pub fn roles(&self) -> Vec<Role> {
        self.roles.iter().copied().collect()
    }
}

impl FromIterator<Role> for Selection {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        Self {
            roles: iter.into_iter().collect(),
        }
    }
}
