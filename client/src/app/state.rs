//! Top-level screen state.

use contracts::Role;

use crate::screens::legal::LegalPage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppScreen {
    /// Startup splash while the persisted session is checked.
    #[default]
    Loading,
    Login,
    AdminLogin,
    AgentLogin,
    Legal(LegalPage),
    StudentHome,
    StaffDashboard,
    AdminDashboard,
}

impl AppScreen {
    /// Surface a freshly authenticated role lands on.
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Student => Self::StudentHome,
            Role::Staff => Self::StaffDashboard,
            Role::Admin => Self::AdminDashboard,
        }
    }

    /// Screens that must never be shown without an authenticated session.
    pub fn requires_session(self) -> bool {
        matches!(
            self,
            Self::StudentHome | Self::StaffDashboard | Self::AdminDashboard
        )
    }
}
