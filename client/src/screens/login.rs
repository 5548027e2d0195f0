//! Unified login screen with a student/staff toggle.

use contracts::{Audience, Role};

use crate::session::{LoginOutcome, SessionService};

/// Which profile the unified form authenticates. The staff tab goes
/// through the agent endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginTab {
    #[default]
    Student,
    Staff,
}

impl LoginTab {
    pub const ALL: [Self; 2] = [Self::Student, Self::Staff];

    pub fn next(self) -> Self {
        match self {
            Self::Student => Self::Staff,
            Self::Staff => Self::Student,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Student => "Élève",
            Self::Staff => "Personnel",
        }
    }

    pub fn audience(self) -> Audience {
        match self {
            Self::Student => Audience::Student,
            Self::Staff => Audience::Agent,
        }
    }
}

#[derive(Debug, Default)]
pub struct LoginScreen {
    pub tab: LoginTab,
    /// One-shot banner carried over from the previous screen, e.g. an
    /// expired-session notice from startup.
    pub notice: Option<&'static str>,
    pub error: Option<&'static str>,
}

impl LoginScreen {
    pub fn new(notice: Option<&'static str>) -> Self {
        Self {
            tab: LoginTab::default(),
            notice,
            error: None,
        }
    }

    /// Switching profile clears any previous submission error.
    pub fn toggle_tab(&mut self) {
        self.tab = self.tab.next();
        self.error = None;
    }

    pub fn render(&self) -> String {
        let mut out = String::from("=== Connexion à Melio ===\n");
        out.push_str(&format!(
            "Profil : [{}]  (:basculer pour changer)\n",
            self.tab.label()
        ));
        if let Some(notice) = self.notice {
            out.push('\n');
            out.push_str(notice);
            out.push('\n');
        }
        if let Some(error) = self.error {
            out.push('\n');
            out.push_str(error);
            out.push('\n');
        }
        out.push_str("\nSaisissez votre identifiant pour vous connecter.\n");
        out.push_str(
            "Commandes : :admin :agents :mentions :cgu :confidentialite :quitter\n",
        );
        out
    }

    /// Runs one login attempt. Returns the authenticated role on success
    /// so the caller can route to the matching surface.
    pub async fn submit(
        &mut self,
        service: &mut SessionService,
        identifier: &str,
        password: &str,
    ) -> Option<Role> {
        self.notice = None;
        match service.login(self.tab.audience(), identifier, password).await {
            LoginOutcome::LoggedIn(role) => {
                self.error = None;
                Some(role)
            }
            LoginOutcome::AlreadyPending => None,
            LoginOutcome::Rejected(message) => {
                self.error = Some(message);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_toggle_cycles_between_both_profiles() {
        let mut screen = LoginScreen::new(None);
        assert_eq!(screen.tab, LoginTab::Student);
        screen.toggle_tab();
        assert_eq!(screen.tab, LoginTab::Staff);
        screen.toggle_tab();
        assert_eq!(screen.tab, LoginTab::Student);
    }

    #[test]
    fn staff_tab_targets_the_agent_endpoint() {
        assert_eq!(LoginTab::Student.audience(), Audience::Student);
        assert_eq!(LoginTab::Staff.audience(), Audience::Agent);
    }

    #[test]
    fn toggling_clears_a_previous_error() {
        let mut screen = LoginScreen::new(None);
        screen.error = Some("Identifiant ou mot de passe incorrect.");
        screen.toggle_tab();
        assert!(screen.error.is_none());
    }

    #[test]
    fn render_shows_the_notice_and_the_active_tab() {
        let screen = LoginScreen::new(Some("Votre session a expiré. Veuillez vous reconnecter."));
        let rendered = screen.render();
        assert!(rendered.contains("[Élève]"));
        assert!(rendered.contains("session a expiré"));
    }
}
