//! Dedicated administrator login screen.

use contracts::{Audience, Role};

use crate::session::{LoginOutcome, SessionService};

#[derive(Debug, Default)]
pub struct AdminLoginScreen {
    pub error: Option<&'static str>,
}

impl AdminLoginScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&self) -> String {
        let mut out = String::from("=== Administration Melio ===\n");
        out.push_str("Accès réservé aux administrateurs de la plateforme.\n");
        if let Some(error) = self.error {
            out.push('\n');
            out.push_str(error);
            out.push('\n');
        }
        out.push_str("\nSaisissez votre identifiant pour vous connecter.\n");
        out.push_str("Commandes : :retour :quitter\n");
        out
    }

    pub async fn submit(
        &mut self,
        service: &mut SessionService,
        identifier: &str,
        password: &str,
    ) -> Option<Role> {
        match service.login(Audience::Admin, identifier, password).await {
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
