//! Legacy agent login screen. Kept for bookmarked entrances while the
//! unified screen takes over.

use contracts::{Audience, Role};

use crate::session::{LoginOutcome, SessionService};

#[derive(Debug, Default)]
pub struct AgentLoginScreen {
    pub error: Option<&'static str>,
}

impl AgentLoginScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&self) -> String {
        let mut out = String::from("=== Espace agents ===\n");
        out.push_str(
            "Cet accès est conservé pour compatibilité. Préférez la connexion\n\
             unifiée (:connexion) avec le profil Personnel.\n",
        );
        if let Some(error) = self.error {
            out.push('\n');
            out.push_str(error);
            out.push('\n');
        }
        out.push_str("\nSaisissez votre identifiant pour vous connecter.\n");
        out.push_str("Commandes : :connexion :retour :quitter\n");
        out
    }

    pub async fn submit(
        &mut self,
        service: &mut SessionService,
        identifier: &str,
        password: &str,
    ) -> Option<Role> {
        match service.login(Audience::Agent, identifier, password).await {
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
