//! Colon-prefixed commands typed at any prompt.

use crate::screens::legal::LegalPage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    GoUnifiedLogin,
    GoAdminLogin,
    GoAgentLogin,
    ShowLegal(LegalPage),
    ToggleTab,
    Back,
    Logout,
    Quit,
}

/// Parses one input line. Anything that is not a known command is
/// regular screen input and comes back as `None`.
pub fn parse(line: &str) -> Option<Command> {
    match line.trim() {
        ":connexion" => Some(Command::GoUnifiedLogin),
        ":admin" => Some(Command::GoAdminLogin),
        ":agents" => Some(Command::GoAgentLogin),
        ":mentions" => Some(Command::ShowLegal(LegalPage::MentionsLegales)),
        ":cgu" => Some(Command::ShowLegal(LegalPage::Cgu)),
        ":confidentialite" | ":confidentialité" => {
            Some(Command::ShowLegal(LegalPage::Confidentialite))
        }
        ":basculer" => Some(Command::ToggleTab),
        ":retour" => Some(Command::Back),
        ":deconnexion" | ":déconnexion" => Some(Command::Logout),
        ":quitter" => Some(Command::Quit),
        _ => None,
    }
}
