//! User-facing French strings for authentication failures.
//!
//! The API's own error bodies are never shown to users; only the status
//! class of a failure picks the message.

use crate::api::gateway::GatewayError;

pub const INVALID_CREDENTIALS_FR: &str = "Identifiant ou mot de passe incorrect.";
pub const SERVER_ERROR_FR: &str = "Une erreur est survenue. Veuillez réessayer plus tard.";
pub const NETWORK_ERROR_FR: &str =
    "Connexion impossible. Vérifiez votre connexion internet et réessayez.";
pub const SESSION_EXPIRED_FR: &str = "Votre session a expiré. Veuillez vous reconnecter.";
pub const MISSING_FIELDS_FR: &str = "Veuillez renseigner tous les champs.";

/// Maps a gateway failure to the message shown on the login screens.
pub fn user_message(error: &GatewayError) -> &'static str {
    match error {
        GatewayError::Unauthorized => INVALID_CREDENTIALS_FR,
        GatewayError::Status { .. } => SERVER_ERROR_FR,
        GatewayError::Decode(_) => SERVER_ERROR_FR,
        GatewayError::Network(_) => NETWORK_ERROR_FR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classes_map_to_their_french_message() {
        assert_eq!(user_message(&GatewayError::Unauthorized), INVALID_CREDENTIALS_FR);
        assert_eq!(
            user_message(&GatewayError::Status { status: 500 }),
            SERVER_ERROR_FR
        );
        assert_eq!(
            user_message(&GatewayError::Status { status: 400 }),
            SERVER_ERROR_FR
        );
        assert_eq!(
            user_message(&GatewayError::Network("connection refused".to_string())),
            NETWORK_ERROR_FR
        );
        assert_eq!(
            user_message(&GatewayError::Decode("eof".to_string())),
            SERVER_ERROR_FR
        );
    }
}
