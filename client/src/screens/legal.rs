//! Static legal pages, reachable without a session.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegalPage {
    MentionsLegales,
    Cgu,
    Confidentialite,
}

impl LegalPage {
    pub const ALL: [Self; 3] = [Self::MentionsLegales, Self::Cgu, Self::Confidentialite];

    pub fn title(self) -> &'static str {
        match self {
            Self::MentionsLegales => "Mentions légales",
            Self::Cgu => "Conditions générales d'utilisation",
            Self::Confidentialite => "Politique de confidentialité",
        }
    }

    pub fn body(self) -> &'static str {
        match self {
            Self::MentionsLegales => MENTIONS_LEGALES,
            Self::Cgu => CGU,
            Self::Confidentialite => CONFIDENTIALITE,
        }
    }
}

pub fn render(page: LegalPage) -> String {
    format!(
        "=== {} ===\n\n{}\n\nTapez :retour pour revenir à l'écran précédent.\n",
        page.title(),
        page.body()
    )
}

const MENTIONS_LEGALES: &str = "\
Éditeur
Melio, plateforme d'accompagnement social en milieu scolaire.
Directeur de la publication : la direction de Melio.
Contact : contact@melio.example

Hébergement
Le service est hébergé au sein de l'Union européenne par un prestataire
certifié. Les coordonnées complètes de l'hébergeur sont disponibles sur
simple demande à l'adresse de contact ci-dessus.

Propriété intellectuelle
L'ensemble des contenus du service (textes, visuels, logos) est protégé.
Toute reproduction sans autorisation préalable est interdite.";

const CGU: &str = "\
Article 1 - Objet
Les présentes conditions encadrent l'utilisation de la plateforme Melio
par les élèves, les personnels des établissements partenaires et les
administrateurs.

Article 2 - Accès au service
L'accès est réservé aux titulaires d'un compte remis par leur
établissement. Les identifiants sont strictement personnels et ne
doivent pas être communiqués à des tiers.

Article 3 - Engagements de l'utilisateur
L'utilisateur s'engage à fournir des informations exactes et à ne pas
porter atteinte au fonctionnement du service ni aux autres utilisateurs.

Article 4 - Responsabilité
Melio met tout en œuvre pour assurer la disponibilité du service mais ne
peut garantir une accessibilité permanente. En cas d'urgence, contactez
les numéros d'aide habituels (115, 119, 3018).";

const CONFIDENTIALITE: &str = "\
Données collectées
Melio collecte uniquement les données nécessaires au fonctionnement du
service : identité scolaire, établissement de rattachement et, pour les
personnels, une adresse de courriel professionnelle.

Finalités
Ces données servent à authentifier les utilisateurs, à orienter les
demandes d'accompagnement et à produire des statistiques anonymisées.

Conservation
Les données de session sont conservées sur votre appareil et peuvent
être supprimées à tout moment en vous déconnectant. Les données de
compte sont conservées pendant la durée de scolarisation ou d'exercice.

Vos droits
Conformément au RGPD, vous disposez d'un droit d'accès, de rectification
et d'effacement. Écrivez à dpo@melio.example pour l'exercer.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_has_a_title_and_a_body() {
        for page in LegalPage::ALL {
            assert!(!page.title().is_empty());
            assert!(!page.body().is_empty());
        }
    }

    #[test]
    fn pages_are_distinct() {
        let titles: Vec<&str> = LegalPage::ALL.iter().map(|p| p.title()).collect();
        assert_ne!(titles[0], titles[1]);
        assert_ne!(titles[1], titles[2]);
        assert_ne!(titles[0], titles[2]);
    }

    #[test]
    fn render_includes_the_title_and_the_back_hint() {
        let rendered = render(LegalPage::Confidentialite);
        assert!(rendered.contains("Politique de confidentialité"));
        assert!(rendered.contains(":retour"));
    }

    #[test]
    fn privacy_page_mentions_gdpr_rights() {
        assert!(LegalPage::Confidentialite.body().contains("RGPD"));
    }
}
