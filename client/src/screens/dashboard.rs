//! Post-authentication landing surfaces, one per role.

use contracts::AuthUser;

pub fn render_student_home(user: &AuthUser) -> String {
    let mut out = format!("=== Mon espace Melio ===\nBonjour {} !\n", user.display_name);
    out.push_str(
        "\nIci tu peux demander de l'aide, suivre tes démarches et retrouver\n\
         les ressources de ton établissement.\n",
    );
    out.push_str("\nCommandes : :deconnexion :quitter\n");
    out
}

pub fn render_staff_dashboard(user: &AuthUser) -> String {
    let mut out = format!(
        "=== Tableau de bord personnel ===\nBonjour {} !\n",
        user.display_name
    );
    if let Some(school_code) = &user.school_code {
        out.push_str(&format!("Établissement : {school_code}\n"));
    }
    out.push_str(
        "\nSuivez les demandes d'accompagnement des élèves de votre\n\
         établissement et leurs dossiers en cours.\n",
    );
    out.push_str("\nCommandes : :deconnexion :quitter\n");
    out
}

pub fn render_admin_dashboard(user: &AuthUser) -> String {
    let mut out = format!(
        "=== Administration de la plateforme ===\nBonjour {} !\n",
        user.display_name
    );
    out.push_str(
        "\nGérez les établissements partenaires, les comptes des personnels\n\
         et la configuration du service.\n",
    );
    out.push_str("\nCommandes : :deconnexion :quitter\n");
    out
}

#[cfg(test)]
mod tests {
    use contracts::{AuthUser, Role};

    use super::*;

    fn user(role: Role) -> AuthUser {
        AuthUser {
            id: "u-1".into(),
            display_name: "Lina Moreau".into(),
            role,
            school_code: Some("0751234A".into()),
            school_id: None,
            email: None,
        }
    }

    #[test]
    fn each_surface_greets_the_user_by_name() {
        assert!(render_student_home(&user(Role::Student)).contains("Lina Moreau"));
        assert!(render_staff_dashboard(&user(Role::Staff)).contains("Lina Moreau"));
        assert!(render_admin_dashboard(&user(Role::Admin)).contains("Lina Moreau"));
    }

    #[test]
    fn staff_dashboard_shows_the_school_code_when_known() {
        assert!(render_staff_dashboard(&user(Role::Staff)).contains("0751234A"));

        let mut anonymous = user(Role::Staff);
        anonymous.school_code = None;
        assert!(!render_staff_dashboard(&anonymous).contains("Établissement"));
    }

    #[test]
    fn every_surface_offers_logout() {
        for rendered in [
            render_student_home(&user(Role::Student)),
            render_staff_dashboard(&user(Role::Staff)),
            render_admin_dashboard(&user(Role::Admin)),
        ] {
            assert!(rendered.contains(":deconnexion"));
        }
    }
}
