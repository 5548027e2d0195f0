//! Interactive shell. Owns the screen state machine and feeds stdin
//! lines to the active screen.

use std::time::Duration;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::api::AuthGateway;
use crate::app::commands::{self, Command};
use crate::app::state::AppScreen;
use crate::screens::admin_login::AdminLoginScreen;
use crate::screens::agent_login::AgentLoginScreen;
use crate::screens::dashboard;
use crate::screens::legal;
use crate::screens::loading;
use crate::screens::login::LoginScreen;
use crate::session::SessionService;
use crate::settings::AppSettings;
use crate::storage::Vault;

pub struct Shell {
    service: SessionService,
    min_loading: Duration,
    screen: AppScreen,
    login: LoginScreen,
    admin_login: AdminLoginScreen,
    agent_login: AgentLoginScreen,
    /// Public screen to come back to when leaving a legal page.
    return_to: AppScreen,
    /// First half of a two-step credential entry.
    pending_identifier: Option<String>,
}

impl Shell {
    pub fn new(settings: &AppSettings) -> anyhow::Result<Self> {
        let gateway = AuthGateway::new(&settings.api)
            .context("failed to build the API client")?;
        let vault = Vault::open(&settings.storage.vault_path);

        Ok(Self {
            service: SessionService::new(gateway, vault),
            min_loading: Duration::from_millis(settings.startup.min_loading_ms),
            screen: AppScreen::default(),
            login: LoginScreen::new(None),
            admin_login: AdminLoginScreen::new(),
            agent_login: AgentLoginScreen::new(),
            return_to: AppScreen::Login,
            pending_identifier: None,
        })
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(loading::SPLASH.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;

        let outcome = loading::run(&mut self.service, self.min_loading).await;
        self.login = LoginScreen::new(outcome.notice);
        self.screen = outcome.next;

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            self.guard_session();

            stdout.write_all(self.render().as_bytes()).await?;
            stdout.write_all(self.prompt().as_bytes()).await?;
            stdout.flush().await?;

            let Some(line) = lines.next_line().await.context("failed to read stdin")? else {
                break;
            };

            match commands::parse(&line) {
                Some(Command::Quit) => break,
                Some(command) => self.apply_command(command),
                None => self.apply_input(line).await,
            }
        }

        log::info!("shell stopped");
        Ok(())
    }

    /// Authenticated surfaces are never rendered without a session.
    fn guard_session(&mut self) {
        if self.screen.requires_session() && !self.service.is_authenticated() {
            self.screen = AppScreen::Login;
        }
    }

    fn render(&self) -> String {
        match self.screen {
            AppScreen::Loading => format!("{}\n", loading::SPLASH),
            AppScreen::Login => self.login.render(),
            AppScreen::AdminLogin => self.admin_login.render(),
            AppScreen::AgentLogin => self.agent_login.render(),
            AppScreen::Legal(page) => legal::render(page),
            AppScreen::StudentHome
            | AppScreen::StaffDashboard
            | AppScreen::AdminDashboard => match self.service.current_user() {
                Some(user) => match self.screen {
                    AppScreen::StaffDashboard => dashboard::render_staff_dashboard(user),
                    AppScreen::AdminDashboard => dashboard::render_admin_dashboard(user),
                    _ => dashboard::render_student_home(user),
                },
                None => self.login.render(),
            },
        }
    }

    fn prompt(&self) -> &'static str {
        if self.accepts_credentials() {
            if self.pending_identifier.is_some() {
                "Mot de passe : "
            } else {
                "Identifiant : "
            }
        } else {
            "> "
        }
    }

    fn accepts_credentials(&self) -> bool {
        matches!(
            self.screen,
            AppScreen::Login | AppScreen::AdminLogin | AppScreen::AgentLogin
        )
    }

    fn apply_command(&mut self, command: Command) {
        // A navigation command abandons any half-entered credentials.
        self.pending_identifier = None;

        match command {
            Command::GoUnifiedLogin if !self.screen.requires_session() => {
                self.screen = AppScreen::Login;
            }
            Command::GoAdminLogin if !self.screen.requires_session() => {
                self.screen = AppScreen::AdminLogin;
            }
            Command::GoAgentLogin if !self.screen.requires_session() => {
                self.screen = AppScreen::AgentLogin;
            }
            Command::ShowLegal(page) if !self.screen.requires_session() => {
                if !matches!(self.screen, AppScreen::Legal(_)) {
                    self.return_to = self.screen;
                }
                self.screen = AppScreen::Legal(page);
            }
            Command::ToggleTab if self.screen == AppScreen::Login => {
                self.login.toggle_tab();
            }
            Command::Back => match self.screen {
                AppScreen::Legal(_) => self.screen = self.return_to,
                AppScreen::AdminLogin | AppScreen::AgentLogin => {
                    self.screen = AppScreen::Login;
                }
                _ => {}
            },
            Command::Logout if self.screen.requires_session() => {
                self.service.logout();
                self.login = LoginScreen::new(None);
                self.screen = AppScreen::Login;
            }
            // Commands that do not apply on the current screen are ignored.
            _ => {}
        }
    }

    async fn apply_input(&mut self, line: String) {
        if !self.accepts_credentials() {
            return;
        }

        let line = line.trim().to_string();
        match self.pending_identifier.take() {
            None => {
                self.pending_identifier = Some(line);
            }
            Some(identifier) => {
                let role = match self.screen {
                    AppScreen::AdminLogin => {
                        self.admin_login
                            .submit(&mut self.service, &identifier, &line)
                            .await
                    }
                    AppScreen::AgentLogin => {
                        self.agent_login
                            .submit(&mut self.service, &identifier, &line)
                            .await
                    }
                    _ => {
                        self.login
                            .submit(&mut self.service, &identifier, &line)
                            .await
                    }
                };
                if let Some(role) = role {
                    self.screen = AppScreen::for_role(role);
                }
            }
        }
    }
}
