use env_logger::Env;

use client::app::shell::Shell;
use client::settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let app_settings = settings::load_settings_or_default();
    if let Err(err) = settings::ensure_settings_file_exists(&app_settings) {
        log::warn!("could not write the settings file: {err}");
    }

    log::info!("starting Melio client against {}", app_settings.api.base_url);
    let mut shell = Shell::new(&app_settings)?;
    shell.run().await
}
