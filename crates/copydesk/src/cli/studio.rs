//! Interactive studio launcher.

use copydesk::{CopydeskConfig, CopydeskResult, Settings};

/// Launch the terminal studio.
#[cfg(all(feature = "tui", feature = "gemini"))]
pub async fn launch_studio(settings: &Settings, config: &CopydeskConfig) -> CopydeskResult<()> {
    use copydesk::{App, Branding, GeminiClient, SessionState, StatusNotifier, Studio, run_studio};
    use std::sync::Arc;

    let generator = GeminiClient::with_api_key(settings.require_api_key()?)?;
    let store = super::open_sheet(settings)?;

    let notifier = StatusNotifier::default();
    let studio = Studio::from_config(generator, store, config, Arc::new(notifier.clone()));

    let branding = Branding::new(
        settings.brand_name.as_deref().unwrap_or_default(),
        settings.accent_hex.as_deref().unwrap_or_default(),
        settings.logo_path.clone(),
    );
    let app = App::new(
        branding,
        SessionState::new(settings.app_passcode.clone()),
        &config.studio,
    );

    match studio.prepare().await {
        Ok(true) => tracing::info!("Wrote history header row"),
        Ok(false) => {}
        Err(e) => {
            tracing::error!(error = %e, "History sheet unavailable at startup");
            return Err(e);
        }
    }

    tracing::info!("Launching studio");
    run_studio(&studio, app, notifier).await
}

/// Launch the terminal studio.
#[cfg(not(all(feature = "tui", feature = "gemini")))]
pub async fn launch_studio(_settings: &Settings, _config: &CopydeskConfig) -> CopydeskResult<()> {
    Err(copydesk::ConfigError::new(
        "copydesk was built without the tui and gemini features",
    )
    .into())
}
