//! Notifier Player - composition root binary.
//!
//! On the browser this attaches the field selector to the page. Natively it
//! replays the control ids given on the command line against an in-memory
//! surface and prints the resulting markup, e.g.
//!
//! ```text
//! notifier-player email-btn message-btn
//! ```

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use notifier_player::{FieldSelector, MemoryFormSurface, SelectorConfig};

    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "notifier_player=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = SelectorConfig::from_env();
    tracing::info!(
        type_selector = %config.type_selector_id,
        field_slot = %config.field_slot_id,
        form = %config.form_id,
        "Starting Notifier Player preview"
    );

    let mut selector = FieldSelector::new(MemoryFormSurface::new());
    for control_id in std::env::args().skip(1) {
        let state = selector.handle_selection(&control_id)?;
        tracing::info!(control_id = %control_id, ?state, "Replayed click");
    }

    println!("{}", selector.surface().document_html(&config));
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() -> anyhow::Result<()> {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    tracing::info!("Starting Notifier Player");

    let config = notifier_player::SelectorConfig::default();
    notifier_player::infrastructure::bind_field_selector(&config)?.keep_alive();
    Ok(())
}
