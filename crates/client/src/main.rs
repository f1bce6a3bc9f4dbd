//! Account Forms - composition root binary.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use accountforms_client::infrastructure::ClientConfig;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        load_dotenv_from_repo_root();

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| {
                        "accountforms_client=debug,accountforms=debug,dioxus=info".into()
                    }),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting Account Forms");

    let config = ClientConfig::from_env();
    tracing::debug!("Client configuration: {:?}", config);

    dioxus::LaunchBuilder::new()
        .with_context(config)
        .launch(accountforms_client::app);
}

#[cfg(not(target_arch = "wasm32"))]
fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
