//! Server startup utilities.

use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(
        r#"
    __  ___           _
   /  |/  /___ _   __(_)__  _____
  / /|_/ / __ \ | / / / _ \/ ___/
 / /  / / /_/ / |/ / /  __(__  )
/_/  /_/\____/|___/_/\___/____/
    "#
    );
}

/// Prints the endpoints the server answers on.
pub fn print_startup_info(addr: &str, cache_backend: &str) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("REST API:  http://{}/api/movies", addr);
    info!("Health:    http://{}/health", addr);
    info!("Cache:     {}", cache_backend);
    info!("{}", separator);
}
