use caccompta_frontend::App;
use caccompta_frontend::config::AppConfig;
use leptos::prelude::*;

// Use lol_alloc as the global allocator for smaller WASM size
#[cfg(target_arch = "wasm32")]
use lol_alloc::{AssumeSingleThreaded, FreeListAllocator};

#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOCATOR: AssumeSingleThreaded<FreeListAllocator> =
    unsafe { AssumeSingleThreaded::new(FreeListAllocator::new()) };

pub fn main() {
    console_error_panic_hook::set_once();

    let loaded = AppConfig::load();
    let config = loaded.as_ref().ok().cloned().unwrap_or_default();
    let _ = console_log::init_with_level(config.log_level());
    if let Err(e) = &loaded {
        log::warn!("[Config] {e}, using defaults");
    }
    log::info!("[App] Starting {}", config.product_name);

    mount_to_body(move || view! { <App config=config /> });
}
