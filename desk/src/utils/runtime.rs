//! Global Tokio runtime
//!
//! egui drives the main thread; network tasks run here. The binary enters the
//! runtime once at start-up so `tokio::spawn` works from UI handlers.
//!
//! ```rust,no_run
//! use freight_desk::utils::runtime::TOKIO_RT;
//!
//! let _guard = TOKIO_RT.enter();
//! tokio::spawn(async { /* network work */ });
//! ```

use once_cell::sync::Lazy;
use tokio::runtime::{Builder, Runtime};

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    Builder::new_multi_thread()
        .enable_all()
        .thread_name("freight-desk-io")
        .build()
        .unwrap_or_else(|e| {
            // Without a runtime no request can ever be issued.
            eprintln!("Failed to create Tokio runtime: {e}");
            std::process::abort()
        })
});
