use std::sync::Once;

static INIT: Once = Once::new();

/// Installs the panic hook and console logger. Safe to call more than once.
pub fn init_logging() {
    INIT.call_once(|| {
        console_error_panic_hook::set_once();

        let level = if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        };
        if console_log::init_with_level(level).is_err() {
            // another logger got there first
            log::debug!("console logger already installed");
        }
    });
}
