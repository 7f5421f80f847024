#[cfg(feature = "csr")]
pub mod app;
pub mod init;
#[cfg(feature = "csr")]
mod page;

#[cfg(feature = "csr")]
pub use entry::{mount_audio_toggle, WidgetHandle};

#[cfg(feature = "csr")]
mod entry {
    use std::any::Any;

    use leptos::prelude::*;
    use utils::{config::WidgetConfig, dom, error::WidgetError};
    use wasm_bindgen::{prelude::wasm_bindgen, JsCast, JsValue};
    use web_sys::HtmlElement;

    use crate::app::App;

    /// Keeps the mounted view alive until `unmount` is called or the handle is dropped.
    #[wasm_bindgen]
    pub struct WidgetHandle {
        mounted: Option<Box<dyn Any>>,
    }

    #[wasm_bindgen]
    impl WidgetHandle {
        pub fn unmount(&mut self) {
            if self.mounted.take().is_some() {
                log::info!("audio toggle unmounted");
            }
        }
    }

    /// Mounts the widget into the element with id `target_id`.
    ///
    /// `config` is an optional JSON object, e.g. `{"entryRatio": 0.5}`.
    #[wasm_bindgen]
    pub fn mount_audio_toggle(
        target_id: &str,
        config: Option<String>,
    ) -> Result<WidgetHandle, JsValue> {
        crate::init::init_logging();

        let config = WidgetConfig::from_optional_json(config.as_deref())?;
        let target = dom::document()?
            .get_element_by_id(target_id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| WidgetError::MissingMountTarget(target_id.to_string()))?;

        log::info!("mounting audio toggle into #{target_id}");
        let handle = leptos::mount::mount_to(target, move || view! { <App config /> });

        Ok(WidgetHandle {
            mounted: Some(Box::new(handle)),
        })
    }
}
