//! Offline-caching worker registration

use gloo::events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{ServiceWorkerRegistration, Window};

/// Register the worker at `path` once the page has finished loading
///
/// Browsers without service worker support are skipped silently.
pub fn register_on_load(path: String) {
    let Some(window) = web_sys::window() else {
        return;
    };

    if !is_supported(&window) {
        tracing::info!("Service workers unsupported, skipping registration");
        return;
    }

    let loaded = window
        .document()
        .map(|document| document.ready_state() == "complete")
        .unwrap_or(false);

    if loaded {
        spawn_local(register_and_log(path));
    } else {
        EventListener::once(&window, "load", move |_| {
            spawn_local(register_and_log(path));
        })
        .forget();
    }
}

fn is_supported(window: &Window) -> bool {
    js_sys::Reflect::has(&window.navigator(), &JsValue::from_str("serviceWorker")).unwrap_or(false)
}

async fn register_and_log(path: String) {
    match register(&path).await {
        Ok(registration) => {
            tracing::info!(
                "Service Worker registered with scope: {}",
                registration.scope()
            );
        }
        Err(err) => {
            tracing::error!("Service Worker registration failed: {:?}", err);
        }
    }
}

/// Register the worker script and wait for the registration
pub async fn register(path: &str) -> Result<ServiceWorkerRegistration, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let promise = window.navigator().service_worker().register(path);
    let registration = JsFuture::from(promise).await?;
    registration.dyn_into::<ServiceWorkerRegistration>()
}
