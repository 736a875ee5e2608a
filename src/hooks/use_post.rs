// ============================================================================
// USE POST - mutation execution with loading/error state
// ============================================================================

use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::RequestCredentials;
use yew::prelude::*;

use crate::services::{request, Method};

/// Per-invocation options. `method` overrides the hook's default; exactly one
/// of `on_success`/`on_error` fires per execute() call.
#[derive(Clone, PartialEq)]
pub struct PostOptions<Res> {
    pub method: Option<Method>,
    pub headers: Vec<(String, String)>,
    pub credentials: Option<RequestCredentials>,
    pub on_success: Option<Callback<Res>>,
    pub on_error: Option<Callback<String>>,
}

impl<Res> Default for PostOptions<Res> {
    fn default() -> Self {
        Self {
            method: None,
            headers: Vec::new(),
            credentials: None,
            on_success: None,
            on_error: None,
        }
    }
}

pub struct UsePostHandle<Req, Res> {
    pub execute: Callback<(Req, PostOptions<Res>)>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Execute JSON mutations against `path`. Results are delivered through the
/// one-shot callbacks, never stored; `is_loading` is cleared on every exit
/// path. Overlapping invocations race independently (callers serialise by
/// disabling their trigger while loading).
#[hook]
pub fn use_post<Req, Res>(path: String, default_method: Method) -> UsePostHandle<Req, Res>
where
    Req: Serialize + 'static,
    Res: DeserializeOwned + 'static,
{
    let is_loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    let execute = {
        let is_loading = is_loading.clone();
        let error = error.clone();

        Callback::from(move |(payload, options): (Req, PostOptions<Res>)| {
            let path = path.clone();
            let is_loading = is_loading.clone();
            let error = error.clone();
            let method = options.method.unwrap_or(default_method);

            is_loading.set(true);
            error.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                let result = request::send_json::<Req, Res>(
                    method,
                    &path,
                    &payload,
                    &options.headers,
                    options.credentials,
                )
                .await;

                match result {
                    Ok(body) => {
                        if let Some(callback) = options.on_success {
                            callback.emit(body);
                        }
                    }
                    Err(e) => {
                        let message = e.to_string();
                        log::error!("❌ {} {} failed: {}", method, path, message);
                        error.set(Some(message.clone()));
                        if let Some(callback) = options.on_error {
                            callback.emit(message);
                        }
                    }
                }
                is_loading.set(false);
            });
        })
    };

    UsePostHandle {
        execute,
        is_loading: *is_loading,
        error: (*error).clone(),
    }
}
