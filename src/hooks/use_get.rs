// ============================================================================
// USE GET - one GET endpoint's fetch/loading/error lifecycle
// ============================================================================

use serde::de::DeserializeOwned;
use yew::prelude::*;

use crate::services::request;

/// Per-hook configuration. Changing `headers` or `enabled` (structural
/// comparison) re-runs the fetch, like a changed path does.
#[derive(Clone, PartialEq)]
pub struct GetOptions<T> {
    pub headers: Vec<(String, String)>,
    pub on_success: Option<Callback<T>>,
    pub on_error: Option<Callback<String>>,
    pub enabled: bool,
}

impl<T> Default for GetOptions<T> {
    fn default() -> Self {
        Self {
            headers: Vec::new(),
            on_success: None,
            on_error: None,
            enabled: true,
        }
    }
}

pub struct UseGetHandle<T> {
    pub data: Option<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
}

/// Fetch `path` as JSON. `is_loading` is true only while a request is in
/// flight; on failure `error` carries the server message and `data` keeps its
/// previous value. Responses superseded by a newer request are discarded
/// (per-instance sequence numbers), so rapid refetching cannot go backwards.
#[hook]
pub fn use_get<T>(path: String, options: GetOptions<T>) -> UseGetHandle<T>
where
    T: DeserializeOwned + Clone + PartialEq + 'static,
{
    let data = use_state(|| None::<T>);
    let is_loading = use_state(|| false);
    let error = use_state(|| None::<String>);
    // Bumped by refetch() to repeat the request with unchanged inputs.
    let epoch = use_state(|| 0u32);
    // Sequence of the latest issued request; stale responses are dropped.
    let sequence = use_mut_ref(|| 0u64);

    {
        let data = data.clone();
        let is_loading = is_loading.clone();
        let error = error.clone();
        let sequence = sequence.clone();
        let on_success = options.on_success.clone();
        let on_error = options.on_error.clone();

        use_effect_with(
            (path, options.headers.clone(), options.enabled, *epoch),
            move |(path, headers, enabled, _epoch)| {
                if *enabled {
                    let request_id = {
                        let mut latest = sequence.borrow_mut();
                        *latest += 1;
                        *latest
                    };
                    let path = path.clone();
                    let headers = headers.clone();

                    is_loading.set(true);
                    wasm_bindgen_futures::spawn_local(async move {
                        let result = request::get_json::<T>(&path, &headers).await;

                        if *sequence.borrow() != request_id {
                            log::debug!("🕳️ GET {} superseded, dropping response", path);
                            return;
                        }

                        match result {
                            Ok(body) => {
                                error.set(None);
                                data.set(Some(body.clone()));
                                if let Some(callback) = on_success {
                                    callback.emit(body);
                                }
                            }
                            Err(e) => {
                                let message = e.to_string();
                                log::error!("❌ GET {} failed: {}", path, message);
                                error.set(Some(message.clone()));
                                if let Some(callback) = on_error {
                                    callback.emit(message);
                                }
                            }
                        }
                        is_loading.set(false);
                    });
                }
                || ()
            },
        );
    }

    let refetch = {
        let epoch = epoch.clone();
        Callback::from(move |_| epoch.set((*epoch).wrapping_add(1)))
    };

    UseGetHandle {
        data: (*data).clone(),
        is_loading: *is_loading,
        error: (*error).clone(),
        refetch,
    }
}
