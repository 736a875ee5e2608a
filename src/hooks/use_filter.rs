use std::rc::Rc;

use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::use_debounce;
use crate::utils::filter::{apply_filters, SearchField};

pub struct UseFilterHandle<T> {
    pub search_text: String,
    pub set_search_text: Callback<String>,
    pub filtered_data: Rc<Vec<T>>,
}

/// Debounced free-text search plus exact-match field filters over a
/// client-held collection. The derived view is memoised on
/// (collection, debounced query, filters); the source is never mutated.
#[hook]
pub fn use_filter<T>(
    data: Option<Vec<T>>,
    search_keys: &'static [&'static str],
    field_filters: Vec<(String, String)>,
) -> UseFilterHandle<T>
where
    T: SearchField + Clone + PartialEq + 'static,
{
    let search_text = use_state(String::new);
    let debounced_search = use_debounce((*search_text).clone(), CONFIG.debounce_delay_ms);

    let filtered_data = use_memo(
        (data, debounced_search, field_filters),
        |(data, query, field_filters)| match data {
            Some(items) => apply_filters(items, query, search_keys, field_filters),
            None => Vec::new(),
        },
    );

    let set_search_text = {
        let search_text = search_text.clone();
        Callback::from(move |value: String| search_text.set(value))
    };

    UseFilterHandle {
        search_text: (*search_text).clone(),
        set_search_text,
        filtered_data,
    }
}
