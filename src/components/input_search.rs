use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InputSearchProps {
    pub on_search: Callback<String>,
    #[prop_or_else(|| "Search...".to_string())]
    pub placeholder: String,
}

/// Free-text search box; every keystroke is forwarded, debouncing happens in
/// use_filter.
#[function_component(InputSearch)]
pub fn input_search(props: &InputSearchProps) -> Html {
    let oninput = {
        let on_search = props.on_search.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_search.emit(input.value());
            }
        })
    };

    html! {
        <input
            type="search"
            class="input-search"
            placeholder={props.placeholder.clone()}
            {oninput}
        />
    }
}
