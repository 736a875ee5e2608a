use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TextInputProps {
    pub label: String,
    pub id: String,
    pub value: String,
    pub on_change: Callback<String>,
    #[prop_or_else(|| "text".to_string())]
    pub input_type: String,
    #[prop_or_default]
    pub placeholder: String,
    #[prop_or_default]
    pub error: Option<String>,
}

/// Labelled input with an inline validation message.
#[function_component(TextInput)]
pub fn text_input(props: &TextInputProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_change.emit(input.value());
            }
        })
    };

    html! {
        <div class="form-group">
            <label for={props.id.clone()}>{ &props.label }</label>
            <input
                type={props.input_type.clone()}
                id={props.id.clone()}
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                {oninput}
            />
            if let Some(error) = &props.error {
                <p class="form-error">{ error }</p>
            }
        </div>
    }
}
