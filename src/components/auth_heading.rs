use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AuthHeadingProps {
    pub subheading: String,
    pub content: String,
}

#[function_component(AuthHeading)]
pub fn auth_heading(props: &AuthHeadingProps) -> Html {
    html! {
        <div class="auth-heading">
            <h1>{"Pet Adoption"}</h1>
            <h2>{ &props.subheading }</h2>
            <p>{ &props.content }</p>
        </div>
    }
}
