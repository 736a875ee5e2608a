use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::{AlertKind, AlertState};

#[derive(Properties, PartialEq)]
pub struct AlertToastProps {
    pub alert: AlertState,
    pub on_close: Callback<()>,
}

/// Fixed-position toast. Auto-dismisses after the configured timeout; the
/// timer is dropped (cancelled) on teardown or when a new alert replaces
/// this one.
#[function_component(AlertToast)]
pub fn alert_toast(props: &AlertToastProps) -> Html {
    {
        let on_close = props.on_close.clone();
        use_effect_with(props.alert.clone(), move |_| {
            let timeout = Timeout::new(CONFIG.alert_dismiss_ms, move || on_close.emit(()));
            move || drop(timeout)
        });
    }

    let kind_class = match props.alert.kind {
        AlertKind::Success => "alert-toast--success",
        AlertKind::Error => "alert-toast--error",
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class={classes!("alert-toast", kind_class)} role="alert">
            <div class="alert-toast__body">
                <p class="alert-toast__title">{ &props.alert.title }</p>
                if let Some(description) = &props.alert.description {
                    <p class="alert-toast__description">{ description }</p>
                }
            </div>
            <button class="alert-toast__close" onclick={on_close}>{"✕"}</button>
        </div>
    }
}
