use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AlertKind {
    Success,
    Error,
}

/// Single-slot notification; a new alert replaces the previous one.
#[derive(Clone, PartialEq, Debug)]
pub struct AlertState {
    pub kind: AlertKind,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Clone, PartialEq)]
pub struct UseAlertHandle {
    pub alert: Option<AlertState>,
    pub show_success: Callback<(String, Option<String>)>,
    pub show_error: Callback<(String, Option<String>)>,
    pub clear: Callback<()>,
}

/// Ephemeral success/error toast state. Auto-dismiss is the toast
/// component's job (see components::alert_toast).
#[hook]
pub fn use_alert() -> UseAlertHandle {
    let alert = use_state(|| None::<AlertState>);

    let show_success = {
        let alert = alert.clone();
        Callback::from(move |(title, description): (String, Option<String>)| {
            alert.set(Some(AlertState { kind: AlertKind::Success, title, description }));
        })
    };

    let show_error = {
        let alert = alert.clone();
        Callback::from(move |(title, description): (String, Option<String>)| {
            alert.set(Some(AlertState { kind: AlertKind::Error, title, description }));
        })
    };

    let clear = {
        let alert = alert.clone();
        Callback::from(move |_| alert.set(None))
    };

    UseAlertHandle {
        alert: (*alert).clone(),
        show_success,
        show_error,
        clear,
    }
}
