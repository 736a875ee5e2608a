pub mod use_alert;
pub mod use_debounce;
pub mod use_filter;
pub mod use_get;
pub mod use_post;

pub use use_alert::{use_alert, AlertKind, AlertState, UseAlertHandle};
pub use use_debounce::use_debounce;
pub use use_filter::{use_filter, UseFilterHandle};
pub use use_get::{use_get, GetOptions, UseGetHandle};
pub use use_post::{use_post, PostOptions, UsePostHandle};
