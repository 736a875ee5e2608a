use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Mirror `value` only after it has been stable for `delay_ms`. Each change
/// restarts the timer, so only the final value of a burst is published.
/// The pending timer is cancelled on teardown (Timeout cancels on drop).
#[hook]
pub fn use_debounce<T>(value: T, delay_ms: u32) -> T
where
    T: Clone + PartialEq + 'static,
{
    let debounced = use_state(|| value.clone());

    {
        let debounced = debounced.clone();
        use_effect_with((value, delay_ms), move |(value, delay_ms)| {
            let value = value.clone();
            let timeout = Timeout::new(*delay_ms, move || debounced.set(value));
            move || drop(timeout)
        });
    }

    (*debounced).clone()
}
