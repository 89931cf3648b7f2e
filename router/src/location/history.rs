use super::{LocationChange, NavigationProvider, State};
use crate::window;
use js_sys::JSON;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::Event;

/// The browser's session history, through `window.history` and
/// `window.location`.
///
/// State is stored on each entry as a plain JS object, so entries created
/// by other scripts can be read back as long as they hold JSON data.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHistory;

impl NavigationProvider for BrowserHistory {
    type Error = JsValue;

    fn current_path(&self) -> Result<String, Self::Error> {
        window()?.location().pathname()
    }

    fn current_state(&self) -> Result<State, Self::Error> {
        let state = window()?.history()?.state()?;
        if state.is_null() || state.is_undefined() {
            return Ok(State::default());
        }
        let json = String::from(JSON::stringify(&state)?);
        serde_json::from_str(&json)
            .map(State::from_value)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    fn push(&self, change: &LocationChange) -> Result<(), Self::Error> {
        let history = window()?.history()?;
        let json = serde_json::to_string(&change.state.to_value())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let state = JSON::parse(&json)?;
        if change.replace {
            history.replace_state_with_url(&state, "", Some(&change.value))
        } else {
            history.push_state_with_url(&state, "", Some(&change.value))
        }
    }

    fn on_pop_state(
        &self,
        listener: Box<dyn Fn()>,
    ) -> Result<(), Self::Error> {
        let closure = Closure::wrap(Box::new(move |_: Event| listener())
            as Box<dyn FnMut(Event)>)
        .into_js_value();
        window()?.add_event_listener_with_callback(
            "popstate",
            closure.unchecked_ref(),
        )
    }
}
