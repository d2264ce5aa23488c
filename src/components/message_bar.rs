use crate::state::ConsoleState;
use dioxus::prelude::*;

#[component]
pub fn MessageBar(state: Signal<ConsoleState>) -> Element {
    let message = state.read().message.clone();

    rsx! {
        if let Some(msg) = message {
            div {
                class: if msg.is_error { "message error" } else { "message success" },
                "{msg.text}"
            }
        }
    }
}
