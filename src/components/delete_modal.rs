use crate::gate::{DeleteGate, UNLOCK_PHRASE};
use dioxus::prelude::*;

/// Confirmation dialog in front of a destructive action. The confirm
/// button stays disabled until the operator types the unlock phrase, and
/// the typed value is cleared on every reopen.
///
/// Confirming does not close the dialog; the caller closes it by flipping
/// `visible`, usually after the deletion went through.
#[component]
pub fn DeleteModal(
    visible: bool,
    title: String,
    tips: String,
    items_affected: Vec<String>,
    on_confirm: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    let mut gate = use_signal(DeleteGate::new);

    use_effect(use_reactive((&visible,), move |(visible,)| {
        gate.write().set_visible(visible);
    }));

    if !visible {
        return rsx! {};
    }

    let typed = gate.read().typed().to_string();
    let unlocked = gate.read().is_unlocked();

    rsx! {
        div { class: "dialog-overlay",
            div { class: "delete-modal",
                h3 { "{title}" }
                div { class: "modal-body",
                    p { "{tips}" }
                    ul {
                        for item in items_affected {
                            li { "{item}" }
                        }
                    }
                    p { class: "subdued",
                        "To confirm your action, type "
                        b { "{UNLOCK_PHRASE}" }
                        "."
                    }
                    input {
                        r#type: "text",
                        "data-testid": "deleteInput",
                        placeholder: "{UNLOCK_PHRASE}",
                        value: "{typed}",
                        oninput: move |evt| gate.write().set_typed(evt.value()),
                    }
                }
                div { class: "dialog-buttons",
                    button {
                        class: "secondary",
                        "data-testid": "deleteCancelButton",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "primary danger",
                        "data-testid": "deleteConfirmButton",
                        disabled: !unlocked,
                        onclick: move |_| on_confirm.call(()),
                        "Delete"
                    }
                }
            }
        }
    }
}
