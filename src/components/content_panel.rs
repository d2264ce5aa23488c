use dioxus::prelude::*;

#[component]
pub fn ContentPanel(title: String, children: Element) -> Element {
    rsx! {
        div { class: "content-panel",
            div { class: "panel-title", "{title}" }
            div { class: "panel-body", {children} }
        }
    }
}
