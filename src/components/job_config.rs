use crate::components::ContentPanel;
use dioxus::prelude::*;

/// Job name and description panel. Stateless: values and validation
/// errors come in as props, edits go out through the change handlers.
#[component]
pub fn JobConfigPanel(
    is_edit: bool,
    name: String,
    #[props(!optional)] name_error: Option<String>,
    description: String,
    on_name_change: EventHandler<String>,
    on_description_change: EventHandler<String>,
) -> Element {
    let name_invalid = name_error.is_some();

    rsx! {
        ContentPanel { title: "Job name and description",
            div { class: "form-group",
                label { r#for: "job-name", "Name" }
                input {
                    r#type: "text",
                    id: "job-name",
                    class: if name_invalid { "invalid" } else { "" },
                    placeholder: "my-rollupjob1",
                    value: "{name}",
                    disabled: is_edit,
                    oninput: move |evt| on_name_change.call(evt.value()),
                }
                if let Some(error) = name_error {
                    div { class: "field-error", "{error}" }
                } else {
                    div { class: "field-help", "Specify a unique, descriptive name." }
                }
            }

            div { class: "form-group",
                div { class: "field-label-row",
                    label { r#for: "job-description", "Description" }
                    span { class: "subdued", i { " – optional" } }
                }
                textarea {
                    id: "job-description",
                    "data-testid": "description",
                    value: "{description}",
                    oninput: move |evt| on_description_change.call(evt.value()),
                }
            }
        }
    }
}
