use crate::components::{
    BottomBarHost, BottomBarOutlet, DeleteModal, JobConfigPanel, MessageBar, SubmitFuture,
    UnsavedChangesBar,
};
use crate::job::{load_store, save_store};
use crate::state::{ConsoleState, Message};
use dioxus::prelude::*;

#[allow(non_snake_case)]
pub fn App() -> Element {
    let mut state = use_signal(ConsoleState::new);
    BottomBarHost::provide();

    use_effect(move || {
        initialize_console(state);
    });

    let on_name_change = move |name: String| {
        state.write().draft.name = name;
    };

    let on_description_change = move |description: String| {
        state.write().draft.description = description;
    };

    let on_submit: Callback<(), SubmitFuture> =
        use_callback(move |_: ()| Box::pin(save_job(state)) as SubmitFuture);

    let (summary, name_error, draft, is_edit, delete_visible, saved_name) = {
        let read_state = state.read();
        (
            read_state.summary(),
            read_state.name_error(),
            read_state.draft.clone(),
            read_state.is_edit,
            read_state.delete_visible,
            read_state.saved.name.clone(),
        )
    };

    rsx! {
        style { {include_str!("../assets/main.css")} }
        div { class: "app-container",
            div { class: "content",
                h2 { "Rollup jobs" }
                MessageBar { state }
                JobConfigPanel {
                    is_edit,
                    name: draft.name,
                    name_error,
                    description: draft.description,
                    on_name_change,
                    on_description_change,
                }
                if is_edit {
                    div { class: "danger-zone",
                        button {
                            class: "danger",
                            onclick: move |_| {
                                let mut write_state = state.write();
                                write_state.clear_message();
                                write_state.delete_visible = true;
                            },
                            "Delete job"
                        }
                    }
                }
            }

            if summary.has_changes() {
                UnsavedChangesBar {
                    unsaved_count: summary.unsaved_count,
                    form_error_count: summary.form_error_count,
                    on_cancel: move |_| state.write().revert_draft(),
                    on_submit,
                    submit_test_id: "saveJobButton".to_string(),
                }
            }

            DeleteModal {
                visible: delete_visible,
                title: "Delete job",
                tips: "The following job will be permanently deleted. This action cannot be undone.",
                items_affected: vec![saved_name],
                on_confirm: move |_| delete_job(state),
                on_close: move |_| state.write().delete_visible = false,
            }

            BottomBarOutlet {}
        }
    }
}

fn initialize_console(mut state: Signal<ConsoleState>) {
    match load_store() {
        Ok(store) => {
            tracing::debug!(jobs = store.jobs.len(), "job store loaded");
            state.write().adopt_store(store);
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to load job store, starting empty");
            state
                .write()
                .set_message(Message::error(format!("Failed to load saved jobs: {}", e)));
        }
    }
}

async fn save_job(mut state: Signal<ConsoleState>) -> Result<(), String> {
    let name_error = state.read().name_error();
    if let Some(error) = name_error {
        state.write().set_message(Message::error(error.clone()));
        return Err(error);
    }

    let (store, name) = {
        let read_state = state.read();
        let mut store = read_state.store.clone();
        store.upsert_job(read_state.draft.clone());
        (store, read_state.draft.name.clone())
    };

    match save_store(&store) {
        Ok(()) => {
            tracing::info!(job = %name, "job saved");
            let mut write_state = state.write();
            write_state.store = store;
            write_state.apply_draft();
            write_state.set_message(Message::success(format!("Saved job \"{}\"", name)));
            Ok(())
        }
        Err(e) => {
            tracing::warn!(job = %name, error = %e, "failed to save job");
            state
                .write()
                .set_message(Message::error(format!("Failed to save job: {}", e)));
            Err(e.to_string())
        }
    }
}

fn delete_job(mut state: Signal<ConsoleState>) {
    let (store, name) = {
        let read_state = state.read();
        let mut store = read_state.store.clone();
        store.remove_job(&read_state.saved.name);
        (store, read_state.saved.name.clone())
    };

    match save_store(&store) {
        Ok(()) => {
            tracing::info!(job = %name, "job deleted");
            let mut write_state = state.write();
            write_state.store = store;
            write_state.reset_after_delete();
            write_state.set_message(Message::success(format!("Deleted job \"{}\"", name)));
        }
        Err(e) => {
            tracing::warn!(job = %name, error = %e, "failed to delete job");
            let mut write_state = state.write();
            write_state.delete_visible = false;
            write_state.set_message(Message::error(format!("Failed to delete job: {}", e)));
        }
    }
}
