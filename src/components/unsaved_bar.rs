use crate::components::bottom_bar::BottomBarHost;
use crate::submit::SubmitDriver;
use crate::unsaved::UnsavedSummary;
use dioxus::dioxus_core::spawn_forever;
use dioxus::prelude::*;
use std::future::Future;
use std::pin::Pin;

/// Outcome of the caller's commit operation. The bar awaits it, then
/// forgets it; success and failure look the same from here.
pub type SubmitFuture = Pin<Box<dyn Future<Output = Result<(), String>>>>;

/// Slot renderers handed to a `compose` override, along with the current
/// busy flag. Each callback produces one independently placeable piece of
/// the bar, so a caller can rearrange or restyle the layout without
/// reimplementing the submission logic.
#[derive(Clone, PartialEq)]
pub struct BarSlots {
    pub render_status: Callback<(), Element>,
    pub render_cancel: Callback<(), Element>,
    pub render_confirm: Callback<(), Element>,
    pub loading: bool,
}

#[derive(Props, Clone, PartialEq)]
pub struct UnsavedChangesBarProps {
    pub unsaved_count: usize,
    #[props(default)]
    pub form_error_count: usize,
    /// Invoked synchronously on cancel click; the bar itself changes no
    /// state for it.
    #[props(default)]
    pub on_cancel: EventHandler<()>,
    /// The async commit operation. May fail; the calling form owns error
    /// reporting.
    pub on_submit: Callback<(), SubmitFuture>,
    /// Full replacement for the default slot layout.
    pub compose: Option<Callback<BarSlots, Element>>,
    pub submit_test_id: Option<String>,
    pub confirm_class: Option<String>,
    pub cancel_class: Option<String>,
}

/// Floating action bar shown while a form has unsaved or invalid edits.
///
/// Renders through the [`BottomBarHost`] mount point instead of inline, so
/// it stays pinned above the page no matter where the calling form places
/// it. Owns nothing but the busy flag around `on_submit`: the dirty and
/// error counts are read-only inputs recomputed by the caller each render.
#[component]
pub fn UnsavedChangesBar(props: UnsavedChangesBarProps) -> Element {
    let mut host = BottomBarHost::expect_in_app();
    let driver = use_hook(SubmitDriver::new);
    let loading = use_signal(|| false);

    use_drop({
        let driver = driver.clone();
        let mut host = host;
        move || {
            driver.destroy();
            host.clear();
        }
    });

    let on_submit = props.on_submit;
    let confirm_click: Callback<()> = use_callback({
        let driver = driver.clone();
        move |_: ()| {
            let driver = driver.clone();
            let mut loading = loading;
            // Detached from this scope on purpose: unmounting must not
            // cancel an in-flight commit, only discard its effects.
            let _ = spawn_forever(async move {
                driver
                    .submit_with(move |busy| loading.set(busy), move || on_submit.call(()))
                    .await;
            });
        }
    });

    let summary = UnsavedSummary::new(props.unsaved_count, props.form_error_count);
    let render_status: Callback<(), Element> = use_callback(move |_: ()| {
        match summary.badge() {
            Some(badge) => {
                let marker = badge.css_class();
                let text = badge.text();
                rsx! {
                    div { class: "bar-status",
                        span { class: "change-blocks {marker}" }
                        "{text}"
                    }
                }
            }
            None => rsx! {},
        }
    });

    let on_cancel = props.on_cancel;
    let cancel_class = props.cancel_class.clone().unwrap_or_default();
    let render_cancel: Callback<(), Element> = use_callback(move |_: ()| {
        let class = cancel_class.clone();
        rsx! {
            button {
                class: "bar-cancel secondary {class}",
                onclick: move |_| on_cancel.call(()),
                "Cancel"
            }
        }
    });

    let confirm_class = props.confirm_class.clone().unwrap_or_default();
    let submit_test_id = props.submit_test_id.clone();
    let render_confirm: Callback<(), Element> = use_callback(move |_: ()| {
        let class = confirm_class.clone();
        let test_id = submit_test_id.clone();
        let busy = loading();
        rsx! {
            button {
                class: "bar-confirm primary {class}",
                disabled: busy,
                "data-testid": test_id,
                onclick: move |_| confirm_click.call(()),
                if busy { "Saving..." } else { "Save" }
            }
        }
    });

    let slots = BarSlots {
        render_status,
        render_cancel,
        render_confirm,
        loading: loading(),
    };

    let body = match &props.compose {
        Some(compose) => compose.call(slots),
        None => default_compose(&slots),
    };

    host.set(rsx! {
        div { class: "bottom-bar-row", {body} }
    });

    rsx! {}
}

/// Layout used when no `compose` override is supplied: status text, then
/// cancel, then confirm.
fn default_compose(slots: &BarSlots) -> Element {
    rsx! {
        {slots.render_status.call(())}
        {slots.render_cancel.call(())}
        {slots.render_confirm.call(())}
    }
}
