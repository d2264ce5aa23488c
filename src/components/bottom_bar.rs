use dioxus::prelude::*;

/// Mount point for the floating bottom bar.
///
/// The app root provides exactly one host and renders [`BottomBarOutlet`]
/// as its last child, so the bar floats above the page regardless of where
/// the component that feeds it sits in the tree. The host is handed out
/// through context rather than looked up in the document, which keeps the
/// bar logic independent of the page layout.
#[derive(Clone, Copy, PartialEq)]
pub struct BottomBarHost {
    content: Signal<Option<Element>>,
}

impl BottomBarHost {
    /// Registers the host in context. Call once, from the root component.
    pub fn provide() -> Self {
        use_context_provider(|| Self {
            content: Signal::new(None),
        })
    }

    /// Resolves the host from context. A missing host is a wiring error in
    /// the app root, not something the bar can recover from at runtime.
    pub fn expect_in_app() -> Self {
        try_consume_context::<Self>()
            .expect("BottomBarHost not provided; the app root must mount the bottom bar outlet")
    }

    pub fn set(&mut self, content: Element) {
        self.content.set(Some(content));
    }

    pub fn clear(&mut self) {
        self.content.set(None);
    }
}

/// Renders whatever is currently mounted on the host, wrapped in the
/// fixed-position bar chrome. Empty host, empty output.
#[component]
pub fn BottomBarOutlet() -> Element {
    let host = BottomBarHost::expect_in_app();
    let content = (host.content)();

    rsx! {
        if let Some(body) = content {
            div { class: "bottom-bar", {body} }
        }
    }
}
