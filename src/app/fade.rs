use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// Fades its children in the first time they scroll into view. Once revealed they stay revealed.
#[component]
pub fn FadeIn(children: Children) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let is_visible = use_element_visibility(node_ref);
    let (revealed, set_revealed) = signal(false);

    Effect::new(move |_| {
        if is_visible.get() && !revealed.get_untracked() {
            set_revealed(true);
        }
    });

    view! {
        <div
            node_ref=node_ref
            class=move || if revealed.get() { "fade-in visible" } else { "fade-in" }
        >
            {children()}
        </div>
    }
}
