use leptos::prelude::*;

/// Labelled checkbox
#[component]
pub fn Checkbox(
    /// Label text
    #[prop(into)]
    label: String,
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Fired with the new checked state
    on_change: Callback<bool>,
    /// ID for the input element, ties the label to it
    #[prop(into)]
    id: String,
) -> impl IntoView {
    view! {
        <div class="form__checkbox-wrapper">
            <input
                id=id.clone()
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <label class="form__checkbox-label" for=id>
                {label}
            </label>
        </div>
    }
}
