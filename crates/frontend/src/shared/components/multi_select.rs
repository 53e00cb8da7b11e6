use leptos::prelude::*;

use super::checkbox::Checkbox;

/// Builds a DOM id that is stable for a (group, value) pair
pub fn option_id(group: &str, value: &str) -> String {
    let slug: String = value
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect();
    format!("{}--{}", group, slug)
}

/// Checkbox list where any subset of options can be selected
#[component]
pub fn MultiSelect(
    /// Prompt shown above the options
    #[prop(into)]
    label: String,
    /// Prefix for element ids
    #[prop(into)]
    group: String,
    /// Options in display order
    #[prop(into)]
    options: Signal<Vec<String>>,
    /// Currently selected options
    #[prop(into)]
    selected: Signal<Vec<String>>,
    /// Fired with the option whose checkbox changed
    on_toggle: Callback<String>,
) -> impl IntoView {
    let selected_count = move || {
        let selected = selected.get();
        options
            .get()
            .iter()
            .filter(|o| selected.contains(o))
            .count()
    };

    view! {
        <fieldset class="multi-select">
            <legend class="multi-select__label">
                {label}
                <span class="multi-select__count">
                    {move || format!("{}/{}", selected_count(), options.get().len())}
                </span>
            </legend>
            <For
                each=move || options.get()
                key=|option| option.clone()
                children=move |option| {
                    let id = option_id(&group, &option);
                    let value = option.clone();
                    let is_checked = Signal::derive(move || selected.get().contains(&value));
                    let toggled = option.clone();
                    view! {
                        <Checkbox
                            id=id
                            label=option
                            checked=is_checked
                            on_change=Callback::new(move |_checked: bool| on_toggle.run(toggled.clone()))
                        />
                    }
                }
            />
        </fieldset>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_id() {
        assert_eq!(option_id("city", "Yangon"), "city--Yangon");
        assert_eq!(option_id("customer_type", "Non member"), "customer_type--Non-member");
        assert_eq!(option_id("gender", "女"), "gender--女");
    }
}
