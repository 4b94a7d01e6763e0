use dioxus::prelude::*;

/// Controlled query field.
///
/// Displays `query` and reports every keystroke through `on_input` with the
/// field's full new value. Enter triggers `on_submit`.
#[component]
pub fn TextInput(
    query: String,
    on_input: EventHandler<String>,
    on_submit: EventHandler<()>,
) -> Element {
    let handle_keypress = move |evt: KeyboardEvent| {
        if evt.key() == Key::Enter {
            on_submit.call(());
        }
    };

    rsx! {
        div { class: "rg-text-input",
            label { class: "rg-field-label", r#for: "rg-query", "Enter search query" }
            input {
                id: "rg-query",
                class: "rg-input",
                r#type: "text",
                placeholder: "e.g. green energy with strong governance",
                value: "{query}",
                oninput: move |evt| on_input.call(evt.value()),
                onkeypress: handle_keypress,
            }
        }
    }
}
