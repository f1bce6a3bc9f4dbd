//! Delete Account card - reason checkboxes and optional comment

use accountforms_domain::ReasonCatalog;
use dioxus::prelude::*;

use crate::application::forms::DeleteAccountForm;
use crate::ui::{use_log_sink, use_notifier};

/// Delete Account form component
#[component]
pub fn DeleteAccountCard() -> Element {
    let notifier = use_notifier();
    let log_sink = use_log_sink();

    // Form state
    let mut state = use_signal(move || DeleteAccountForm::new(notifier, log_sink));

    let comment = state.read().comment().to_string();
    let comment_error = state.read().comment_error();

    rsx! {
        div {
            class: "p-6 bg-white border border-gray-200 rounded-3xl shadow",
            style: "max-width: 28rem; width: 100%;",

            h1 {
                class: "text-center text-xl",
                style: "color: #0072B5;",
                strong { "Delete Your Account" }
            }
            p {
                class: "my-5",
                "We're sorry to see you go. It would be great if we could know the reason behind."
            }

            form {
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    state.read().on_submit();
                },

                // Reasons
                div {
                    class: "my-5",
                    div {
                        class: "mb-5 text-sm text-red-600",
                        span { "Please select one of the below reasons." }
                    }
                    for (index, reason) in ReasonCatalog.iter() {
                        div {
                            key: "{index}",
                            class: "flex items-center mb-3",
                            input {
                                r#type: "checkbox",
                                id: "reason-{index}",
                                class: "mr-2 rounded-full border border-gray-300 w-5 h-5",
                                checked: state.read().is_selected(index),
                                onchange: move |_| {
                                    // Unknown indices are logged by the form
                                    state.write().on_reason_toggle(index).ok();
                                },
                            }
                            label { r#for: "reason-{index}", "{reason}" }
                        }
                    }
                }

                // Comment
                div {
                    class: "my-5",
                    label {
                        r#for: "comment",
                        class: "block mb-3",
                        "Let us know if you have any other comments."
                    }
                    textarea {
                        id: "comment",
                        rows: 7,
                        value: "{comment}",
                        oninput: move |e| state.write().on_comment_change(e.value()),
                        class: "block p-2.5 w-full text-sm text-gray-900 bg-gray-50 rounded-lg border border-gray-300",
                        placeholder: "Your comments (Optional)",
                    }
                    if let Some(err) = comment_error {
                        p {
                            class: "text-red-500 text-sm my-2",
                            style: "color: #ef4444;",
                            "{err}"
                        }
                    }
                    p { class: "text-gray-400 text-sm text-right my-3", "Max. 2000 characters" }
                }

                div {
                    class: "mb-5",
                    button {
                        r#type: "submit",
                        class: "text-white font-medium rounded-lg text-sm w-full px-5 py-2.5 text-center",
                        style: "background: #0072B5; color: white;",
                        "Submit"
                    }
                }
            }
        }
    }
}
