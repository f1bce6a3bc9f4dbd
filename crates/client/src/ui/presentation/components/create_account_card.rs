//! Create Account card - email, password, experience and remember-me

use accountforms_domain::ExperienceYears;
use dioxus::prelude::*;

use crate::application::forms::CreateAccountForm;
use crate::ui::{use_log_sink, use_notifier};

const INPUT_CLASS: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5";

/// Create Account form component
#[component]
pub fn CreateAccountCard() -> Element {
    let notifier = use_notifier();
    let log_sink = use_log_sink();

    // Form state
    let mut state = use_signal(move || CreateAccountForm::new(notifier, log_sink));

    let email = state.read().email().to_string();
    let password = state.read().password().to_string();
    let experience = state.read().experience_years().to_string();
    let remember = state.read().remember();
    let password_error = state.read().password_error();

    let password_class = if password_error.is_some() {
        format!("{INPUT_CLASS} border-red-500")
    } else {
        INPUT_CLASS.to_string()
    };

    rsx! {
        div {
            class: "p-6 bg-white border border-gray-200 rounded-3xl shadow",
            style: "max-width: 28rem; width: 100%;",

            h1 {
                class: "text-center text-xl",
                style: "color: #0072B5;",
                strong { "Create Account" }
            }
            p {
                class: "text-center my-5",
                "Create your account in a second to receive our latest news!"
            }

            form {
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    state.read().on_submit();
                },

                // Email
                div {
                    class: "mb-5",
                    label {
                        r#for: "email",
                        class: "block mb-2 text-sm font-medium text-gray-900",
                        "Email"
                    }
                    input {
                        r#type: "text",
                        id: "email",
                        class: INPUT_CLASS,
                        placeholder: "Email",
                        value: "{email}",
                        oninput: move |e| state.write().on_email_change(e.value()),
                    }
                }

                // Password
                div {
                    class: "mb-5",
                    div {
                        class: "flex items-center justify-between",
                        label {
                            r#for: "password",
                            class: "block mb-2 text-sm font-medium text-gray-900",
                            "Password"
                        }
                        span { class: "text-xs text-gray-500", "At least 6 characters" }
                    }
                    input {
                        r#type: "password",
                        id: "password",
                        class: "{password_class}",
                        placeholder: "Password",
                        value: "{password}",
                        oninput: move |e| state.write().on_password_change(e.value()),
                    }
                    if let Some(err) = password_error {
                        p {
                            class: "mt-2 text-sm text-red-600",
                            style: "color: #dc2626;",
                            strong { "Error: " }
                            "{err}"
                        }
                    }
                }

                // Experience
                div {
                    class: "mb-5",
                    label {
                        r#for: "experience",
                        class: "block mb-2 text-sm font-medium text-gray-900",
                        "Year of experience"
                    }
                    select {
                        id: "experience",
                        class: INPUT_CLASS,
                        value: "{experience}",
                        onchange: move |e| state.write().on_experience_change(e.value()),
                        option { value: "", selected: experience.is_empty(), "Please select" }
                        for years in ExperienceYears::all().iter() {
                            option {
                                key: "{years.token()}",
                                value: years.token(),
                                selected: experience == years.token(),
                                "{years.label()}"
                            }
                        }
                    }
                }

                // Remember me
                div {
                    class: "flex items-start mb-5",
                    input {
                        id: "remember",
                        r#type: "checkbox",
                        class: "w-5 h-5 border border-blue-300 rounded-2xl",
                        checked: remember,
                        onchange: move |e| state.write().on_remember_change(e.checked()),
                    }
                    label {
                        r#for: "remember",
                        class: "ms-2 text-sm font-medium text-gray-900",
                        "Remember Me"
                    }
                }

                div {
                    class: "mb-5",
                    button {
                        r#type: "submit",
                        class: "text-white font-medium rounded-lg text-sm w-full px-5 py-2.5 text-center",
                        style: "background: #0072B5; color: white;",
                        "Create Account"
                    }
                }
            }
        }
    }
}
