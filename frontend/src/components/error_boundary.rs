//! Error boundary components for rendering failures.

use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |_err: ErrorContext| {
                rsx! {
                    div {
                        style: "display: flex; flex-direction: column; align-items: flex-start; padding: 20px;",
                        h1 {
                            style: "color: #b91c1c; font-size: 44px; margin: 10px;",
                            "Something went wrong",
                        }
                        p {
                            style: "color: #7f1d1d; font-size: 22px; margin: 10px;",
                            "Boundary: {boundary_name}"
                        }
                        a {
                            href: "/",
                            style: "color: #1d4ed8; font-size: 22px; border: 1px solid #1d4ed8; padding: 8px 14px; border-radius: 5px; margin: 10px;",
                            "Return to Home Page"
                        }
                        pre {
                            style: "color: black; border: 1px solid #b91c1c; padding: 10px; border-radius: 5px; margin: 10px; text-wrap: auto;",
                            "{_err:#?}"
                        }
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |_err: ErrorContext| {
                let error = _err.error();
                let error_txt = if let Some(err) = error {
                    format!("{:#?}", err.0)
                } else {
                    "Unknown error".to_string()
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            style: "color: #1d4ed8; font-size: 20px; border: 1px solid #1d4ed8; background: white; cursor: pointer; padding: 8px 14px; border-radius: 5px; margin: 10px;",
                            onclick: move |_| {
                                _err.clear_errors();
                            },
                            "Try Again"
                        }
                    }
                }
            },
            div {
                width: "100%",
                height: "100%",
                {children}
            }
        }
    }
}

#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            width: "100%",
            height: "100%",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            justify_content: "center",

            h1 {
                style: "color: #b91c1c; font-size: 28px; margin: 5px;",
                "Component Error",
            }

            pre {
                style: "color: #7f1d1d; border: 1px solid #b91c1c; padding: 10px; border-radius: 5px; margin: 5px; text-wrap: auto; max-width: 500px; max-height: 400px; overflow-y: auto;",
                "{error_txt}"
            }

            {children}
        }
    }
}
