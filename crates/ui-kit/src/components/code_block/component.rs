use dioxus::prelude::*;
use dioxus::core::Task;
use dioxus_free_icons::icons::ld_icons::{LdCheck, LdCopy};
use dioxus_free_icons::Icon;

/// How long the button shows "Copied" after a successful copy.
const COPIED_MS: u32 = 1500;

/// JS that writes `code` to the clipboard and reports whether it worked.
pub fn clipboard_script(code: &str) -> String {
    let literal = serde_json::to_string(code).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        "try {{ await navigator.clipboard.writeText({literal}); return true; }} \
         catch (_) {{ return false; }}"
    )
}

/// Preformatted snippet with a copy-to-clipboard button.
#[component]
pub fn CodeBlock(
    code: String,
    #[props(default)] language: Option<String>,
    #[props(default)] title: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let mut copied = use_signal(|| false);
    let mut reset = use_signal(|| None::<Task>);
    let merged = dioxus_primitives::merge_attributes(vec![
        vec![Attribute::new("class", "ui-code-block", None, false)],
        attributes,
    ]);
    let script = clipboard_script(&code);
    let heading = title.or_else(|| language.clone()).unwrap_or_default();

    let copy = move |_: MouseEvent| {
        let script = script.clone();
        spawn(async move {
            let ok = match document::eval(&script).await {
                Ok(value) => value.as_bool().unwrap_or(false),
                Err(err) => {
                    tracing::warn!(?err, "clipboard copy failed");
                    false
                }
            };
            if !ok {
                return;
            }
            let pending = reset.write().take();
            if let Some(pending) = pending {
                pending.cancel();
            }
            copied.set(true);
            reset.set(Some(spawn(async move {
                let delay = format!("await new Promise((r) => setTimeout(r, {COPIED_MS})); return true;");
                if let Err(err) = document::eval(&delay).await {
                    tracing::debug!(?err, "copy indicator timer failed");
                }
                copied.set(false);
            })));
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        figure { "data-language": language, ..merged,
            figcaption { class: "ui-code-block-header",
                span { class: "ui-code-block-title",
                    "{heading}"
                }
                button {
                    r#type: "button",
                    class: "ui-code-block-copy",
                    "data-copied": copied(),
                    "aria-label": if copied() { "Copied" } else { "Copy code" },
                    onclick: copy,
                    if copied() {
                        Icon::<LdCheck> { icon: LdCheck, width: 14, height: 14 }
                        "Copied"
                    } else {
                        Icon::<LdCopy> { icon: LdCopy, width: 14, height: 14 }
                        "Copy"
                    }
                }
            }
            pre { class: "ui-code-block-pre",
                code { "{code}" }
            }
        }
    }
}
