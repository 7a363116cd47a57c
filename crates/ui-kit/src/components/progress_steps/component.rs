use dioxus::prelude::*;
use ui_types::steps::StepProgress;

/// Step counter with a progress bar; `current` is zero-based.
#[component]
pub fn ProgressSteps(
    current: usize,
    total: usize,
    #[props(default)] labels: Vec<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let progress = StepProgress::new(current, total);
    let percent = progress.percent();
    let merged = dioxus_primitives::merge_attributes(vec![
        vec![Attribute::new("class", "ui-progress-steps", None, false)],
        attributes,
    ]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { ..merged,
            div { class: "ui-progress-steps-header",
                span { class: "ui-progress-steps-label", {progress.step_label()} }
                span { class: "ui-progress-steps-percent", {progress.percent_label()} }
            }
            div {
                class: "ui-progress-steps-track",
                role: "progressbar",
                "aria-valuemin": "0",
                "aria-valuemax": "100",
                "aria-valuenow": "{percent.round()}",
                div { class: "ui-progress-steps-fill", style: "width: {percent}%" }
            }
            if !labels.is_empty() {
                ol { class: "ui-progress-steps-list",
                    for (index, label) in labels.iter().enumerate() {
                        li {
                            key: "{index}",
                            "data-state": step_state(index, current),
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}

fn step_state(index: usize, current: usize) -> &'static str {
    match index.cmp(&current) {
        std::cmp::Ordering::Less => "complete",
        std::cmp::Ordering::Equal => "current",
        std::cmp::Ordering::Greater => "upcoming",
    }
}
