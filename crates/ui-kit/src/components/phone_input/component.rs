use dioxus::prelude::*;
use ui_types::phone::{self, Country, PhoneNumber, COUNTRIES};

use crate::session::use_element_id;

/// Phone number input with a country dial-code picker.
///
/// Reports the full number (`+<dial code><digits>`) through `on_change`.
/// With `value` set the input is controlled and the country follows the
/// value's prefix; otherwise it tracks its own digits.
#[component]
pub fn PhoneInput(
    #[props(default)] value: Option<String>,
    #[props(default)] on_change: EventHandler<String>,
    #[props(default = "KE".to_string())] default_country: String,
    #[props(default = Some("Phone Number".to_string()))] label: Option<String>,
    #[props(default = "712 121 212".to_string())] placeholder: String,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    #[props(default)] error: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let id = use_element_id("ui-phone");
    let mut country = use_signal(|| phone::country_or_fallback(&default_country));
    let mut national = use_signal(String::new);
    let controlled = value.is_some();

    let number = match &value {
        Some(full) => PhoneNumber::parse(full, country()),
        None => PhoneNumber::new(country(), &national.read()),
    };
    let selected_code = number.country.code;
    let display = number.display();
    let digits = number.national.clone();
    let message = error
        .clone()
        .or_else(|| number.error().map(|err| err.message));
    let invalid = message.is_some();
    let message_id = format!("{id}-error");
    let described_by = invalid.then(|| message_id.clone());

    let merged = dioxus_primitives::merge_attributes(vec![
        vec![Attribute::new("class", "ui-phone-input", None, false)],
        attributes,
    ]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { "data-invalid": invalid, "data-disabled": disabled, ..merged,
            if let Some(text) = label {
                label { class: "ui-phone-label", r#for: "{id}",
                    "{text}"
                    if required {
                        span { class: "ui-phone-required", "aria-hidden": "true", "*" }
                    }
                }
            }
            div { class: "ui-phone-row",
                select {
                    class: "ui-phone-country",
                    "aria-label": "Country code",
                    disabled,
                    onchange: move |evt: FormEvent| {
                        let Some(next) = phone::find_country(&evt.value()) else {
                            return;
                        };
                        country.set(next);
                        on_change.call(PhoneNumber::new(next, &digits).full());
                    },
                    for entry in COUNTRIES.iter() {
                        option {
                            key: "{entry.code}",
                            value: entry.code,
                            selected: entry.code == selected_code,
                            title: entry.name,
                            {country_label(entry)}
                        }
                    }
                }
                input {
                    id: "{id}",
                    class: "ui-phone-number",
                    r#type: "tel",
                    inputmode: "tel",
                    autocomplete: "tel-national",
                    value: display,
                    placeholder,
                    required,
                    disabled,
                    "aria-invalid": invalid,
                    "aria-describedby": described_by,
                    oninput: move |evt: FormEvent| {
                        let next = PhoneNumber::new(*country.peek(), &evt.value());
                        if !controlled {
                            national.set(next.national.clone());
                        }
                        on_change.call(next.full());
                    },
                }
            }
            if let Some(text) = message {
                p { class: "ui-phone-error", id: "{message_id}", role: "alert", "{text}" }
            }
        }
    }
}

fn country_label(country: &Country) -> String {
    format!("{} {}", country.flag(), country.dial_code)
}
