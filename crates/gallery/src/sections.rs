//! One component per gallery section. Each pairs a live demo with the
//! snippet that produces it.

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdPlus, LdSettings, LdStar};
use dioxus_free_icons::Icon;
use ui_kit::*;
use ui_types::options::SelectOption;
use ui_types::UiConfig;

#[component]
fn Section(title: String, snippet: String, children: Element) -> Element {
    rsx! {
        section { class: "gallery-section",
            h2 { "{title}" }
            {children}
            CodeBlock { code: snippet, language: "rust" }
        }
    }
}

#[component]
pub fn Buttons() -> Element {
    let mut loading = use_signal(|| false);
    let mut clicks = use_signal(|| 0u32);

    rsx! {
        Section {
            title: "Buttons and badges",
            snippet: r#"Button { tone: Tone::Primary, start_icon: rsx! { Icon::<LdPlus> { icon: LdPlus } }, "Create" }"#,
            div { class: "gallery-row",
                Button { tone: Tone::Primary, onclick: move |_| clicks += 1,
                    start_icon: rsx! { Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 } },
                    "Create"
                }
                Button { tone: Tone::Secondary, fill: Fill::Outline, "Outline" }
                Button { tone: Tone::Danger, fill: Fill::Text, "Delete" }
                Button { tone: Tone::Ghost, size: ControlSize::Sm, "Ghost" }
                Button {
                    tone: Tone::Success,
                    loading: loading(),
                    onclick: move |_| loading.set(true),
                    "Save"
                }
                Button { disabled: true, "Disabled" }
                GoBackButton {}
            }
            div { class: "gallery-row",
                Badge { tone: Tone::Primary, "Clicked {clicks}" }
                Badge { tone: Tone::Success, fill: BadgeFill::Outline, "Active" }
                Badge { tone: Tone::Warning, size: ControlSize::Sm,
                    icon: rsx! { Icon::<LdStar> { icon: LdStar, width: 12, height: 12 } },
                    "Featured"
                }
            }
            Card { interactive: true,
                CardHeader {
                    CardTitle { "Card" }
                    CardDescription { "Header, content and footer slots." }
                }
                CardContent { "Cards group related content on a raised surface." }
                CardFooter {
                    Button { fill: Fill::Outline, onclick: move |_| loading.set(false), "Reset" }
                }
            }
        }
    }
}

#[component]
pub fn Fields() -> Element {
    let mut name = use_signal(String::new);
    let mut bio = use_signal(String::new);
    let mut quantity = use_signal(|| Some(3.0));
    let mut start = use_signal(String::new);
    let mut attachment = use_signal(String::new);
    let name_error = name.read().trim().is_empty().then(|| "Name is required".to_string());

    rsx! {
        Section {
            title: "Fields",
            snippet: r#"InputField { label: "Name", required: true, error: name_error, value: name(), on_input: move |e: FormEvent| name.set(e.value()) }"#,
            div { class: "gallery-stack",
                InputField {
                    label: "Name",
                    placeholder: "Ada Lovelace",
                    required: true,
                    value: name(),
                    error: name_error,
                    on_input: move |evt: FormEvent| name.set(evt.value()),
                }
                TextareaField {
                    label: "Bio",
                    rows: 3,
                    value: bio(),
                    on_input: move |evt: FormEvent| bio.set(evt.value()),
                }
                NumberField {
                    label: "Quantity",
                    min: 0.0,
                    max: 10.0,
                    value: quantity(),
                    on_value_change: move |v: Option<f64>| quantity.set(v),
                }
                DateField {
                    label: "Start date",
                    min: "2024-01-01",
                    value: start(),
                    icon: rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 16, height: 16 } },
                    on_input: move |evt: FormEvent| start.set(evt.value()),
                }
                FileField {
                    label: "Attachment",
                    accept: "image/*,.pdf",
                    on_change: move |evt: FormEvent| attachment.set(evt.value()),
                }
                if !attachment.read().is_empty() {
                    p { class: "gallery-note", "Selected: {attachment}" }
                }
            }
        }
    }
}

#[component]
pub fn Toggles() -> Element {
    let mut notifications = use_signal(|| true);

    rsx! {
        Section {
            title: "Switches and checkboxes",
            snippet: r#"Switch { checked: on(), on_checked_change: move |v| on.set(v), label: "Notifications" }"#,
            div { class: "gallery-row",
                Switch {
                    checked: notifications(),
                    on_checked_change: move |v: bool| notifications.set(v),
                    label: "Notifications",
                }
                Switch { size: SwitchSize::Small, default_checked: true, label: "Small" }
                Switch { size: SwitchSize::Large, label: "Large" }
                Switch { disabled: true, label: "Disabled" }
            }
            div { class: "gallery-stack",
                Checkbox {
                    label: "Email me about updates",
                    description: "At most one message per week.",
                    default_checked: true,
                }
                Checkbox {
                    label: "Mirrors the notifications switch",
                    checked: notifications(),
                    on_checked_change: move |v: bool| notifications.set(v),
                }
            }
        }
    }
}

#[component]
pub fn Choices() -> Element {
    let mut plan = use_signal(|| "team".to_string());
    let plans = vec![
        RadioOption::new("solo", "Solo").description("One seat, community support."),
        RadioOption::new("team", "Team").description("Up to ten seats."),
        RadioOption::new("enterprise", "Enterprise")
            .description("Talk to sales first.")
            .disabled(),
    ];
    let sizes = vec![
        RadioOption::new("s", "Small"),
        RadioOption::new("m", "Medium"),
        RadioOption::new("l", "Large"),
    ];

    rsx! {
        Section {
            title: "Radio groups",
            snippet: r#"RadioGroup { label: "Plan", layout: RadioLayout::Cards, options: plans, value: plan(), on_value_change: move |v| plan.set(v) }"#,
            div { class: "gallery-stack",
                RadioGroup {
                    label: "Plan",
                    layout: RadioLayout::Cards,
                    required: true,
                    options: plans,
                    value: plan(),
                    on_value_change: move |v: String| plan.set(v),
                }
                RadioGroup { label: "Size", options: sizes, default_value: "m" }
            }
        }
    }
}

#[component]
pub fn PhoneDemo() -> Element {
    let mut phone = use_signal(|| "+254712121212".to_string());

    rsx! {
        Section {
            title: "Phone input",
            snippet: r#"PhoneInput { value: phone(), on_change: move |v| phone.set(v) }"#,
            div { class: "gallery-stack",
                PhoneInput {
                    value: phone(),
                    required: true,
                    on_change: move |v: String| phone.set(v),
                }
                p { class: "gallery-note", "Reported: {phone}" }
                PhoneInput { label: "Uncontrolled", default_country: "US" }
            }
        }
    }
}

#[component]
pub fn CreatableDemo() -> Element {
    let mut options = use_signal(|| {
        ["Rust", "Go", "TypeScript", "Python"]
            .into_iter()
            .map(|name| SelectOption::new(name.to_lowercase(), name))
            .collect::<Vec<_>>()
    });
    let mut language = use_signal(|| vec!["rust".to_string()]);
    let mut tags = use_signal(Vec::<String>::new);

    rsx! {
        Section {
            title: "Creatable select",
            snippet: r#"CreatableSelect { multi: true, options: options(), value: tags(), on_change: move |v| tags.set(v), on_create: move |o| options.push(o) }"#,
            div { class: "gallery-stack",
                CreatableSelect {
                    label: "Language",
                    options: options(),
                    value: language(),
                    on_change: move |v: Vec<String>| language.set(v),
                    on_create: move |o: SelectOption| options.push(o),
                }
                CreatableSelect {
                    label: "Tags",
                    multi: true,
                    placeholder: "Type to add a tag...",
                    options: options(),
                    value: tags(),
                    on_change: move |v: Vec<String>| tags.set(v),
                    on_create: move |o: SelectOption| options.push(o),
                }
            }
        }
    }
}

#[component]
pub fn TabsDemo() -> Element {
    let tabs = vec![
        TabItem::new("overview", "Overview"),
        TabItem::new("activity", "Activity"),
        TabItem::new("archived", "Archived").disabled(),
        TabItem::new("settings", "Settings"),
    ];

    rsx! {
        Section {
            title: "Tabs",
            snippet: r#"Tabs { tabs, content: move |value: String| rsx! { p { "{value}" } } }"#,
            Tabs {
                tabs: tabs.clone(),
                content: move |value: String| rsx! {
                    p { class: "gallery-note", "Showing the {value} panel. Arrow keys skip the disabled tab." }
                },
            }
            Tabs {
                tabs,
                orientation: TabsOrientation::Vertical,
                default_value: "settings",
                content: move |value: String| rsx! {
                    p { class: "gallery-note", "Vertical list, selected: {value}" }
                },
            }
        }
    }
}

#[component]
pub fn Avatars() -> Element {
    rsx! {
        Section {
            title: "Avatars",
            snippet: r#"Avatar { name: "Grace Hopper", presence: Presence::Online }"#,
            div { class: "gallery-row",
                Avatar { name: "Grace Hopper", size: AvatarSize::Xs }
                Avatar { name: "Grace Hopper", presence: Presence::Online, size: AvatarSize::Sm }
                Avatar { name: "Alan Turing", presence: Presence::Away }
                Avatar { initials_text: "rs", shape: AvatarShape::Rounded, size: AvatarSize::Lg }
                Avatar { src: "https://example.invalid/missing.png", name: "Broken Image", size: AvatarSize::Xl }
                Avatar { shape: AvatarShape::Square, presence: Presence::Busy, size: AvatarSize::Xl }
                Avatar { loading: true, size: AvatarSize::Xxl }
            }
        }
    }
}

#[component]
pub fn PaginationDemo() -> Element {
    let config = use_context::<UiConfig>();
    let mut page = use_signal(|| 5u32);

    rsx! {
        Section {
            title: "Pagination",
            snippet: r#"Pagination { current: page(), total: 20, on_page_change: move |p| page.set(p) }"#,
            Pagination {
                current: page(),
                total: 20,
                max_visible: config.pagination.max_visible,
                show_first_last: config.pagination.show_first_last,
                on_page_change: move |p: u32| page.set(p),
            }
            p { class: "gallery-note", "Page {page} of 20" }
        }
    }
}

#[component]
pub fn Overlays() -> Element {
    let config = use_context::<UiConfig>();
    let mut modal_open = use_signal(|| false);
    let mut menu_open = use_signal(|| false);
    let mut last_action = use_signal(|| None::<String>);

    let entries = vec![
        MenuEntry::Label("Document".into()),
        MenuItem::new("rename", "Rename").shortcut("F2").into(),
        MenuItem::new("duplicate", "Duplicate").shortcut("Ctrl+D").into(),
        MenuItem::new("share", "Share").disabled().into(),
        MenuEntry::Separator,
        MenuItem::new("delete", "Delete").destructive().into(),
    ];
    let long_list: Vec<MenuEntry> = (1..=30)
        .map(|n| MenuItem::new(format!("item-{n}"), format!("Item {n}")).into())
        .collect();

    rsx! {
        Section {
            title: "Tooltips, dropdowns and modals",
            snippet: r#"Dropdown { label: "Actions", entries, open: open(), on_open_change: move |v| open.set(v), on_select: move |v| log(v) }"#,
            div { class: "gallery-row",
                Tooltip { text: "Opens settings", side: Side::Top,
                    Button { fill: Fill::Outline, aria_label: "Settings",
                        Icon::<LdSettings> { icon: LdSettings, width: 16, height: 16 }
                    }
                }
                Tooltip { text: "Appears on the right", side: Side::Right,
                    Button { fill: Fill::Text, "Hover me" }
                }
                Dropdown {
                    label: "Actions",
                    entries,
                    open: menu_open(),
                    on_open_change: move |v: bool| menu_open.set(v),
                    on_select: move |value: String| last_action.set(Some(value)),
                    side: config.overlay.side,
                    align: config.overlay.align,
                    offset: config.overlay.offset,
                    variant: DropdownVariant::Primary,
                }
                Dropdown {
                    label: "Long list",
                    entries: long_list,
                    align: Align::End,
                    size: DropdownSize::Sm,
                    variant: DropdownVariant::Outline,
                    on_select: move |value: String| last_action.set(Some(value)),
                }
                Button { tone: Tone::Primary, onclick: move |_| modal_open.set(true), "Open modal" }
            }
            if let Some(action) = last_action() {
                p { class: "gallery-note", "Last menu action: {action}" }
            }
            Modal {
                open: modal_open(),
                on_open_change: move |v: bool| modal_open.set(v),
                title: "Discard draft?",
                description: "The draft will be removed permanently.",
                footer: rsx! {
                    Button { fill: Fill::Outline, onclick: move |_| modal_open.set(false), "Cancel" }
                    Button { tone: Tone::Danger, onclick: move |_| modal_open.set(false), "Discard" }
                },
                p { "Escape, the close button and the backdrop all dismiss this dialog." }
            }
        }
    }
}

#[component]
pub fn SliderDemo() -> Element {
    let config = use_context::<UiConfig>();
    let range = config.range;
    let mut volume = use_signal(move || range.default_value);
    let mut changes = use_signal(|| 0u32);

    rsx! {
        Section {
            title: "Slider",
            snippet: r#"Slider { min: 0.0, max: 100.0, step: 5.0, value: volume(), on_value_change: move |v| volume.set(v) }"#,
            div { class: "gallery-stack",
                Slider {
                    label: "Volume (controlled)",
                    min: range.min,
                    max: range.max,
                    step: range.step,
                    value: volume(),
                    show_value: true,
                    on_value_change: move |v: f64| {
                        volume.set(v);
                        changes += 1;
                    },
                }
                p { class: "gallery-note", "Reported {changes} changes" }
                Slider { label: "Uncontrolled", default_value: 0.4, min: 0.0, max: 1.0, step: 0.1, show_value: true }
                Slider { label: "Disabled", default_value: 30.0, disabled: true }
                Slider { label: "Invalid bounds render inert", min: 10.0, max: 0.0 }
            }
        }
    }
}

#[component]
pub fn Progress() -> Element {
    let mut step = use_signal(|| 1usize);
    let labels: Vec<String> = ["Account", "Profile", "Billing", "Review"]
        .into_iter()
        .map(String::from)
        .collect();
    let total = labels.len();

    rsx! {
        Section {
            title: "Progress steps",
            snippet: r#"ProgressSteps { current: step(), total: 4 }"#,
            ProgressSteps { current: step(), total, labels }
            div { class: "gallery-row",
                Button {
                    fill: Fill::Outline,
                    disabled: step() == 0,
                    onclick: move |_| step -= 1,
                    "Back"
                }
                Button {
                    tone: Tone::Primary,
                    disabled: step() + 1 >= total,
                    onclick: move |_| step += 1,
                    "Next"
                }
            }
        }
    }
}
