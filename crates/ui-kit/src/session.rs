//! Browser-side listener sessions driven through `document::eval`.
//!
//! The script for a session attaches one listener per [`ListenerSpec`],
//! reports events back as [`SessionEvent`] JSON, and waits for a stop
//! message before removing exactly the listeners it attached.

use std::cell::RefCell;
use std::fmt::Write as _;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::document::Eval;
use dioxus::prelude::*;
use dioxus::core::Task;
use ui_types::{ListenerSpec, ScopedSession, SessionEvent, SessionHost, SessionKind};

static NEXT_ELEMENT_ID: AtomicUsize = AtomicUsize::new(0);

/// A DOM id that is stable for the lifetime of the calling component.
pub fn use_element_id(prefix: &str) -> String {
    let prefix = prefix.to_string();
    use_hook(move || format!("{prefix}-{}", NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed)))
}

/// Move keyboard focus to a mounted element once the current event is done.
pub(crate) fn focus_later(target: Rc<MountedData>) {
    spawn(async move {
        if let Err(err) = target.set_focus(true).await {
            tracing::debug!(?err, "could not move focus");
        }
    });
}

/// Elements a session script looks up by id.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionTargets {
    /// A range track, measured once when the drag starts.
    Track { track_id: String },
    /// An overlay: `root_id` wraps trigger and panel for outside-click checks.
    Overlay {
        root_id: String,
        trigger_id: String,
        panel_id: String,
    },
}

/// JS for the handler bound to `event`.
fn handler_body(event: &str) -> &'static str {
    match event {
        "pointermove" => "(e) => dioxus.send({ kind: \"pointer_move\", client_x: e.clientX })",
        "pointerup" | "pointercancel" => "() => dioxus.send({ kind: \"pointer_up\" })",
        "resize" | "scroll" => "() => measure()",
        "pointerdown" => {
            "(e) => { if (root && !root.contains(e.target)) dioxus.send({ kind: \"outside_pointer\" }); }"
        }
        "keydown" => "(e) => { if (e.key === \"Escape\") dioxus.send({ kind: \"escape\" }); }",
        _ => "() => {}",
    }
}

fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Build the eval script that owns `listeners` for one session.
pub fn session_script(listeners: &[ListenerSpec], targets: &SessionTargets) -> String {
    let mut js = String::new();
    js.push_str(
        "const rectOf = (el) => { const r = el.getBoundingClientRect(); \
         return { top: r.top, left: r.left, right: r.right, bottom: r.bottom, width: r.width, height: r.height }; };\n",
    );

    match targets {
        SessionTargets::Track { track_id } => {
            let _ = writeln!(js, "const track = document.getElementById({});", js_string(track_id));
            js.push_str("const root = track;\n");
            js.push_str("const measure = () => {};\n");
        }
        SessionTargets::Overlay {
            root_id,
            trigger_id,
            panel_id,
        } => {
            let _ = writeln!(js, "const root = document.getElementById({});", js_string(root_id));
            let _ = writeln!(
                js,
                "const trigger = document.getElementById({});",
                js_string(trigger_id)
            );
            let _ = writeln!(js, "const panel = document.getElementById({});", js_string(panel_id));
            js.push_str(
                "const measure = () => {\n\
                 \x20 if (!trigger || !panel) return;\n\
                 \x20 dioxus.send({ kind: \"layout\", geometry: {\n\
                 \x20   viewport: { width: window.innerWidth, height: window.innerHeight },\n\
                 \x20   trigger: rectOf(trigger),\n\
                 \x20   panel: { width: panel.scrollWidth, height: panel.scrollHeight },\n\
                 \x20 } });\n\
                 };\n",
            );
        }
    }

    js.push_str("const bindings = [\n");
    for listener in listeners {
        let _ = writeln!(
            js,
            "  [{}, {}, {}, {}],",
            listener.target.as_js(),
            js_string(listener.event),
            handler_body(listener.event),
            listener.capture
        );
    }
    js.push_str("];\n");
    js.push_str("for (const [target, name, handler, capture] of bindings) target.addEventListener(name, handler, capture);\n");

    match targets {
        SessionTargets::Track { .. } => {
            js.push_str("if (track) dioxus.send({ kind: \"track_measured\", rect: rectOf(track) });\n");
        }
        SessionTargets::Overlay { .. } => js.push_str("measure();\n"),
    }

    js.push_str("await dioxus.recv();\n");
    js.push_str("for (const [target, name, handler, capture] of bindings) target.removeEventListener(name, handler, capture);\n");
    js
}

/// [`SessionHost`] that runs [`session_script`] through `document::eval`
/// and pumps its messages into `on_event` on a Dioxus task.
pub struct EvalHost {
    targets: SessionTargets,
    on_event: Callback<SessionEvent>,
    eval: Option<Eval>,
    pump: Option<Task>,
}

impl EvalHost {
    pub fn new(targets: SessionTargets, on_event: Callback<SessionEvent>) -> Self {
        Self {
            targets,
            on_event,
            eval: None,
            pump: None,
        }
    }
}

impl SessionHost for EvalHost {
    fn install(&mut self, kind: SessionKind, listeners: &[ListenerSpec]) {
        let eval = document::eval(&session_script(listeners, &self.targets));
        let mut receiver = eval.clone();
        let on_event = self.on_event;
        self.pump = Some(spawn(async move {
            loop {
                match receiver.recv::<SessionEvent>().await {
                    Ok(event) => on_event.call(event),
                    Err(err) => {
                        tracing::debug!(session = kind.as_str(), ?err, "session channel closed");
                        break;
                    }
                }
            }
        }));
        self.eval = Some(eval);
    }

    fn uninstall(&mut self, kind: SessionKind) {
        if let Some(pump) = self.pump.take() {
            pump.cancel();
        }
        if let Some(eval) = self.eval.take() {
            if let Err(err) = eval.send("stop") {
                tracing::warn!(session = kind.as_str(), ?err, "failed to stop session listeners");
            }
        }
    }
}

/// Holder for at most one live session per component.
///
/// Starting a new session ends the previous one; the slot ends whatever it
/// holds when the owning component unmounts.
#[derive(Clone, Default)]
pub struct SessionSlot(Rc<RefCell<Option<ScopedSession<EvalHost>>>>);

impl SessionSlot {
    pub fn begin(&self, kind: SessionKind, targets: SessionTargets, on_event: Callback<SessionEvent>) {
        self.end();
        let session = ScopedSession::begin(EvalHost::new(targets, on_event), kind);
        *self.0.borrow_mut() = Some(session);
    }

    pub fn end(&self) {
        let session = self.0.borrow_mut().take();
        drop(session);
    }

    pub fn is_active(&self) -> bool {
        self.0
            .borrow()
            .as_ref()
            .map(|s| s.is_active())
            .unwrap_or(false)
    }
}

/// A [`SessionSlot`] tied to the calling component's lifetime.
pub fn use_session_slot() -> SessionSlot {
    let slot = use_hook(SessionSlot::default);
    let on_unmount = slot.clone();
    use_drop(move || on_unmount.end());
    slot
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlay_targets() -> SessionTargets {
        SessionTargets::Overlay {
            root_id: "menu-1".into(),
            trigger_id: "menu-1-trigger".into(),
            panel_id: "menu-1-panel".into(),
        }
    }

    #[test]
    fn overlay_script_adds_and_removes_every_listener() {
        let listeners = SessionKind::Overlay.listeners();
        let js = session_script(listeners, &overlay_targets());
        for listener in listeners {
            assert!(js.contains(&format!("\"{}\"", listener.event)), "{}", listener.event);
        }
        assert_eq!(js.matches("addEventListener").count(), 1);
        assert_eq!(js.matches("removeEventListener").count(), 1);
        let add = js.find("addEventListener").unwrap();
        let stop = js.find("await dioxus.recv()").unwrap();
        let remove = js.find("removeEventListener").unwrap();
        assert!(add < stop && stop < remove);
    }

    #[test]
    fn overlay_scroll_binding_is_captured_on_window() {
        let js = session_script(SessionKind::Overlay.listeners(), &overlay_targets());
        assert!(js.contains("[window, \"scroll\", () => measure(), true]"));
    }

    #[test]
    fn drag_script_reports_track_and_pointer() {
        let js = session_script(
            SessionKind::Drag.listeners(),
            &SessionTargets::Track {
                track_id: "slider-3-track".into(),
            },
        );
        assert!(js.contains("document.getElementById(\"slider-3-track\")"));
        assert!(js.contains("track_measured"));
        assert!(js.contains("pointer_move"));
        assert!(js.contains("[document, \"pointercancel\""));
    }

    #[test]
    fn element_ids_are_escaped_as_js_strings() {
        let js = session_script(
            &[],
            &SessionTargets::Track {
                track_id: "a\"b".into(),
            },
        );
        assert!(js.contains(r#"document.getElementById("a\"b")"#));
    }
}
