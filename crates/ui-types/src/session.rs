//! Scoped ownership of global event listeners.
//!
//! A drag or an open overlay needs listeners on `document`/`window` for as
//! long as the interaction lasts. [`ScopedSession`] installs them when the
//! interaction begins and removes them on every exit path: explicit
//! [`ScopedSession::end`], replacement, or drop during unmount.

use serde::{Deserialize, Serialize};

use crate::geometry::{Rect, ViewportGeometry};

/// Where a global listener is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerTarget {
    Document,
    Window,
}

impl ListenerTarget {
    pub fn as_js(&self) -> &'static str {
        match self {
            ListenerTarget::Document => "document",
            ListenerTarget::Window => "window",
        }
    }
}

/// One global listener a session needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerSpec {
    pub target: ListenerTarget,
    pub event: &'static str,
    /// Capture phase; used for `scroll` so scrolls of any ancestor are seen.
    pub capture: bool,
}

const DRAG_LISTENERS: &[ListenerSpec] = &[
    ListenerSpec {
        target: ListenerTarget::Document,
        event: "pointermove",
        capture: false,
    },
    ListenerSpec {
        target: ListenerTarget::Document,
        event: "pointerup",
        capture: false,
    },
    ListenerSpec {
        target: ListenerTarget::Document,
        event: "pointercancel",
        capture: false,
    },
];

const OVERLAY_LISTENERS: &[ListenerSpec] = &[
    ListenerSpec {
        target: ListenerTarget::Window,
        event: "resize",
        capture: false,
    },
    ListenerSpec {
        target: ListenerTarget::Window,
        event: "scroll",
        capture: true,
    },
    ListenerSpec {
        target: ListenerTarget::Document,
        event: "pointerdown",
        capture: false,
    },
    ListenerSpec {
        target: ListenerTarget::Document,
        event: "keydown",
        capture: false,
    },
];

/// The two kinds of interaction that hold global listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    Drag,
    Overlay,
}

impl SessionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionKind::Drag => "drag",
            SessionKind::Overlay => "overlay",
        }
    }

    pub fn listeners(&self) -> &'static [ListenerSpec] {
        match self {
            SessionKind::Drag => DRAG_LISTENERS,
            SessionKind::Overlay => OVERLAY_LISTENERS,
        }
    }
}

/// Messages the browser side of a session reports back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SessionEvent {
    /// The drag track's bounding box, measured once when the drag starts.
    TrackMeasured { rect: Rect },
    PointerMove { client_x: f64 },
    /// Pointer released or cancelled; the drag is over.
    PointerUp,
    /// Fresh geometry after open, resize or scroll.
    Layout { geometry: ViewportGeometry },
    Escape,
    /// A pointer went down outside both trigger and panel.
    OutsidePointer,
}

/// Backend that actually attaches listeners.
///
/// `install` is called once per session with the full listener set;
/// `uninstall` must remove everything `install` attached and tolerate
/// being called when nothing is attached.
pub trait SessionHost {
    fn install(&mut self, kind: SessionKind, listeners: &[ListenerSpec]);
    fn uninstall(&mut self, kind: SessionKind);
}

/// Guard that owns a session's listeners.
pub struct ScopedSession<H: SessionHost> {
    host: H,
    kind: SessionKind,
    active: bool,
}

impl<H: SessionHost> ScopedSession<H> {
    /// Install the listeners for `kind` and return the owning guard.
    pub fn begin(mut host: H, kind: SessionKind) -> Self {
        host.install(kind, kind.listeners());
        tracing::debug!(session = kind.as_str(), "session started");
        Self {
            host,
            kind,
            active: true,
        }
    }

    pub fn kind(&self) -> SessionKind {
        self.kind
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Remove the listeners. Calling this more than once is a no-op.
    pub fn end(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        self.host.uninstall(self.kind);
        tracing::debug!(session = self.kind.as_str(), "session ended");
    }
}

impl<H: SessionHost> Drop for ScopedSession<H> {
    fn drop(&mut self) {
        self.end();
    }
}
