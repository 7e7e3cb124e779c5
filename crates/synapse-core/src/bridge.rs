//! Inbound notifications from the host page and the reactions they produce.
//!
//! The host watches its own DOM. It reports what it saw as [`EngineEvent`]s
//! and applies the returned [`Reaction`]s; the engine never inspects the page.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineEvent {
    /// New content appeared in the chat (message, loader, ...).
    Activity,
    /// A typing indicator appeared or disappeared.
    Typing(bool),
    /// Periodic check of whether a typing indicator is on the page. Always
    /// answered, so a class the page stripped gets put back.
    TypingSnapshot(bool),
    /// First click or keypress; arms the idle audio oscillator.
    Gesture,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reaction {
    /// Restart the pulse animation on the decorative overlays.
    PulseDecor,
    /// Toggle the page-level typing flag.
    SetTyping(bool),
}

/// What the host learned about one node added by a DOM mutation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AddedNode {
    pub is_element: bool,
    /// The element itself matches a typing-indicator selector.
    pub matches_typing: bool,
    /// A descendant matches a typing-indicator selector.
    pub contains_typing: bool,
}

impl AddedNode {
    #[inline]
    pub fn shows_typing(&self) -> bool {
        self.is_element && (self.matches_typing || self.contains_typing)
    }
}

/// Events to deliver for one batch of mutation records.
///
/// Any added node counts as activity (text nodes included); typing is only
/// reported as starting here, the periodic poll reports it stopping.
pub fn classify<I>(added: I) -> Vec<EngineEvent>
where
    I: IntoIterator<Item = AddedNode>,
{
    let mut saw_any = false;
    let mut typing = false;
    for node in added {
        saw_any = true;
        typing |= node.shows_typing();
    }
    let mut events = Vec::with_capacity(2);
    if saw_any {
        events.push(EngineEvent::Activity);
    }
    if typing {
        events.push(EngineEvent::Typing(true));
    }
    events
}
