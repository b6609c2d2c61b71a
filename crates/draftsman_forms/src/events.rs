use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventType {
    Click,
    DoubleClick,
    TextChanged,
    CheckedChanged,
    SelectedIndexChanged,
    ValueChanged,
    Enter,
    Leave,
    KeyDown,
    KeyUp,
    KeyPress,
    MouseDown,
    MouseUp,
    MouseMove,
    Load,
    /// Any event name the designer does not model explicitly.
    /// Kept verbatim so hand-wired subscriptions survive a round trip.
    Custom(String),
}

impl EventType {
    pub fn from_name(name: &str) -> EventType {
        match name {
            "Click" => EventType::Click,
            "DoubleClick" => EventType::DoubleClick,
            "TextChanged" => EventType::TextChanged,
            "CheckedChanged" => EventType::CheckedChanged,
            "SelectedIndexChanged" => EventType::SelectedIndexChanged,
            "ValueChanged" => EventType::ValueChanged,
            "Enter" => EventType::Enter,
            "Leave" => EventType::Leave,
            "KeyDown" => EventType::KeyDown,
            "KeyUp" => EventType::KeyUp,
            "KeyPress" => EventType::KeyPress,
            "MouseDown" => EventType::MouseDown,
            "MouseUp" => EventType::MouseUp,
            "MouseMove" => EventType::MouseMove,
            "Load" => EventType::Load,
            other => EventType::Custom(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            EventType::Click => "Click",
            EventType::DoubleClick => "DoubleClick",
            EventType::TextChanged => "TextChanged",
            EventType::CheckedChanged => "CheckedChanged",
            EventType::SelectedIndexChanged => "SelectedIndexChanged",
            EventType::ValueChanged => "ValueChanged",
            EventType::Enter => "Enter",
            EventType::Leave => "Leave",
            EventType::KeyDown => "KeyDown",
            EventType::KeyUp => "KeyUp",
            EventType::KeyPress => "KeyPress",
            EventType::MouseDown => "MouseDown",
            EventType::MouseUp => "MouseUp",
            EventType::MouseMove => "MouseMove",
            EventType::Load => "Load",
            EventType::Custom(s) => s.as_str(),
        }
    }

    /// Default handler name for a control's event, e.g. "btn1_Click".
    pub fn default_handler(&self, control_name: &str) -> String {
        format!("{}_{}", control_name, self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventBinding {
    pub event: EventType,
    pub handler: String,
}

impl EventBinding {
    pub fn new(event: EventType, handler: impl Into<String>) -> Self {
        Self {
            event,
            handler: handler.into(),
        }
    }
}

/// Ordered event-name -> handler mapping for one control.
///
/// Source order is preserved so a decode/encode cycle emits subscription
/// statements in the order they appeared. On the wire this is a plain JSON
/// object, e.g. `{"Click": "btn1_Click"}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventMap(Vec<EventBinding>);

impl EventMap {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Bind an event to a handler, replacing an existing binding for the
    /// same event (keys are unique).
    pub fn bind(&mut self, event: EventType, handler: impl Into<String>) {
        let handler = handler.into();
        if let Some(existing) = self.0.iter_mut().find(|b| b.event == event) {
            existing.handler = handler;
        } else {
            self.0.push(EventBinding::new(event, handler));
        }
    }

    pub fn handler(&self, event: &EventType) -> Option<&str> {
        self.0
            .iter()
            .find(|b| &b.event == event)
            .map(|b| b.handler.as_str())
    }

    pub fn contains(&self, event: &EventType) -> bool {
        self.0.iter().any(|b| &b.event == event)
    }

    pub fn unbind(&mut self, event: &EventType) {
        self.0.retain(|b| &b.event != event);
    }

    pub fn iter(&self) -> impl Iterator<Item = &EventBinding> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for EventMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for binding in &self.0 {
            map.serialize_entry(binding.event.as_str(), &binding.handler)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for EventMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EventMapVisitor;

        impl<'de> Visitor<'de> for EventMapVisitor {
            type Value = EventMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of event names to handler names")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut events = EventMap::new();
                while let Some((name, handler)) = access.next_entry::<String, String>()? {
                    events.bind(EventType::from_name(&name), handler);
                }
                Ok(events)
            }
        }

        deserializer.deserialize_map(EventMapVisitor)
    }
}

impl FromIterator<EventBinding> for EventMap {
    fn from_iter<T: IntoIterator<Item = EventBinding>>(iter: T) -> Self {
        let mut map = EventMap::new();
        for binding in iter {
            map.bind(binding.event, binding.handler);
        }
        map
    }
}
