#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorPosition {
    pub x: i32,
    pub y: i32,
}

impl CursorPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Latest pointer position for the decorative overlay. Every event replaces the previous one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorTracker {
    position: CursorPosition,
    events: u64,
}

impl CursorTracker {
    pub fn record(&mut self, x: i32, y: i32) {
        self.position = CursorPosition::new(x, y);
        self.events = self.events.saturating_add(1);
    }

    pub fn position(&self) -> CursorPosition {
        self.position
    }

    /// False until the first pointer event, so the overlay never sits at the origin.
    pub fn is_active(&self) -> bool {
        self.events > 0
    }

    pub fn overlay_style(&self) -> String {
        format!("left: {}px; top: {}px", self.position.x, self.position.y)
    }

    pub fn overlay_class(&self) -> &'static str {
        if self.is_active() {
            "custom-cursor active"
        } else {
            "custom-cursor"
        }
    }
}
