//! Pointer-drag state machine for a single sprite.
//!
//! The sprite is anchored at its top-left corner. While a drag is active
//! every move shifts it by the pointer motion since the previous event.
//! There is no bounds clamping; the sprite can leave the canvas.

use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }

    pub fn offset(self, d: Delta) -> Self {
        Point::new(self.x + d.dx, self.y + d.dy)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = String;

    /// Parses `x,y`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s.split_once(',').ok_or_else(|| format!("expected x,y but got {s:?}"))?;
        let x = x.trim().parse::<f32>().map_err(|e| format!("bad x in {s:?}: {e}"))?;
        let y = y.trim().parse::<f32>().map_err(|e| format!("bad y in {s:?}: {e}"))?;
        Ok(Point::new(x, y))
    }
}

/// Difference between two consecutive pointer positions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Delta {
    pub dx: f32,
    pub dy: f32,
}

impl Delta {
    pub fn between(from: Point, to: Point) -> Self {
        Delta { dx: to.x - from.x, dy: to.y - from.y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Press(Point),
    Move(Point),
    Release(Point),
}

impl PointerEvent {
    pub fn position(&self) -> Point {
        match *self {
            PointerEvent::Press(p) | PointerEvent::Move(p) | PointerEvent::Release(p) => p,
        }
    }
}

impl FromStr for PointerEvent {
    type Err = String;

    /// Parses `press:x,y`, `move:x,y` or `release:x,y`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, pos) = s.split_once(':').ok_or_else(|| format!("expected kind:x,y but got {s:?}"))?;
        let p: Point = pos.parse()?;
        match kind.trim().to_ascii_lowercase().as_str() {
            "press" => Ok(PointerEvent::Press(p)),
            "move" => Ok(PointerEvent::Move(p)),
            "release" => Ok(PointerEvent::Release(p)),
            other => Err(format!("unknown pointer event {other:?}")),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    /// `last` is the pointer position of the previous press or move.
    Dragging { last: Point },
}

impl DragState {
    /// One transition. `hit` says whether the event lies on the sprite and
    /// only matters for presses.
    ///
    /// Returns the next state and the delta to apply to the sprite, if any.
    pub fn step(self, event: PointerEvent, hit: bool) -> (DragState, Option<Delta>) {
        match (self, event) {
            (DragState::Idle, PointerEvent::Press(p)) if hit => (DragState::Dragging { last: p }, None),
            (DragState::Dragging { last }, PointerEvent::Move(p)) => {
                (DragState::Dragging { last: p }, Some(Delta::between(last, p)))
            }
            (DragState::Dragging { .. }, PointerEvent::Release(_)) => (DragState::Idle, None),
            (state, _) => (state, None),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    pub fn last_pointer(&self) -> Option<Point> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { last } => Some(*last),
        }
    }
}

/// A draggable image on a canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    /// top-left corner in canvas coordinates
    pub position: Point,
    pub width: f32,
    pub height: f32,
    state: DragState,
}

impl Sprite {
    pub fn new(position: Point, width: f32, height: f32) -> Self {
        Sprite { position, width, height, state: DragState::Idle }
    }

    /// Half-open hit region `[x, x + w) x [y, y + h)`.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.position.x
            && p.x < self.position.x + self.width
            && p.y >= self.position.y
            && p.y < self.position.y + self.height
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Feed one pointer event, moving the sprite when a drag is active.
    pub fn handle(&mut self, event: PointerEvent) -> Option<Delta> {
        let hit = self.contains(event.position());
        let (next, delta) = self.state.step(event, hit);
        self.state = next;
        if let Some(d) = delta {
            self.position = self.position.offset(d);
        }
        delta
    }
}
