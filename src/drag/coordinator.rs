//! Pointer gesture interpretation
//!
//! Press, move and release events become either a click (select), a move
//! intent, or a cancellation. The coordinator only sees plain geometry; the
//! renderer supplies drop zones as rectangles.

use crate::schemas::StageKey;

/// Default distance a press must travel before it becomes a drag
pub const DEFAULT_DRAG_THRESHOLD: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Axis-aligned rectangle, right and bottom edges exclusive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }
}

/// A stage column that accepts drops
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropZone {
    pub stage: StageKey,
    pub bounds: Bounds,
}

/// Request to move a card between columns
#[derive(Debug, Clone, PartialEq)]
pub struct MoveIntent {
    pub item_id: String,
    pub from: StageKey,
    pub to: StageKey,
}

/// What a pointer event resolved to
#[derive(Debug, Clone, PartialEq)]
pub enum DragEvent {
    None,
    /// Press and release without crossing the threshold
    Select(String),
    /// The press just crossed the threshold
    Started(String),
    Intent(MoveIntent),
    Cancelled,
}

/// The card currently following the pointer
#[derive(Debug, Clone, PartialEq)]
pub struct DragOverlay {
    pub item_id: String,
    pub source_stage: StageKey,
    pub position: Point,
}

#[derive(Debug, Clone, PartialEq)]
enum Gesture {
    Idle,
    Pressed {
        item_id: String,
        stage: StageKey,
        origin: Point,
    },
    Dragging(DragOverlay),
}

#[derive(Debug, Clone)]
pub struct DragCoordinator {
    threshold: f64,
    disabled: bool,
    gesture: Gesture,
}

impl DragCoordinator {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            disabled: false,
            gesture: Gesture::Idle,
        }
    }

    /// Press on a card. `stage` is the card's own stage tag.
    pub fn pointer_down(&mut self, item_id: impl Into<String>, stage: StageKey, at: Point) {
        if self.disabled {
            return;
        }
        self.gesture = Gesture::Pressed {
            item_id: item_id.into(),
            stage,
            origin: at,
        };
    }

    pub fn pointer_move(&mut self, at: Point) -> DragEvent {
        match &mut self.gesture {
            Gesture::Idle => DragEvent::None,
            Gesture::Pressed {
                item_id,
                stage,
                origin,
            } => {
                if origin.distance(&at) < self.threshold {
                    return DragEvent::None;
                }
                let overlay = DragOverlay {
                    item_id: item_id.clone(),
                    source_stage: *stage,
                    position: at,
                };
                let started = overlay.item_id.clone();
                self.gesture = Gesture::Dragging(overlay);
                DragEvent::Started(started)
            }
            Gesture::Dragging(overlay) => {
                overlay.position = at;
                DragEvent::None
            }
        }
    }

    /// Release the pointer and resolve the gesture against the drop zones.
    pub fn pointer_up(&mut self, at: Point, zones: &[DropZone]) -> DragEvent {
        match std::mem::replace(&mut self.gesture, Gesture::Idle) {
            Gesture::Idle => DragEvent::None,
            Gesture::Pressed { item_id, .. } => DragEvent::Select(item_id),
            Gesture::Dragging(overlay) => {
                let target = zones.iter().find(|zone| zone.bounds.contains(at));
                match target {
                    Some(zone) if zone.stage != overlay.source_stage => {
                        DragEvent::Intent(MoveIntent {
                            item_id: overlay.item_id,
                            from: overlay.source_stage,
                            to: zone.stage,
                        })
                    }
                    _ => DragEvent::Cancelled,
                }
            }
        }
    }

    /// Abort the current gesture, if any
    pub fn cancel(&mut self) -> DragEvent {
        match std::mem::replace(&mut self.gesture, Gesture::Idle) {
            Gesture::Dragging(_) => DragEvent::Cancelled,
            _ => DragEvent::None,
        }
    }

    /// Disabling drops any gesture in progress
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.gesture = Gesture::Idle;
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn overlay(&self) -> Option<&DragOverlay> {
        match &self.gesture {
            Gesture::Dragging(overlay) => Some(overlay),
            _ => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.overlay().is_some()
    }
}

impl Default for DragCoordinator {
    fn default() -> Self {
        Self::new(DEFAULT_DRAG_THRESHOLD)
    }
}
