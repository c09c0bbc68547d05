//! Drag-and-drop gesture handling for the board

mod coordinator;

pub use coordinator::{
    Bounds, DragCoordinator, DragEvent, DragOverlay, DropZone, MoveIntent, Point,
    DEFAULT_DRAG_THRESHOLD,
};
