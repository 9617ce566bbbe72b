#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum ViewerState {
    #[default]
    Idle,         // Nothing moves the frame
    Dragging,     // A pointer or touch contact is rotating the sequence
    Momentum,     // Release velocity is decaying
    AutoRotating, // The timer advances one frame per period
}
