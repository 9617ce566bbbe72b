/// Receives "present frame K" every time the controller accepts a frame change.
///
/// Presenting the same frame twice must be harmless.
pub trait FrameRenderer {
    fn present(&mut self, frame: usize);
}

impl<F: FnMut(usize)> FrameRenderer for F {
    fn present(&mut self, frame: usize) {
        self(frame)
    }
}

/// Drops every signal. Useful when only the index matters.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl FrameRenderer for NullRenderer {
    fn present(&mut self, _frame: usize) {}
}
