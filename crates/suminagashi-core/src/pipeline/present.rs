use super::FrameView;

/// Control directive returned by the renderer callback.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PresentControl {
    Continue,
    Exit,
}

/// Contract implemented by the external rendering collaborator.
///
/// Called once per display tick with the currently published buffers. The
/// implementation uploads/binds and draws; it must not retain the view past
/// the call (the borrow ends with it).
pub trait Present {
    fn present(&mut self, frame: &FrameView<'_>) -> PresentControl;
}
