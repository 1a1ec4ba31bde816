// Press-drag-release tracking

use glam::IVec2;

/// Offset between the pointer and the window origin, captured on press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    offset: IVec2,
}

impl DragSession {
    /// Start a drag with the pointer at `local_pointer` inside the window
    pub fn begin(local_pointer: IVec2) -> Self {
        Self {
            offset: local_pointer,
        }
    }

    /// Window origin that keeps the grabbed point under the pointer
    pub fn window_origin(&self, root_pointer: IVec2) -> IVec2 {
        root_pointer - self.offset
    }
}
