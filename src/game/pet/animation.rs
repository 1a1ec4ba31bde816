// Walk cycle animation

use super::state::Facing;

/// Looping frame counter for the walk cycle
#[derive(Debug, Clone)]
pub struct WalkCycle {
    /// Number of frames in the cycle
    frame_count: usize,
    /// Frame that will be shown on the next tick
    current_frame: usize,
}

impl WalkCycle {
    /// Create a walk cycle. A cycle always has at least one frame.
    pub fn new(frame_count: usize) -> Self {
        Self {
            frame_count: frame_count.max(1),
            current_frame: 0,
        }
    }

    /// Return the frame to display and move on to the next one
    pub fn advance(&mut self) -> usize {
        let shown = self.current_frame;
        self.current_frame = (self.current_frame + 1) % self.frame_count;
        shown
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }
}

/// Which kind of image the pet is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pose {
    Standing,
    Walking(usize),
}

/// Data needed to pick the image for the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRef {
    pub pose: Pose,
    pub facing: Facing,
}

impl FrameRef {
    pub fn standing(facing: Facing) -> Self {
        Self {
            pose: Pose::Standing,
            facing,
        }
    }

    pub fn walking(frame_index: usize, facing: Facing) -> Self {
        Self {
            pose: Pose::Walking(frame_index),
            facing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_visits_every_frame_in_order() {
        let mut cycle = WalkCycle::new(4);
        let shown: Vec<usize> = (0..9).map(|_| cycle.advance()).collect();
        assert_eq!(shown, vec![0, 1, 2, 3, 0, 1, 2, 3, 0]);
        assert_eq!(cycle.advance(), 1);
    }

    #[test]
    fn test_cycle_stays_in_range() {
        for count in 1..7 {
            let mut cycle = WalkCycle::new(count);
            for _ in 0..50 {
                assert!(cycle.advance() < count);
            }
        }
    }

    #[test]
    fn test_empty_cycle_has_one_frame() {
        let mut cycle = WalkCycle::new(0);
        assert_eq!(cycle.frame_count(), 1);
        assert_eq!(cycle.advance(), 0);
        assert_eq!(cycle.advance(), 0);
    }

    #[test]
    fn test_frame_refs() {
        let frame = FrameRef::walking(2, Facing::Left);
        assert_eq!(frame.pose, Pose::Walking(2));
        assert_eq!(FrameRef::standing(Facing::Right).pose, Pose::Standing);
    }
}
