//! Animation facade
//!
//! Pose evaluation and blending over opaque pose handles. Not part of the
//! editor-reflected surface: scripts call it directly, so no descriptors are
//! registered here.

use crate::handle::PoseHandle;
use crate::interop::NativeCalls;

/// A computed animation pose held by the native layer
///
/// Valid only within the call chain that produced it (the implicit lifetime
/// of transient resource handles); never retained across frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pose {
    handle: PoseHandle,
}

impl Pose {
    pub(crate) fn new(handle: PoseHandle) -> Self {
        Self { handle }
    }

    /// The underlying handle
    pub fn handle(self) -> PoseHandle {
        self.handle
    }
}

/// Facade over native animation evaluation
pub struct AnimationApi<'a> {
    calls: &'a dyn NativeCalls,
}

impl<'a> AnimationApi<'a> {
    pub fn new(calls: &'a dyn NativeCalls) -> Self {
        Self { calls }
    }

    /// Sample the named animation at a point in time
    pub fn animation_pose(&self, animation: &str, time: f32) -> Pose {
        Pose::new(self.calls.animation_get_pose(animation, time))
    }

    /// Blend two poses; `weight` 0.0 is all `base`, 1.0 all `blend`
    pub fn blend_poses(&self, base: Pose, blend: Pose, weight: f32) -> Pose {
        Pose::new(
            self.calls
                .animation_blend_poses(base.handle(), blend.handle(), weight),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{HeadlessEngine, RecordedCall};

    #[test]
    fn test_pose_chain() {
        let engine = HeadlessEngine::new();
        let animation = AnimationApi::new(&engine);

        let run = animation.animation_pose("Run", 0.25);
        let idle = animation.animation_pose("Idle", 0.25);
        let blended = animation.blend_poses(run, idle, 0.5);

        assert_ne!(blended, run);
        assert_eq!(
            engine.recorded_calls(),
            vec![
                RecordedCall::GetAnimationPose {
                    animation: "Run".to_string(),
                    time: 0.25,
                },
                RecordedCall::GetAnimationPose {
                    animation: "Idle".to_string(),
                    time: 0.25,
                },
                RecordedCall::BlendPoses {
                    base: run.handle(),
                    blend: idle.handle(),
                    weight: 0.5,
                },
            ]
        );
    }
}
