//! Vexel Script API
//!
//! The script-facing capability surface of the Vexel engine: typed facades
//! that forward script calls across an opaque native boundary, plus the
//! declarative node-descriptor registry an external visual-scripting editor
//! reflects over to build its palette.
//!
//! # Architecture
//!
//! - **NativeCalls** (`interop`): trait with one operation per native entry
//!   point; its signature shape is the marshaling contract
//! - **Adapters** (`adapters`): swappable backends implementing `NativeCalls`
//!   (in-memory double, C ABI behind the `ffi` feature)
//! - **Facades** (`api`): per-domain pass-through wrappers (Scene, Input,
//!   Physics, Debug, Log, Core, Animation) that rewrap raw handles into typed
//!   values on the way out
//! - **NodeRegistry** (`descriptor`): startup-built metadata describing the
//!   editor-callable subset of the surface; pure metadata, no runtime effect
//!   on the call path
//!
//! This layer holds no mutable state of its own and performs no validity
//! checks beyond the sentinel rules; entity and resource lifetime belong to
//! the native layer. The call model is single-threaded and synchronous:
//! program order in, program order out, nothing queued or retried.

pub mod adapters;
pub mod api;
pub mod codes;
pub mod descriptor;
pub mod error;
pub mod handle;
pub mod interop;
pub mod logging;

pub use api::{
    AnimationApi, CoreApi, DebugDrawApi, Entity, InputApi, LogApi, PhysicsApi, Pose, RaycastHit,
    Rigidbody2DComponent, SceneApi, TagComponent, TransformComponent, editor_registry,
};
pub use codes::{GamepadAxisCode, GamepadButtonCode, GamepadSensorCode, KeyCode, MouseCode};
pub use descriptor::{DefaultValue, NodeDescriptor, NodeRegistry, ParamDescriptor};
pub use error::{Result, SurfaceError};
pub use handle::{ComponentKind, EntityId, PoseHandle, ScriptInstanceRef};
pub use interop::{NativeCalls, RawRaycastHit};

/// Entry point for script execution contexts
///
/// Owns the native backend and hands out borrowed per-domain facades, so a
/// script host configures the backend exactly once and every facade shares
/// it. Facades are cheap to create: they are a borrow and nothing else.
pub struct ScriptSurface {
    calls: Box<dyn NativeCalls>,
}

impl ScriptSurface {
    /// Create a surface over the given backend
    pub fn new(calls: Box<dyn NativeCalls>) -> Self {
        Self { calls }
    }

    /// Scene facade: entity lookup and component access
    pub fn scene(&self) -> SceneApi<'_> {
        SceneApi::new(self.calls.as_ref())
    }

    /// Input facade: keyboard, mouse and gamepad
    pub fn input(&self) -> InputApi<'_> {
        InputApi::new(self.calls.as_ref())
    }

    /// Physics facade: raycasts
    pub fn physics(&self) -> PhysicsApi<'_> {
        PhysicsApi::new(self.calls.as_ref())
    }

    /// Debug drawing facade
    pub fn debug_draw(&self) -> DebugDrawApi<'_> {
        DebugDrawApi::new(self.calls.as_ref())
    }

    /// Log facade
    pub fn log(&self) -> LogApi<'_> {
        LogApi::new(self.calls.as_ref())
    }

    /// Core facade: assertions
    pub fn core(&self) -> CoreApi<'_> {
        CoreApi::new(self.calls.as_ref())
    }

    /// Animation facade: pose evaluation and blending
    pub fn animation(&self) -> AnimationApi<'_> {
        AnimationApi::new(self.calls.as_ref())
    }

    /// Direct access to the backend
    pub fn calls(&self) -> &dyn NativeCalls {
        self.calls.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::HeadlessEngine;

    #[test]
    fn test_surface_hands_out_working_facades() {
        let surface = ScriptSurface::new(Box::new(
            HeadlessEngine::new().with_entity("Player", EntityId(7)),
        ));

        let player = surface.scene().find_entity_by_name("Player").unwrap();
        assert_eq!(player.id(), EntityId(7));
        assert!(!surface.input().is_key_down(KeyCode::Space));
    }
}
