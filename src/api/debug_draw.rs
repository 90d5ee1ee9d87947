//! Debug drawing facade
//!
//! Fire-and-forget gizmo calls: they always "succeed" from this side and
//! report nothing back. Durations are in seconds; the editor default of 0.0
//! (declared on the descriptors) means "this frame only".

use glam::Vec3;

use crate::descriptor::{DefaultValue, NodeDescriptor, NodeRegistry, ParamDescriptor};
use crate::error::Result;
use crate::interop::NativeCalls;

/// Facade over native debug drawing
pub struct DebugDrawApi<'a> {
    calls: &'a dyn NativeCalls,
}

impl<'a> DebugDrawApi<'a> {
    pub fn new(calls: &'a dyn NativeCalls) -> Self {
        Self { calls }
    }

    /// Draw a line segment for `duration` seconds
    pub fn draw_line(&self, start: Vec3, end: Vec3, color: Vec3, duration: f32) {
        self.calls.debug_draw_line(&start, &end, &color, duration);
    }

    /// Draw a wireframe cube for `duration` seconds
    pub fn draw_cube(&self, position: Vec3, size: Vec3, color: Vec3, duration: f32) {
        self.calls.debug_draw_cube(&position, &size, &color, duration);
    }

    /// Draw a wireframe sphere for `duration` seconds
    pub fn draw_sphere(&self, center: Vec3, radius: f32, color: Vec3, duration: f32) {
        self.calls
            .debug_draw_sphere(&center, radius, &color, duration);
    }

    /// Remove all pending debug drawing
    pub fn clear(&self) {
        self.calls.debug_clear();
    }
}

/// Publish the debug drawing surface to the editor reflector
pub(crate) fn register_nodes(registry: &mut NodeRegistry) -> Result<()> {
    registry.register(
        NodeDescriptor::new("debug.draw_line")
            .with_display_name("Draw Debug Line")
            .with_category("Debug")
            .with_keywords("gizmo line")
            .with_param(ParamDescriptor::new("start").with_display_name("Start"))
            .with_param(ParamDescriptor::new("end").with_display_name("End"))
            .with_param(ParamDescriptor::new("color").with_display_name("Color"))
            .with_param(
                ParamDescriptor::new("duration")
                    .with_display_name("Duration")
                    .with_default(DefaultValue::Float(0.0)),
            ),
    )?;
    registry.register(
        NodeDescriptor::new("debug.draw_cube")
            .with_display_name("Draw Debug Cube")
            .with_category("Debug")
            .with_keywords("gizmo box cube")
            .with_param(ParamDescriptor::new("position").with_display_name("Position"))
            .with_param(ParamDescriptor::new("size").with_display_name("Size"))
            .with_param(ParamDescriptor::new("color").with_display_name("Color"))
            .with_param(
                ParamDescriptor::new("duration")
                    .with_display_name("Duration")
                    .with_default(DefaultValue::Float(0.0)),
            ),
    )?;
    registry.register(
        NodeDescriptor::new("debug.draw_sphere")
            .with_display_name("Draw Debug Sphere")
            .with_category("Debug")
            .with_keywords("gizmo sphere")
            .with_param(ParamDescriptor::new("center").with_display_name("Center"))
            .with_param(ParamDescriptor::new("radius").with_display_name("Radius"))
            .with_param(ParamDescriptor::new("color").with_display_name("Color"))
            .with_param(
                ParamDescriptor::new("duration")
                    .with_display_name("Duration")
                    .with_default(DefaultValue::Float(0.0)),
            ),
    )?;
    registry.register(
        NodeDescriptor::new("debug.clear")
            .with_display_name("Clear Debug Drawing")
            .with_category("Debug"),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{HeadlessEngine, RecordedCall};

    #[test]
    fn test_draw_calls_cross_the_boundary_in_order() {
        let engine = HeadlessEngine::new();
        let debug = DebugDrawApi::new(&engine);

        debug.draw_line(Vec3::ZERO, Vec3::X, Vec3::ONE, 0.0);
        debug.draw_sphere(Vec3::Y, 2.0, Vec3::ONE, 1.5);
        debug.clear();

        assert_eq!(
            engine.recorded_calls(),
            vec![
                RecordedCall::DrawLine {
                    start: Vec3::ZERO,
                    end: Vec3::X,
                    color: Vec3::ONE,
                    duration: 0.0,
                },
                RecordedCall::DrawSphere {
                    center: Vec3::Y,
                    radius: 2.0,
                    color: Vec3::ONE,
                    duration: 1.5,
                },
                RecordedCall::ClearDebugDrawing,
            ]
        );
    }

    #[test]
    fn test_duration_default_declared_for_editor() {
        let mut registry = NodeRegistry::new();
        register_nodes(&mut registry).unwrap();

        for method in ["debug.draw_line", "debug.draw_cube", "debug.draw_sphere"] {
            let node = registry.get(method).unwrap();
            assert_eq!(
                node.param("duration").unwrap().default,
                Some(DefaultValue::Float(0.0)),
                "missing duration default on {method}"
            );
        }
    }
}
