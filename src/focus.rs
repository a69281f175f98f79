//! Camera auto-focus on selection changes.
//!
//! When [`AutoFocus`] is enabled, every [`FocusCamera`] is moved to frame
//! the active entity whenever the selection changes. The camera keeps its
//! viewing direction and backs off along it by [`AutoFocus::distance`].

use bevy::prelude::*;

use crate::selection::SelectionChanged;

/// Auto-focus configuration.
#[derive(Resource, Clone, Debug)]
pub struct AutoFocus {
    /// Whether selection changes move the camera.
    /// Default: false
    pub enabled: bool,

    /// Distance kept between the camera and the focused entity.
    /// Default: 10.0
    pub distance: f32,
}

impl Default for AutoFocus {
    fn default() -> Self {
        Self {
            enabled: false,
            distance: 10.0,
        }
    }
}

impl AutoFocus {
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_distance(mut self, distance: f32) -> Self {
        self.distance = distance;
        self
    }

    /// Flips [`enabled`](Self::enabled) and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }
}

/// Toggle [`AutoFocus::enabled`].
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct ToggleAutoFocus;

/// Marker for cameras moved by auto-focus.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct FocusCamera;

/// Camera transform that looks at `target` from `distance` away, keeping the
/// forward direction of `camera`.
pub fn framing_transform(camera: &Transform, target: Vec3, distance: f32) -> Transform {
    let forward = camera.forward();
    let mut framed = *camera;
    framed.translation = target - forward * distance;
    framed
}

/// System that handles [`ToggleAutoFocus`] requests.
pub fn toggle_auto_focus(mut requests: MessageReader<ToggleAutoFocus>, mut focus: ResMut<AutoFocus>) {
    for _ in requests.read() {
        let enabled = focus.toggle();
        info!("Auto focus {}", if enabled { "enabled" } else { "disabled" });
    }
}

/// System that frames the active entity after a selection change.
pub fn focus_on_selection(
    mut changes: MessageReader<SelectionChanged>,
    focus: Res<AutoFocus>,
    targets: Query<&GlobalTransform>,
    mut cameras: Query<&mut Transform, With<FocusCamera>>,
) {
    // Only the latest change matters.
    let Some(change) = changes.read().last() else {
        return;
    };
    if !focus.enabled {
        return;
    }
    let Some(target) = change
        .active
        .and_then(|entity| targets.get(entity).ok())
        .map(GlobalTransform::translation)
    else {
        return;
    };

    for mut transform in &mut cameras {
        *transform = framing_transform(&transform, target, focus.distance);
    }
}
