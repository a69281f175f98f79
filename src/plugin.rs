//! Plugin for the editor tools.
use bevy::prelude::*;

use crate::focus::{AutoFocus, ToggleAutoFocus, focus_on_selection, toggle_auto_focus};
use crate::selection::{
    MeshSearch, PickMeshNameFromSelection, SelectMeshesByName, Selection, SelectionChanged,
    notify_selection_changed, pick_mesh_name_from_selection, select_meshes_by_name,
};

/// System set for all editor tool systems.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct EditorToolsSystems;

/// Plugin that adds selection, mesh search, auto-focus and texture export
/// support to Bevy.
///
/// This plugin registers:
/// - [`Selection`], [`MeshSearch`] and [`AutoFocus`] resources
/// - Request messages for every tool, answered in [`Update`]
/// - [`ExportSettings`](crate::export::ExportSettings) and the export systems
///   (with the `file_export` feature)
///
/// Resources inserted before the plugin is added are kept.
///
/// # Example
/// ```ignore
/// use bevy::prelude::*;
/// use bevy_splat_tools::prelude::*;
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .insert_resource(ExportSettings::new("assets/terrain"))
///     .add_plugins(EditorToolsPlugin)
///     .run();
/// ```
pub struct EditorToolsPlugin;

impl Plugin for EditorToolsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Selection>()
            .init_resource::<MeshSearch>()
            .init_resource::<AutoFocus>()
            .add_message::<SelectionChanged>()
            .add_message::<SelectMeshesByName>()
            .add_message::<PickMeshNameFromSelection>()
            .add_message::<ToggleAutoFocus>()
            .add_systems(
                Update,
                (
                    (
                        (select_meshes_by_name, pick_mesh_name_from_selection).chain(),
                        toggle_auto_focus,
                    ),
                    notify_selection_changed,
                    focus_on_selection,
                )
                    .chain()
                    .in_set(EditorToolsSystems),
            );

        #[cfg(feature = "file_export")]
        {
            use crate::export::{
                ExportComposite, ExportSettings, ExportSplatmap, TextureExported,
                export_composites_on_request, export_splatmaps_on_request,
            };

            app.init_resource::<ExportSettings>()
                .add_message::<ExportSplatmap>()
                .add_message::<ExportComposite>()
                .add_message::<TextureExported>()
                .add_systems(
                    Update,
                    (export_splatmaps_on_request, export_composites_on_request)
                        .in_set(EditorToolsSystems),
                );
        }
    }
}
