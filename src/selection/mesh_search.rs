//! Selecting entities by the name of the mesh they render.

use bevy::prelude::*;

use super::state::Selection;

/// Text entered to search meshes by name.
#[derive(Resource, Clone, Debug, Default, PartialEq, Eq)]
pub struct MeshSearch {
    /// Case-sensitive substring. Empty matches every named mesh.
    pub query: String,
}

impl MeshSearch {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

/// Select every mesh entity whose mesh name contains [`MeshSearch::query`].
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct SelectMeshesByName;

/// Copy the active entity's mesh name into [`MeshSearch::query`].
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct PickMeshNameFromSelection;

/// Name used to identify the mesh an entity renders.
///
/// Prefers the asset label (e.g. `Mesh0/Primitive0` for glTF sub-assets),
/// then the asset file stem, then the entity's [`Name`]. Runtime-created
/// meshes without a [`Name`] have no name.
pub fn mesh_name(mesh: &Handle<Mesh>, name: Option<&Name>) -> Option<String> {
    if let Some(path) = mesh.path() {
        if let Some(label) = path.label() {
            return Some(label.to_string());
        }
        if let Some(stem) = path.path().file_stem() {
            return Some(stem.to_string_lossy().into_owned());
        }
    }
    name.map(|n| n.as_str().to_string())
}

/// Check if a mesh name matches a search query.
#[inline]
pub fn matches_query(mesh_name: &str, query: &str) -> bool {
    mesh_name.contains(query)
}

/// System that handles [`SelectMeshesByName`] requests.
///
/// Replaces the selection with all matches, ordered by entity.
pub fn select_meshes_by_name(
    mut requests: MessageReader<SelectMeshesByName>,
    search: Res<MeshSearch>,
    meshes: Query<(Entity, &Mesh3d, Option<&Name>)>,
    mut selection: ResMut<Selection>,
) {
    if requests.is_empty() {
        return;
    }
    requests.clear();

    let mut matches: Vec<Entity> = meshes
        .iter()
        .filter(|(_, mesh, name)| {
            mesh_name(&mesh.0, *name).is_some_and(|n| matches_query(&n, &search.query))
        })
        .map(|(entity, _, _)| entity)
        .collect();
    matches.sort();

    info!("Selected {} meshes matching '{}'", matches.len(), search.query);
    selection.set(matches);
}

/// System that handles [`PickMeshNameFromSelection`] requests.
pub fn pick_mesh_name_from_selection(
    mut requests: MessageReader<PickMeshNameFromSelection>,
    selection: Res<Selection>,
    meshes: Query<(&Mesh3d, Option<&Name>)>,
    mut search: ResMut<MeshSearch>,
) {
    if requests.is_empty() {
        return;
    }
    requests.clear();

    let Some(active) = selection.active() else {
        warn!("No active selection to take a mesh name from");
        return;
    };
    let Some(name) = meshes
        .get(active)
        .ok()
        .and_then(|(mesh, name)| mesh_name(&mesh.0, name))
    else {
        warn!("Active entity {} has no named mesh", active);
        return;
    };

    search.query = name;
}
