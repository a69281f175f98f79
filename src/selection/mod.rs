//! Editor selection and mesh search.

mod mesh_search;
mod state;

pub use mesh_search::{
    MeshSearch, PickMeshNameFromSelection, SelectMeshesByName, matches_query, mesh_name,
    pick_mesh_name_from_selection, select_meshes_by_name,
};
pub use state::{Selection, SelectionChanged, notify_selection_changed};
