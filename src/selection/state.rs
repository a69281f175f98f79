//! Editor selection state.

use bevy::prelude::*;

/// The set of entities currently selected in the editor.
///
/// Order is preserved; the first entity is the active one.
#[derive(Resource, Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    entities: Vec<Entity>,
}

impl Selection {
    /// Replaces the selection. Duplicates keep their first position.
    pub fn set(&mut self, entities: impl IntoIterator<Item = Entity>) {
        self.entities.clear();
        for entity in entities {
            if !self.entities.contains(&entity) {
                self.entities.push(entity);
            }
        }
    }

    pub fn clear(&mut self) {
        self.entities.clear();
    }

    /// The active (first selected) entity.
    pub fn active(&self) -> Option<Entity> {
        self.entities.first().copied()
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.entities.contains(&entity)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entities.iter().copied()
    }
}

/// Written whenever [`Selection`] changes.
#[derive(Message, Clone, Debug, PartialEq, Eq)]
pub struct SelectionChanged {
    pub active: Option<Entity>,
}

/// System that turns changes to [`Selection`] into [`SelectionChanged`] messages.
///
/// The state seen on the system's first run is not reported. Later changes
/// are, including a selection replaced wholesale with `insert_resource`.
pub fn notify_selection_changed(
    selection: Res<Selection>,
    mut changed: MessageWriter<SelectionChanged>,
    mut initialized: Local<bool>,
) {
    if !*initialized {
        *initialized = true;
        return;
    }
    if selection.is_changed() {
        changed.write(SelectionChanged {
            active: selection.active(),
        });
    }
}
