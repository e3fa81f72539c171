//! Обход иерархии scene-объектов

use bevy::prelude::*;

use super::SceneVisibility;

/// Если у root ровно один child - это обёртка, работаем с ним
pub fn collapse_single_child(root: Entity, children: &Query<&Children>) -> Entity {
    match children.get(root) {
        Ok(kids) if kids.len() == 1 => kids[0],
        _ => root,
    }
}

/// Pre-order обход: root + все потомки, скрытые поддеревья пропускаются
///
/// Видимость самого root не проверяется.
pub fn visible_subtree(
    root: Entity,
    children: &Query<&Children>,
    visibility: &Query<&SceneVisibility>,
) -> Vec<Entity> {
    walk_subtree(
        root,
        |entity| {
            children
                .get(entity)
                .map(|kids| {
                    let kids: &[Entity] = kids;
                    kids.to_vec()
                })
                .unwrap_or_default()
        },
        |entity| visibility.get(entity).is_ok_and(|v| !v.is_visible()),
    )
}

/// Обход без привязки к Query (чистая логика, тестируется отдельно)
pub fn walk_subtree(
    root: Entity,
    children_of: impl Fn(Entity) -> Vec<Entity>,
    is_hidden: impl Fn(Entity) -> bool,
) -> Vec<Entity> {
    let mut visited = Vec::new();
    let mut stack = vec![root];

    while let Some(entity) = stack.pop() {
        visited.push(entity);
        for child in children_of(entity).into_iter().rev() {
            if !is_hidden(child) {
                stack.push(child);
            }
        }
    }

    visited
}
