//! Tabs systems: регистрация hideable панелей, тик анимаций, interaction locks

use bevy::prelude::*;

use super::{Hideable, TabRegistry};
use crate::attachment::AttachmentPanel;
use crate::inspect::InspectButton;
use crate::shared::{InteractionLockChanged, InteractionLocks};

/// Hideable панели регистрируются при появлении и снимаются при удалении
pub fn track_hideable_panels(
    mut added: Query<(Entity, &mut Hideable), Added<Hideable>>,
    mut removed: RemovedComponents<Hideable>,
    mut registry: ResMut<TabRegistry>,
) {
    for (entity, mut hideable) in added.iter_mut() {
        registry.register_panel(entity);
        // панель появилась посреди inspect - сразу прячем
        if registry.inspect_mode() {
            hideable.hide();
        }
    }

    for entity in removed.read() {
        registry.deregister_panel(entity);
    }
}

pub fn advance_hideables(time: Res<Time<Fixed>>, mut hideables: Query<&mut Hideable>) {
    // timestep, а не delta: тесты гоняют FixedUpdate вручную
    let delta = time.timestep().as_secs_f32();
    for mut hideable in hideables.iter_mut() {
        hideable.advance(delta);
    }
}

/// Агрегирует lock broadcasts и раздаёт итог UI
///
/// - Inspect button: заблокирована пока держится любой lock
/// - Attachment панели и hideable UI: только на время смены оружия
pub fn apply_interaction_locks(
    mut events: EventReader<InteractionLockChanged>,
    mut locks: ResMut<InteractionLocks>,
    mut button: ResMut<InspectButton>,
    mut panels: Query<&mut AttachmentPanel>,
    mut hideables: Query<&mut Hideable>,
) {
    let mut changed = false;
    for event in events.read() {
        changed |= locks.apply(event);
    }
    if !changed {
        return;
    }

    button.set_blocked(locks.any());

    let weapon_change = locks.weapon_change_in_progress();
    for mut panel in panels.iter_mut() {
        panel.set_weapon_change_lock(weapon_change);
    }
    for mut hideable in hideables.iter_mut() {
        hideable.set_weapon_change_lock(weapon_change);
    }
}
