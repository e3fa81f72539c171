//! Tests for TabRegistry bookkeeping.

#[cfg(test)]
mod tests {
    use super::super::registry::TabRegistry;
    use bevy::prelude::Entity;

    #[test]
    fn test_register_is_idempotent() {
        let mut registry = TabRegistry::default();
        let tab = Entity::from_raw(1);
        registry.register_tab(tab);
        registry.register_tab(tab);
        assert_eq!(registry.active_tabs(), &[tab]);

        registry.deregister_tab(tab);
        assert!(registry.active_tabs().is_empty());
    }

    #[test]
    fn test_current_weapon_tab_tracks_previous() {
        let mut registry = TabRegistry::default();
        let a = Entity::from_raw(1);
        let b = Entity::from_raw(2);

        registry.set_current_weapon_tab(a);
        registry.set_current_weapon_tab(a);
        assert_eq!(registry.previous_weapon_tab(), None);

        registry.set_current_weapon_tab(b);
        assert_eq!(registry.current_weapon_tab(), Some(b));
        assert_eq!(registry.previous_weapon_tab(), Some(a));
    }

    #[test]
    fn test_inspect_snapshot_is_restored_exactly() {
        let mut registry = TabRegistry::default();
        let tabs = [Entity::from_raw(1), Entity::from_raw(2), Entity::from_raw(3)];
        for tab in tabs {
            registry.register_tab(tab);
        }

        let suspended = registry.begin_inspect_mode();
        assert!(registry.inspect_mode());
        assert_eq!(suspended, tabs.to_vec());

        // suspension-close снимает вкладки с регистрации
        for tab in &suspended {
            registry.deregister_tab(*tab);
        }

        let restored = registry.end_inspect_mode();
        assert!(!registry.inspect_mode());
        assert_eq!(restored, tabs.to_vec());
        assert!(registry.end_inspect_mode().is_empty());
    }
}
