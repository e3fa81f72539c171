//! Tests for WeaponTypeTab state machine.

#[cfg(test)]
mod tests {
    use super::super::components::{SelectionEffect, TabState, WeaponEntry, WeaponTypeTab};
    use crate::item_catalog::{ItemDefinition, WeaponType};
    use bevy::prelude::*;

    fn tab_with_weapons(count: u32) -> WeaponTypeTab {
        let mut tab = WeaponTypeTab::new(WeaponType::AssaultRifle, Transform::default());
        for i in 0..count {
            let def = ItemDefinition::weapon(&format!("ar_{}", i), "Rifle", WeaponType::AssaultRifle);
            tab.entries.push(WeaponEntry::new(&def, Entity::from_raw(100 + i)));
        }
        tab
    }

    #[test]
    fn test_open_selects_first_entry_by_default() {
        let mut tab = tab_with_weapons(3);
        let effect = tab.open(false);

        assert_eq!(effect, Some(SelectionEffect::Select(Entity::from_raw(100))));
        assert_eq!(tab.state(), TabState::Open);
        assert!(tab.highlighted());
        assert_eq!(tab.selected_index(), Some(0));
        assert!(tab.entries.iter().all(|e| e.button_visible));
    }

    #[test]
    fn test_open_empty_tab_has_no_effect() {
        let mut tab = tab_with_weapons(0);
        assert_eq!(tab.open(false), None);
        assert!(tab.is_open());
    }

    #[test]
    fn test_close_deselects_and_remembers_selection() {
        let mut tab = tab_with_weapons(3);
        tab.open(false);
        tab.select_entry(2);

        let effect = tab.close(false);
        assert_eq!(effect, Some(SelectionEffect::Deselect(Entity::from_raw(102))));
        assert_eq!(tab.state(), TabState::Closed);
        assert!(!tab.highlighted());
        assert!(tab.entries.iter().all(|e| !e.button_visible && !e.selected));

        // повторное открытие возвращает запомненное оружие
        assert_eq!(tab.open(false), Some(SelectionEffect::Select(Entity::from_raw(102))));
    }

    #[test]
    fn test_select_entry_deselects_previous_first() {
        let mut tab = tab_with_weapons(3);
        tab.open(false);

        let effects = tab.select_entry(1);
        assert_eq!(
            effects,
            vec![
                SelectionEffect::Deselect(Entity::from_raw(100)),
                SelectionEffect::Select(Entity::from_raw(101)),
            ]
        );
        assert!(!tab.entries[0].selected);
        assert!(tab.entries[1].selected);
    }

    #[test]
    fn test_select_same_entry_is_noop() {
        let mut tab = tab_with_weapons(2);
        tab.open(false);
        assert!(tab.select_entry(0).is_empty());
    }

    #[test]
    fn test_select_entry_ignored_when_closed_or_out_of_range() {
        let mut tab = tab_with_weapons(2);
        assert!(tab.select_entry(1).is_empty(), "closed tab");

        tab.open(false);
        assert!(tab.select_entry(5).is_empty(), "out of range");
        assert_eq!(tab.selected_index(), Some(0));
    }

    #[test]
    fn test_suspension_only_toggles_panel_visibility() {
        let mut tab = tab_with_weapons(2);
        tab.open(false);

        assert_eq!(tab.close(true), None);
        assert!(tab.is_open(), "suspended tab stays logically open");
        assert!(!tab.tab_button_visible());
        assert!(tab.entries[0].selected, "weapon stays selected");

        assert_eq!(tab.open(true), None);
        assert!(tab.tab_button_visible());
        assert!(tab.entries.iter().all(|e| e.button_visible));
    }

    #[test]
    fn test_suspended_open_of_closed_tab_keeps_buttons_hidden() {
        let mut tab = tab_with_weapons(2);
        tab.close(true);
        tab.open(true);
        assert!(!tab.is_open());
        assert!(tab.entries.iter().all(|e| !e.button_visible));
    }
}
