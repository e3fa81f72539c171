//! Tests for Hideable panel primitive.

#[cfg(test)]
mod tests {
    use super::super::hideable::{HideAnimation, Hideable, HideablePhase};

    #[test]
    fn test_hide_unhide_without_animation() {
        let mut panel = Hideable::default();
        panel.hide();
        assert_eq!(panel.phase(), HideablePhase::Hidden);
        assert!(!panel.is_interactable());
        assert_eq!(panel.alpha(), 1.0, "not invisible-on-hide");

        panel.unhide();
        assert_eq!(panel.phase(), HideablePhase::Shown);
        assert!(panel.is_interactable());
    }

    #[test]
    fn test_invisible_on_hide() {
        let mut panel = Hideable::invisible();
        panel.hide();
        assert_eq!(panel.alpha(), 0.0);
        panel.unhide();
        assert_eq!(panel.alpha(), 1.0);
    }

    #[test]
    fn test_unhide_waits_for_animation() {
        let mut panel = Hideable::with_animation(0.2, 0.3);
        panel.hide();
        assert!(matches!(panel.phase(), HideablePhase::Hiding { .. }));
        assert!(!panel.advance(0.1));
        assert!(panel.advance(0.1 + f32::EPSILON));
        assert_eq!(panel.phase(), HideablePhase::Hidden);

        panel.unhide();
        assert!(!panel.is_interactable(), "input returns only after unhide animation");
        assert!(!panel.advance(0.2));
        assert!(!panel.is_interactable());
        assert!(panel.advance(0.2));
        assert!(panel.is_interactable());
        assert_eq!(panel.phase(), HideablePhase::Shown);
    }

    #[test]
    fn test_animation_and_invisibility_conflict_degrades() {
        let panel = Hideable::new(
            Some(HideAnimation {
                hide_duration: 0.2,
                unhide_duration: 0.2,
            }),
            true,
        );
        assert!(panel.has_animation());
        assert!(!panel.invisible_on_hide());
    }

    #[test]
    fn test_unplayable_animation_is_dropped() {
        let panel = Hideable::new(
            Some(HideAnimation {
                hide_duration: f32::NAN,
                unhide_duration: 0.2,
            }),
            true,
        );
        assert!(!panel.has_animation());
        assert!(panel.invisible_on_hide());
    }

    #[test]
    fn test_weapon_change_lock_only_affects_shown_panel() {
        let mut panel = Hideable::default();
        panel.set_weapon_change_lock(true);
        assert!(!panel.is_interactable());
        panel.set_weapon_change_lock(false);
        assert!(panel.is_interactable());

        panel.hide();
        panel.set_weapon_change_lock(false);
        assert!(!panel.is_interactable(), "hidden panel stays non-interactable");
    }
}
