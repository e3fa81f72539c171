//! Weapon inspect controller
//!
//! # Архитектура
//!
//! `Idle → TransitioningIn → Inspecting → TransitioningOut → Idle`
//!
//! - **begin**: запоминаем pose оружия и FOV камеры, считаем inspect pose перед камерой,
//!   запускаем `PoseTween` (transition_time).
//! - **Inspecting**: drag вращает оружие (hold threshold + разгон), scroll меняет FOV.
//! - **end**: tween обратно к запомненным pose/FOV.
//!
//! Контроллер не знает про ECS: системы передают `&mut Transform` оружия и FOV камеры,
//! а по `InspectProgress` публикуют lock/inspection events.

use bevy::prelude::*;

use super::config::{InspectConfig, DRAG_HOLD_THRESHOLD, SCROLL_FOV_FACTOR};
use super::input::InspectInput;
use crate::error::{CustomizationError, CustomizationResult};

// ============================================================================
// Pose / tween
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl Pose {
    pub fn from_transform(transform: &Transform) -> Self {
        Self {
            translation: transform.translation,
            rotation: transform.rotation,
        }
    }

    pub fn lerp(&self, to: &Pose, t: f32) -> Pose {
        Pose {
            translation: self.translation.lerp(to.translation, t),
            rotation: self.rotation.slerp(to.rotation, t),
        }
    }

    pub fn apply(&self, transform: &mut Transform) {
        transform.translation = self.translation;
        transform.rotation = self.rotation;
    }
}

/// Линейный переход pose + FOV; на финише значения ставятся ровно в `to`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseTween {
    from: Pose,
    to: Pose,
    from_fov: f32,
    to_fov: f32,
    elapsed: f32,
    duration: f32,
}

impl PoseTween {
    pub fn new(from: Pose, to: Pose, from_fov: f32, to_fov: f32, duration: f32) -> Self {
        Self {
            from,
            to,
            from_fov,
            to_fov,
            elapsed: 0.0,
            duration,
        }
    }

    /// Тик: (pose, fov, finished)
    pub fn advance(&mut self, delta: f32) -> (Pose, f32, bool) {
        self.elapsed += delta;
        if self.duration <= 0.0 || self.elapsed >= self.duration {
            return (self.to, self.to_fov, true);
        }

        let t = self.elapsed / self.duration;
        let fov = self.from_fov + (self.to_fov - self.from_fov) * t;
        (self.from.lerp(&self.to, t), fov, false)
    }
}

/// Inspect pose перед камерой
///
/// Точка на forward-оси камеры на текущей дистанции, сдвинутая вдоль right-оси
/// на `right_offset - left_offset`, затем притянутая к камере на `distance_reduction`.
/// Оружие развёрнуто лицом (-Z) к камере.
pub fn inspect_target_pose(weapon: &Transform, camera: &Transform, config: &InspectConfig) -> Pose {
    let distance = camera.translation.distance(weapon.translation);
    let forward = camera.forward();
    let right = camera.right();

    let center = camera.translation
        + forward * distance
        + right * (config.right_offset - config.left_offset);
    let direction = (center - camera.translation).normalize_or(forward.as_vec3());

    Pose {
        translation: camera.translation + direction * distance * config.distance_reduction,
        rotation: Transform::IDENTITY.looking_to(-forward, Dir3::Y).rotation,
    }
}

// ============================================================================
// Drag rotation
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    hold_time: f32,
    accel_time: f32,
    acceleration: f32,
}

impl DragState {
    pub fn acceleration(&self) -> f32 {
        self.acceleration
    }

    pub fn hold_time(&self) -> f32 {
        self.hold_time
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Тик drag: (yaw, pitch) в градусах, None пока вращать нечего
    pub fn update(&mut self, input: &InspectInput, config: &InspectConfig, delta: f32) -> Option<Vec2> {
        if input.just_released || !input.held {
            self.reset();
            return None;
        }

        self.hold_time += delta;
        if self.hold_time < DRAG_HOLD_THRESHOLD {
            return None;
        }

        if config.drag_accelerate_time <= 0.0 {
            self.acceleration = 1.0;
        } else if self.accel_time <= config.drag_accelerate_time {
            self.accel_time += delta;
            self.acceleration = (self.accel_time / config.drag_accelerate_time).clamp(0.0, 1.0);
        } else {
            self.accel_time = config.drag_accelerate_time;
            self.acceleration = 1.0;
        }

        let step = config.drag_rotate_speed * self.acceleration * delta;
        Some(Vec2::new(input.axis.x * step, -input.axis.y * step))
    }
}

/// Yaw/pitch (градусы) поверх текущего вращения, roll сохраняется
pub fn apply_drag_rotation(rotation: Quat, delta_degrees: Vec2) -> Quat {
    let (yaw, pitch, roll) = rotation.to_euler(EulerRot::YXZ);
    Quat::from_euler(
        EulerRot::YXZ,
        yaw + delta_degrees.x.to_radians(),
        pitch + delta_degrees.y.to_radians(),
        roll,
    )
}

// ============================================================================
// Controller
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InspectPhase {
    #[default]
    Idle,
    TransitioningIn,
    Inspecting,
    TransitioningOut,
}

/// Данные одной inspect-сессии
#[derive(Debug, Clone, PartialEq)]
pub struct InspectSession {
    pub weapon: Entity,
    pub camera: Entity,
    pub original: Pose,
    pub original_fov: f32,
    /// Config с применённым override камеры
    pub config: InspectConfig,
}

/// Что произошло за tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspectProgress {
    None,
    /// TransitioningIn завершён, drag включён
    EnteredInspecting,
    /// TransitioningOut завершён, контроллер снова Idle
    ExitFinished,
}

#[derive(Resource, Debug, Default, Clone)]
pub struct WeaponInspect {
    phase: InspectPhase,
    current_weapon: Option<Entity>,
    session: Option<InspectSession>,
    tween: Option<PoseTween>,
    drag: DragState,
}

impl WeaponInspect {
    pub fn phase(&self) -> InspectPhase {
        self.phase
    }

    pub fn current_weapon(&self) -> Option<Entity> {
        self.current_weapon
    }

    pub fn session(&self) -> Option<&InspectSession> {
        self.session.as_ref()
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    /// Реакция на `WeaponSelectionChanged`
    pub fn set_current_weapon(&mut self, representation: Entity, selected: bool) {
        if selected {
            self.current_weapon = Some(representation);
        } else if self.current_weapon == Some(representation) {
            self.current_weapon = None;
        }
    }

    pub fn can_begin(&self) -> bool {
        self.phase == InspectPhase::Idle && self.current_weapon.is_some()
    }

    /// Idle → TransitioningIn
    pub fn begin(
        &mut self,
        weapon_transform: &Transform,
        camera: Entity,
        camera_transform: &Transform,
        camera_fov: f32,
        config: InspectConfig,
    ) -> CustomizationResult<()> {
        let Some(weapon) = self.current_weapon else {
            return Err(CustomizationError::MissingWeapon);
        };
        if self.phase != InspectPhase::Idle {
            return Err(CustomizationError::InspectNotIdle);
        }

        let original = Pose::from_transform(weapon_transform);
        let target = inspect_target_pose(weapon_transform, camera_transform, &config);
        let target_fov = camera_fov * config.fov_reduction;

        self.tween = Some(PoseTween::new(
            original,
            target,
            camera_fov,
            target_fov,
            config.transition_time,
        ));
        self.session = Some(InspectSession {
            weapon,
            camera,
            original,
            original_fov: camera_fov,
            config,
        });
        self.drag.reset();
        self.phase = InspectPhase::TransitioningIn;
        Ok(())
    }

    /// Inspecting → TransitioningOut. false если сейчас не Inspecting.
    pub fn end(&mut self, weapon_transform: &Transform, camera_fov: f32) -> bool {
        if self.phase != InspectPhase::Inspecting {
            return false;
        }
        let Some(session) = self.session.as_ref() else {
            return false;
        };

        self.tween = Some(PoseTween::new(
            Pose::from_transform(weapon_transform),
            session.original,
            camera_fov,
            session.original_fov,
            session.config.transition_time,
        ));
        self.drag.reset();
        self.phase = InspectPhase::TransitioningOut;
        true
    }

    /// Сессия потеряла оружие/камеру: сразу в Idle
    pub fn abort(&mut self) {
        self.phase = InspectPhase::Idle;
        self.session = None;
        self.tween = None;
        self.drag.reset();
    }

    /// Fixed tick
    pub fn advance(
        &mut self,
        delta: f32,
        input: &InspectInput,
        weapon: &mut Transform,
        fov: &mut f32,
    ) -> InspectProgress {
        match self.phase {
            InspectPhase::Idle => InspectProgress::None,
            InspectPhase::TransitioningIn | InspectPhase::TransitioningOut => {
                let Some(tween) = self.tween.as_mut() else {
                    self.abort();
                    return InspectProgress::None;
                };

                let (pose, new_fov, finished) = tween.advance(delta);
                pose.apply(weapon);
                *fov = new_fov;

                if !finished {
                    return InspectProgress::None;
                }

                self.tween = None;
                if self.phase == InspectPhase::TransitioningIn {
                    self.phase = InspectPhase::Inspecting;
                    InspectProgress::EnteredInspecting
                } else {
                    self.abort();
                    InspectProgress::ExitFinished
                }
            }
            InspectPhase::Inspecting => {
                let Some(session) = self.session.as_ref() else {
                    self.abort();
                    return InspectProgress::None;
                };

                if let Some(delta_degrees) = self.drag.update(input, &session.config, delta) {
                    weapon.rotation = apply_drag_rotation(weapon.rotation, delta_degrees);
                }

                // scroll → FOV, clamp каждый tick
                *fov = session.config.clamp_fov(*fov - input.scroll * SCROLL_FOV_FACTOR * delta);
                InspectProgress::None
            }
        }
    }
}
