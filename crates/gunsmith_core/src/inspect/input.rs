//! Inspect input (пишется host'ом раз в tick)

use bevy::prelude::*;

/// Состояние drag/scroll input на текущий tick
///
/// `just_released`, `axis`, `scroll` - per-tick значения, обнуляются
/// в конце tick'а (`clear_inspect_input`); `held` живёт пока host его не снимет.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct InspectInput {
    pub held: bool,
    pub just_released: bool,
    /// Mouse delta (x → yaw, y → pitch)
    pub axis: Vec2,
    pub scroll: f32,
}

impl InspectInput {
    pub fn end_tick(&mut self) {
        self.just_released = false;
        self.axis = Vec2::ZERO;
        self.scroll = 0.0;
    }
}
