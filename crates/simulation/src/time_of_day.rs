use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::MINUTES_PER_TICK;
use crate::SimulationSet;

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct GameClock {
    pub day: u32,
    pub hour: f32,
}

impl Default for GameClock {
    fn default() -> Self {
        Self {
            day: 1,
            hour: 6.0, // start at 6 AM
        }
    }
}

impl GameClock {
    pub fn tick(&mut self) {
        self.hour += MINUTES_PER_TICK / 60.0;
        if self.hour >= 24.0 {
            self.hour -= 24.0;
            self.day += 1;
        }
    }

    pub fn hour_of_day(&self) -> u32 {
        self.hour as u32
    }

    pub fn formatted(&self) -> String {
        let h = self.hour as u32;
        let m = ((self.hour - h as f32) * 60.0) as u32;
        format!("Day {} {:02}:{:02}", self.day, h, m)
    }
}

pub fn tick_game_clock(mut clock: ResMut<GameClock>) {
    clock.tick();
}

pub struct TimeOfDayPlugin;

impl Plugin for TimeOfDayPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameClock>()
            .add_systems(FixedUpdate, tick_game_clock.in_set(SimulationSet::PreSim));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TICKS_PER_DAY;

    #[test]
    fn clock_starts_on_day_one() {
        let clock = GameClock::default();
        assert_eq!(clock.day, 1);
        assert_eq!(clock.hour_of_day(), 6);
    }

    #[test]
    fn clock_rolls_over_at_midnight() {
        let mut clock = GameClock::default();
        for _ in 0..TICKS_PER_DAY {
            clock.tick();
        }
        assert_eq!(clock.day, 2);
        assert_eq!(clock.hour_of_day(), 6);
    }

    #[test]
    fn formatted_includes_day_and_time() {
        let clock = GameClock::default();
        assert_eq!(clock.formatted(), "Day 1 06:00");
    }
}
