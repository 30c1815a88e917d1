//! Interactive parameter tuning, independent of any input device.
//!
//! A frontend maps its key or widget events onto [`Command`]s; the
//! controller applies the viewer's tuning rules and tracks whether the
//! height field needs regenerating.

use crate::params::{MapType, NoiseParameters, TuningSteps};

/// A single tuning action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ToggleOctaves,
    IncreaseOctaves,
    DecreaseOctaves,
    IncreasePersistence,
    DecreasePersistence,
    /// Adjust the active map's noise power (sine or ring)
    IncreasePower,
    DecreasePower,
    IncreaseHeight,
    DecreaseHeight,
    SelectMap(MapType),
    /// Start or pause the waterfall animation
    ToggleAdvance,
    Reset,
}

/// Owns the current [`NoiseParameters`] and the viewer's dirty/advance flags
#[derive(Debug, Clone)]
pub struct ParameterController {
    params: NoiseParameters,
    steps: TuningSteps,
    dirty: bool,
    advance: bool,
}

impl Default for ParameterController {
    fn default() -> Self {
        Self::new(NoiseParameters::default())
    }
}

impl ParameterController {
    /// Start from `params`; the first frame always regenerates.
    pub fn new(params: NoiseParameters) -> Self {
        Self::with_steps(params, TuningSteps::default())
    }

    pub fn with_steps(params: NoiseParameters, steps: TuningSteps) -> Self {
        Self {
            params,
            steps,
            dirty: true,
            advance: false,
        }
    }

    pub fn params(&self) -> &NoiseParameters {
        &self.params
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn set_clean(&mut self) {
        self.dirty = false;
    }

    pub fn is_advancing(&self) -> bool {
        self.advance
    }

    pub fn stop_advance(&mut self) {
        self.advance = false;
    }

    /// Apply one command
    pub fn apply(&mut self, command: Command) {
        let steps = &self.steps;
        let p = &mut self.params;

        match command {
            Command::ToggleAdvance => {
                self.advance = !self.advance;
                return;
            }
            Command::Reset => {
                self.reset();
                return;
            }
            Command::ToggleOctaves => {
                p.use_octaves = !p.use_octaves;
                self.reset();
                return;
            }
            Command::SelectMap(map_type) => {
                if p.map_type != map_type {
                    p.map_type = map_type;
                    p.use_octaves = false;
                    self.reset();
                }
                return;
            }
            Command::IncreaseOctaves
            | Command::DecreaseOctaves
            | Command::IncreasePersistence
            | Command::DecreasePersistence
                if !p.use_octaves =>
            {
                return;
            }
            Command::IncreaseOctaves => p.octave_count += 1,
            Command::DecreaseOctaves => {
                if p.octave_count > 1 {
                    p.octave_count -= 1;
                }
            }
            Command::IncreasePersistence => p.persistence += steps.persistence,
            Command::DecreasePersistence => {
                if p.persistence > steps.min_persistence {
                    p.persistence -= steps.persistence;
                }
            }
            Command::IncreasePower => match p.map_type {
                MapType::Sine => p.sin_power += steps.sin_power,
                MapType::Ring => p.ring_power += steps.ring_power,
                MapType::Plain => {}
            },
            Command::DecreasePower => match p.map_type {
                MapType::Sine if p.sin_power >= steps.sin_power => p.sin_power -= steps.sin_power,
                MapType::Ring if p.ring_power >= steps.ring_power => {
                    p.ring_power -= steps.ring_power
                }
                _ => {}
            },
            Command::IncreaseHeight => p.height_scale += steps.height,
            Command::DecreaseHeight => {
                if p.height_scale <= 0.0 {
                    return;
                }
                p.height_scale -= steps.height;
            }
        }

        self.mark_changed();
    }

    /// Restore tunable values to their defaults, keeping the map type and
    /// octave toggle.
    pub fn reset(&mut self) {
        let defaults = NoiseParameters::default();
        self.params = NoiseParameters {
            use_octaves: self.params.use_octaves,
            map_type: self.params.map_type,
            noise_scale: self.params.noise_scale,
            ..defaults
        };
        self.mark_changed();
    }

    fn mark_changed(&mut self) {
        self.dirty = true;
        self.advance = false;
        let p = &self.params;
        log::info!(
            "{} map | octaves: {} ({}) | persistence: {:.2} | height: {:.1} | power: {:.2}",
            p.map_type.name(),
            if p.use_octaves { "on" } else { "off" },
            p.octave_count,
            p.persistence,
            p.height_scale,
            p.active_power()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(params: NoiseParameters) -> ParameterController {
        let mut controller = ParameterController::new(params);
        controller.set_clean();
        controller
    }

    #[test]
    fn test_starts_dirty() {
        let controller = ParameterController::default();
        assert!(controller.is_dirty());
        assert!(!controller.is_advancing());
    }

    #[test]
    fn test_octave_commands_ignored_when_disabled() {
        let mut controller = clean(NoiseParameters::default());
        controller.apply(Command::IncreaseOctaves);
        controller.apply(Command::IncreasePersistence);

        assert_eq!(controller.params().octave_count, 1);
        assert_eq!(controller.params().persistence, 0.1);
        assert!(!controller.is_dirty());
    }

    #[test]
    fn test_octave_count_never_below_one() {
        let mut controller = clean(NoiseParameters::default());
        controller.apply(Command::ToggleOctaves);
        assert!(controller.params().use_octaves);

        controller.apply(Command::IncreaseOctaves);
        controller.apply(Command::IncreaseOctaves);
        assert_eq!(controller.params().octave_count, 3);

        for _ in 0..5 {
            controller.apply(Command::DecreaseOctaves);
        }
        assert_eq!(controller.params().octave_count, 1);
        assert!(controller.params().validate().is_ok());
    }

    #[test]
    fn test_persistence_floor() {
        let mut controller = clean(NoiseParameters::default());
        controller.apply(Command::ToggleOctaves);
        controller.apply(Command::IncreasePersistence);
        assert!((controller.params().persistence - 0.2).abs() < 1e-12);

        controller.apply(Command::DecreasePersistence);
        controller.apply(Command::DecreasePersistence);
        controller.apply(Command::DecreasePersistence);
        assert!(controller.params().persistence > 0.0);
    }

    #[test]
    fn test_power_follows_map_type() {
        let mut controller = clean(NoiseParameters::default());
        controller.apply(Command::SelectMap(MapType::Sine));
        controller.apply(Command::IncreasePower);
        controller.apply(Command::IncreasePower);
        assert_eq!(controller.params().sin_power, 2.0);
        assert_eq!(controller.params().ring_power, 0.0);

        controller.apply(Command::SelectMap(MapType::Ring));
        assert_eq!(controller.params().sin_power, 0.0);
        controller.apply(Command::IncreasePower);
        assert_eq!(controller.params().ring_power, 0.1);
        controller.apply(Command::DecreasePower);
        controller.apply(Command::DecreasePower);
        assert_eq!(controller.params().ring_power, 0.0);
    }

    #[test]
    fn test_select_map_disables_octaves() {
        let mut controller = clean(NoiseParameters::default());
        controller.apply(Command::ToggleOctaves);
        controller.apply(Command::IncreaseOctaves);

        controller.apply(Command::SelectMap(MapType::Ring));
        let p = controller.params();
        assert_eq!(p.map_type, MapType::Ring);
        assert!(!p.use_octaves);
        assert_eq!(p.octave_count, 1);
    }

    #[test]
    fn test_select_same_map_is_noop() {
        let mut controller = clean(NoiseParameters::default());
        controller.apply(Command::SelectMap(MapType::Plain));
        assert!(!controller.is_dirty());
    }

    #[test]
    fn test_height_stops_at_zero() {
        let mut controller = clean(NoiseParameters::default());
        for _ in 0..5 {
            controller.apply(Command::DecreaseHeight);
        }
        assert_eq!(controller.params().height_scale, 0.0);

        controller.apply(Command::IncreaseHeight);
        assert_eq!(controller.params().height_scale, 1.0);
    }

    #[test]
    fn test_changes_stop_animation() {
        let mut controller = clean(NoiseParameters::default());
        controller.apply(Command::ToggleAdvance);
        assert!(controller.is_advancing());
        assert!(!controller.is_dirty());

        controller.apply(Command::IncreaseHeight);
        assert!(controller.is_dirty());
        assert!(!controller.is_advancing());
    }

    #[test]
    fn test_reset_keeps_map_and_toggle() {
        let mut controller = clean(NoiseParameters::default());
        controller.apply(Command::SelectMap(MapType::Sine));
        controller.apply(Command::ToggleOctaves);
        controller.apply(Command::IncreaseOctaves);
        controller.apply(Command::IncreasePower);
        controller.apply(Command::IncreaseHeight);

        controller.apply(Command::Reset);
        let p = controller.params();
        assert_eq!(p.map_type, MapType::Sine);
        assert!(p.use_octaves);
        assert_eq!(p.octave_count, 1);
        assert_eq!(p.sin_power, 0.0);
        assert_eq!(p.height_scale, NoiseParameters::default().height_scale);
    }
}
