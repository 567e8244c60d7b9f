use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::Side;
use crate::error::{CoreError, Result};
use crate::params::Params;
use crate::playfield::Rect;

/// Who drives a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Control {
    Human,
    Ai,
}

/// Game configuration
///
/// Every field defaults from [`Params`], so a host only has to supply the
/// values it wants to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fallback_viewport: Vec2,
    pub paddle_size: Vec2,
    pub paddle_speed: f32,
    pub paddle_offset: f32,
    pub ball_radius: f32,
    pub ball_speed_initial: f32,
    pub ball_speed_increase: f32,
    pub max_bounce_angle_deg: f32,
    pub ai_speed: f32,
    pub ai_reaction_chance: f32,
    pub ai_deadzone: f32,
    pub ai_jitter: f32,
    pub serve_delay: f32,
    pub max_dt: f32,
    pub left_control: Control,
    pub right_control: Control,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fallback_viewport: Vec2::new(
                Params::FALLBACK_VIEWPORT_WIDTH,
                Params::FALLBACK_VIEWPORT_HEIGHT,
            ),
            paddle_size: Vec2::new(Params::PADDLE_WIDTH, Params::PADDLE_HEIGHT),
            paddle_speed: Params::PADDLE_SPEED,
            paddle_offset: Params::PADDLE_OFFSET,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            max_bounce_angle_deg: Params::MAX_BOUNCE_ANGLE_DEG,
            ai_speed: Params::AI_SPEED,
            ai_reaction_chance: Params::AI_REACTION_CHANCE,
            ai_deadzone: Params::AI_DEADZONE,
            ai_jitter: Params::AI_JITTER,
            serve_delay: Params::SERVE_DELAY,
            max_dt: Params::MAX_DT,
            left_control: Control::Human,
            right_control: Control::Ai,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot work with
    pub fn validate(&self) -> Result<()> {
        if Rect::playfield(self.fallback_viewport).is_err() {
            return Err(CoreError::InvalidConfig(format!(
                "fallback_viewport must be a positive size, got {}",
                self.fallback_viewport
            )));
        }
        let non_negative = [
            ("paddle_size.x", self.paddle_size.x),
            ("paddle_size.y", self.paddle_size.y),
            ("paddle_speed", self.paddle_speed),
            ("paddle_offset", self.paddle_offset),
            ("ball_radius", self.ball_radius),
            ("ball_speed_initial", self.ball_speed_initial),
            ("ball_speed_increase", self.ball_speed_increase),
            ("max_bounce_angle_deg", self.max_bounce_angle_deg),
            ("ai_speed", self.ai_speed),
            ("ai_deadzone", self.ai_deadzone),
            ("ai_jitter", self.ai_jitter),
            ("serve_delay", self.serve_delay),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::InvalidConfig(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        if !(0.0..=100.0).contains(&self.ai_reaction_chance) {
            return Err(CoreError::InvalidConfig(format!(
                "ai_reaction_chance must be within 0..=100, got {}",
                self.ai_reaction_chance
            )));
        }
        if self.max_bounce_angle_deg >= 90.0 {
            return Err(CoreError::InvalidConfig(format!(
                "max_bounce_angle_deg must be below 90, got {}",
                self.max_bounce_angle_deg
            )));
        }
        if !self.max_dt.is_finite() || self.max_dt <= 0.0 {
            return Err(CoreError::InvalidConfig(format!(
                "max_dt must be positive, got {}",
                self.max_dt
            )));
        }
        Ok(())
    }

    pub fn control(&self, side: Side) -> Control {
        match side {
            Side::Left => self.left_control,
            Side::Right => self.right_control,
        }
    }

    pub fn max_bounce_angle(&self) -> f32 {
        self.max_bounce_angle_deg.to_radians()
    }

    /// Get the resting X position of a paddle inside the playfield
    pub fn paddle_x(&self, side: Side, playfield: &Rect) -> f32 {
        match side {
            Side::Left => playfield.left() + self.paddle_offset,
            Side::Right => playfield.right() - self.paddle_offset,
        }
    }

    /// Resting position of a paddle: offset from its side, vertically centered
    pub fn paddle_rest(&self, side: Side, playfield: &Rect) -> Vec2 {
        Vec2::new(self.paddle_x(side, playfield), playfield.center().y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        let playfield = Rect::from_origin_size(Vec2::ZERO, Vec2::new(800.0, 600.0));
        assert_eq!(config.paddle_x(Side::Left, &playfield), 40.0, "Left paddle X position");
        assert_eq!(config.paddle_x(Side::Right, &playfield), 760.0, "Right paddle X position");
    }

    #[test]
    fn test_config_paddle_x_follows_playfield_origin() {
        let config = Config::new();
        let playfield = Rect::from_origin_size(Vec2::new(100.0, 50.0), Vec2::new(800.0, 600.0));
        assert_eq!(config.paddle_x(Side::Left, &playfield), 140.0);
        assert_eq!(config.paddle_x(Side::Right, &playfield), 860.0);
        assert_eq!(config.paddle_rest(Side::Left, &playfield).y, 350.0);
    }

    #[test]
    fn test_default_controls() {
        let config = Config::new();
        assert_eq!(config.control(Side::Left), Control::Human);
        assert_eq!(config.control(Side::Right), Control::Ai);
    }

    #[test]
    fn test_from_json_partial_override() {
        let config = Config::from_json(r#"{ "ai_speed": 300.0, "right_control": "human" }"#)
            .expect("partial config should parse");
        assert_eq!(config.ai_speed, 300.0);
        assert_eq!(config.right_control, Control::Human);
        assert_eq!(config.ball_radius, Params::BALL_RADIUS, "Unset fields keep defaults");
    }

    #[test]
    fn test_json_round_trip_preserves_config() {
        let mut config = Config::new();
        config.serve_delay = 2.5;
        let json = config.to_json().unwrap();
        assert_eq!(Config::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            Config::from_json("not json"),
            Err(CoreError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_reaction_chance() {
        let mut config = Config::new();
        config.ai_reaction_chance = 150.0;
        assert!(matches!(config.validate(), Err(CoreError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_negative_radius() {
        let mut config = Config::new();
        config.ball_radius = -1.0;
        assert!(matches!(config.validate(), Err(CoreError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_non_finite_values() {
        let mut config = Config::new();
        config.ai_jitter = f32::INFINITY;
        assert!(matches!(config.validate(), Err(CoreError::InvalidConfig(_))));

        let mut config = Config::new();
        config.paddle_size.y = f32::NAN;
        assert!(matches!(config.validate(), Err(CoreError::InvalidConfig(_))));

        let mut config = Config::new();
        config.max_dt = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_max_dt_and_viewport() {
        let mut config = Config::new();
        config.max_dt = -1.0;
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.fallback_viewport = Vec2::new(0.0, 720.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_max_bounce_angle_in_radians() {
        let config = Config::new();
        assert!((config.max_bounce_angle() - std::f32::consts::FRAC_PI_4).abs() < 1e-6);
    }
}
