use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::path::Path;

#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl Display for SettingsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(err) => write!(f, "IO error: {}", err),
            SettingsError::Parse(err) => write!(f, "JSON error: {}", err),
            SettingsError::Invalid(msg) => write!(f, "invalid settings: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(err) => Some(err),
            SettingsError::Parse(err) => Some(err),
            SettingsError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        SettingsError::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::Parse(err)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSettings {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl Default for FieldSettings {
    fn default() -> Self {
        FieldSettings {
            width: 256.0,
            height: 192.0,
            margin: 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalSettings {
    /// Depth of the goal mouth, used for shot and attacking targets.
    pub width: f32,
    /// Vertical extent of the aperture on each goal line.
    pub height: f32,
}

impl Default for GoalSettings {
    fn default() -> Self {
        GoalSettings {
            width: 12.0,
            height: 40.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallSettings {
    pub radius: f32,
    pub speed: f32,
    pub friction: f32,
    pub restitution: f32,
    pub stop_epsilon: f32,
}

impl Default for BallSettings {
    fn default() -> Self {
        BallSettings {
            radius: 3.0,
            speed: 3.0,
            friction: 0.98,
            restitution: 0.7,
            stop_epsilon: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    pub radius: f32,
    pub speed: f32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        PlayerSettings {
            radius: 4.0,
            speed: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KickSettings {
    pub pass_multiplier: f32,
    pub shoot_multiplier: f32,
    pub cooldown_ticks: u32,
}

impl Default for KickSettings {
    fn default() -> Self {
        KickSettings {
            pass_multiplier: 1.2,
            shoot_multiplier: 1.5,
            cooldown_ticks: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiSettings {
    /// Share of the player speed used by autonomous agents.
    pub approach_fraction: f32,
    /// Distance in front of the opposing goal mouth that attackers run to.
    pub attacking_offset: f32,
    /// Gap between a keeper's station and its own margin, on top of the player radius.
    pub keeper_offset: f32,
}

impl Default for AiSettings {
    fn default() -> Self {
        AiSettings {
            approach_fraction: 0.6,
            attacking_offset: 10.0,
            keeper_offset: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    pub dead_zone: f32,
}

impl Default for InputSettings {
    fn default() -> Self {
        InputSettings { dead_zone: 0.2 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSettings {
    pub field: FieldSettings,
    pub goal: GoalSettings,
    pub ball: BallSettings,
    pub player: PlayerSettings,
    pub kick: KickSettings,
    pub ai: AiSettings,
    pub input: InputSettings,
}

impl MatchSettings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: MatchSettings = serde_json::from_str(json)?;

        settings.validate()?;

        Ok(settings)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;

        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let invalid = |msg: &str| -> Result<(), SettingsError> {
            Err(SettingsError::Invalid(msg.to_string()))
        };

        if self.field.width <= 0.0 || self.field.height <= 0.0 {
            return invalid("field dimensions must be positive");
        }

        if self.field.margin < 0.0 {
            return invalid("field margin must not be negative");
        }

        if self.ball.radius <= 0.0 || self.player.radius <= 0.0 {
            return invalid("ball and player radius must be positive");
        }

        let playable = 2.0 * (self.field.margin + self.player.radius);
        if self.field.width <= playable || self.field.height <= playable {
            return invalid("field is too small for its margin and player radius");
        }

        if self.goal.height <= 0.0 || self.goal.height > self.field.height {
            return invalid("goal aperture must fit the field height");
        }

        if self.goal.width <= 0.0 {
            return invalid("goal width must be positive");
        }

        if self.ball.speed <= 0.0 || self.player.speed <= 0.0 {
            return invalid("ball and player speed must be positive");
        }

        if !(self.ball.friction > 0.0 && self.ball.friction < 1.0) {
            return invalid("ball friction must lie in (0, 1)");
        }

        if !(0.0..=1.0).contains(&self.ball.restitution) {
            return invalid("wall restitution must lie in [0, 1]");
        }

        if self.ball.stop_epsilon <= 0.0 {
            return invalid("stop epsilon must be positive");
        }

        if self.kick.pass_multiplier <= 0.0 || self.kick.shoot_multiplier <= self.kick.pass_multiplier {
            return invalid("shoot multiplier must exceed a positive pass multiplier");
        }

        if !(self.ai.approach_fraction > 0.0 && self.ai.approach_fraction <= 1.0) {
            return invalid("ai approach fraction must lie in (0, 1]");
        }

        if self.ai.attacking_offset < 0.0 || self.ai.keeper_offset < 0.0 {
            return invalid("ai offsets must not be negative");
        }

        if !(0.0..1.0).contains(&self.input.dead_zone) {
            return invalid("input dead zone must lie in [0, 1)");
        }

        Ok(())
    }

    #[inline]
    pub fn goal_top(&self) -> f32 {
        (self.field.height - self.goal.height) / 2.0
    }

    #[inline]
    pub fn goal_bottom(&self) -> f32 {
        self.goal_top() + self.goal.height
    }

    #[inline]
    pub fn is_within_goal_aperture(&self, y: f32) -> bool {
        y >= self.goal_top() && y <= self.goal_bottom()
    }
}
