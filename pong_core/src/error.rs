use thiserror::Error;

/// Errors raised while building a game from host-supplied data.
///
/// The tick path itself never fails: anything that goes wrong mid-match
/// degrades to "nothing happens this tick".
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("playfield must have a positive finite size, got {width}x{height}")]
    DegeneratePlayfield { width: f32, height: f32 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("config parse failed: {0}")]
    ConfigParse(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::ConfigParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
