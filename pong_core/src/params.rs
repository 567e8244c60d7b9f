/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Viewport used to place paddles before the host reports a real size
    pub const FALLBACK_VIEWPORT_WIDTH: f32 = 1280.0;
    pub const FALLBACK_VIEWPORT_HEIGHT: f32 = 720.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 16.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 400.0; // units per second
    pub const PADDLE_OFFSET: f32 = 40.0; // distance from the side edge to the paddle center

    // Ball
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_SPEED_INITIAL: f32 = 350.0;
    pub const BALL_SPEED_INCREASE: f32 = 20.0; // Added to speed on every paddle hit
    pub const MAX_BOUNCE_ANGLE_DEG: f32 = 45.0;
    pub const SERVE_CONE: f32 = std::f32::consts::FRAC_PI_8; // +/- launch angle around horizontal

    // AI
    pub const AI_SPEED: f32 = 220.0;
    pub const AI_REACTION_CHANCE: f32 = 85.0; // percent
    pub const AI_DEADZONE: f32 = 8.0;
    pub const AI_JITTER: f32 = 0.12;

    // Match flow
    pub const SERVE_DELAY: f32 = 1.0; // seconds between a point and the next serve

    // Physics
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
