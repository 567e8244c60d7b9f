//! Match orchestration: owns the world, tracks the score and runs the
//! serve / point / restart flow around [`step`](crate::step).

use glam::Vec2;
use hecs::World;
use log::{debug, info};
use rand::Rng;

use crate::error::Result;
use crate::systems::{
    anchor_paddles, contain_ball, park_ball, reset_paddles, serve_ball, ServeTimer,
};
use crate::{
    create_ball, create_paddle, step, Ball, Config, Control, Events, GameEvent, GameRng, Paddle,
    Presenter, Rect, Score, Side, TickInput, Time,
};

/// Match lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the host to report a usable viewport
    Initializing,
    /// Ball in play
    Running,
    /// A point was just scored; the ball is served when the timer runs out
    ServeWait,
}

/// A single local match between two paddles
pub struct Game {
    pub world: World,
    pub time: Time,
    pub playfield: Rect,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
    pub serve_timer: ServeTimer,
    phase: GamePhase,
    presenter: Option<Box<dyn Presenter>>,
}

impl Game {
    /// Build a match. Paddles are placed against `config.fallback_viewport`
    /// until the first tick with a real viewport size.
    pub fn new(config: Config, seed: u64) -> Result<Self> {
        config.validate()?;
        let mut world = World::new();
        let playfield = Rect::from_origin_size(Vec2::ZERO, config.fallback_viewport);

        for side in Side::BOTH {
            create_paddle(
                &mut world,
                side,
                config.paddle_rest(side, &playfield),
                config.paddle_size,
                config.paddle_speed,
                config.control(side) == Control::Human,
            );
        }
        create_ball(&mut world, playfield.center(), Vec2::ZERO, config.ball_radius);

        Ok(Self {
            world,
            time: Time::new(0.0, 0.0),
            playfield,
            config,
            score: Score::new(),
            events: Events::new(),
            rng: GameRng::new(seed),
            serve_timer: ServeTimer::new(),
            phase: GamePhase::Initializing,
            presenter: None,
        })
    }

    pub fn with_presenter(
        config: Config,
        seed: u64,
        presenter: Box<dyn Presenter>,
    ) -> Result<Self> {
        let mut game = Self::new(config, seed)?;
        game.presenter = Some(presenter);
        Ok(game)
    }

    pub fn set_presenter(&mut self, presenter: Option<Box<dyn Presenter>>) {
        self.presenter = presenter;
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn playfield(&self) -> Rect {
        self.playfield
    }

    /// True between a point and the serve that follows it
    pub fn serve_pending(&self) -> bool {
        self.phase == GamePhase::ServeWait
    }

    /// Events produced by the last tick
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(_e, paddle)| *paddle)
    }

    /// Advance the match by one fixed step
    pub fn tick(&mut self, dt: f32, input: &TickInput) {
        self.events.clear();

        // Clamp dt to prevent large jumps, even if max_dt was edited into junk
        let dt = if dt.is_finite() {
            dt.min(self.config.max_dt).max(0.0)
        } else {
            0.0
        };

        if self.phase == GamePhase::Initializing {
            self.try_initialize(input.viewport);
            return;
        }

        if let Ok(playfield) = Rect::playfield(input.viewport) {
            if playfield != self.playfield {
                self.apply_playfield(playfield);
            }
        }

        if input.restart {
            self.restart();
        }

        if self.phase == GamePhase::ServeWait && self.serve_timer.update(dt) {
            let kick_to_right = self.rng.0.gen_bool(0.5);
            debug!(
                "Serving toward the {}",
                if kick_to_right { "right" } else { "left" }
            );
            serve_ball(
                &mut self.world,
                &self.playfield,
                &self.config,
                kick_to_right,
                &mut self.rng,
            );
            self.phase = GamePhase::Running;
        }

        self.time = Time::new(dt, self.time.now + dt);
        step(
            &mut self.world,
            &self.time,
            &self.playfield,
            &self.config,
            input,
            &mut self.events,
            &mut self.rng,
        );

        self.dispatch_events();
    }

    /// Zero the score and serve toward the right. Ignored until initialized.
    pub fn restart(&mut self) {
        if self.phase == GamePhase::Initializing {
            debug!("Restart ignored: playfield not ready");
            return;
        }

        info!("Restarting match");
        self.score.reset();
        self.serve_timer.cancel();
        reset_paddles(&mut self.world, &self.playfield, &self.config);
        serve_ball(
            &mut self.world,
            &self.playfield,
            &self.config,
            true,
            &mut self.rng,
        );
        self.phase = GamePhase::Running;
        self.notify_score();
    }

    /// Host-driven viewport change. Completes initialization if still pending.
    pub fn resize(&mut self, size: Vec2) -> Result<()> {
        let playfield = Rect::playfield(size)?;
        if self.phase == GamePhase::Initializing {
            self.initialize(playfield);
        } else if playfield != self.playfield {
            self.apply_playfield(playfield);
        }
        Ok(())
    }

    fn try_initialize(&mut self, viewport: Vec2) -> bool {
        match Rect::playfield(viewport) {
            Ok(playfield) => {
                self.initialize(playfield);
                true
            }
            Err(err) => {
                debug!("Deferring initialization: {err}");
                false
            }
        }
    }

    fn initialize(&mut self, playfield: Rect) {
        info!(
            "Playfield ready: {}x{}",
            playfield.width(),
            playfield.height()
        );
        self.playfield = playfield;
        reset_paddles(&mut self.world, &self.playfield, &self.config);
        serve_ball(
            &mut self.world,
            &self.playfield,
            &self.config,
            true,
            &mut self.rng,
        );
        self.phase = GamePhase::Running;
        self.notify_score();
    }

    fn apply_playfield(&mut self, playfield: Rect) {
        info!(
            "Playfield resized: {}x{} -> {}x{}",
            self.playfield.width(),
            self.playfield.height(),
            playfield.width(),
            playfield.height()
        );
        self.playfield = playfield;
        anchor_paddles(&mut self.world, &self.playfield, &self.config);
        contain_ball(&mut self.world, &self.playfield);
    }

    fn dispatch_events(&mut self) {
        let events: Vec<GameEvent> = self.events.iter().copied().collect();
        for event in events {
            match event {
                GameEvent::Hit(surface) => {
                    if let Some(presenter) = self.presenter.as_mut() {
                        presenter.on_hit(surface);
                    }
                }
                GameEvent::Scored { scorer } => self.on_point(scorer),
            }
        }
    }

    fn on_point(&mut self, scorer: Side) {
        self.score.increment(scorer);
        debug!(
            "Point to {}: {} - {}",
            scorer.as_str(),
            self.score.left,
            self.score.right
        );

        if let Some(presenter) = self.presenter.as_mut() {
            presenter.on_scored(scorer);
        }
        self.notify_score();

        reset_paddles(&mut self.world, &self.playfield, &self.config);
        park_ball(&mut self.world, &self.playfield);
        self.phase = GamePhase::ServeWait;
        self.serve_timer.start(self.config.serve_delay);
    }

    fn notify_score(&mut self) {
        if let Some(presenter) = self.presenter.as_mut() {
            presenter.on_score_changed(&self.score);
        }
    }
}
