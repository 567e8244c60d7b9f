//! Feedback hooks for whatever renders the match and plays its sounds.

use crate::{HitSurface, Score, Side};

/// Receives match notifications. Every method defaults to doing nothing,
/// so an adapter only implements what it can show or play.
pub trait Presenter {
    /// Ball bounced off a wall or a paddle
    fn on_hit(&mut self, _surface: HitSurface) {}

    /// `scorer` won the point
    fn on_scored(&mut self, _scorer: Side) {}

    /// Score display should now read `score`
    fn on_score_changed(&mut self, _score: &Score) {}
}

/// One notification as seen by a [`RecordingPresenter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    Hit(HitSurface),
    Scored(Side),
    ScoreChanged(Score),
}

/// Presenter that keeps every notification in order
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    pub notifications: Vec<Notification>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }
}

impl Presenter for RecordingPresenter {
    fn on_hit(&mut self, surface: HitSurface) {
        self.notifications.push(Notification::Hit(surface));
    }

    fn on_scored(&mut self, scorer: Side) {
        self.notifications.push(Notification::Scored(scorer));
    }

    fn on_score_changed(&mut self, score: &Score) {
        self.notifications.push(Notification::ScoreChanged(*score));
    }
}

// Lets a host keep a handle to a presenter it also hands to the game
impl<P: Presenter + ?Sized> Presenter for std::rc::Rc<std::cell::RefCell<P>> {
    fn on_hit(&mut self, surface: HitSurface) {
        self.borrow_mut().on_hit(surface);
    }

    fn on_scored(&mut self, scorer: Side) {
        self.borrow_mut().on_scored(scorer);
    }

    fn on_score_changed(&mut self, score: &Score) {
        self.borrow_mut().on_score_changed(score);
    }
}
