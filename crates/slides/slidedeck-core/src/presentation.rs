//! Presentation: owns the navigator and the animation engine and drives
//! both against a `DocumentSurface`.
//!
//! Methods:
//! - start (initial slide, page fade, navigation float)
//! - advance / retreat / jump_to (guarded transitions)
//! - handle_input (dispatcher + command)
//! - tick (advance animations, react to cues)

use crate::config::Config;
use crate::error::ConfigError;
use crate::ids::NodeId;
use crate::input::{self, Command, Dispatch, Input};
use crate::navigator::Navigator;
use crate::reveal::{reveal_sequence, SlideKind};
use crate::sequence::{Cue, Position, Repeat, Sequence, Tween};
use crate::sequencer::transition_sequence;
use crate::status;
use crate::style::Style;
use crate::surface::{DocumentSurface, Landmark};
use crate::timeline::{AnimationEngine, Timeline};

#[derive(Debug)]
pub struct Presentation<E: AnimationEngine = Timeline> {
    cfg: Config,
    nav: Navigator,
    engine: E,
    started: bool,
}

impl Presentation<Timeline> {
    /// Presentation backed by the built-in frame-stepped timeline.
    pub fn new(cfg: Config) -> Result<Self, ConfigError> {
        Self::with_engine(cfg, Timeline::new())
    }
}

impl<E: AnimationEngine> Presentation<E> {
    pub fn with_engine(cfg: Config, engine: E) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self {
            nav: Navigator::new(cfg.total_slides),
            cfg,
            engine,
            started: false,
        })
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn current_slide(&self) -> u32 {
        self.nav.current()
    }

    pub fn is_animating(&self) -> bool {
        self.nav.is_animating()
    }

    /// Show slide 1, reveal its content, fade the page in and start the
    /// navigation float. Calling it again does nothing.
    pub fn start<D: DocumentSurface>(&mut self, doc: &mut D) {
        if self.started {
            log::warn!("presentation already started");
            return;
        }
        self.started = true;
        log::info!("initializing presentation ({} slides)", self.nav.total());

        status::reflect(&self.nav, doc, &self.cfg);

        match doc.slide(1) {
            Some(first) => {
                doc.set_active(first, true);
                let mut settle = Sequence::new("initial slide");
                settle.set(vec![first], Style::new().opacity(1.0).x(0.0), Position::Next);
                self.engine.play(settle);
                self.play_reveal(first, doc);
            }
            None => log::warn!("no element for slide 1"),
        }

        if let Some(body) = doc.landmark(Landmark::Body) {
            let mut fade = Sequence::new("page fade");
            fade.from_to(
                vec![body],
                Style::new().opacity(0.0),
                Tween::new(
                    Style::new().opacity(1.0),
                    self.cfg.page_fade_duration,
                    self.cfg.default_ease,
                ),
                Position::Next,
            );
            self.engine.play(fade);
        }

        let float = &self.cfg.nav_float;
        if float.enabled {
            if let Some(nav_bar) = doc.landmark(Landmark::Navigation) {
                let mut seq = Sequence::new("navigation float")
                    .with_repeat(Repeat::Forever { yoyo: true });
                seq.to(
                    vec![nav_bar],
                    Tween::new(Style::new().y(float.offset_y), float.duration, float.ease),
                    Position::Next,
                );
                self.engine.play(seq);
            }
        }

        self.pump(0.0, doc);
    }

    /// Move to the next slide. Returns whether a transition started.
    pub fn advance<D: DocumentSurface>(&mut self, doc: &mut D) -> bool {
        match self.nav.next_target() {
            Some(target) => {
                log::debug!("next slide requested, current: {}", self.nav.current());
                self.transition(target, doc)
            }
            None => false,
        }
    }

    /// Move to the previous slide. Returns whether a transition started.
    pub fn retreat<D: DocumentSurface>(&mut self, doc: &mut D) -> bool {
        match self.nav.prev_target() {
            Some(target) => {
                log::debug!("previous slide requested, current: {}", self.nav.current());
                self.transition(target, doc)
            }
            None => false,
        }
    }

    /// Move to slide `ordinal`. Returns whether a transition started.
    pub fn jump_to<D: DocumentSurface>(&mut self, ordinal: u32, doc: &mut D) -> bool {
        match self.nav.jump_target(ordinal) {
            Some(target) => self.transition(target, doc),
            None => false,
        }
    }

    /// Run an input through the dispatcher and execute its command.
    pub fn handle_input<D: DocumentSurface>(&mut self, event: Input, doc: &mut D) -> Dispatch {
        let dispatch = input::dispatch(event, self.nav.is_animating());
        match dispatch.command {
            Some(Command::Advance) => {
                self.advance(doc);
            }
            Some(Command::Retreat) => {
                self.retreat(doc);
            }
            Some(Command::First) => {
                self.jump_to(1, doc);
            }
            Some(Command::Last) => {
                let last = self.nav.total();
                self.jump_to(last, doc);
            }
            None => {}
        }
        dispatch
    }

    /// Advance animations by one frame of `dt` seconds (clamped to
    /// `Config::max_frame_delta`).
    pub fn tick<D: DocumentSurface>(&mut self, dt: f32, doc: &mut D) {
        let dt = if dt.is_finite() {
            dt.clamp(0.0, self.cfg.max_frame_delta)
        } else {
            0.0
        };
        self.pump(dt, doc);
    }

    fn transition<D: DocumentSurface>(&mut self, target: u32, doc: &mut D) -> bool {
        let Some(plan) = self.nav.begin(target) else {
            return false;
        };
        let (Some(outgoing), Some(incoming)) = (doc.active_slide(), doc.slide(target)) else {
            log::debug!("transition to {target} aborted: slide element missing");
            self.nav.abort();
            return false;
        };
        self.engine
            .play(transition_sequence(&plan, outgoing, incoming, &self.cfg.transition));
        self.pump(0.0, doc);
        true
    }

    fn play_reveal<D: DocumentSurface>(&mut self, slide: NodeId, doc: &mut D) {
        let kind = SlideKind::from_ordinal(doc.slide_ordinal(slide).unwrap_or(0));
        let seq = reveal_sequence(slide, kind, doc, &self.cfg);
        self.engine.play(seq);
    }

    /// Step the engine, then keep handling cues (which may queue new
    /// sequences) until a zero-length step produces none.
    fn pump<D: DocumentSurface>(&mut self, dt: f32, doc: &mut D) {
        let mut cues = self.engine.update(dt, doc);
        while !cues.is_empty() {
            for cue in cues {
                self.handle_cue(cue, doc);
            }
            cues = self.engine.update(0.0, doc);
        }
    }

    fn handle_cue<D: DocumentSurface>(&mut self, cue: Cue, doc: &mut D) {
        match cue {
            Cue::SwapSlides { outgoing, incoming } => {
                doc.set_active(outgoing, false);
                doc.set_active(incoming, true);
            }
            Cue::RevealContent { slide } => self.play_reveal(slide, doc),
            Cue::TransitionComplete { target } => {
                if self.nav.complete(target) {
                    log::info!("slide transition complete to: {target}");
                    status::reflect(&self.nav, doc, &self.cfg);
                }
            }
        }
    }
}
