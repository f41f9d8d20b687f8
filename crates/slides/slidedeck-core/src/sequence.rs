//! Composable animation sequences.
//!
//! A `Sequence` is plain data: an ordered list of steps, each with a start
//! time resolved when the step is added. Placement follows the usual
//! timeline convention: `Position::Next` starts at the current end of the
//! sequence, `Position::Offset(d)` starts `d` seconds after it (negative to
//! overlap), `Position::At(t)` is absolute. Engines only read sequences.

use serde::{Deserialize, Serialize};

use crate::ids::NodeId;
use crate::interp::Ease;
use crate::style::Style;

/// Engine-agnostic callback token. Engines hand cues back from `update`
/// when the sequence reaches them; the presentation decides what they do.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Cue {
    /// Move the active class from `outgoing` to `incoming`.
    SwapSlides { outgoing: NodeId, incoming: NodeId },
    /// Start the content reveal of `slide`.
    RevealContent { slide: NodeId },
    /// The exit/enter sequence towards `target` finished.
    TransitionComplete { target: u32 },
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Position {
    #[default]
    Next,
    Offset(f32),
    At(f32),
}

impl Position {
    /// Start `d` seconds before the current end.
    pub fn overlap(d: f32) -> Self {
        if d == 0.0 {
            Position::Next
        } else {
            Position::Offset(-d)
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Repeat {
    Once,
    /// Loop forever; with `yoyo` every other pass runs backwards.
    Forever { yoyo: bool },
}

/// Target state and timing of one interpolation.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tween {
    pub to: Style,
    pub duration: f32,
    pub ease: Ease,
    /// Delay between consecutive targets' start times.
    pub stagger: f32,
}

impl Tween {
    pub fn new(to: Style, duration: f32, ease: Ease) -> Self {
        Self {
            to,
            duration,
            ease,
            stagger: 0.0,
        }
    }

    pub fn stagger(mut self, stagger: f32) -> Self {
        self.stagger = stagger;
        self
    }

    /// Time from the first target's start to the last target's end.
    pub fn span(&self, targets: usize) -> f32 {
        let extra = targets.saturating_sub(1) as f32 * self.stagger;
        self.duration.max(0.0) + extra.max(0.0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Interpolate `targets` to `tween.to`. With `from`, targets are rendered
    /// at `from` as soon as the sequence starts; without it, each target
    /// starts from whatever value it has when its tween begins.
    Tween {
        targets: Vec<NodeId>,
        from: Option<Style>,
        tween: Tween,
    },
    /// Zero-duration property write.
    Set { targets: Vec<NodeId>, style: Style },
    Cue(Cue),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub start: f32,
    pub action: Action,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sequence {
    pub label: String,
    pub delay: f32,
    pub repeat: Repeat,
    /// Nodes whose inline animation properties are dropped when the sequence starts.
    pub clear_on_start: Vec<NodeId>,
    pub steps: Vec<Step>,
    pub on_complete: Option<Cue>,
    end: f32,
}

impl Sequence {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            delay: 0.0,
            repeat: Repeat::Once,
            clear_on_start: Vec::new(),
            steps: Vec::new(),
            on_complete: None,
            end: 0.0,
        }
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    pub fn with_repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn clearing(mut self, nodes: Vec<NodeId>) -> Self {
        self.clear_on_start = nodes;
        self
    }

    pub fn on_complete(mut self, cue: Cue) -> Self {
        self.on_complete = Some(cue);
        self
    }

    /// Length of one pass, excluding the delay.
    pub fn duration(&self) -> f32 {
        self.end
    }

    fn resolve(&self, at: Position) -> f32 {
        let t = match at {
            Position::Next => self.end,
            Position::Offset(d) => self.end + d,
            Position::At(t) => t,
        };
        t.max(0.0)
    }

    fn push(&mut self, at: Position, span: f32, action: Action) {
        let start = self.resolve(at);
        self.end = self.end.max(start + span);
        self.steps.push(Step { start, action });
    }

    /// Tween `targets` from an explicit state. An empty target list adds nothing.
    pub fn from_to(
        &mut self,
        targets: Vec<NodeId>,
        from: Style,
        tween: Tween,
        at: Position,
    ) -> &mut Self {
        if targets.is_empty() {
            return self;
        }
        let span = tween.span(targets.len());
        self.push(
            at,
            span,
            Action::Tween {
                targets,
                from: Some(from),
                tween,
            },
        );
        self
    }

    /// Tween `targets` from their current state. An empty target list adds nothing.
    pub fn to(&mut self, targets: Vec<NodeId>, tween: Tween, at: Position) -> &mut Self {
        if targets.is_empty() {
            return self;
        }
        let span = tween.span(targets.len());
        self.push(
            at,
            span,
            Action::Tween {
                targets,
                from: None,
                tween,
            },
        );
        self
    }

    pub fn set(&mut self, targets: Vec<NodeId>, style: Style, at: Position) -> &mut Self {
        if targets.is_empty() {
            return self;
        }
        self.push(at, 0.0, Action::Set { targets, style });
        self
    }

    pub fn cue(&mut self, cue: Cue, at: Position) -> &mut Self {
        self.push(at, 0.0, Action::Cue(cue));
        self
    }
}
