//! Per-slide content reveals.
//!
//! Every slide kind owns a static table of reveal steps. A step names the
//! role it animates, its from/to states and its timing; `overlap` pulls the
//! step's start back from the end of the steps before it. Roles missing from
//! a slide are skipped without affecting the placement of later steps.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::ids::NodeId;
use crate::interp::Ease;
use crate::sequence::{Position, Sequence, Tween};
use crate::style::Style;
use crate::surface::{DocumentSurface, Role};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideKind {
    Title,
    Content,
    Scene,
    Analysis,
    Themes,
    Conclusion,
}

impl SlideKind {
    /// Kind of the slide at `ordinal`; unknown ordinals fall back to `Content`.
    pub fn from_ordinal(ordinal: u32) -> Self {
        match ordinal {
            1 => SlideKind::Title,
            2..=4 => SlideKind::Content,
            5 | 7 | 9 => SlideKind::Scene,
            6 | 8 | 10 => SlideKind::Analysis,
            11 => SlideKind::Themes,
            12 => SlideKind::Conclusion,
            _ => SlideKind::Content,
        }
    }

    pub fn steps(self) -> &'static [RevealStep] {
        match self {
            SlideKind::Title => TITLE,
            SlideKind::Content => CONTENT,
            SlideKind::Scene => SCENE,
            SlideKind::Analysis => ANALYSIS,
            SlideKind::Themes => THEMES,
            SlideKind::Conclusion => CONCLUSION,
        }
    }
}

/// Which matches of a role a step animates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pick {
    /// First match only.
    One(Role),
    /// Every match, staggered in document order.
    All(Role),
}

impl Pick {
    pub const fn role(self) -> Role {
        match self {
            Pick::One(role) | Pick::All(role) => role,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevealStep {
    pub pick: Pick,
    pub from: Style,
    pub to: Style,
    /// `None` uses `Config::default_duration`.
    pub duration: Option<f32>,
    /// `None` uses `Config::default_ease`.
    pub ease: Option<Ease>,
    pub stagger: f32,
    pub overlap: f32,
}

impl RevealStep {
    const fn new(pick: Pick, from: Style, to: Style, duration: f32) -> Self {
        Self {
            pick,
            from,
            to,
            duration: Some(duration),
            ease: None,
            stagger: 0.0,
            overlap: 0.0,
        }
    }

    const fn ease(mut self, ease: Ease) -> Self {
        self.ease = Some(ease);
        self
    }

    const fn stagger(mut self, stagger: f32) -> Self {
        self.stagger = stagger;
        self
    }

    const fn overlap(mut self, overlap: f32) -> Self {
        self.overlap = overlap;
        self
    }

    /// Resolve the step's timing against the page defaults.
    pub fn tween(&self, cfg: &Config) -> Tween {
        Tween::new(
            self.to,
            self.duration.unwrap_or(cfg.default_duration),
            self.ease.unwrap_or(cfg.default_ease),
        )
        .stagger(self.stagger)
    }
}

const SHOWN: Style = Style::new().opacity(1.0);
const HIDDEN: Style = Style::new().opacity(0.0);

const TITLE_DROP: RevealStep = RevealStep::new(
    Pick::One(Role::SlideTitle),
    HIDDEN.y(-30.0),
    SHOWN.y(0.0),
    0.8,
);

const IMAGE_FRAME_FROM: Style = HIDDEN.scale(0.8);
const IMAGE_FROM: Style = HIDDEN.scale(1.1);
const UNSCALED: Style = SHOWN.scale(1.0);

const fn credit(duration: f32, overlap: f32) -> RevealStep {
    RevealStep::new(Pick::One(Role::Credit), HIDDEN.x(20.0), SHOWN.x(0.0), duration).overlap(overlap)
}

const TITLE: &[RevealStep] = &[
    RevealStep::new(
        Pick::One(Role::MainTitle),
        HIDDEN.y(50.0).scale(0.9),
        SHOWN.y(0.0).scale(1.0),
        1.0,
    )
    .ease(Ease::BackOut(1.2)),
    RevealStep::new(Pick::One(Role::Subtitle), HIDDEN.y(30.0), SHOWN.y(0.0), 0.8).overlap(0.5),
    RevealStep::new(
        Pick::One(Role::DecorativeLine),
        HIDDEN.scale_x(0.0),
        SHOWN.scale_x(1.0),
        0.8,
    )
    .overlap(0.3),
    RevealStep::new(Pick::One(Role::ClassInfo), HIDDEN.y(20.0), SHOWN.y(0.0), 0.6).overlap(0.2),
    credit(0.5, 0.1),
];

const CONTENT: &[RevealStep] = &[
    TITLE_DROP,
    RevealStep::new(Pick::All(Role::ContentItems), HIDDEN.y(30.0), SHOWN.y(0.0), 0.6)
        .stagger(0.1)
        .overlap(0.4),
    credit(0.4, 0.2),
];

const SCENE: &[RevealStep] = &[
    TITLE_DROP,
    RevealStep::new(Pick::One(Role::SceneFrame), IMAGE_FRAME_FROM, UNSCALED, 1.0).overlap(0.4),
    RevealStep::new(Pick::One(Role::SceneImage), IMAGE_FROM, UNSCALED, 0.8).overlap(0.6),
    RevealStep::new(Pick::All(Role::SceneText), HIDDEN.x(30.0), SHOWN.x(0.0), 0.6)
        .stagger(0.1)
        .overlap(0.8),
    credit(0.4, 0.2),
];

const ANALYSIS: &[RevealStep] = &[
    TITLE_DROP,
    RevealStep::new(Pick::One(Role::AnalysisFrame), IMAGE_FRAME_FROM, UNSCALED, 1.0).overlap(0.4),
    RevealStep::new(Pick::One(Role::AnalysisImage), IMAGE_FROM, UNSCALED, 0.8).overlap(0.6),
    RevealStep::new(Pick::All(Role::AnalysisSections), HIDDEN.y(40.0), SHOWN.y(0.0), 0.7)
        .stagger(0.15)
        .overlap(0.6),
    RevealStep::new(Pick::All(Role::Quotes), HIDDEN.x(-20.0), SHOWN.x(0.0), 0.6)
        .stagger(0.1)
        .overlap(0.4),
    credit(0.4, 0.2),
];

const THEMES: &[RevealStep] = &[
    TITLE_DROP,
    RevealStep::new(
        Pick::All(Role::ThemeCards),
        HIDDEN.y(50.0).scale(0.9),
        SHOWN.y(0.0).scale(1.0),
        0.8,
    )
    .ease(Ease::BackOut(1.1))
    .stagger(0.1)
    .overlap(0.4),
    credit(0.4, 0.2),
];

const CONCLUSION: &[RevealStep] = &[
    TITLE_DROP,
    RevealStep::new(Pick::All(Role::SummarySections), HIDDEN.y(30.0), SHOWN.y(0.0), 0.7)
        .stagger(0.2)
        .overlap(0.4),
    RevealStep::new(Pick::All(Role::TakeawayItems), HIDDEN.x(-30.0), SHOWN.x(0.0), 0.5)
        .stagger(0.1)
        .overlap(0.5),
    RevealStep::new(Pick::One(Role::FinalQuote), HIDDEN.scale(0.9), SHOWN.scale(1.0), 1.0)
        .ease(Ease::BackOut(1.1))
        .overlap(0.3),
    credit(0.4, 0.2),
];

/// Build the content reveal for `slide`.
///
/// The sequence clears inline styles on every content descendant when it
/// starts, waits `Config::reveal_delay`, then runs the kind's table.
pub fn reveal_sequence<D>(slide: NodeId, kind: SlideKind, doc: &mut D, cfg: &Config) -> Sequence
where
    D: DocumentSurface + ?Sized,
{
    let clear = doc.find_all(slide, Role::ContentDescendants);
    let mut seq = Sequence::new(format!("reveal {kind:?}"))
        .with_delay(cfg.reveal_delay)
        .clearing(clear);

    for step in kind.steps() {
        let targets: Vec<NodeId> = match step.pick {
            Pick::One(role) => doc.find(slide, role).into_iter().collect(),
            Pick::All(role) => doc.find_all(slide, role),
        };
        if targets.is_empty() {
            log::debug!("reveal {kind:?}: no {:?} element, step skipped", step.pick.role());
            continue;
        }
        seq.from_to(
            targets,
            step.from,
            step.tween(cfg),
            Position::overlap(step.overlap),
        );
    }
    seq
}
