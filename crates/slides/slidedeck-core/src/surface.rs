//! Document surface contract.
//!
//! Hosts (the web-sys adapter, test fakes) implement `DocumentSurface` so the
//! navigator and revealer can locate slides and their parts, toggle the
//! active slide, and update the counter and controls without touching a
//! concrete DOM API. Element handles are opaque `NodeId`s interned by the host.

use serde::{Deserialize, Serialize};

use crate::ids::NodeId;
use crate::style::Style;

/// Receives resolved inline styles from an animation engine.
pub trait StyleSink {
    /// Write `style` (every property set on it) as inline style on `node`.
    fn apply_style(&mut self, node: NodeId, style: &Style);
    /// Drop every inline animation property from `node`.
    fn clear_style(&mut self, node: NodeId);
}

/// Semantic parts of a slide that reveal steps animate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    MainTitle,
    Subtitle,
    DecorativeLine,
    ClassInfo,
    Credit,
    SlideTitle,
    ContentItems,
    SceneFrame,
    SceneImage,
    SceneText,
    AnalysisFrame,
    AnalysisImage,
    AnalysisSections,
    Quotes,
    ThemeCards,
    SummarySections,
    TakeawayItems,
    FinalQuote,
    /// Every element inside the slide's content wrapper.
    ContentDescendants,
}

impl Role {
    /// CSS selector matching this role inside a slide.
    pub const fn selector(self) -> &'static str {
        match self {
            Role::MainTitle => ".main-title",
            Role::Subtitle => ".subtitle",
            Role::DecorativeLine => ".decorative-line",
            Role::ClassInfo => ".class-info",
            Role::Credit => ".author-credit",
            Role::SlideTitle => ".slide-title",
            Role::ContentItems => {
                ".text-content > *, .author-details > *, .theme-item, .character-card"
            }
            Role::SceneFrame => ".scene-image",
            Role::SceneImage => ".scene-image img",
            Role::SceneText => ".scene-text > *",
            Role::AnalysisFrame => ".analysis-image",
            Role::AnalysisImage => ".analysis-image img",
            Role::AnalysisSections => ".key-themes, .important-quotes, .character-development",
            Role::Quotes => "blockquote",
            Role::ThemeCards => ".theme-card",
            Role::SummarySections => ".key-takeaways, .relevance",
            Role::TakeawayItems => ".key-takeaways li",
            Role::FinalQuote => ".final-quote",
            Role::ContentDescendants => ".slide-content *",
        }
    }
}

/// Page-level elements outside any slide.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Landmark {
    Body,
    Navigation,
}

impl Landmark {
    pub const fn selector(self) -> &'static str {
        match self {
            Landmark::Body => "body",
            Landmark::Navigation => ".navigation",
        }
    }
}

/// Prev/next buttons.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    Prev,
    Next,
}

impl Control {
    pub const fn element_id(self) -> &'static str {
        match self {
            Control::Prev => "prevBtn",
            Control::Next => "nextBtn",
        }
    }
}

/// Text fields of the slide counter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    CurrentSlide,
    TotalSlides,
}

impl Field {
    pub const fn element_id(self) -> &'static str {
        match self {
            Field::CurrentSlide => "currentSlide",
            Field::TotalSlides => "totalSlides",
        }
    }
}

/// Class marking the visible slide.
pub const ACTIVE_CLASS: &str = "active";

/// Attribute carrying a slide's 1-based ordinal.
pub const SLIDE_ATTR: &str = "data-slide";

/// Everything the presentation reads from or writes to the page.
///
/// Lookups return `None`/empty when the page lacks an element; callers treat
/// that as "skip", never as an error.
pub trait DocumentSurface: StyleSink {
    /// Slide whose ordinal attribute equals `ordinal`.
    fn slide(&mut self, ordinal: u32) -> Option<NodeId>;
    /// First slide currently carrying the active class.
    fn active_slide(&mut self) -> Option<NodeId>;
    /// Parsed ordinal attribute of a slide node.
    fn slide_ordinal(&self, slide: NodeId) -> Option<u32>;
    fn set_active(&mut self, slide: NodeId, active: bool);
    fn is_active(&self, slide: NodeId) -> bool;

    /// First descendant of `scope` matching `role`.
    fn find(&mut self, scope: NodeId, role: Role) -> Option<NodeId>;
    /// All descendants of `scope` matching `role`, in document order.
    fn find_all(&mut self, scope: NodeId, role: Role) -> Vec<NodeId>;
    fn landmark(&mut self, landmark: Landmark) -> Option<NodeId>;

    /// Replace a counter field's text. Missing fields are ignored.
    fn set_text(&mut self, field: Field, text: &str);
    /// Set a control's disabled flag and inline opacity. Missing controls are ignored.
    fn set_control(&mut self, control: Control, disabled: bool, opacity: f32);
    /// Disabled flag of a control, `None` when the page has no such control.
    fn control_disabled(&self, control: Control) -> Option<bool>;
}
