//! slidedeck core (DOM-agnostic)
//!
//! Navigation state, the slide-change sequence, per-kind content reveals and
//! a frame-stepped animation timeline. Hosts implement `DocumentSurface`
//! and feed input and frame deltas into a `Presentation`.

pub mod config;
pub mod error;
pub mod ids;
pub mod input;
pub mod interp;
pub mod navigator;
pub mod preload;
pub mod presentation;
pub mod reveal;
pub mod sequence;
pub mod sequencer;
pub mod status;
pub mod style;
pub mod surface;
pub mod timeline;

// Re-exports for consumers (adapters)
pub use config::{Config, NavFloatCfg, TransitionCfg};
pub use error::ConfigError;
pub use ids::{IdAllocator, NodeId, SequenceId};
pub use input::{Command, Dispatch, Input, Key};
pub use interp::Ease;
pub use navigator::{Direction, Navigator, Transition};
pub use preload::{PreloadStatus, PreloadTracker};
pub use presentation::Presentation;
pub use reveal::{reveal_sequence, Pick, RevealStep, SlideKind};
pub use sequence::{Action, Cue, Position, Repeat, Sequence, Step, Tween};
pub use sequencer::transition_sequence;
pub use style::{Prop, Style};
pub use surface::{Control, DocumentSurface, Field, Landmark, Role, StyleSink};
pub use timeline::{AnimationEngine, Timeline};
