//! Exit/enter sequence between two slides.

use crate::config::TransitionCfg;
use crate::ids::NodeId;
use crate::navigator::Transition;
use crate::sequence::{Cue, Position, Sequence, Tween};
use crate::style::Style;

/// Build the four-step slide change:
/// 1. fade/slide the outgoing slide out,
/// 2. swap the active class and snap the incoming slide to its entry offset,
/// 3. fade/slide the incoming slide in,
/// 4. shortly before 3 ends, cue the incoming slide's content reveal.
///
/// The sequence completes with `Cue::TransitionComplete`.
pub fn transition_sequence(
    plan: &Transition,
    outgoing: NodeId,
    incoming: NodeId,
    cfg: &TransitionCfg,
) -> Sequence {
    let dir = plan.direction;
    let mut seq = Sequence::new(format!("transition {} -> {}", plan.from, plan.to))
        .on_complete(Cue::TransitionComplete { target: plan.to });

    seq.to(
        vec![outgoing],
        Tween::new(
            Style::new().opacity(0.0).x(dir.exit_offset(cfg.offset)),
            cfg.duration,
            cfg.ease,
        ),
        Position::Next,
    )
    .cue(Cue::SwapSlides { outgoing, incoming }, Position::Next)
    .set(
        vec![incoming],
        Style::new().x(dir.entry_offset(cfg.offset)).opacity(0.0),
        Position::Next,
    )
    .to(
        vec![incoming],
        Tween::new(Style::new().opacity(1.0).x(0.0), cfg.duration, cfg.ease),
        Position::Next,
    )
    .cue(
        Cue::RevealContent { slide: incoming },
        Position::overlap(cfg.reveal_lead),
    );
    seq
}
