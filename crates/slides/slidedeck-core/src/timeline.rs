//! Timeline: the built-in, frame-stepped `AnimationEngine`.
//!
//! Hosts call `update(dt, sink)` once per frame. Each running sequence
//! advances its local clock, writes interpolated styles to the sink and
//! returns the cues it crossed. Finished sequences are dropped after their
//! completion cue is returned; `Repeat::Forever` sequences never finish.

use std::collections::HashMap;

use crate::ids::{IdAllocator, NodeId, SequenceId};
use crate::sequence::{Action, Cue, Repeat, Sequence};
use crate::style::Style;
use crate::surface::StyleSink;

/// Minimal scheduling interface the presentation drives.
pub trait AnimationEngine {
    /// Queue a sequence; it starts on the next `update`.
    fn play(&mut self, sequence: Sequence) -> SequenceId;
    /// Advance every running sequence by `dt` seconds.
    fn update(&mut self, dt: f32, sink: &mut dyn StyleSink) -> Vec<Cue>;
    fn is_active(&self, id: SequenceId) -> bool;
    fn active_count(&self) -> usize;
}

#[derive(Debug, Default, Clone)]
struct TargetState {
    origin: Option<Style>,
    settled: bool,
}

#[derive(Debug, Default, Clone)]
struct StepState {
    fired: bool,
    targets: Vec<TargetState>,
}

#[derive(Debug)]
struct Running {
    id: SequenceId,
    seq: Sequence,
    time: f32,
    started: bool,
    states: Vec<StepState>,
}

impl Running {
    fn new(id: SequenceId, seq: Sequence) -> Self {
        let states = seq
            .steps
            .iter()
            .map(|s| StepState {
                fired: false,
                targets: match &s.action {
                    Action::Tween { targets, .. } => vec![TargetState::default(); targets.len()],
                    _ => Vec::new(),
                },
            })
            .collect();
        Self {
            id,
            seq,
            time: 0.0,
            started: false,
            states,
        }
    }
}

fn fmod(a: f32, b: f32) -> f32 {
    if b == 0.0 {
        return 0.0;
    }
    let m = a % b;
    if (m < 0.0 && b > 0.0) || (m > 0.0 && b < 0.0) {
        m + b
    } else {
        m
    }
}

/// Reflect t into [0, span] with ping-pong behavior, where period = 2 * span.
fn ping_pong(t: f32, span: f32) -> f32 {
    if span <= 0.0 {
        return 0.0;
    }
    let period = 2.0 * span;
    let m = fmod(t, period);
    if m <= span {
        m
    } else {
        period - m
    }
}

/// Frame-stepped engine owning the last written style of every node it animated.
#[derive(Debug, Default)]
pub struct Timeline {
    ids: IdAllocator,
    running: Vec<Running>,
    styles: HashMap<NodeId, Style>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last style this engine wrote to `node`, if any.
    pub fn style_of(&self, node: NodeId) -> Option<Style> {
        self.styles.get(&node).copied()
    }

    fn write(&mut self, sink: &mut dyn StyleSink, node: NodeId, style: &Style) {
        let entry = self.styles.entry(node).or_default();
        entry.merge(style);
        sink.apply_style(node, entry);
    }

    fn start(&mut self, run: &Running, sink: &mut dyn StyleSink) {
        for node in &run.seq.clear_on_start {
            self.styles.remove(node);
            sink.clear_style(*node);
        }
        // from-states render immediately so targets stay hidden during the delay.
        for step in &run.seq.steps {
            if let Action::Tween {
                targets,
                from: Some(from),
                ..
            } = &step.action
            {
                for node in targets {
                    self.write(sink, *node, from);
                }
            }
        }
        log::trace!("sequence '{}' started ({} steps)", run.seq.label, run.seq.steps.len());
    }

    /// Advance one sequence; returns true once it has finished.
    fn step_sequence(
        &mut self,
        run: &mut Running,
        dt: f32,
        sink: &mut dyn StyleSink,
        cues: &mut Vec<Cue>,
    ) -> bool {
        if !run.started {
            run.started = true;
            self.start(run, sink);
        }
        run.time += dt.max(0.0);
        let local = run.time - run.seq.delay;
        if local < 0.0 {
            return false;
        }

        let end = run.seq.duration();
        let (t, looping) = match run.seq.repeat {
            Repeat::Once => (local.min(end), false),
            Repeat::Forever { yoyo: true } => (ping_pong(local, end), true),
            Repeat::Forever { yoyo: false } => (fmod(local, end), true),
        };

        let Running { seq, states, .. } = run;
        for (step, state) in seq.steps.iter().zip(states.iter_mut()) {
            match &step.action {
                Action::Cue(cue) => {
                    if !state.fired && t >= step.start {
                        state.fired = true;
                        cues.push(cue.clone());
                    }
                }
                Action::Set { targets, style } => {
                    if (!state.fired || looping) && t >= step.start {
                        state.fired = true;
                        for node in targets {
                            self.write(sink, *node, style);
                        }
                    }
                }
                Action::Tween {
                    targets,
                    from,
                    tween,
                } => {
                    for (k, (node, ts)) in targets.iter().zip(state.targets.iter_mut()).enumerate() {
                        let begin = step.start + k as f32 * tween.stagger;
                        if t < begin || (ts.settled && !looping) {
                            continue;
                        }
                        let current = self.styles.get(node).copied().unwrap_or_default();
                        let origin = *ts
                            .origin
                            .get_or_insert_with(|| from.unwrap_or_else(|| current.capture(&tween.to)));
                        let p = if tween.duration <= 0.0 {
                            1.0
                        } else {
                            ((t - begin) / tween.duration).clamp(0.0, 1.0)
                        };
                        let value = origin.lerp_toward(&tween.to, tween.ease.apply(p));
                        self.write(sink, *node, &value);
                        if p >= 1.0 {
                            ts.settled = true;
                        }
                    }
                }
            }
        }

        if !looping && local >= end {
            if let Some(cue) = &seq.on_complete {
                cues.push(cue.clone());
            }
            log::trace!("sequence '{}' complete", seq.label);
            return true;
        }
        false
    }
}

impl AnimationEngine for Timeline {
    fn play(&mut self, sequence: Sequence) -> SequenceId {
        let id = self.ids.alloc_sequence();
        self.running.push(Running::new(id, sequence));
        id
    }

    fn update(&mut self, dt: f32, sink: &mut dyn StyleSink) -> Vec<Cue> {
        let mut cues = Vec::new();
        let mut running = std::mem::take(&mut self.running);
        running.retain_mut(|run| !self.step_sequence(run, dt, sink, &mut cues));
        self.running = running;
        cues
    }

    fn is_active(&self, id: SequenceId) -> bool {
        self.running.iter().any(|r| r.id == id)
    }

    fn active_count(&self) -> usize {
        self.running.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ping_pong_reflects() {
        assert_eq!(ping_pong(0.5, 2.0), 0.5);
        assert_eq!(ping_pong(3.0, 2.0), 1.0);
        assert_eq!(ping_pong(4.5, 2.0), 0.5);
        assert_eq!(ping_pong(1.0, 0.0), 0.0);
    }

    #[test]
    fn fmod_wraps_negative() {
        assert_eq!(fmod(-1.0, 4.0), 3.0);
        assert_eq!(fmod(5.0, 4.0), 1.0);
    }
}
