use slidedeck_core::{
    AnimationEngine, Config, ConfigError, Control, DocumentSurface, Field, Input, Key, Landmark,
    Presentation, Role, Style,
};
use slidedeck_test_fixtures::FakeDocument;

const FRAME: f32 = 0.05;

fn deck() -> (Presentation, FakeDocument) {
    let mut doc = FakeDocument::load("on-the-face-of-it").expect("deck fixture");
    let mut p = Presentation::new(Config::default()).expect("default config");
    p.start(&mut doc);
    (p, doc)
}

fn settle(p: &mut Presentation, doc: &mut FakeDocument) {
    for _ in 0..200 {
        if !p.is_animating() {
            return;
        }
        p.tick(FRAME, doc);
    }
    panic!("transition did not settle");
}

fn frames(p: &mut Presentation, doc: &mut FakeDocument, n: usize) {
    for _ in 0..n {
        p.tick(FRAME, doc);
    }
}

fn first_write(doc: &FakeDocument, node: slidedeck_core::NodeId) -> Style {
    doc.writes()
        .iter()
        .find(|(n, _)| *n == node)
        .map(|(_, s)| *s)
        .expect("node was written")
}

fn last_write(doc: &FakeDocument, node: slidedeck_core::NodeId) -> Style {
    doc.writes()
        .iter()
        .rev()
        .find(|(n, _)| *n == node)
        .map(|(_, s)| *s)
        .expect("node was written")
}

#[test]
fn start_shows_first_slide_and_status() {
    let (p, doc) = deck();
    assert_eq!(p.current_slide(), 1);
    assert_eq!(doc.active_ordinals(), vec![1]);
    assert_eq!(doc.text(Field::CurrentSlide), Some("1"));
    assert_eq!(doc.text(Field::TotalSlides), Some("12"));

    let prev = doc.control(Control::Prev).unwrap();
    assert!(prev.disabled);
    assert_eq!(prev.opacity, 0.5);
    let next = doc.control(Control::Next).unwrap();
    assert!(!next.disabled);
    assert_eq!(next.opacity, 1.0);

    let slide = doc.slide_node(1).unwrap();
    assert_eq!(doc.inline_style(slide).opacity, Some(1.0));
    assert_eq!(doc.inline_style(slide).x, Some(0.0));
}

#[test]
fn start_fades_page_and_floats_navigation() {
    let (mut p, mut doc) = deck();
    let body = doc.landmark_node(Landmark::Body).unwrap();
    let nav = doc.landmark_node(Landmark::Navigation).unwrap();
    assert_eq!(doc.inline_style(body).opacity, Some(0.0));

    frames(&mut p, &mut doc, 30);
    assert_eq!(doc.inline_style(body).opacity, Some(1.0));
    let y = doc.inline_style(nav).y.unwrap();
    assert!((-3.0..=0.0).contains(&y));
    assert!(y < 0.0);
    // float never finishes
    assert!(p.engine().active_count() >= 1);
}

#[test]
fn start_twice_is_ignored() {
    let (mut p, mut doc) = deck();
    let before = p.engine().active_count();
    p.start(&mut doc);
    assert_eq!(p.engine().active_count(), before);
}

#[test]
fn advance_from_title_reaches_slide_two() {
    let (mut p, mut doc) = deck();
    assert!(p.advance(&mut doc));
    assert!(p.is_animating());
    settle(&mut p, &mut doc);

    assert_eq!(p.current_slide(), 2);
    assert_eq!(doc.active_ordinals(), vec![2]);
    assert_eq!(doc.text(Field::CurrentSlide), Some("2"));
    assert_eq!(doc.text(Field::TotalSlides), Some("12"));
    assert!(!doc.control(Control::Prev).unwrap().disabled);
    assert_eq!(doc.control(Control::Prev).unwrap().opacity, 1.0);
    assert!(!doc.control(Control::Next).unwrap().disabled);

    // content reveal ran for slide 2
    let items = doc.parts(2, Role::ContentItems);
    assert_eq!(items.len(), 4);
    frames(&mut p, &mut doc, 40);
    for item in items {
        assert_eq!(doc.inline_style(item).opacity, Some(1.0));
        assert_eq!(doc.inline_style(item).y, Some(0.0));
    }
}

#[test]
fn reveal_starts_before_transition_completes() {
    let (mut p, mut doc) = deck();
    p.advance(&mut doc);
    frames(&mut p, &mut doc, 13);
    assert!(p.is_animating());
    assert_eq!(doc.active_ordinals(), vec![2]);
    let title = doc.parts(2, Role::SlideTitle)[0];
    assert_eq!(doc.inline_style(title), Style::new().opacity(0.0).y(-30.0));
    // counter only updates once settled
    assert_eq!(doc.text(Field::CurrentSlide), Some("1"));
}

#[test]
fn input_during_transition_is_dropped() {
    let (mut p, mut doc) = deck();
    assert!(p.advance(&mut doc));
    frames(&mut p, &mut doc, 2);
    let running = p.engine().active_count();

    assert!(!p.advance(&mut doc));
    assert!(!p.retreat(&mut doc));
    assert!(!p.jump_to(9, &mut doc));
    let d = p.handle_input(Input::Key(Key::ArrowRight), &mut doc);
    assert_eq!(d.command, None);
    assert!(!d.prevent_default);
    let d = p.handle_input(Input::Click(Control::Next), &mut doc);
    assert!(d.prevent_default && d.stop_propagation);
    assert_eq!(p.engine().active_count(), running);

    settle(&mut p, &mut doc);
    assert_eq!(p.current_slide(), 2);
}

#[test]
fn bounds_are_no_ops() {
    let (mut p, mut doc) = deck();
    assert!(!p.retreat(&mut doc));
    assert!(!p.is_animating());
    assert!(!p.jump_to(0, &mut doc));
    assert!(!p.jump_to(13, &mut doc));

    assert!(p.jump_to(12, &mut doc));
    settle(&mut p, &mut doc);
    assert!(!p.advance(&mut doc));
    assert_eq!(p.current_slide(), 12);
    assert_eq!(doc.active_ordinals(), vec![12]);
}

#[test]
fn forward_jump_exits_left_and_enters_from_right() {
    let (mut p, mut doc) = deck();
    doc.clear_log();
    assert!(p.jump_to(5, &mut doc));
    settle(&mut p, &mut doc);

    let from = doc.slide_node(1).unwrap();
    let to = doc.slide_node(5).unwrap();
    assert_eq!(last_write(&doc, from), Style::new().opacity(0.0).x(-100.0));
    assert_eq!(first_write(&doc, to), Style::new().opacity(0.0).x(100.0));
    assert_eq!(doc.inline_style(to), Style::new().opacity(1.0).x(0.0));
}

#[test]
fn backward_jump_mirrors_offsets() {
    let (mut p, mut doc) = deck();
    p.jump_to(5, &mut doc);
    settle(&mut p, &mut doc);
    doc.clear_log();

    assert!(p.jump_to(1, &mut doc));
    settle(&mut p, &mut doc);
    let from = doc.slide_node(5).unwrap();
    let to = doc.slide_node(1).unwrap();
    assert_eq!(last_write(&doc, from), Style::new().opacity(0.0).x(100.0));
    assert_eq!(first_write(&doc, to).x, Some(-100.0));
    assert_eq!(first_write(&doc, to).opacity, Some(0.0));
}

#[test]
fn conclusion_disables_next() {
    let (mut p, mut doc) = deck();
    let d = p.handle_input(Input::Key(Key::End), &mut doc);
    assert!(d.prevent_default);
    settle(&mut p, &mut doc);

    assert_eq!(p.current_slide(), 12);
    let next = doc.control(Control::Next).unwrap();
    assert!(next.disabled);
    assert_eq!(next.opacity, 0.5);
    assert_eq!(doc.control_disabled(Control::Prev), Some(false));

    frames(&mut p, &mut doc, 80);
    let quote = doc.parts(12, Role::FinalQuote)[0];
    assert_eq!(doc.inline_style(quote), Style::new().opacity(1.0).scale(1.0));
}

#[test]
fn home_from_scene_replays_title_reveal() {
    let (mut p, mut doc) = deck();
    p.jump_to(7, &mut doc);
    settle(&mut p, &mut doc);
    frames(&mut p, &mut doc, 60);
    doc.clear_log();

    let d = p.handle_input(Input::Key(Key::Home), &mut doc);
    assert!(d.prevent_default);
    settle(&mut p, &mut doc);
    assert_eq!(p.current_slide(), 1);
    assert_eq!(doc.active_ordinals(), vec![1]);

    let slide = doc.slide_node(1).unwrap();
    assert_eq!(first_write(&doc, slide).x, Some(-100.0));

    let title = doc.parts(1, Role::MainTitle)[0];
    assert!(doc.cleared().contains(&title));
    assert_eq!(
        first_write(&doc, title),
        Style::new().opacity(0.0).y(50.0).scale(0.9)
    );
}

#[test]
fn revisiting_clears_previous_overrides() {
    let (mut p, mut doc) = deck();
    p.advance(&mut doc);
    settle(&mut p, &mut doc);
    frames(&mut p, &mut doc, 40);
    p.retreat(&mut doc);
    settle(&mut p, &mut doc);
    doc.clear_log();

    p.advance(&mut doc);
    settle(&mut p, &mut doc);
    let parts = doc.parts(2, Role::ContentDescendants);
    assert!(!parts.is_empty());
    for part in parts {
        assert!(doc.cleared().contains(&part));
    }
}

#[test]
fn missing_target_slide_aborts_silently() {
    let mut doc = FakeDocument::load("bare").unwrap();
    let mut p = Presentation::new(Config::default()).unwrap();
    p.start(&mut doc);

    assert!(p.jump_to(3, &mut doc));
    settle(&mut p, &mut doc);
    assert_eq!(p.current_slide(), 3);

    assert!(!p.advance(&mut doc));
    assert!(!p.is_animating());
    assert_eq!(p.current_slide(), 3);
    assert_eq!(doc.active_ordinals(), vec![3]);

    // lock was released: other moves still work
    assert!(p.retreat(&mut doc));
    settle(&mut p, &mut doc);
    assert_eq!(p.current_slide(), 2);
}

#[test]
fn missing_active_slide_aborts_silently() {
    let mut doc = FakeDocument::load("on-the-face-of-it").unwrap();
    doc.remove_slide(1);
    let mut p = Presentation::new(Config::default()).unwrap();
    p.start(&mut doc);
    assert!(doc.active_ordinals().is_empty());
    assert!(!p.advance(&mut doc));
    assert!(!p.is_animating());
}

#[test]
fn bare_page_without_controls_or_landmarks_still_navigates() {
    let mut doc = FakeDocument::load("bare").unwrap();
    let mut p = Presentation::new(Config::default()).unwrap();
    p.start(&mut doc);
    assert_eq!(doc.text(Field::CurrentSlide), None);
    assert_eq!(doc.control_disabled(Control::Next), None);

    assert!(p.jump_to(12, &mut doc));
    settle(&mut p, &mut doc);
    assert_eq!(doc.active_ordinals(), vec![12]);
}

#[test]
fn random_walk_keeps_single_active_slide_in_bounds() {
    let (mut p, mut doc) = deck();
    let mut seed: u32 = 0x2545_f491;
    for _ in 0..60 {
        seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        match seed >> 30 {
            0 => {
                p.advance(&mut doc);
            }
            1 => {
                p.retreat(&mut doc);
            }
            2 => {
                p.jump_to((seed >> 8) % 14, &mut doc);
            }
            _ => {
                p.handle_input(Input::Key(Key::Space), &mut doc);
            }
        }
        // some input lands mid-transition
        frames(&mut p, &mut doc, (seed % 5) as usize);
        if (seed >> 4) % 3 == 0 {
            p.advance(&mut doc);
        }
        settle(&mut p, &mut doc);

        let current = p.current_slide();
        assert!((1..=12).contains(&current));
        assert_eq!(doc.active_ordinals(), vec![current]);
        assert_eq!(doc.text(Field::CurrentSlide), Some(current.to_string().as_str()));
    }
}

#[test]
fn oversized_frames_are_clamped() {
    let (mut p, mut doc) = deck();
    p.advance(&mut doc);
    p.tick(10.0, &mut doc);
    // one clamped frame cannot finish a 0.8s transition
    assert!(p.is_animating());
    p.tick(f32::NAN, &mut doc);
    assert!(p.is_animating());
    settle(&mut p, &mut doc);
    assert_eq!(p.current_slide(), 2);
}

#[test]
fn frame_clamp_must_let_time_advance() {
    let frozen = Config {
        max_frame_delta: 0.0,
        ..Config::default()
    };
    assert_eq!(
        Presentation::new(frozen).err(),
        Some(ConfigError::InvalidFrameDelta(0.0))
    );

    // the smallest accepted clamp still lets a transition finish
    let mut doc = FakeDocument::load("on-the-face-of-it").unwrap();
    let mut p = Presentation::new(Config {
        max_frame_delta: 0.01,
        ..Config::default()
    })
    .unwrap();
    p.start(&mut doc);
    assert!(p.advance(&mut doc));
    for _ in 0..200 {
        p.tick(0.016, &mut doc);
    }
    assert!(!p.is_animating());
    assert_eq!(p.current_slide(), 2);
}
