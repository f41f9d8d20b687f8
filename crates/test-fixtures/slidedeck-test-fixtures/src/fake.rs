//! In-memory `DocumentSurface` for tests.

use std::collections::HashMap;

use anyhow::Result;
use slidedeck_core::{
    Control, DocumentSurface, Field, IdAllocator, Landmark, NodeId, Role, Style, StyleSink,
};

use crate::decks::{self, Deck};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ControlState {
    pub disabled: bool,
    pub opacity: f32,
}

#[derive(Debug, Clone)]
struct FakeNode {
    id: NodeId,
    slide: Option<u32>,
    role: Option<Role>,
    active: bool,
    style: Style,
}

/// Flat stand-in for a slideshow page: slides, their role-tagged parts,
/// landmarks, counter fields and controls. Records every style write.
#[derive(Debug, Default)]
pub struct FakeDocument {
    ids: IdAllocator,
    nodes: Vec<FakeNode>,
    landmarks: HashMap<Landmark, NodeId>,
    fields: HashMap<Field, String>,
    controls: HashMap<Control, ControlState>,
    cleared: Vec<NodeId>,
    writes: Vec<(NodeId, Style)>,
}

impl FakeDocument {
    pub fn load(name: &str) -> Result<Self> {
        Ok(Self::from_deck(&decks::load(name)?))
    }

    pub fn from_deck(deck: &Deck) -> Self {
        let mut doc = Self::default();
        for landmark in &deck.landmarks {
            let id = doc.push(None, None);
            doc.landmarks.insert(*landmark, id);
        }
        for field in &deck.fields {
            doc.fields.insert(*field, String::new());
        }
        for control in &deck.controls {
            doc.controls.insert(
                *control,
                ControlState {
                    disabled: false,
                    opacity: 1.0,
                },
            );
        }
        for slide in &deck.slides {
            doc.push(Some(slide.ordinal), None);
            for (role, count) in &slide.parts {
                for _ in 0..*count {
                    doc.push(Some(slide.ordinal), Some(*role));
                }
            }
        }
        doc
    }

    fn push(&mut self, slide: Option<u32>, role: Option<Role>) -> NodeId {
        let id = self.ids.alloc_node();
        self.nodes.push(FakeNode {
            id,
            slide,
            role,
            active: false,
            style: Style::new(),
        });
        id
    }

    fn node(&self, id: NodeId) -> Option<&FakeNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut FakeNode> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    fn is_slide(n: &FakeNode) -> bool {
        n.slide.is_some() && n.role.is_none()
    }

    fn matches(n: &FakeNode, ordinal: u32, role: Role) -> bool {
        n.slide == Some(ordinal)
            && match (role, n.role) {
                (Role::ContentDescendants, Some(_)) => true,
                (wanted, Some(have)) => wanted == have,
                (_, None) => false,
            }
    }

    /// Drop a slide and all of its parts, as if the page never had them.
    pub fn remove_slide(&mut self, ordinal: u32) {
        self.nodes.retain(|n| n.slide != Some(ordinal));
    }

    pub fn slide_node(&self, ordinal: u32) -> Option<NodeId> {
        self.nodes
            .iter()
            .find(|n| Self::is_slide(n) && n.slide == Some(ordinal))
            .map(|n| n.id)
    }

    pub fn landmark_node(&self, landmark: Landmark) -> Option<NodeId> {
        self.landmarks.get(&landmark).copied()
    }

    /// Ordinals of every slide carrying the active class.
    pub fn active_ordinals(&self) -> Vec<u32> {
        self.nodes
            .iter()
            .filter(|n| Self::is_slide(n) && n.active)
            .filter_map(|n| n.slide)
            .collect()
    }

    pub fn parts(&self, ordinal: u32, role: Role) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|n| Self::matches(n, ordinal, role))
            .map(|n| n.id)
            .collect()
    }

    pub fn role_of(&self, node: NodeId) -> Option<Role> {
        self.node(node).and_then(|n| n.role)
    }

    pub fn text(&self, field: Field) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn control(&self, control: Control) -> Option<ControlState> {
        self.controls.get(&control).copied()
    }

    /// Current inline style of `node` (empty when never written or cleared).
    pub fn inline_style(&self, node: NodeId) -> Style {
        self.node(node).map(|n| n.style).unwrap_or_default()
    }

    pub fn cleared(&self) -> &[NodeId] {
        &self.cleared
    }

    pub fn writes(&self) -> &[(NodeId, Style)] {
        &self.writes
    }

    pub fn clear_log(&mut self) {
        self.cleared.clear();
        self.writes.clear();
    }
}

impl StyleSink for FakeDocument {
    fn apply_style(&mut self, node: NodeId, style: &Style) {
        if let Some(n) = self.node_mut(node) {
            n.style = *style;
        }
        self.writes.push((node, *style));
    }

    fn clear_style(&mut self, node: NodeId) {
        if let Some(n) = self.node_mut(node) {
            n.style = Style::new();
        }
        self.cleared.push(node);
    }
}

impl DocumentSurface for FakeDocument {
    fn slide(&mut self, ordinal: u32) -> Option<NodeId> {
        self.slide_node(ordinal)
    }

    fn active_slide(&mut self) -> Option<NodeId> {
        self.nodes
            .iter()
            .find(|n| Self::is_slide(n) && n.active)
            .map(|n| n.id)
    }

    fn slide_ordinal(&self, slide: NodeId) -> Option<u32> {
        self.node(slide).filter(|n| Self::is_slide(n)).and_then(|n| n.slide)
    }

    fn set_active(&mut self, slide: NodeId, active: bool) {
        if let Some(n) = self.node_mut(slide) {
            n.active = active;
        }
    }

    fn is_active(&self, slide: NodeId) -> bool {
        self.node(slide).is_some_and(|n| n.active)
    }

    fn find(&mut self, scope: NodeId, role: Role) -> Option<NodeId> {
        self.find_all(scope, role).into_iter().next()
    }

    fn find_all(&mut self, scope: NodeId, role: Role) -> Vec<NodeId> {
        match self.slide_ordinal(scope) {
            Some(ordinal) => self.parts(ordinal, role),
            None => Vec::new(),
        }
    }

    fn landmark(&mut self, landmark: Landmark) -> Option<NodeId> {
        self.landmark_node(landmark)
    }

    fn set_text(&mut self, field: Field, text: &str) {
        if let Some(slot) = self.fields.get_mut(&field) {
            *slot = text.to_string();
        }
    }

    fn set_control(&mut self, control: Control, disabled: bool, opacity: f32) {
        if let Some(state) = self.controls.get_mut(&control) {
            *state = ControlState { disabled, opacity };
        }
    }

    fn control_disabled(&self, control: Control) -> Option<bool> {
        self.controls.get(&control).map(|c| c.disabled)
    }
}
