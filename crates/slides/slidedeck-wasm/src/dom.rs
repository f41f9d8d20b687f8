//! `DocumentSurface` over the live DOM.
//!
//! Elements are interned on first lookup; a `NodeId` is the element's index
//! in the registry, so the same element always maps to the same id. Each
//! surface stamps its index on the element under its own `data-` attribute,
//! so a repeat lookup reads one attribute instead of scanning the registry.

use std::sync::atomic::{AtomicU32, Ordering};

use slidedeck_core::surface::{ACTIVE_CLASS, SLIDE_ATTR};
use slidedeck_core::{Control, DocumentSurface, Field, Landmark, NodeId, Role, Style, StyleSink};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement};

static SURFACES: AtomicU32 = AtomicU32::new(0);

pub struct DomSurface {
    document: Document,
    nodes: Vec<Element>,
    stamp_attr: String,
}

/// Inline `transform` for the transform-type properties of `style`, or
/// `None` when it sets none of them.
pub fn css_transform(style: &Style) -> Option<String> {
    if style.x.is_none() && style.y.is_none() && style.scale.is_none() && style.scale_x.is_none() {
        return None;
    }
    let x = style.x.unwrap_or(0.0);
    let y = style.y.unwrap_or(0.0);
    let sy = style.scale.unwrap_or(1.0);
    let sx = style.scale_x.unwrap_or(sy);
    Some(format!("translate({x}px, {y}px) scale({sx}, {sy})"))
}

impl DomSurface {
    pub fn new(document: Document) -> Self {
        let serial = SURFACES.fetch_add(1, Ordering::Relaxed);
        Self {
            document,
            nodes: Vec::new(),
            stamp_attr: format!("data-slidedeck-node-{serial}"),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn intern(&mut self, el: Element) -> NodeId {
        let stamped = el
            .get_attribute(&self.stamp_attr)
            .and_then(|v| v.parse::<usize>().ok())
            // cloned elements carry the attribute of their source
            .filter(|&i| self.nodes.get(i) == Some(&el));
        let index = match stamped {
            Some(i) => i,
            None => {
                let i = self.nodes.len();
                if let Err(e) = el.set_attribute(&self.stamp_attr, &i.to_string()) {
                    log::warn!("failed to stamp element: {e:?}");
                }
                self.nodes.push(el);
                i
            }
        };
        NodeId(index as u32)
    }

    pub fn element(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(node.0 as usize)
    }

    fn query(&mut self, selector: &str) -> Option<NodeId> {
        match self.document.query_selector(selector) {
            Ok(found) => found.map(|el| self.intern(el)),
            Err(e) => {
                log::warn!("bad selector {selector}: {e:?}");
                None
            }
        }
    }

    fn html(&self, node: NodeId) -> Option<&HtmlElement> {
        self.element(node).and_then(|el| el.dyn_ref::<HtmlElement>())
    }
}

impl StyleSink for DomSurface {
    fn apply_style(&mut self, node: NodeId, style: &Style) {
        let Some(el) = self.html(node) else {
            return;
        };
        let css = el.style();
        if let Some(opacity) = style.opacity {
            let _ = css.set_property("opacity", &opacity.to_string());
        }
        if let Some(transform) = css_transform(style) {
            let _ = css.set_property("transform", &transform);
        }
    }

    fn clear_style(&mut self, node: NodeId) {
        if let Some(el) = self.html(node) {
            let css = el.style();
            let _ = css.remove_property("opacity");
            let _ = css.remove_property("transform");
        }
    }
}

impl DocumentSurface for DomSurface {
    fn slide(&mut self, ordinal: u32) -> Option<NodeId> {
        self.query(&format!("[{SLIDE_ATTR}=\"{ordinal}\"]"))
    }

    fn active_slide(&mut self) -> Option<NodeId> {
        self.query(&format!(".slide.{ACTIVE_CLASS}"))
    }

    fn slide_ordinal(&self, slide: NodeId) -> Option<u32> {
        self.element(slide)?
            .get_attribute(SLIDE_ATTR)?
            .trim()
            .parse()
            .ok()
    }

    fn set_active(&mut self, slide: NodeId, active: bool) {
        let Some(el) = self.element(slide) else {
            return;
        };
        let classes = el.class_list();
        let result = if active {
            classes.add_1(ACTIVE_CLASS)
        } else {
            classes.remove_1(ACTIVE_CLASS)
        };
        if let Err(e) = result {
            log::warn!("failed to toggle {ACTIVE_CLASS}: {e:?}");
        }
    }

    fn is_active(&self, slide: NodeId) -> bool {
        self.element(slide)
            .is_some_and(|el| el.class_list().contains(ACTIVE_CLASS))
    }

    fn find(&mut self, scope: NodeId, role: Role) -> Option<NodeId> {
        let found = self.element(scope)?.query_selector(role.selector()).ok()??;
        Some(self.intern(found))
    }

    fn find_all(&mut self, scope: NodeId, role: Role) -> Vec<NodeId> {
        let Some(list) = self
            .element(scope)
            .and_then(|el| el.query_selector_all(role.selector()).ok())
        else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|n| n.dyn_into::<Element>().ok())
            .map(|el| self.intern(el))
            .collect()
    }

    fn landmark(&mut self, landmark: Landmark) -> Option<NodeId> {
        self.query(landmark.selector())
    }

    fn set_text(&mut self, field: Field, text: &str) {
        if let Some(el) = self.document.get_element_by_id(field.element_id()) {
            el.set_text_content(Some(text));
        }
    }

    fn set_control(&mut self, control: Control, disabled: bool, opacity: f32) {
        let Some(el) = self.document.get_element_by_id(control.element_id()) else {
            return;
        };
        match el.dyn_ref::<HtmlButtonElement>() {
            Some(button) => button.set_disabled(disabled),
            None if disabled => {
                let _ = el.set_attribute("disabled", "");
            }
            None => {
                let _ = el.remove_attribute("disabled");
            }
        }
        if let Some(html) = el.dyn_ref::<HtmlElement>() {
            let _ = html.style().set_property("opacity", &opacity.to_string());
        }
    }

    fn control_disabled(&self, control: Control) -> Option<bool> {
        let el = self.document.get_element_by_id(control.element_id())?;
        Some(match el.dyn_ref::<HtmlButtonElement>() {
            Some(button) => button.disabled(),
            None => el.has_attribute("disabled"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_only_when_a_transform_prop_is_set() {
        assert_eq!(css_transform(&Style::new().opacity(0.5)), None);
        assert_eq!(
            css_transform(&Style::new().x(-100.0)).as_deref(),
            Some("translate(-100px, 0px) scale(1, 1)")
        );
        assert_eq!(
            css_transform(&Style::new().y(30.0).scale(0.9)).as_deref(),
            Some("translate(0px, 30px) scale(0.9, 0.9)")
        );
        assert_eq!(
            css_transform(&Style::new().scale_x(0.0)).as_deref(),
            Some("translate(0px, 0px) scale(0, 1)")
        );
    }
}
