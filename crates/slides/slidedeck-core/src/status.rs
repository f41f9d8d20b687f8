//! Status reflector: counter text and prev/next control state.

use crate::config::Config;
use crate::navigator::Navigator;
use crate::surface::{Control, DocumentSurface, Field};

/// Write the settled navigator state to the page.
pub fn reflect<D>(nav: &Navigator, doc: &mut D, cfg: &Config)
where
    D: DocumentSurface + ?Sized,
{
    doc.set_text(Field::CurrentSlide, &nav.current().to_string());
    doc.set_text(Field::TotalSlides, &nav.total().to_string());
    for (control, disabled) in [(Control::Prev, nav.is_first()), (Control::Next, nav.is_last())] {
        let opacity = if disabled { cfg.disabled_opacity } else { 1.0 };
        doc.set_control(control, disabled, opacity);
    }
}
