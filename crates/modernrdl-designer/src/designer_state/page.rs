//! Page settings and viewport gestures for designer state.

use modernrdl_core::Point;

use super::DesignerState;
use crate::model::PageSettingsPatch;
use crate::viewport::ZoomDirection;

impl DesignerState {
    /// Merges page settings. Dimensions always follow format and orientation.
    pub fn change_page_settings(&mut self, patch: &PageSettingsPatch) -> bool {
        let mut doc = self.working_copy();
        let before = doc.page;
        doc.page.apply(patch);
        if doc.page == before {
            return false;
        }

        tracing::debug!(
            "Page: {} {} {}x{}",
            doc.page.format,
            doc.page.orientation,
            doc.page.width,
            doc.page.height
        );
        self.commit(doc, "Change page settings");
        true
    }

    /// Scales and centers the page in the container.
    pub fn fit_to_page(&mut self) {
        let page = self.document().page.size();
        self.viewport.fit_page(page, self.options.fit_margin);
    }

    /// The drawing surface was resized.
    pub fn set_container_size(&mut self, width: f64, height: f64) {
        self.viewport.set_container_size(width, height);
    }

    /// Zooms one notch for a wheel event at `pointer` (container-relative).
    pub fn zoom_with_wheel(&mut self, pointer: Point, delta_y: f64) -> bool {
        let Some(direction) = ZoomDirection::from_wheel_delta(delta_y) else {
            return false;
        };
        self.viewport.zoom_at_pointer(pointer, direction);
        tracing::debug!("Zoom: {}", self.viewport);
        true
    }

    pub fn set_pan_mode(&mut self, active: bool) {
        self.viewport.set_pan_mode(active);
    }

    /// Pans the view. Ignored unless pan mode is held.
    pub fn pan_view(&mut self, dx: f64, dy: f64) -> bool {
        if !self.viewport.pan(dx, dy) {
            return false;
        }
        tracing::debug!("Pan: {}", self.viewport);
        true
    }
}
