// DOM helpers shared by the components
use web_sys::{Element, ScrollBehavior, ScrollToOptions};
use yew::NodeRef;

use crate::model::{BoundingBox, ScrollCommand, WidgetBounds};

impl WidgetBounds for Element {
    fn bounding_box(&self) -> Option<BoundingBox> {
        let rect = self.get_bounding_client_rect();
        Some(BoundingBox {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        })
    }
}

// None until the node is mounted.
impl WidgetBounds for NodeRef {
    fn bounding_box(&self) -> Option<BoundingBox> {
        self.cast::<Element>()?.bounding_box()
    }
}

/// Smoothly scrolls `container` by the command's signed offset. The browser
/// clamps at the content bounds.
pub fn scroll_container_by(container: &Element, command: &ScrollCommand) {
    let options = ScrollToOptions::new();
    options.set_top(command.signed_offset());
    options.set_behavior(ScrollBehavior::Smooth);
    container.scroll_by_with_scroll_to_options(&options);
}
