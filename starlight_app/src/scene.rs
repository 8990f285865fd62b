//! Demo desktop

use starlight::font::FontAtlas;
use starlight::geometry::Rect;
use starlight::ui::Element;

/// Text of the label that follows the mouse
pub const POINTER_TEXT: &str = "MOUSE!!!";

/// Desktop filling `screen` with one test window holding a label and two buttons
pub fn desktop(screen: &Rect, font: &FontAtlas) -> Element {
    let mut desk = Element::window("Desktop").with_size(screen.width, screen.height);

    let window = desk
        .append_child(Element::window("Test Window"))
        .reposition(300, 300)
        .resize(320, 200);

    window
        .append_child(Element::label("I'm a label!", font))
        .reposition(30, 50);
    window
        .append_child(Element::button("I'm a button!", font))
        .reposition(30, 80);
    window
        .append_child(Element::button("I'm disabled!", font))
        .reposition(30, 120)
        .set_disabled(true);

    desk
}

/// Label drawn on top of everything at the pointer position
pub fn pointer(font: &FontAtlas) -> Element {
    Element::label(POINTER_TEXT, font)
}
