//! Window, label and button nodes

use super::Theme;
use crate::font::FontAtlas;
use crate::geometry::{shade, Rect};
use crate::surface::Canvas;

/// What an element is, with the data only that kind carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    /// Bevelled panel with a title in its top-left corner
    Window {
        /// Title text
        title: String,
    },
    /// Bare text with no background
    Label {
        /// Label text
        text: String,
    },
    /// Bevelled button; disabled buttons are drawn sunken with dimmed text
    Button {
        /// Caption
        text: String,
        /// Whether the button is disabled
        disabled: bool,
    },
}

/// A node of the element tree
///
/// The rectangle is relative to the parent's top-left corner. Children are
/// owned; dropping an element drops its whole subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    kind: ElementKind,
    rect: Rect,
    children: Vec<Element>,
}

impl Element {
    fn new(kind: ElementKind, width: i64, height: i64) -> Self {
        Self {
            kind,
            rect: Rect::new(0, 0, width, height),
            children: Vec::new(),
        }
    }

    /// Create a window; size it with [`Element::resize`]
    pub fn window(title: impl Into<String>) -> Self {
        Self::new(ElementKind::Window { title: title.into() }, 0, 0)
    }

    /// Create a label sized to fit `text` in `font`
    pub fn label(text: impl Into<String>, font: &FontAtlas) -> Self {
        let text = text.into();
        let width = font.text_width(&text);
        Self::new(ElementKind::Label { text }, width, font.glyph_height() as i64)
    }

    /// Create an enabled button sized to fit `text` plus the bevel padding
    pub fn button(text: impl Into<String>, font: &FontAtlas) -> Self {
        let text = text.into();
        let width = font.text_width(&text) + Theme::DEFAULT_EDGE * 2;
        let height = font.glyph_height() as i64 + Theme::DEFAULT_EDGE * 4;
        Self::new(ElementKind::Button { text, disabled: false }, width, height)
    }

    /// Move to `(x, y)` relative to the parent
    pub fn reposition(&mut self, x: i64, y: i64) -> &mut Self {
        self.rect.x = x;
        self.rect.y = y;
        self
    }

    /// Set the size
    pub fn resize(&mut self, width: i64, height: i64) -> &mut Self {
        self.rect.resize(width, height);
        self
    }

    /// Builder form of [`Element::reposition`]
    #[must_use]
    pub fn with_position(mut self, x: i64, y: i64) -> Self {
        self.reposition(x, y);
        self
    }

    /// Builder form of [`Element::resize`]
    #[must_use]
    pub fn with_size(mut self, width: i64, height: i64) -> Self {
        self.resize(width, height);
        self
    }

    /// Take ownership of `child` as the last child and return it for further setup
    pub fn append_child(&mut self, child: Self) -> &mut Self {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Kind and kind-specific data
    pub const fn kind(&self) -> &ElementKind {
        &self.kind
    }

    /// Rectangle relative to the parent
    pub const fn rect(&self) -> &Rect {
        &self.rect
    }

    /// Children in paint order
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Child at `index`
    pub fn child_mut(&mut self, index: usize) -> Option<&mut Self> {
        self.children.get_mut(index)
    }

    /// Title of a window or text of a label or button
    pub fn text(&self) -> &str {
        match &self.kind {
            ElementKind::Window { title } => title,
            ElementKind::Label { text } | ElementKind::Button { text, .. } => text,
        }
    }

    /// Whether this is a disabled button
    pub const fn is_disabled(&self) -> bool {
        matches!(self.kind, ElementKind::Button { disabled: true, .. })
    }

    /// Enable or disable a button; other kinds ignore this
    pub fn set_disabled(&mut self, value: bool) -> &mut Self {
        if let ElementKind::Button { disabled, .. } = &mut self.kind {
            *disabled = value;
        }
        self
    }

    /// Number of elements in this subtree, including this one
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Self::count).sum::<usize>()
    }

    /// This element's rectangle placed inside the absolute `parent` frame
    pub const fn absolute_rect(&self, parent: &Rect) -> Rect {
        Rect::new(
            parent.x + self.rect.x,
            parent.y + self.rect.y,
            self.rect.width,
            self.rect.height,
        )
    }

    /// Draw the subtree in the [`Theme::CLASSIC`] palette
    ///
    /// `parent` is the absolute frame this element is relative to; pass
    /// [`Rect::ZERO`] for a root.
    pub fn draw<C: Canvas + ?Sized>(&self, parent: &Rect, canvas: &mut C, font: &FontAtlas) {
        self.draw_with_theme(parent, canvas, font, &Theme::CLASSIC);
    }

    /// Draw the subtree: this element first, then each child in insertion order
    pub fn draw_with_theme<C: Canvas + ?Sized>(
        &self,
        parent: &Rect,
        canvas: &mut C,
        font: &FontAtlas,
        theme: &Theme,
    ) {
        let absolute = self.absolute_rect(parent);
        self.paint(&absolute, canvas, font, theme);

        for child in &self.children {
            child.draw_with_theme(&absolute, canvas, font, theme);
        }
    }

    fn paint<C: Canvas + ?Sized>(&self, rect: &Rect, canvas: &mut C, font: &FontAtlas, theme: &Theme) {
        let inset = theme.edge * 2;

        match &self.kind {
            ElementKind::Window { title } => {
                shade::trishade(canvas, rect, theme.edge, theme.light, theme.base, theme.dark);
                font.blit_string(title, rect.x + inset, rect.y + inset, theme.text, canvas);
            }
            ElementKind::Label { text } => {
                font.blit_string(text, rect.x, rect.y, theme.text, canvas);
            }
            ElementKind::Button { text, disabled } => {
                let (palette, color) = if *disabled {
                    (theme.sunken(), theme.disabled)
                } else {
                    (*theme, theme.text)
                };
                shade::trishade(canvas, rect, palette.edge, palette.light, palette.base, palette.dark);
                font.blit_string(text, rect.x + inset, rect.y + inset, color, canvas);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::testing::block_font;
    use crate::surface::testing::{memory_surface, RecordingCanvas};
    use crate::surface::Color;

    const THEME: Theme = Theme::CLASSIC;

    #[test]
    fn test_constructors_size_from_font() {
        let font = block_font();

        let label = Element::label("abc", &font);
        assert_eq!(*label.rect(), Rect::new(0, 0, 24, 8));

        let button = Element::button("OK", &font);
        assert_eq!(*button.rect(), Rect::new(0, 0, 22, 20));
        assert!(!button.is_disabled());

        let window = Element::window("Desktop");
        assert_eq!(*window.rect(), Rect::ZERO);
        assert_eq!(window.text(), "Desktop");
    }

    #[test]
    fn test_reposition_and_resize_chain() {
        let mut window = Element::window("w");
        window.reposition(300, 300).resize(320, 200);
        assert_eq!(*window.rect(), Rect::new(300, 300, 320, 200));
    }

    #[test]
    fn test_append_child_takes_ownership_in_order() {
        let font = block_font();
        let mut window = Element::window("w");
        window.append_child(Element::label("a", &font)).reposition(1, 2);
        window.append_child(Element::button("b", &font));
        window.append_child(Element::window("c")).append_child(Element::label("d", &font));

        let texts: Vec<&str> = window.children().iter().map(Element::text).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
        assert_eq!(window.children()[0].rect().x, 1);
        assert_eq!(window.count(), 5);

        window.child_mut(1).unwrap().set_disabled(true);
        assert!(window.children()[1].is_disabled());
        assert!(window.child_mut(7).is_none());
    }

    #[test]
    fn test_set_disabled_ignored_for_non_buttons() {
        let font = block_font();
        let mut label = Element::label("x", &font);
        label.set_disabled(true);
        assert!(!label.is_disabled());
    }

    #[test]
    fn test_label_glyph_lands_at_parent_offset() {
        let font = block_font();
        let mut root = Element::window("").with_size(200, 200);
        root.append_child(Element::label("A", &font)).reposition(20, 20);

        let mut surface = memory_surface(200, 200);
        root.draw(&Rect::ZERO, &mut surface, &font);

        assert_eq!(surface.pixel(20, 20), Some(THEME.text));
        assert_eq!(surface.pixel(27, 27), Some(THEME.text));
        assert_eq!(surface.pixel(19, 20), Some(THEME.base));
        assert_eq!(surface.pixel(28, 20), Some(THEME.base));
    }

    #[test]
    fn test_nested_offsets_accumulate() {
        let font = block_font();
        let mut root = Element::window("").with_position(10, 10).with_size(100, 100);
        root.append_child(Element::window("").with_position(5, 7).with_size(50, 50))
            .append_child(Element::label(".", &font))
            .reposition(3, 4);

        let mut canvas = RecordingCanvas::default();
        root.draw(&Rect::ZERO, &mut canvas, &font);

        let text_writes: Vec<(i64, i64)> = canvas
            .writes
            .iter()
            .filter(|w| w.2 == THEME.text)
            .map(|w| (w.0, w.1))
            .collect();
        assert_eq!(text_writes, vec![(18, 21)]);
    }

    #[test]
    fn test_parent_paints_before_children() {
        let font = block_font();
        let mut root = Element::window("").with_size(40, 40);
        root.append_child(Element::label("A", &font)).reposition(10, 10);

        let mut canvas = RecordingCanvas::default();
        root.draw(&Rect::ZERO, &mut canvas, &font);

        let first_text = canvas.writes.iter().position(|w| w.2 == THEME.text).unwrap();
        let last_window = canvas.writes.iter().rposition(|w| w.2 != THEME.text).unwrap();
        assert!(last_window < first_text);

        let mut surface = memory_surface(40, 40);
        root.draw(&Rect::ZERO, &mut surface, &font);
        assert_eq!(surface.pixel(12, 12), Some(THEME.text));
    }

    #[test]
    fn test_window_title_inset_by_two_edges() {
        let font = block_font();
        let root = Element::window(".").with_position(4, 4).with_size(40, 30);

        let mut canvas = RecordingCanvas::default();
        root.draw(&Rect::ZERO, &mut canvas, &font);

        let text: Vec<(i64, i64, Color)> = canvas.writes.into_iter().filter(|w| w.2 == THEME.text).collect();
        assert_eq!(text, vec![(10, 10, THEME.text)]);
    }

    #[test]
    fn test_label_has_no_background() {
        let font = block_font();
        let label = Element::label(".", &font).with_position(2, 2);

        let mut canvas = RecordingCanvas::default();
        label.draw(&Rect::ZERO, &mut canvas, &font);
        assert_eq!(canvas.writes, vec![(2, 2, THEME.text)]);
    }

    #[test]
    fn test_disabled_button_differs_only_in_bevel_and_text() {
        let font = block_font();
        let enabled = Element::button(".", &font).with_position(2, 2);
        let mut disabled = enabled.clone();
        disabled.set_disabled(true);

        let mut on = memory_surface(40, 40);
        let mut off = memory_surface(40, 40);
        enabled.draw(&Rect::ZERO, &mut on, &font);
        disabled.draw(&Rect::ZERO, &mut off, &font);

        let mut differing = 0;
        for (&e, &d) in on.pixels().iter().zip(off.pixels()) {
            let expected = match e {
                c if c == THEME.light => THEME.dark,
                c if c == THEME.dark => THEME.light,
                c if c == THEME.text => THEME.disabled,
                other => other,
            };
            assert_eq!(d, expected);
            differing += usize::from(e != d);
        }

        // 14x20 button with a 3px bevel leaves an 8x14 face; the rest is strips
        assert_eq!(differing, 14 * 20 - 8 * 14 + 1);
        assert_eq!(on.pixel(8, 8), Some(THEME.text));
        assert_eq!(off.pixel(8, 8), Some(THEME.disabled));
    }

    #[test]
    fn test_themed_draw_uses_theme_colors() {
        let font = block_font();
        let window = Element::window("").with_size(10, 10);
        let mut surface = memory_surface(10, 10);
        window.draw_with_theme(&Rect::ZERO, &mut surface, &font, &Theme::AMBER);

        assert_eq!(surface.pixel(0, 0), Some(Theme::AMBER.light));
        assert_eq!(surface.pixel(5, 5), Some(Theme::AMBER.base));
        assert_eq!(surface.pixel(9, 9), Some(Theme::AMBER.dark));
    }
}
