//! Palette and paint helpers shared by the preview and the app chrome
//!
//! The preview is a white "paper" card rendered inside the dark app shell,
//! so all of its text colors are explicit rather than inherited from the
//! egui visuals.

use egui::{Color32, Mesh, Painter, Rect, Shape};

/// Left edge of the header gradient.
pub const GRADIENT_START: Color32 = Color32::from_rgb(0x66, 0x7e, 0xea);
/// Right edge of the header gradient.
pub const GRADIENT_END: Color32 = Color32::from_rgb(0x76, 0x4b, 0xa2);

/// Primary accent used for section underlines and skill pills.
pub const ACCENT: Color32 = GRADIENT_START;

/// Preview card background.
pub const PAPER: Color32 = Color32::WHITE;
/// Headings on paper.
pub const INK_HEADING: Color32 = Color32::from_rgb(0x1f, 0x29, 0x37);
/// Body text on paper.
pub const INK_BODY: Color32 = Color32::from_rgb(0x37, 0x41, 0x51);
/// De-emphasized text on paper (durations, years).
pub const INK_MUTED: Color32 = Color32::from_rgb(0x4b, 0x55, 0x63);

/// Accent bar and company line for experience cards.
pub const EXPERIENCE_ACCENT: Color32 = Color32::from_rgb(0x25, 0x63, 0xeb);
pub const EXPERIENCE_CARD_BG: Color32 = Color32::from_rgb(0xef, 0xf6, 0xff);

/// Accent bar and institution line for education cards.
pub const EDUCATION_ACCENT: Color32 = Color32::from_rgb(0x16, 0xa3, 0x4a);
pub const EDUCATION_CARD_BG: Color32 = Color32::from_rgb(0xf0, 0xfd, 0xf4);

/// Background for the duration badge on experience cards.
pub const BADGE_BG: Color32 = Color32::from_rgb(0xe5, 0xe7, 0xeb);

/// Award glyph tint in the achievements list.
pub const AWARD_ICON: Color32 = Color32::from_rgb(0xca, 0x8a, 0x04);

/// Status notice tints.
pub const NOTICE_INFO: Color32 = Color32::from_rgb(0x4a, 0xde, 0x80);
pub const NOTICE_ERROR: Color32 = Color32::from_rgb(0xf8, 0x71, 0x71);

/// A horizontal two-color gradient filling `rect`, built as a mesh with
/// per-vertex colors (egui has no gradient fill primitive).
pub fn gradient_shape(rect: Rect, start: Color32, end: Color32) -> Shape {
    let mut mesh = Mesh::default();
    mesh.colored_vertex(rect.left_top(), start);
    mesh.colored_vertex(rect.right_top(), end);
    mesh.colored_vertex(rect.right_bottom(), end);
    mesh.colored_vertex(rect.left_bottom(), start);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    Shape::mesh(mesh)
}

/// Paint the thin accent bar along the left edge of a card.
pub fn paint_left_accent(painter: &Painter, rect: Rect, color: Color32) {
    let bar = Rect::from_min_size(rect.min, egui::vec2(3.0, rect.height()));
    painter.rect_filled(bar, 0.0, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_shape_spans_the_rect() {
        let rect = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(100.0, 40.0));
        let shape = gradient_shape(rect, GRADIENT_START, GRADIENT_END);
        assert_eq!(shape.visual_bounding_rect(), rect);
    }
}
