//! Layout calculations for the bubble
//!
//! Assistant bubbles sit at the top-left of the screen, inset by a margin,
//! sized to their content but never wider than a share of the screen.

use ratatui::layout::Rect;

/// Minimum width so the persona title stays readable
pub const MIN_BUBBLE_WIDTH: u16 = 24;
/// Maximum width as percentage of available space
const MAX_WIDTH_PERCENT: u16 = 80;
const HORIZONTAL_MARGIN: u16 = 2;
const VERTICAL_MARGIN: u16 = 1;

pub fn inset_rect(area: Rect, horizontal_margin: u16, vertical_margin: u16) -> Rect {
    Rect {
        x: area.x + horizontal_margin,
        y: area.y + vertical_margin,
        width: area.width.saturating_sub(horizontal_margin * 2),
        height: area.height.saturating_sub(vertical_margin * 2),
    }
}

/// Clamp a preferred bubble width to the available width
pub fn bubble_width(available_width: u16, preferred_width: u16) -> u16 {
    let scaled = u32::from(available_width) * u32::from(MAX_WIDTH_PERCENT) / 100;
    let max_width = (scaled as u16).max(MIN_BUBBLE_WIDTH);
    preferred_width
        .clamp(MIN_BUBBLE_WIDTH, max_width)
        .min(available_width)
}

/// Area for a bubble inside the frame
///
/// `height_for` maps the chosen width to the rows the bubble needs.
pub fn bubble_area(
    frame_area: Rect,
    preferred_width: u16,
    height_for: impl Fn(u16) -> u16,
) -> Rect {
    let content_area = inset_rect(frame_area, HORIZONTAL_MARGIN, VERTICAL_MARGIN);
    let width = bubble_width(content_area.width, preferred_width);
    let height = height_for(width).min(content_area.height);

    Rect {
        x: content_area.x,
        y: content_area.y,
        width,
        height,
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod layout_tests;
