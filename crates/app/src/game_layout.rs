//! Window layout: a status bar, the game frame, and a key-hint footer.

use taffy::{TaffyResult, TaffyTree};
use taffy::prelude::*;

const OUTER_PADDING: f32 = 16.0;
const STATUS_HEIGHT: f32 = 28.0;
const FOOTER_HEIGHT: f32 = 22.0;
const GAP: f32 = 10.0;

pub struct LayoutNodes {
    root: NodeId,
    status: NodeId,
    frame: NodeId,
    footer: NodeId,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

pub struct FrameLayout {
    pub status: PanelRect,
    pub frame: PanelRect,
    pub footer: PanelRect,
}

pub fn setup_layout(taffy: &mut TaffyTree<()>, ui_scale: f32) -> TaffyResult<LayoutNodes> {
    let gap = length(GAP * ui_scale);
    let status = taffy.new_leaf(Style {
        size: Size { width: percent(1.0), height: length(STATUS_HEIGHT * ui_scale) },
        flex_shrink: 0.0,
        ..Default::default()
    })?;
    let frame = taffy.new_leaf(Style {
        flex_grow: 1.0,
        margin: taffy::Rect { left: zero(), right: zero(), top: gap, bottom: gap },
        ..Default::default()
    })?;
    let footer = taffy.new_leaf(Style {
        size: Size { width: percent(1.0), height: length(FOOTER_HEIGHT * ui_scale) },
        flex_shrink: 0.0,
        ..Default::default()
    })?;
    let padding = length(OUTER_PADDING * ui_scale);
    let root = taffy.new_with_children(
        Style {
            display: Display::Flex,
            flex_direction: FlexDirection::Column,
            size: Size { width: percent(1.0), height: percent(1.0) },
            padding: taffy::Rect { left: padding, right: padding, top: padding, bottom: padding },
            ..Default::default()
        },
        &[status, frame, footer],
    )?;
    Ok(LayoutNodes { root, status, frame, footer })
}

pub fn compute_frame_layout(
    taffy: &mut TaffyTree<()>,
    nodes: &LayoutNodes,
    viewport_width: f32,
    viewport_height: f32,
) -> TaffyResult<FrameLayout> {
    let available = Size {
        width: AvailableSpace::Definite(viewport_width),
        height: AvailableSpace::Definite(viewport_height),
    };
    taffy.compute_layout(nodes.root, available)?;

    let root = taffy.layout(nodes.root)?;
    Ok(FrameLayout {
        status: panel_rect(taffy.layout(nodes.status)?, root),
        frame: panel_rect(taffy.layout(nodes.frame)?, root),
        footer: panel_rect(taffy.layout(nodes.footer)?, root),
    })
}

fn panel_rect(layout: &taffy::Layout, parent: &taffy::Layout) -> PanelRect {
    PanelRect {
        x: parent.location.x + layout.location.x,
        y: parent.location.y + layout.location.y,
        width: layout.size.width,
        height: layout.size.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_takes_the_space_between_status_and_footer() {
        let mut taffy = TaffyTree::new();
        let nodes = setup_layout(&mut taffy, 1.0).expect("layout nodes");
        let layout = compute_frame_layout(&mut taffy, &nodes, 1000.0, 700.0).expect("layout");

        assert_eq!(layout.status.y, OUTER_PADDING);
        assert_eq!(layout.status.height, STATUS_HEIGHT);
        assert_eq!(layout.frame.y, OUTER_PADDING + STATUS_HEIGHT + GAP);
        assert_eq!(layout.footer.y + layout.footer.height, 700.0 - OUTER_PADDING);
        assert_eq!(layout.frame.width, 1000.0 - 2.0 * OUTER_PADDING);
        let chrome = 2.0 * OUTER_PADDING + STATUS_HEIGHT + FOOTER_HEIGHT + 2.0 * GAP;
        let expected_height = 700.0 - chrome;
        assert!((layout.frame.height - expected_height).abs() < 0.5);
    }
}
