//! Layout model for the on-screen panels: status bar, map, pointer HUD.

use taffy::prelude::*;
use taffy::{Layout, TaffyResult, TaffyTree};

pub struct LayoutNodes {
    root: NodeId,
    status: NodeId,
    map: NodeId,
    hud: NodeId,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PanelRect {
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && y >= self.y && x < self.x + self.width && y < self.y + self.height
    }
}

pub struct FrameLayout {
    pub status: PanelRect,
    pub map: PanelRect,
    pub hud: PanelRect,
}

impl FrameLayout {
    pub fn panels(&self) -> [PanelRect; 3] {
        [self.status, self.map, self.hud]
    }
}

pub fn setup_layout(taffy: &mut TaffyTree<()>) -> TaffyResult<LayoutNodes> {
    let status = taffy.new_leaf(Style {
        size: Size { width: percent(1.0), height: length(40.0) },
        margin: taffy::Rect { left: zero(), right: zero(), top: zero(), bottom: length(12.0) },
        ..Default::default()
    })?;
    let map = taffy.new_leaf(Style { flex_grow: 1.0, ..Default::default() })?;
    let hud = taffy.new_leaf(Style {
        size: Size { width: percent(1.0), height: length(36.0) },
        margin: taffy::Rect { left: zero(), right: zero(), top: length(12.0), bottom: zero() },
        ..Default::default()
    })?;
    let root = taffy.new_with_children(
        Style {
            display: Display::Flex,
            flex_direction: FlexDirection::Column,
            size: Size { width: percent(1.0), height: percent(1.0) },
            padding: taffy::Rect {
                left: length(20.0),
                right: length(20.0),
                top: length(20.0),
                bottom: length(20.0),
            },
            ..Default::default()
        },
        &[status, map, hud],
    )?;
    Ok(LayoutNodes { root, status, map, hud })
}

pub fn compute_frame_layout(
    taffy: &mut TaffyTree<()>,
    nodes: &LayoutNodes,
    viewport_width: f32,
    viewport_height: f32,
) -> TaffyResult<FrameLayout> {
    let available_size = Size {
        width: AvailableSpace::Definite(viewport_width),
        height: AvailableSpace::Definite(viewport_height),
    };
    taffy.compute_layout(nodes.root, available_size)?;

    let l_root = taffy.layout(nodes.root)?;
    Ok(FrameLayout {
        status: panel_rect(taffy.layout(nodes.status)?, l_root),
        map: panel_rect(taffy.layout(nodes.map)?, l_root),
        hud: panel_rect(taffy.layout(nodes.hud)?, l_root),
    })
}

fn panel_rect(layout: &Layout, parent: &Layout) -> PanelRect {
    PanelRect {
        x: parent.location.x + layout.location.x,
        y: parent.location.y + layout.location.y,
        width: layout.size.width,
        height: layout.size.height,
    }
}
