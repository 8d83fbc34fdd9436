//! Drawer edge and the vertical sign it imposes
//!
//! Every vertical quantity the drawer computes (drag deltas, drawer offset,
//! content scroll) is expressed in the drawer's own frame. The direction
//! maps that frame to screen coordinates with a single sign.

use serde::{Deserialize, Serialize};

/// Which way the drawer slides
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawerDirection {
    /// Screen deltas are used as-is
    Bottom,
    /// Screen deltas are mirrored
    #[default]
    Top,
}

/// Vertical edge used to align frames inside their container
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VerticalEdge {
    Top,
    Bottom,
}

impl DrawerDirection {
    /// +1 for `Bottom`, -1 for `Top`
    pub fn sign(self) -> f32 {
        match self {
            DrawerDirection::Bottom => 1.0,
            DrawerDirection::Top => -1.0,
        }
    }

    /// Convert a value between drawer frame and screen frame
    pub fn vertical_offset(self, value: f32) -> f32 {
        self.sign() * value
    }

    pub fn is_top_leading(self) -> bool {
        self == DrawerDirection::Top
    }

    /// Edge the content is pinned to inside the visible drawer frame
    pub fn content_alignment(self) -> VerticalEdge {
        match self {
            DrawerDirection::Bottom => VerticalEdge::Bottom,
            DrawerDirection::Top => VerticalEdge::Top,
        }
    }

    /// Edge the drawer is pinned to inside the overlay stack
    pub fn overlay_alignment(self) -> VerticalEdge {
        match self {
            DrawerDirection::Bottom => VerticalEdge::Top,
            DrawerDirection::Top => VerticalEdge::Bottom,
        }
    }
}
