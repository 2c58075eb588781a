//! Shape classification by identifier convention.
//!
//! Carcass shapes carry their domain role in their id:
//!
//! ```text
//! MOD-TOP | MOD-BOTTOM | MOD-LEFT | MOD-RIGHT | MOD-BACK   structural panels
//! MOD-POST-{index}                                         center post, 0-based
//! MOD-SHELF-{section}-{shelf}                              shelf, both 1-based
//! MOD-LEFT-DISABLED                                        placeholder of a switched-off panel
//! ```
//!
//! Classification never fails. Ids that match no convention come back as
//! [`ShapeRole::Unknown`].

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::shapes::{RectShape, Shape};

/// Namespace shared by every shape generated for a carcass module.
pub const CARCASS_NAMESPACE: &str = "MOD";
/// Prefix of center post ids.
pub const CENTER_POST_PREFIX: &str = "MOD-POST-";
/// Prefix of shelf ids.
pub const SHELF_PREFIX: &str = "MOD-SHELF-";
/// Suffix appended to a panel id when the panel is switched off but its
/// placeholder stays on the canvas.
pub const DISABLED_SUFFIX: &str = "-DISABLED";

static POST_ID_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^MOD-POST-(\d+)").ok());
static SHELF_ID_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^MOD-SHELF-(\d+)-(\d+)").ok());

/// The structural panels of a carcass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelKind {
    Top,
    Bottom,
    Left,
    Right,
    Back,
}

/// Panel id table: exact id, panel, display label.
pub const PANEL_LABELS: [(&str, PanelKind, &str); 5] = [
    ("MOD-TOP", PanelKind::Top, "Top Panel"),
    ("MOD-BOTTOM", PanelKind::Bottom, "Bottom Panel"),
    ("MOD-LEFT", PanelKind::Left, "Left Panel"),
    ("MOD-RIGHT", PanelKind::Right, "Right Panel"),
    ("MOD-BACK", PanelKind::Back, "Back Panel"),
];

impl PanelKind {
    pub const ALL: [PanelKind; 5] = [
        PanelKind::Top,
        PanelKind::Bottom,
        PanelKind::Left,
        PanelKind::Right,
        PanelKind::Back,
    ];

    fn entry(self) -> (&'static str, PanelKind, &'static str) {
        match self {
            PanelKind::Top => PANEL_LABELS[0],
            PanelKind::Bottom => PANEL_LABELS[1],
            PanelKind::Left => PANEL_LABELS[2],
            PanelKind::Right => PANEL_LABELS[3],
            PanelKind::Back => PANEL_LABELS[4],
        }
    }

    /// Shape id of the enabled panel.
    pub fn id(self) -> &'static str {
        self.entry().0
    }

    /// Shape id of the placeholder left behind when the panel is disabled.
    pub fn disabled_id(self) -> String {
        format!("{}{}", self.id(), DISABLED_SUFFIX)
    }

    pub fn label(self) -> &'static str {
        self.entry().2
    }
}

/// Decoded shelf position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShelfRef {
    /// 0-based section index.
    pub section_index: usize,
    /// 1-based shelf index within the section.
    pub shelf_index: usize,
}

/// Domain role of a canvas shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ShapeRole {
    Panel(PanelKind),
    /// Center post with its 1-based display index.
    Post { index: usize },
    Shelf(ShelfRef),
    #[default]
    Unknown,
}

impl ShapeRole {
    pub fn is_panel(&self) -> bool {
        matches!(self, ShapeRole::Panel(_))
    }

    pub fn is_post(&self) -> bool {
        matches!(self, ShapeRole::Post { .. })
    }

    pub fn is_shelf(&self) -> bool {
        matches!(self, ShapeRole::Shelf(_))
    }

    /// Label shown in context menus and overlays.
    pub fn display_label(&self) -> Option<String> {
        match self {
            ShapeRole::Panel(kind) => Some(kind.label().to_string()),
            ShapeRole::Post { index } => Some(format!("Center Post {}", index)),
            ShapeRole::Shelf(shelf) => Some(format!(
                "Shelf {} (Section {})",
                shelf.shelf_index,
                shelf.section_index + 1
            )),
            ShapeRole::Unknown => None,
        }
    }
}

impl fmt::Display for ShapeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.display_label() {
            Some(label) => write!(f, "{}", label),
            None => write!(f, "Unknown"),
        }
    }
}

/// Look up a panel by exact id.
pub fn panel_kind(id: &str) -> Option<PanelKind> {
    PANEL_LABELS
        .iter()
        .find(|(panel_id, _, _)| *panel_id == id)
        .map(|(_, kind, _)| *kind)
}

/// 1-based display index of a center post, or `None` if `id` is not a post.
///
/// An id with the post prefix but no parseable number decodes as post 1.
pub fn parse_post_id(id: &str) -> Option<usize> {
    if !id.starts_with(CENTER_POST_PREFIX) {
        return None;
    }
    let index = POST_ID_RE
        .as_ref()
        .and_then(|re| re.captures(id))
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<usize>().ok())
        .and_then(|i| i.checked_add(1))
        .unwrap_or(1);
    Some(index)
}

/// Decode `MOD-SHELF-{section}-{shelf}`.
///
/// The section number is 1-based in the id and comes back 0-based; the shelf
/// number is returned as written.
pub fn parse_shelf_id(id: &str) -> Option<ShelfRef> {
    if !id.starts_with(SHELF_PREFIX) {
        return None;
    }
    let caps = SHELF_ID_RE.as_ref()?.captures(id)?;
    let section = caps.get(1)?.as_str().parse::<usize>().ok()?;
    let shelf = caps.get(2)?.as_str().parse::<usize>().ok()?;
    Some(ShelfRef {
        section_index: section.saturating_sub(1),
        shelf_index: shelf,
    })
}

/// Classify a shape id.
pub fn classify(id: &str) -> ShapeRole {
    if let Some(kind) = panel_kind(id) {
        return ShapeRole::Panel(kind);
    }
    if let Some(index) = parse_post_id(id) {
        return ShapeRole::Post { index };
    }
    if let Some(shelf) = parse_shelf_id(id) {
        return ShapeRole::Shelf(shelf);
    }
    ShapeRole::Unknown
}

/// Whether `id` belongs to the carcass namespace.
pub fn in_carcass_namespace(id: &str) -> bool {
    id.strip_prefix(CARCASS_NAMESPACE)
        .is_some_and(|rest| rest.starts_with('-'))
}

/// Center post rectangles sorted left to right.
pub fn get_center_posts(shapes: &[Shape]) -> Vec<&RectShape> {
    let mut posts: Vec<&RectShape> = shapes
        .iter()
        .filter_map(Shape::as_rect)
        .filter(|r| r.id.role().is_post())
        .collect();
    posts.sort_by(|a, b| a.x.total_cmp(&b.x));
    posts
}

/// Shelf rectangles in canvas order.
pub fn get_shelves(shapes: &[Shape]) -> Vec<&RectShape> {
    shapes
        .iter()
        .filter_map(Shape::as_rect)
        .filter(|r| r.id.role().is_shelf())
        .collect()
}
