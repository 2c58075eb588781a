//! # WardrobeKit Production
//!
//! Turns the flat list of cut panels emitted by the extraction step into
//! per-unit production groups, and redistributes unit dimensions when the
//! panel gap or a unit total is edited.
//!
//! ```
//! use wardrobekit_production::{build_cad_groups, PanelType, ProductionPanelItem};
//!
//! let items = vec![
//!     ProductionPanelItem::new("p1", PanelType::Shutter, 500.0, 2000.0)
//!         .in_room(0, "Master Bedroom")
//!         .in_unit("u1", "Wardrobe"),
//! ];
//! let groups = build_cad_groups(&items);
//! assert_eq!(groups[0].shutters[0].label, "MB1-S1");
//! ```

pub mod cad_group;
pub mod codes;
pub mod cut_list;
pub mod layout;
pub mod overrides;
pub mod panel;

pub use cad_group::{build_cad_groups, CadGroup, LabeledPanel};
pub use codes::{room_code, unit_code, CodeTable, ROOM_CODES, UNIT_CODES};
pub use cut_list::{cut_list, CutListRow};
pub use layout::{
    calculate_gap_adjusted_dimensions, calculate_group_layout,
    calculate_overall_dimension_change, DimensionField, GroupLayout,
};
pub use overrides::{PanelOverride, PanelOverrides};
pub use panel::{PanelType, ProductionPanelItem};
