use proptest::prelude::*;
use wardrobekit_production::{
    build_cad_groups, calculate_gap_adjusted_dimensions, calculate_group_layout,
    calculate_overall_dimension_change, DimensionField, PanelOverride, PanelOverrides, PanelType,
};

use crate::fixtures::{loft_only_group, panel, wardrobe_group};

#[test]
fn test_layout_includes_gaps_and_loft_row() {
    let group = wardrobe_group();
    let layout = calculate_group_layout(&group, 2.0, &PanelOverrides::new());

    assert_eq!(layout.col_widths_mm, vec![500.0, 500.0]);
    assert_eq!(layout.total_width_mm, 1002.0);
    assert_eq!(layout.total_height_mm, 2000.0 + 400.0 + 2.0);
    assert_eq!(layout.loft_height_mm, 400.0);
}

#[test]
fn test_layout_reads_overrides_first() {
    let group = wardrobe_group();
    let mut overrides = PanelOverrides::new();
    overrides.insert("mb-w-s1", PanelOverride::with_width(520.0));

    let layout = calculate_group_layout(&group, 2.0, &overrides);
    assert_eq!(layout.col_widths_mm, vec![520.0, 500.0]);
    assert_eq!(layout.row_heights_mm, vec![2000.0]);
    assert_eq!(layout.total_width_mm, 1022.0);
}

#[test]
fn test_layout_is_idempotent() {
    let group = wardrobe_group();
    let mut overrides = PanelOverrides::new();
    overrides.insert("mb-w-s2", PanelOverride::with_size(498.5, 1999.5));

    let first = calculate_group_layout(&group, 3.0, &overrides);
    let second = calculate_group_layout(&group, 3.0, &overrides);
    assert_eq!(first, second);
    assert_eq!(
        first.total_width_mm.to_bits(),
        second.total_width_mm.to_bits()
    );
}

#[test]
fn test_loft_only_layout_has_no_loft_row() {
    let layout = calculate_group_layout(&loft_only_group(), 2.0, &PanelOverrides::new());
    assert_eq!(layout.total_width_mm, 1202.0);
    assert_eq!(layout.total_height_mm, 450.0);
    assert_eq!(layout.loft_height_mm, 0.0);
}

#[test]
fn test_gap_increase_shrinks_shutters_equally() {
    let group = wardrobe_group();
    let out = calculate_gap_adjusted_dimensions(&group, 2.0, 4.0, &PanelOverrides::new());

    assert_eq!(out.len(), 2);
    let a = out.get("mb-w-s1").unwrap();
    let b = out.get("mb-w-s2").unwrap();
    assert!(a.width.unwrap() < 500.0);
    assert_eq!(a, b);
    assert_eq!(*a, PanelOverride::with_size(499.0, 2000.0));
    assert!(out.get("mb-w-l1").is_none());
}

#[test]
fn test_gap_change_equalizes_uneven_columns() {
    let group = wardrobe_group();
    let mut overrides = PanelOverrides::new();
    overrides.insert("mb-w-s1", PanelOverride::with_width(600.0));

    let out = calculate_gap_adjusted_dimensions(&group, 2.0, 2.0, &overrides);
    assert_eq!(out.width_for(&group.shutters[0].item), 550.0);
    assert_eq!(out.width_for(&group.shutters[1].item), 550.0);
}

#[test]
fn test_gap_change_without_room_is_ignored() {
    let group = wardrobe_group();
    assert!(calculate_gap_adjusted_dimensions(&group, 2.0, 2000.0, &PanelOverrides::new()).is_empty());
    assert!(calculate_gap_adjusted_dimensions(&group, -1.0, 2.0, &PanelOverrides::new()).is_empty());
    assert!(calculate_gap_adjusted_dimensions(&group, 2.0, f64::NAN, &PanelOverrides::new()).is_empty());
}

#[test]
fn test_overall_width_splits_across_columns() {
    let group = wardrobe_group();
    let out = calculate_overall_dimension_change(
        &group,
        DimensionField::Width,
        1200.0,
        2.0,
        &PanelOverrides::new(),
    );

    assert_eq!(out.get("mb-w-s1").unwrap().width, Some(599.0));
    assert_eq!(out.get("mb-w-s2").unwrap().width, Some(599.0));
    assert_eq!(out.get("mb-w-l1").unwrap().width, Some(599.0));
    assert_eq!(out.get("mb-w-s1").unwrap().height, None);
}

#[test]
fn test_overall_width_keeps_existing_height_override() {
    let group = wardrobe_group();
    let mut overrides = PanelOverrides::new();
    overrides.insert("mb-w-s1", PanelOverride::with_height(1990.0));

    let out =
        calculate_overall_dimension_change(&group, DimensionField::Width, 1200.0, 2.0, &overrides);
    assert_eq!(
        out.get("mb-w-s1").copied(),
        Some(PanelOverride::with_size(599.0, 1990.0))
    );
}

#[test]
fn test_overall_height_preserves_loft() {
    let group = wardrobe_group();
    let out = calculate_overall_dimension_change(
        &group,
        DimensionField::Height,
        2502.0,
        2.0,
        &PanelOverrides::new(),
    );

    assert_eq!(out.len(), 2);
    assert_eq!(out.get("mb-w-s1").unwrap().height, Some(2100.0));
    assert!(out.get("mb-w-l1").is_none());

    let updated = PanelOverrides::new().merged(&out);
    let layout = calculate_group_layout(&group, 2.0, &updated);
    assert_eq!(layout.total_height_mm, 2502.0);
    assert_eq!(layout.loft_height_mm, 400.0);
}

#[test]
fn test_overall_height_on_loft_only_unit_resizes_lofts() {
    let group = loft_only_group();
    let out = calculate_overall_dimension_change(
        &group,
        DimensionField::Height,
        500.0,
        2.0,
        &PanelOverrides::new(),
    );
    assert_eq!(out.get("lr-l1").unwrap().height, Some(500.0));
    assert_eq!(out.get("lr-l2").unwrap().height, Some(500.0));
}

#[test]
fn test_invalid_totals_emit_nothing() {
    let group = wardrobe_group();
    let none = PanelOverrides::new();
    for value in [0.0, -10.0, f64::NAN, f64::INFINITY] {
        assert!(
            calculate_overall_dimension_change(&group, DimensionField::Width, value, 2.0, &none)
                .is_empty()
        );
    }
    assert!(
        calculate_overall_dimension_change(&group, DimensionField::Height, 300.0, 2.0, &none)
            .is_empty()
    );
}

#[test]
fn test_inputs_are_not_mutated() {
    let group = wardrobe_group();
    let before = group.clone();
    let mut overrides = PanelOverrides::new();
    overrides.insert("mb-w-s1", PanelOverride::with_width(510.0));
    let overrides_before = overrides.clone();

    let _ = calculate_gap_adjusted_dimensions(&group, 2.0, 4.0, &overrides);
    let _ = calculate_overall_dimension_change(&group, DimensionField::Width, 900.0, 2.0, &overrides);

    assert_eq!(group, before);
    assert_eq!(overrides, overrides_before);
}

proptest! {
    #[test]
    fn prop_gap_change_holds_footprint(
        cols in 1usize..6,
        width in 200.0f64..900.0,
        old_gap in 0.0f64..10.0,
        new_gap in 0.0f64..10.0,
    ) {
        let room = (0, "Kitchen");
        let unit = ("u1", "Kitchen");
        let items: Vec<_> = (0..cols)
            .map(|c| panel(&format!("p{c}"), room, unit, PanelType::Shutter, (width, 700.0), (0, c)))
            .collect();
        let group = build_cad_groups(&items).remove(0);

        let out = calculate_gap_adjusted_dimensions(&group, old_gap, new_gap, &PanelOverrides::new());
        prop_assert_eq!(out.len(), cols);

        let before = calculate_group_layout(&group, old_gap, &PanelOverrides::new());
        let after = calculate_group_layout(&group, new_gap, &out);
        // Each column is rounded to the millimetre.
        prop_assert!((after.total_width_mm - before.total_width_mm).abs() <= cols as f64 * 0.5 + 1e-9);
    }
}
