use boreas_grid::{GridError, compute_grid, meter_to_lat, meter_to_lon};
use boreas_namelist::Namelist;

fn single_domain() -> Namelist {
    Namelist::from_str(
        "&geogrid
         max_dom = 1,
         parent_id = 1,
         parent_grid_ratio = 1,
         i_parent_start = 1,
         j_parent_start = 1,
         e_we = 74,
         e_sn = 61,
         dx = 30000,
         dy = 30000,
         ref_lat = 47.20,
         ref_lon = 14.55,
         /",
    )
}

fn nested_domain(e_we_child: usize) -> Namelist {
    Namelist::from_str(&format!(
        "&geogrid
         max_dom = 2,
         parent_id = 1, 1,
         parent_grid_ratio = 1, 3,
         i_parent_start = 1, 17,
         j_parent_start = 1, 33,
         e_we = 74, {e_we_child},
         e_sn = 61, 100,
         dx = 30000,
         dy = 30000,
         ref_lat = 47.20,
         ref_lon = 14.55,
         /"
    ))
}

#[test]
fn single_domain_is_centered_on_ref_point() {
    let grids = compute_grid(&single_domain()).unwrap();
    assert_eq!(grids.len(), 1);

    let g = &grids[0];
    assert_eq!(g.center_lat(), 47.20);
    assert_eq!(g.center_lon(), 14.55);
    assert_eq!(g.lons().len(), 74);
    assert_eq!(g.lats().len(), 61);

    // e_we is even, so index e_we/2 sits exactly on the center.
    assert!((g.lons()[37] - 14.55).abs() < 1e-12);
}

#[test]
fn single_domain_axes_are_strictly_increasing() {
    let grids = compute_grid(&single_domain()).unwrap();
    let g = &grids[0];
    assert!(g.lons().windows(2).all(|w| w[1] > w[0]));
    assert!(g.lats().windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn valid_two_level_nesting_succeeds() {
    let grids = compute_grid(&nested_domain(91)).unwrap();
    assert_eq!(grids.len(), 2);
    assert_eq!(grids[1].lons().len(), 91);
    assert_eq!(grids[1].lats().len(), 100);
    // Child spacing is the parent spacing over the nesting ratio.
    assert!((grids[1].dx() - 10_000.0).abs() < 1e-9);
}

#[test]
fn child_center_sits_half_an_extent_from_the_parent_start_point() {
    let grids = compute_grid(&nested_domain(91)).unwrap();
    let parent = &grids[0];
    let child = &grids[1];

    let start_lat = parent.lats()[33];
    let start_lon = parent.lons()[17];
    let width = meter_to_lon(90.0 * child.dx(), start_lat);
    let height = meter_to_lat(99.0 * child.dy());

    assert!((child.center_lat() - (start_lat + height / 2.0)).abs() < 1e-12);
    assert!((child.center_lon() - (start_lon + width / 2.0)).abs() < 1e-12);
}

#[test]
fn invalid_e_we_fails_with_suggestions() {
    let err = compute_grid(&nested_domain(92)).unwrap_err();
    match err {
        GridError::NestingRatio {
            domain,
            dimension,
            value,
            ratio,
            suggested,
        } => {
            assert_eq!(domain, 2);
            assert_eq!(dimension, "e_we");
            assert_eq!(value, 92);
            assert_eq!(ratio, 3);
            assert!(!suggested.is_empty());
            assert!(suggested.iter().all(|s| (s - 1) % 3 == 0));
        }
        other => panic!("expected NestingRatio, got {other:?}"),
    }
}

#[test]
fn third_level_spacing_follows_reference_divisor() {
    let nl = Namelist::from_str(
        "max_dom = 3,
         parent_id = 1, 1, 2,
         parent_grid_ratio = 1, 3, 3,
         i_parent_start = 1, 17, 10,
         j_parent_start = 1, 33, 10,
         e_we = 74, 91, 82,
         e_sn = 61, 100, 91,
         dx = 27000,
         dy = 27000,
         ref_lat = 47.20,
         ref_lon = 14.55,",
    );
    let grids = compute_grid(&nl).unwrap();
    // Level 2 divides by ratio * (level + 1) = 3 * 3, not by the chained
    // ratio product. Inherited from the reference implementation.
    assert!((grids[2].dx() - 27_000.0 / 9.0).abs() < 1e-9);
}

#[test]
fn zero_dimension_is_a_clean_error() {
    let nl = Namelist::from_str(
        "max_dom = 1,
         parent_id = 1,
         parent_grid_ratio = 1,
         i_parent_start = 1,
         j_parent_start = 1,
         e_we = 0,
         e_sn = 61,
         dx = 30000,
         dy = 30000,
         ref_lat = 47.20,
         ref_lon = 14.55,",
    );
    match compute_grid(&nl).unwrap_err() {
        GridError::NestingRatio {
            dimension,
            value,
            suggested,
            ..
        } => {
            assert_eq!(dimension, "e_we");
            assert_eq!(value, 0);
            assert!(suggested.iter().all(|&s| s >= 1));
        }
        other => panic!("expected NestingRatio, got {other:?}"),
    }
}

#[test]
fn missing_key_propagates_as_namelist_error() {
    let nl = Namelist::from_str("max_dom = 1,\n");
    assert!(matches!(
        compute_grid(&nl),
        Err(GridError::Namelist(_))
    ));
}

#[test]
fn parent_start_beyond_parent_extent_is_rejected() {
    let nl = Namelist::from_str(
        "max_dom = 2,
         parent_id = 1, 1,
         parent_grid_ratio = 1, 3,
         i_parent_start = 1, 90,
         j_parent_start = 1, 33,
         e_we = 74, 91,
         e_sn = 61, 100,
         dx = 30000,
         dy = 30000,
         ref_lat = 47.20,
         ref_lon = 14.55,",
    );
    assert!(matches!(
        compute_grid(&nl),
        Err(GridError::ParentStartOutOfRange { axis: "i", .. })
    ));
}
