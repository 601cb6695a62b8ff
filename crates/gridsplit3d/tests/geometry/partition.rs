use super::{box_mesh, l_shape};
use gridsplit3d::bounding_volume::Aabb;
use gridsplit3d::math::{Point, Real};
use gridsplit3d::shape::TriMesh;
use gridsplit3d::split::{extents, GridCell, Partitioner, SplitConfig, SplitPlan};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn partition(mesh: &TriMesh, plan: &SplitPlan) -> Vec<(GridCell, TriMesh)> {
    Partitioner::new(
        mesh,
        &plan.x_extent,
        &plan.y_extent,
        plan.z_min,
        plan.z_max,
    )
    .collect::<Result<_, _>>()
    .unwrap()
}

#[test]
fn fragments_cover_the_model() {
    let mesh = l_shape();
    assert_relative_eq!(mesh.signed_volume(), 3.0, epsilon = 1.0e-9);

    let config = SplitConfig {
        xsplit: Some(3),
        ysplit: Some(4),
        ..SplitConfig::default()
    };
    let plan = SplitPlan::new(mesh.local_aabb(), &config).unwrap();
    let fragments = partition(&mesh, &plan);

    let total: Real = fragments.iter().map(|(_, f)| f.signed_volume()).sum();
    assert_relative_eq!(total, 3.0, epsilon = 1.0e-8);

    for (cell, fragment) in &fragments {
        let cell_aabb = Aabb::new(
            Point::new(plan.x_extent[cell.i], plan.y_extent[cell.j], plan.z_min),
            Point::new(plan.x_extent[cell.i + 1], plan.y_extent[cell.j + 1], plan.z_max),
        )
        .loosened(1.0e-9);
        assert!(cell_aabb.contains_local_point(&fragment.local_aabb().mins));
        assert!(cell_aabb.contains_local_point(&fragment.local_aabb().maxs));
    }
}

#[test]
fn empty_cells_are_skipped() {
    let mesh = l_shape();
    let xs = extents(0.0, 2.0, 2);
    let fragments: Vec<_> = Partitioner::new(&mesh, &xs, &xs, 0.0, 1.0)
        .map(|res| res.unwrap())
        .collect();

    let cells: Vec<_> = fragments.iter().map(|(cell, _)| *cell).collect();
    assert_eq!(
        cells,
        vec![
            GridCell { i: 0, j: 0 },
            GridCell { i: 0, j: 1 },
            GridCell { i: 1, j: 0 },
        ]
    );

    for (_, fragment) in &fragments {
        assert_relative_eq!(fragment.signed_volume(), 1.0, epsilon = 1.0e-9);
    }
}

#[test]
fn partition_is_deterministic() {
    let mesh = l_shape();
    let config = SplitConfig {
        max_x: Some(0.7),
        max_y: Some(0.7),
        ..SplitConfig::default()
    };
    let plan = SplitPlan::new(mesh.local_aabb(), &config).unwrap();

    assert_eq!(partition(&mesh, &plan), partition(&mesh, &plan));
}

#[test]
fn single_cell_is_the_whole_model() {
    let mesh = box_mesh([-1.0, -2.0, -3.0], [1.0, 2.0, 3.0]);
    let plan = SplitPlan::new(mesh.local_aabb(), &SplitConfig::default()).unwrap();
    let fragments = partition(&mesh, &plan);

    assert_eq!(fragments.len(), 1);
    assert_eq!(fragments[0].1.local_aabb(), mesh.local_aabb());
    assert_relative_eq!(fragments[0].1.signed_volume(), 48.0, epsilon = 1.0e-9);
}

#[test]
fn random_grids_cover_a_box() {
    let mut rng = StdRng::seed_from_u64(0);
    let mesh = box_mesh([-3.0, 1.0, 0.5], [7.0, 4.0, 2.0]);

    for _ in 0..5 {
        let config = SplitConfig {
            max_x: Some(rng.gen_range(0.5..10.0)),
            max_y: Some(rng.gen_range(0.5..5.0)),
            ..SplitConfig::default()
        };
        let plan = SplitPlan::new(mesh.local_aabb(), &config).unwrap();
        let fragments = partition(&mesh, &plan);

        assert_eq!(fragments.len(), plan.num_cells());
        let total: Real = fragments.iter().map(|(_, f)| f.signed_volume()).sum();
        assert_relative_eq!(total, 45.0, epsilon = 1.0e-8);
    }
}
