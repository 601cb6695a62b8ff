use super::box_mesh;
use gridsplit3d::math::Real;
use gridsplit3d::split::{DovetailParams, Partitioner, SplitAxis, SplitConfig, SplitPlan, Splitter};

fn trapezoid_area(params: &DovetailParams) -> Real {
    let inset = params.angle.tan() * params.height;
    (params.width + params.width - 2.0 * inset) / 2.0 * params.height
}

#[test]
fn dovetail_fragments_hold_the_jointed_model() {
    let mesh = box_mesh([-100.0, -75.0, 0.0], [100.0, 75.0, 60.0]);
    let splitter = Splitter::new(SplitConfig {
        xsplit: Some(2),
        dovetail: true,
        ..SplitConfig::default()
    })
    .unwrap();

    let plan = splitter.plan(&mesh).unwrap();
    assert_eq!((plan.xsplit, plan.ysplit), (2, 1));

    let jointed = splitter.add_joints(mesh.clone(), &plan).unwrap();
    // The male is inside the model, the female is carved out of the left half.
    let params = splitter.config().dovetail_params(50.0);
    let notch = trapezoid_area(&params) * params.depth;
    assert_relative_eq!(
        jointed.signed_volume(),
        mesh.signed_volume() - notch,
        epsilon = 1.0e-5
    );

    let fragments: Vec<_> = Partitioner::new(
        &jointed,
        &plan.x_extent,
        &plan.y_extent,
        plan.z_min,
        plan.z_max,
    )
    .map(|res| res.unwrap().1)
    .collect();

    assert_eq!(fragments.len(), 2);
    let half = 100.0 * 150.0 * 60.0;
    assert_relative_eq!(fragments[0].signed_volume(), half - notch, epsilon = 1.0e-5);
    assert_relative_eq!(fragments[1].signed_volume(), half, epsilon = 1.0e-5);
}

#[test]
fn dovetail_outside_the_model_is_added() {
    // The model does not contain the local origin of the dovetail along `y`.
    let mesh = box_mesh([0.0, 20.0, 0.0], [40.0, 60.0, 10.0]);
    let params = DovetailParams {
        depth: 5.0,
        ..DovetailParams::default()
    };

    let jointed = gridsplit3d::split::add_joints(mesh.clone(), SplitAxis::X, 2, &params).unwrap();
    let prism = trapezoid_area(&params) * params.depth;

    // The male is added as a separate solid, the female removes nothing.
    assert_relative_eq!(
        jointed.signed_volume(),
        mesh.signed_volume() + prism,
        epsilon = 1.0e-6
    );
}

#[test]
fn joints_along_both_axes() {
    let mesh = box_mesh([-100.0, -100.0, 0.0], [100.0, 100.0, 60.0]);
    let splitter = Splitter::new(SplitConfig {
        xsplit: Some(2),
        ysplit: Some(2),
        dovetail: true,
        ..SplitConfig::default()
    })
    .unwrap();

    let plan = splitter.plan(&mesh).unwrap();
    let jointed = splitter.add_joints(mesh.clone(), &plan).unwrap();

    // One notch per axis. They only share an edge.
    let params = splitter.config().dovetail_params(50.0);
    let notch = trapezoid_area(&params) * params.depth;
    assert_relative_eq!(
        jointed.signed_volume(),
        mesh.signed_volume() - 2.0 * notch,
        epsilon = 1.0e-5
    );
}
