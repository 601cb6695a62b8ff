use super::{box_mesh, l_shape};
use gridsplit3d::io::{self, StlFormat};
use gridsplit3d::math::{Point, Vector};
use gridsplit3d::split::{SplitConfig, SplitError, Splitter};
use std::path::Path;

fn write_box(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("box.stl");
    let mesh = box_mesh([0.0, 0.0, 0.0], [200.0, 150.0, 50.0]);
    io::save_stl(&path, &mesh, StlFormat::Binary).unwrap();
    path
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<_> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn box_split_by_max_size() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_box(dir.path());

    let splitter = Splitter::new(SplitConfig {
        max_x: Some(100.0),
        max_y: Some(100.0),
        ..SplitConfig::default()
    })
    .unwrap();
    let report = splitter.run(&input).unwrap();

    assert_eq!((report.plan.xsplit, report.plan.ysplit), (2, 2));
    assert_eq!(report.model_size, Vector::new(200.0, 150.0, 50.0));
    assert_eq!(report.plan.segment_size, Vector::new(100.0, 75.0, 50.0));
    assert_eq!(
        file_names(dir.path()),
        [
            "box.stl",
            "box_splt-01.stl",
            "box_splt-02.stl",
            "box_splt-03.stl",
            "box_splt-04.stl"
        ]
    );

    let expected_mins = [
        Point::new(0.0, 0.0, 0.0),
        Point::new(0.0, 75.0, 0.0),
        Point::new(100.0, 0.0, 0.0),
        Point::new(100.0, 75.0, 0.0),
    ];

    for (path, mins) in report.parts.iter().zip(expected_mins) {
        let part = io::load_stl(path).unwrap();
        assert_relative_eq!(part.local_aabb().mins, mins);
        assert_relative_eq!(part.local_aabb().extents(), Vector::new(100.0, 75.0, 50.0));
        assert_relative_eq!(part.signed_volume(), 100.0 * 75.0 * 50.0, epsilon = 1.0e-3);
    }
}

#[test]
fn single_part() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_box(dir.path());
    let out = dir.path().join("parts");

    let splitter = Splitter::new(SplitConfig {
        xsplit: Some(1),
        ysplit: Some(1),
        output_dir: Some(out.clone()),
        stl_format: StlFormat::Ascii,
        ..SplitConfig::default()
    })
    .unwrap();
    let report = splitter.run(&input).unwrap();

    assert_eq!(report.parts, vec![out.join("box_splt-01.stl")]);

    let input_mesh = io::load_stl(&input).unwrap();
    let part = io::load_stl(&report.parts[0]).unwrap();
    assert!(std::fs::read_to_string(&report.parts[0])
        .unwrap()
        .starts_with("solid"));
    assert_eq!(part.local_aabb(), input_mesh.local_aabb());
    assert_relative_eq!(
        part.signed_volume(),
        input_mesh.signed_volume(),
        epsilon = 1.0e-3
    );
}

#[test]
fn flipped_model() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_box(dir.path());

    let splitter = Splitter::new(SplitConfig {
        flip: true,
        ..SplitConfig::default()
    })
    .unwrap();
    let report = splitter.run(&input).unwrap();
    let part = io::load_stl(&report.parts[0]).unwrap();

    assert_eq!(part.local_aabb().mins, Point::new(0.0, -150.0, -50.0));
    assert_eq!(part.local_aabb().maxs, Point::new(200.0, 0.0, 0.0));
}

#[test]
fn invalid_max_size_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let _ = write_box(dir.path());

    let result = Splitter::new(SplitConfig {
        max_x: Some(-5.0),
        ..SplitConfig::default()
    });

    assert!(matches!(result, Err(SplitError::InvalidConfiguration(_))));
    assert_eq!(file_names(dir.path()), ["box.stl"]);
}

#[test]
fn explicit_splits_ignore_the_max_size() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_box(dir.path());

    let splitter = Splitter::new(SplitConfig {
        xsplit: Some(2),
        max_x: Some(-5.0),
        ..SplitConfig::default()
    })
    .unwrap();
    let report = splitter.run(&input).unwrap();

    assert_eq!((report.plan.xsplit, report.plan.ysplit), (2, 1));
    assert_eq!(
        file_names(dir.path()),
        ["box.stl", "box_splt-01.stl", "box_splt-02.stl"]
    );
}

#[test]
fn empty_cells_use_no_part_number() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("l.stl");
    io::save_stl(&input, &l_shape(), StlFormat::Binary).unwrap();

    let splitter = Splitter::new(SplitConfig {
        xsplit: Some(2),
        ysplit: Some(2),
        ..SplitConfig::default()
    })
    .unwrap();
    let report = splitter.run(&input).unwrap();

    // The cell (1, 1) is outside of the L.
    assert_eq!(report.plan.num_cells(), 4);
    assert_eq!(
        file_names(dir.path()),
        ["l.stl", "l_splt-01.stl", "l_splt-02.stl", "l_splt-03.stl"]
    );

    let expected_mins = [
        Point::new(0.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
    ];

    for (path, mins) in report.parts.iter().zip(expected_mins) {
        let part = io::load_stl(path).unwrap();
        assert_relative_eq!(part.local_aabb().mins, mins);
        assert_relative_eq!(part.signed_volume(), 1.0, epsilon = 1.0e-9);
    }
}

#[test]
fn invalid_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("garbage.stl");
    std::fs::write(&input, b"solid garbage\n  facet normal 0 0 1\n    oops\n").unwrap();

    let splitter = Splitter::new(SplitConfig::default()).unwrap();
    assert!(matches!(
        splitter.run(&input),
        Err(SplitError::InvalidInput(_))
    ));
    assert!(matches!(
        splitter.run(dir.path().join("missing.stl")),
        Err(SplitError::InvalidInput(_))
    ));
    assert_eq!(file_names(dir.path()), ["garbage.stl"]);
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_box(dir.path());

    let splitter = Splitter::new(SplitConfig {
        xsplit: Some(3),
        max_y: Some(40.0),
        dovetail: true,
        ..SplitConfig::default()
    })
    .unwrap();
    let plan = splitter.dry_run(&input).unwrap();

    assert_eq!((plan.xsplit, plan.ysplit), (3, 4));
    assert_eq!(plan.num_cells(), 12);
    assert_eq!(file_names(dir.path()), ["box.stl"]);
}
