//! Lock tests: solve reports persisted to disk and re-verified.

use cubestar_harness::report_dir::{
    read_report_dir, verify_report_dir, write_report_dir, ReportDirError,
};
use cubestar_harness::runner::run_solve;
use cubestar_harness::worlds::cube::CubeWorld;
use cubestar_search::policy::SearchPolicyV1;
use lock_tests::mv;

#[test]
fn solved_run_round_trips_through_disk() {
    let scramble = [mv('X', 0, 1), mv('Y', 2, 1)];
    let run = run_solve(
        CubeWorld::new(3).unwrap(),
        &scramble,
        "manhattan",
        SearchPolicyV1::default(),
        false,
    )
    .unwrap();
    assert!(run.report.replay_verified);

    let dir = tempfile::tempdir().unwrap();
    let digest = write_report_dir(&run, dir.path()).unwrap();
    assert_eq!(verify_report_dir(dir.path()).unwrap(), digest);

    let contents = read_report_dir(dir.path()).unwrap();
    assert_eq!(contents.report["outcome"]["type"], "solved");
    assert_eq!(
        contents.report["outcome"]["moves"].as_array().map(Vec::len),
        Some(2)
    );
    assert_eq!(
        contents.graph["metadata"]["termination_reason"]["type"],
        "goal_reached"
    );
}

#[test]
fn exhausted_run_is_persisted_as_exhausted() {
    let policy = SearchPolicyV1 {
        max_expansions: Some(1),
        ..SearchPolicyV1::default()
    };
    let run = run_solve(
        CubeWorld::new(3).unwrap(),
        &[mv('Z', 0, 1), mv('X', 2, -1)],
        "manhattan",
        policy,
        false,
    )
    .unwrap();

    let dir = tempfile::tempdir().unwrap();
    write_report_dir(&run, dir.path()).unwrap();
    let contents = read_report_dir(dir.path()).unwrap();
    assert_eq!(contents.report["outcome"]["type"], "exhausted");
    assert_eq!(contents.report["replay_verified"], false);
    assert_eq!(contents.graph["metadata"]["policy"]["max_expansions"], 1);
}

#[test]
fn identical_runs_write_identical_directories() {
    let scramble = [mv('Y', 1, -1), mv('Z', 2, 1)];
    let digests: Vec<_> = (0..3)
        .map(|_| {
            let run = run_solve(
                CubeWorld::new(3).unwrap(),
                &scramble,
                "manhattan",
                SearchPolicyV1::default(),
                false,
            )
            .unwrap();
            let dir = tempfile::tempdir().unwrap();
            write_report_dir(&run, dir.path()).unwrap()
        })
        .collect();
    assert!(digests.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn tampered_report_fails_closed() {
    let run = run_solve(
        CubeWorld::new(2).unwrap(),
        &[mv('Y', 0, 1)],
        "manhattan",
        SearchPolicyV1::default(),
        false,
    )
    .unwrap();
    let dir = tempfile::tempdir().unwrap();
    write_report_dir(&run, dir.path()).unwrap();

    // Flip the verification flag, keep canonical form.
    let path = dir.path().join("solve_report.json");
    let mut report: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    report["replay_verified"] = serde_json::json!(false);
    let bytes = cubestar_kernel::proof::canon::canonical_json_bytes(&report).unwrap();
    std::fs::write(&path, bytes).unwrap();

    let err = verify_report_dir(dir.path()).unwrap_err();
    assert!(matches!(err, ReportDirError::DigestMismatch { .. }));
}
