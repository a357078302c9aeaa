use std::fs;

use aoc2021::{input_path, run};

#[test]
fn solves_packet_transmission_from_input_dir() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("day16.in"),
        "8A004A801A8002F478\nC0015000016115A2E0802F182340\n9C0141080250320F1802104A08\n",
    ).unwrap();

    let path = input_path(dir.path(), 16, None);
    assert_eq!(run(16, 1, &path).unwrap(), "16\n23\n20");
    assert_eq!(run(16, 2, &path).unwrap(), "15\n46\n1");
}

#[test]
fn worked_example_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("day6test1.in"), "3,4,3,1,2\n").unwrap();

    let path = input_path(dir.path(), 6, Some(1));
    assert_eq!(run(6, 1, &path).unwrap(), "5934");
}

#[test]
fn malformed_lines_do_not_stop_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("packets.txt");
    fs::write(&path, "D2F\n38006\nD2FE28\n").unwrap();

    assert_eq!(run(16, 2, &path).unwrap(), "2021");
}

#[test]
fn missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = run(3, 1, &input_path(dir.path(), 3, None)).unwrap_err();
    assert!(format!("{:#}", err).contains("day3.in"));
}
