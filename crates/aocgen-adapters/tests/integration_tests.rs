//! End-to-end tests of the scaffold workflow against the in-memory
//! filesystem: real templates, real renderer, no disk.

use std::path::{Path, PathBuf};

use aocgen_adapters::{BuiltinTemplates, MemoryFilesystem, SimpleRenderer};
use aocgen_core::{
    application::ScaffoldService,
    domain::{Day, Layout},
};

const ROOT: &str = "/project";
const YEAR: u16 = 2021;

fn service_on(filesystem: MemoryFilesystem) -> ScaffoldService {
    ScaffoldService::new(
        Box::new(BuiltinTemplates::new()),
        Box::new(SimpleRenderer::new()),
        Box::new(filesystem),
    )
}

fn generate(service: &ScaffoldService, day: i64) -> aocgen_core::application::GenerateReport {
    service
        .generate(Day::new(day), &Layout::default(), YEAR, Path::new(ROOT))
        .unwrap()
}

#[test]
fn day_3_scenario_produces_all_three_artifacts() {
    let fs = MemoryFilesystem::new();
    let service = service_on(fs.clone());

    let report = generate(&service, 3);

    let stub = fs
        .read_file(Path::new("/project/src/puzzles/day_3.rs"))
        .expect("stub missing");
    let aggregator = fs
        .read_file(Path::new("/project/src/puzzles/mod.rs"))
        .expect("aggregator missing");
    let fixture = fs
        .read_file(Path::new("/project/input/3.txt"))
        .expect("fixture missing");

    assert!(stub.contains("https://adventofcode.com/2021/day/3"));
    assert!(stub.contains("pub struct Day3 {}"));
    assert!(stub.contains(r#"include_str!("../../input/3.txt")"#));
    assert!(aggregator.contains("mod day_3;"));
    assert!(fixture.is_empty());

    assert!(report.fixture_created);
    assert_eq!(report.days_registered, 3);
}

#[test]
fn stub_matches_the_expected_shape_exactly() {
    let fs = MemoryFilesystem::new();
    generate(&service_on(fs.clone()), 1);

    let stub = fs
        .read_file(Path::new("/project/src/puzzles/day_1.rs"))
        .unwrap();
    let expected = r#"/*
** src/puzzles/day_1.rs
** https://adventofcode.com/2021/day/1
*/

use crate::types::{Puzzle, PuzzleError, Result, Solution};

const INPUT: &str = include_str!("../../input/1.txt");

pub struct Day1 {}

impl Day1 {
    pub fn new() -> Self {
        Self {}
    }
}

impl Puzzle for Day1 {
    // [QUESTION]
    fn part_1(&self) -> Result<Solution> {
        Err(PuzzleError::NoSolution.into())
    }

    // [QUESTION]
    fn part_2(&self) -> Result<Solution> {
        Err(PuzzleError::NoSolution.into())
    }
}
"#;
    assert_eq!(stub, expected);
}

#[test]
fn aggregator_matches_the_expected_shape_exactly() {
    let fs = MemoryFilesystem::new();
    generate(&service_on(fs.clone()), 2);

    let aggregator = fs
        .read_file(Path::new("/project/src/puzzles/mod.rs"))
        .unwrap();
    let expected = r#"/*
** src/puzzles/mod.rs
*/

mod day_1;
mod day_2;

use crate::types::Puzzle;

pub fn all() -> Vec<Box<dyn Puzzle>> {
    vec![
        Box::new(day_1::Day1::new()),
        Box::new(day_2::Day2::new()),
    ]
}
"#;
    assert_eq!(aggregator, expected);
}

#[test]
fn aggregator_lists_every_day_exactly_once_in_ascending_order() {
    let fs = MemoryFilesystem::new();
    // Only day 5 is generated; days 1-4 never were.  The aggregator is a
    // pure function of D and must list 1..=5 regardless.
    generate(&service_on(fs.clone()), 5);

    let aggregator = fs
        .read_file(Path::new("/project/src/puzzles/mod.rs"))
        .unwrap();

    let declarations: Vec<&str> = aggregator
        .lines()
        .filter(|l| l.starts_with("mod day_"))
        .collect();
    let constructions: Vec<&str> = aggregator
        .lines()
        .filter(|l| l.trim_start().starts_with("Box::new"))
        .collect();

    assert_eq!(
        declarations,
        vec!["mod day_1;", "mod day_2;", "mod day_3;", "mod day_4;", "mod day_5;"]
    );
    assert_eq!(constructions.len(), 5);
    for (i, line) in constructions.iter().enumerate() {
        let day = i + 1;
        assert_eq!(
            line.trim(),
            format!("Box::new(day_{day}::Day{day}::new()),")
        );
    }
}

#[test]
fn no_placeholder_markers_survive_in_any_artifact() {
    let fs = MemoryFilesystem::new();
    generate(&service_on(fs.clone()), 7);

    for path in fs.list_files() {
        let content = fs.read_file(&path).unwrap();
        assert!(
            !content.contains("{{"),
            "unreplaced placeholder in {}",
            path.display()
        );
    }
}

#[test]
fn rerunning_the_same_day_is_byte_identical() {
    let fs = MemoryFilesystem::new();
    let service = service_on(fs.clone());

    generate(&service, 4);
    let stub_first = fs
        .read_file(Path::new("/project/src/puzzles/day_4.rs"))
        .unwrap();
    let aggregator_first = fs
        .read_file(Path::new("/project/src/puzzles/mod.rs"))
        .unwrap();

    generate(&service, 4);
    assert_eq!(
        fs.read_file(Path::new("/project/src/puzzles/day_4.rs"))
            .unwrap(),
        stub_first
    );
    assert_eq!(
        fs.read_file(Path::new("/project/src/puzzles/mod.rs"))
            .unwrap(),
        aggregator_first
    );
}

#[test]
fn existing_fixture_content_is_preserved() {
    let fs = MemoryFilesystem::new();
    fs.seed_file("/project/input/3.txt", "abc");

    let report = generate(&service_on(fs.clone()), 3);

    assert!(!report.fixture_created);
    assert_eq!(
        fs.read_file(Path::new("/project/input/3.txt")).as_deref(),
        Some("abc")
    );
}

#[test]
fn existing_stub_is_silently_overwritten() {
    let fs = MemoryFilesystem::new();
    fs.seed_file("/project/src/puzzles/day_2.rs", "my half-finished solution");

    generate(&service_on(fs.clone()), 2);

    let stub = fs
        .read_file(Path::new("/project/src/puzzles/day_2.rs"))
        .unwrap();
    assert!(!stub.contains("half-finished"));
    assert!(stub.contains("pub struct Day2 {}"));
}

#[test]
fn non_positive_day_yields_a_degenerate_aggregator() {
    let fs = MemoryFilesystem::new();
    let report = generate(&service_on(fs.clone()), 0);

    let aggregator = fs
        .read_file(Path::new("/project/src/puzzles/mod.rs"))
        .unwrap();
    assert_eq!(report.days_registered, 0);
    assert!(!aggregator.contains("mod day_"));
    assert!(!aggregator.contains("Box::new"));
    // The fixture and stub are still produced; their names just carry the
    // degenerate identifier.
    assert!(fs.read_file(Path::new("/project/input/0.txt")).is_some());
}

#[test]
fn custom_layout_is_respected_end_to_end() {
    let fs = MemoryFilesystem::new();
    let service = service_on(fs.clone());
    let layout = Layout::new("puzzles", "data").unwrap();

    service
        .generate(Day::new(6), &layout, 2022, Path::new(ROOT))
        .unwrap();

    let stub = fs.read_file(Path::new("/project/puzzles/day_6.rs")).unwrap();
    assert!(stub.contains("https://adventofcode.com/2022/day/6"));
    assert!(stub.contains(r#"include_str!("../data/6.txt")"#));
    assert!(
        fs.read_file(Path::new("/project/data/6.txt")).is_some(),
        "fixture not created under custom input dir"
    );
}

#[test]
fn plan_alone_writes_nothing() {
    let fs = MemoryFilesystem::new();
    let service = service_on(fs.clone());

    let plan = service
        .plan(Day::new(9), &Layout::default(), YEAR, Path::new(ROOT))
        .unwrap();

    assert!(fs.list_files().is_empty());
    assert_eq!(plan.stub.path, PathBuf::from("src/puzzles/day_9.rs"));
    assert_eq!(plan.fixture.path, PathBuf::from("input/9.txt"));
}
