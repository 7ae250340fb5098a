/// Edge list fixtures for integration tests and benchmarks.
use adjmst::graph::Graph;
use adjmst::init::from_edge_list;
use std::path::PathBuf;

/// The location of the edge list data w.r.t. the project manifest.
const EDGE_LIST_FIXTURES_DIR: &str = "edge_lists";

/// `A B 1`, `B C 2`, `A C 3`.
const TRIANGLE_FILENAME: &str = "triangle.txt";
/// A single edge between two vertices.
const SINGLE_FILENAME: &str = "single.txt";
/// A 4-cycle where three edges share the minimum weight.
const TIES_FILENAME: &str = "ties.txt";
/// Road distances (miles) between northeastern US cities.
const CITIES_FILENAME: &str = "city-pairs.txt";

/// Returns the path of an edge list fixture.
pub fn fixture_path(key: &str) -> String {
    let filename = match key {
        "triangle" => TRIANGLE_FILENAME,
        "single" => SINGLE_FILENAME,
        "ties" => TIES_FILENAME,
        "cities" => CITIES_FILENAME,
        bad => panic!("Unknown edge list fixture '{}'", bad),
    };

    // stable dir: see https://stackoverflow.com/a/30004252
    let mut full_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    full_path.push(EDGE_LIST_FIXTURES_DIR);
    full_path.push(filename);
    return full_path.into_os_string().into_string().unwrap();
}

/// Loads an edge list fixture.
pub fn default_fixture(key: &str) -> Graph {
    return from_edge_list(&fixture_path(key)).unwrap();
}
