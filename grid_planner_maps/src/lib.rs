use csv::{ReaderBuilder, Trim};
use grid_util::point::Point;
use serde::Deserialize;
use std::fs::{self, File};
use std::io::{self, BufRead};
use std::path::Path;
use walkdir::WalkDir;

/// One line of a `.scen` file. Coordinates are given as row, column; `steps` is the length of a
/// shortest path, or -1 if the goal cannot be reached.
#[allow(unused)]
#[derive(Debug, Deserialize)]
pub struct ScenarioRecord {
    file_name: String,
    start_row: i32,
    start_col: i32,
    goal_row: i32,
    goal_col: i32,
    steps: i64,
}

/// Start, goal and the expected shortest path length in steps, [None] when unreachable.
pub type Scenario = (Point, Point, Option<usize>);

/// Reads a map stored as comma separated rows of `0` (free) and `1` (wall).
pub fn parse_grid_rows(map_str: &str) -> Vec<Vec<bool>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .from_reader(map_str.as_bytes());
    reader
        .records()
        .map(|record| {
            let record = record.expect("Could not read map row");
            record
                .iter()
                .map(|cell| match cell {
                    "0" => false,
                    "1" => true,
                    other => panic!("Map cannot contain value {other}"),
                })
                .collect::<Vec<bool>>()
        })
        .collect()
}

fn load_scenarios(name: &str) -> Vec<Scenario> {
    let file = File::open(Path::new(&format!("./scenarios/{}.map.scen", name)))
        .expect("Could not open scenario file");

    let reader = io::BufReader::new(file);
    let mut lines = reader.lines();

    // Skip the version line
    lines.next();

    let remaining_data = lines
        .collect::<Result<Vec<_>, _>>()
        .expect("Could not read scenario file")
        .join("\n");

    let mut csv_reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_reader(remaining_data.as_bytes());

    csv_reader
        .deserialize()
        .map(|result| {
            let record: ScenarioRecord = result.expect("Could not parse scenario record");
            let start = Point::new(record.start_col, record.start_row);
            let goal = Point::new(record.goal_col, record.goal_row);
            let steps = usize::try_from(record.steps).ok();
            (start, goal, steps)
        })
        .collect()
}

fn load_map(name: &str) -> (Vec<Vec<bool>>, Vec<Scenario>) {
    let map_str = fs::read_to_string(Path::new(&format!("./maps/{}.map", name)))
        .expect("Could not read map file");
    (parse_grid_rows(&map_str), load_scenarios(name))
}

/// Names of all maps below `maps/`, such as `basic/u_trap`.
pub fn get_map_names() -> Vec<String> {
    let root = Path::new("maps/");
    let root = root
        .canonicalize()
        .expect("Failed to canonicalize root path");
    let mut names = Vec::new();
    for entry in WalkDir::new(&root).sort_by_file_name() {
        let entry = entry.expect("Could not get dir entry");
        let rel_path = entry
            .path()
            .strip_prefix(&root)
            .expect("Entry outside of map root");
        if entry.file_type().is_file() && rel_path.components().count() >= 2 {
            let name = rel_path
                .to_str()
                .and_then(|s| s.split_once('.'))
                .expect("Map file without extension")
                .0;
            names.push(name.to_owned());
        }
    }
    names
}

/// The grid rows and scenarios of the map called `name`.
pub fn get_map(name: &str) -> (Vec<Vec<bool>>, Vec<Scenario>) {
    if get_map_names().iter().any(|n| n == name) {
        load_map(name)
    } else {
        panic!("Could not load map {name}!");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_rows() {
        let rows = parse_grid_rows("0,1,0\n0, 0 ,1\n");
        assert_eq!(
            rows,
            vec![vec![false, true, false], vec![false, false, true]]
        );
    }

    #[test]
    #[should_panic(expected = "Map cannot contain value 2")]
    fn rejects_unknown_cells() {
        parse_grid_rows("0,2\n");
    }
}
