use maze_pathfinding::layouts::classic_maze;
use maze_pathfinding::{find_path, Cell, CellKind, Maze, SearchResult, StrategyKind};
use std::collections::HashSet;

// Runs every strategy over the classic 15x20 maze and prints what a visualizer would animate:
// - # marks a wall
// - S marks the start
// - E marks the end
// - o marks a cell on the path
// - + marks an explored cell that is not on the path
//
// Pass a strategy name (astar, dijkstra, greedy or a/d/g) to run only that one.

fn overlay(maze: &Maze, result: &SearchResult) -> String {
    let explored = result.explored.iter().collect::<HashSet<&Cell>>();
    let path = result.path.iter().flatten().collect::<HashSet<&Cell>>();
    let mut out = String::new();
    for row in 0..maze.rows() {
        for col in 0..maze.cols() {
            let cell = Cell::new(row, col);
            let tile = match maze.kind(cell) {
                Ok(CellKind::Wall) => '#',
                Ok(CellKind::Start) => 'S',
                Ok(CellKind::End) => 'E',
                _ if path.contains(&cell) => 'o',
                _ if explored.contains(&cell) => '+',
                _ => '.',
            };
            out.push(tile);
        }
        out.push('\n');
    }
    out
}

fn main() {
    let maze = match classic_maze() {
        Ok(maze) => maze,
        Err(e) => {
            eprintln!("Could not build maze: {e}");
            return;
        }
    };
    let kinds = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<StrategyKind>() {
            Ok(kind) => vec![kind],
            Err(e) => {
                eprintln!("{e}");
                return;
            }
        },
        None => StrategyKind::ALL.to_vec(),
    };
    println!("{}", maze);
    for kind in kinds {
        let result = find_path(&maze, &kind);
        println!("{kind}: explored {} cells", result.explored.len());
        match result.path_cost() {
            Some(cost) => println!("Path of {cost} steps, waypoints {:?}", result.waypoints()),
            None => println!("No path"),
        }
        println!("{}", overlay(&maze, &result));
    }
}
