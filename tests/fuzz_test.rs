/// Fuzzes the search engine by checking for many random mazes that every strategy finds a path
/// exactly when the end is on the same connected component as the start, that the paths are
/// valid, and that A* and Dijkstra return shortest paths.
use itertools::Itertools;
use maze_pathfinding::*;
use rand::prelude::*;
use std::collections::VecDeque;

fn random_maze(rows: usize, cols: usize, rng: &mut StdRng) -> Maze {
    let walls = (0..rows)
        .cartesian_product(0..cols)
        .filter(|_| rng.gen_bool(0.4))
        .map(|(row, col)| Cell::new(row, col))
        .collect::<Vec<_>>();
    MazeBuilder::new(rows, cols)
        .walls(walls)
        .start(0, 0)
        .end(rows - 1, cols - 1)
        .build()
        .unwrap()
}

/// Reference shortest distance from start to end by breadth-first search.
fn bfs_distance(maze: &Maze) -> Option<usize> {
    let mut distance = vec![vec![None; maze.cols()]; maze.rows()];
    let mut queue = VecDeque::from([maze.start()]);
    distance[maze.start().row][maze.start().col] = Some(0);
    while let Some(cell) = queue.pop_front() {
        let d = distance[cell.row][cell.col].unwrap();
        if cell == maze.end() {
            return Some(d);
        }
        for n in maze.neighbors(cell) {
            if distance[n.row][n.col].is_none() {
                distance[n.row][n.col] = Some(d + 1);
                queue.push_back(n);
            }
        }
    }
    None
}

fn visualize_maze(maze: &Maze, result: &SearchResult) {
    println!("{}", maze);
    println!("Explored: {:?}", result.explored);
    println!("Path: {:?}", result.path);
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..N_GRIDS {
        let maze = random_maze(N, N, &mut rng);
        let reachable = maze.connected(maze.start(), maze.end());
        for kind in StrategyKind::ALL {
            let result = find_path(&maze, &kind);
            // Show the maze if the outcome disagrees with the components
            if result.found() != reachable {
                visualize_maze(&maze, &result);
            }
            assert_eq!(result.found(), reachable, "{kind}");
            assert_eq!(result.explored.first(), Some(&maze.start()));
            assert!(result.explored.iter().all_unique());
            if let Some(path) = &result.path {
                assert!(is_valid_path(&maze, path));
                assert!(path
                    .iter()
                    .tuple_windows()
                    .all(|(a, b)| maze.neighbors(*a).contains(b)));
            } else {
                // An unsuccessful search covers the whole component of the start.
                let component = maze
                    .free_cells()
                    .filter(|&c| maze.connected(maze.start(), c))
                    .count();
                assert_eq!(result.explored.len(), component);
            }
        }
    }
}

#[test]
fn fuzz_distance() {
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..N_GRIDS {
        let rows = rng.gen_range(1..12);
        let cols = rng.gen_range(1..12);
        let maze = random_maze(rows, cols, &mut rng);
        let shortest = bfs_distance(&maze);
        for kind in StrategyKind::ALL {
            let result = find_path(&maze, &kind);
            if kind.is_optimal() {
                if result.path_cost() != shortest {
                    visualize_maze(&maze, &result);
                }
                assert_eq!(result.path_cost(), shortest, "{kind}");
            } else {
                // Greedy may wander but can never beat the shortest path.
                assert_eq!(result.found(), shortest.is_some());
                if let (Some(cost), Some(best)) = (result.path_cost(), shortest) {
                    assert!(cost >= best);
                }
            }
        }
    }
}

#[test]
fn repeated_searches_are_identical() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..200 {
        let maze = random_maze(12, 12, &mut rng);
        for kind in StrategyKind::ALL {
            assert_eq!(find_path(&maze, &kind), find_path(&maze, &kind));
        }
    }
}

#[test]
fn weighted_astar_finds_valid_paths() {
    let mut rng = StdRng::seed_from_u64(3);
    let solver = WeightedAstar::new(1.5);
    for _ in 0..500 {
        let maze = random_maze(10, 10, &mut rng);
        let result = find_path(&maze, &solver);
        assert_eq!(result.found(), maze.connected(maze.start(), maze.end()));
        if let Some(path) = &result.path {
            assert!(is_valid_path(&maze, path));
        }
    }
}
