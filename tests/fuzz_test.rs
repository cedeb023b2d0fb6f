//! Fuzzes the solvers by checking on many random grids that a path is found exactly when the
//! goal shares a connected component with the start, and that A* paths are valid and as short
//! as a breadth-first reference.
use grid_astar::*;
use rand::prelude::*;
use std::collections::VecDeque;

fn random_grid(rows: usize, cols: usize, rng: &mut StdRng) -> MazeGrid {
    MazeGrid::from_fn(rows, cols, |_| {
        if rng.gen_bool(0.4) {
            Marker::Blocked
        } else {
            Marker::Open
        }
    })
    .unwrap()
}

fn random_cell(grid: &MazeGrid, rng: &mut StdRng) -> Cell {
    Cell::new(rng.gen_range(0..grid.rows()), rng.gen_range(0..grid.cols()))
}

/// Breadth-first move count from start to goal, independent of the crate's search.
fn bfs_distance(grid: &MazeGrid, start: Cell, goal: Cell) -> Option<usize> {
    if !grid.can_move_to(&start) || !grid.can_move_to(&goal) {
        return None;
    }
    let mut dist = vec![usize::MAX; grid.rows() * grid.cols()];
    let mut queue = VecDeque::from([start]);
    dist[grid.index(&start)] = 0;
    while let Some(cell) = queue.pop_front() {
        let d = dist[grid.index(&cell)];
        if cell == goal {
            return Some(d);
        }
        for n in grid.open_neighbours(&cell) {
            let ix = grid.index(&n);
            if dist[ix] == usize::MAX {
                dist[ix] = d + 1;
                queue.push_back(n);
            }
        }
    }
    None
}

fn visualize_grid(grid: &MazeGrid, start: &Cell, end: &Cell) {
    println!("{}", grid.render_path(start, &[*end]));
}

#[test]
fn fuzz() {
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let astar_solver = AstarSolver::new();
    let unchecked_solver = AstarSolver::with_options(SearchOptions {
        check_components: false,
        ..Default::default()
    });
    for _ in 0..N_GRIDS {
        let rows = rng.gen_range(1..=10);
        let cols = rng.gen_range(1..=10);
        let grid = random_grid(rows, cols, &mut rng);
        let start = random_cell(&grid, &mut rng);
        let goal = random_cell(&grid, &mut rng);

        let reachable = grid.reachable(&start, &goal);
        let reference = bfs_distance(&grid, start, goal);
        let path = astar_solver.find_path(&grid, start, goal).unwrap();
        // Show the grid if the outcome is unexpected
        if path.is_some() != reachable || reachable != reference.is_some() {
            visualize_grid(&grid, &start, &goal);
        }
        assert_eq!(path.is_some(), reachable);
        assert_eq!(reference.is_some(), reachable);
        assert_eq!(unchecked_solver.find_path(&grid, start, goal).unwrap(), path);

        if let (Some(path), Some(distance)) = (path, reference) {
            assert!(is_valid_path(&grid, &start, &path));
            assert_eq!(path.len(), distance);
            assert_eq!(path.last().copied().unwrap_or(start), goal);
            assert!(!path.contains(&start));
        }
    }
}

#[test]
fn fuzz_distance() {
    const N: usize = 8;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(1);
    let astar_solver = AstarSolver::new();
    let dijkstra_solver = DijkstraSolver::new();
    let start = Cell::new(0, 0);
    let goal = Cell::new(N - 1, N - 1);

    for _ in 0..N_GRIDS {
        let grid = random_grid(N, N, &mut rng);
        if !grid.reachable(&start, &goal) {
            continue;
        }
        let astar_path = astar_solver.find_path(&grid, start, goal).unwrap().unwrap();
        let dijkstra_path = dijkstra_solver
            .find_path(&grid, start, goal)
            .unwrap()
            .unwrap();
        let astar_cost = astar_solver.path_cost(&start, &astar_path);
        let dijkstra_cost = dijkstra_solver.path_cost(&start, &dijkstra_path);
        if astar_cost != dijkstra_cost {
            println!("Astar path: {astar_path:?}\n Dijkstra path: {dijkstra_path:?}\n");
            visualize_grid(&grid, &start, &goal);
        }
        assert_eq!(astar_cost, dijkstra_cost);
        assert!(is_valid_path(&grid, &start, &dijkstra_path));
    }
}

#[test]
fn repeated_searches_are_identical() {
    let mut rng = StdRng::seed_from_u64(2);
    let solver = AstarSolver::new();
    for _ in 0..200 {
        let grid = random_grid(12, 12, &mut rng);
        let start = random_cell(&grid, &mut rng);
        let goal = random_cell(&grid, &mut rng);
        let first = solver.find_path(&grid, start, goal).unwrap();
        for _ in 0..3 {
            assert_eq!(solver.find_path(&grid, start, goal).unwrap(), first);
        }
    }
}
