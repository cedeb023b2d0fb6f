use grid_astar::{find_path, Cell, MazeGrid, PathResult};

// In this example a path is found on the 5x6 maze
//  ______
// |S#....|
// |.#.##.|
// |...#..|
// |##.#.#|
// |.....E|
//  ______
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood. Run with RUST_LOG=debug to see search statistics.

fn main() -> PathResult<()> {
    env_logger::init();
    let grid = MazeGrid::from_rows(&[
        [0u8, 1, 0, 0, 0, 0],
        [0, 1, 0, 1, 1, 0],
        [0, 0, 0, 1, 0, 0],
        [1, 1, 0, 1, 0, 1],
        [0, 0, 0, 0, 0, 0],
    ])?;
    println!("{}", grid);
    let start = Cell::new(0, 0);
    let goal = Cell::new(4, 5);
    match find_path(&grid, start, goal)? {
        Some(path) => {
            println!("Path found: {:?}", path);
            println!("{}", grid.render_path(&start, &path));
        }
        None => println!("No path found"),
    }
    Ok(())
}
