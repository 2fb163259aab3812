//! 4-connected region search used by the bucket fill

use std::collections::VecDeque;

/// Collect every cell 4-connected to `(start_x, start_y)` that shares its value.
///
/// Coordinates are zero-based. `get` is called with in-bounds coordinates only.
/// Each cell is queued at most once, so the search is O(width * height) and
/// never recurses. The returned cells are in visit order, which callers must
/// not rely on.
pub fn region<T, F>(
    start_x: usize,
    start_y: usize,
    width: usize,
    height: usize,
    get: F,
) -> Vec<(usize, usize)>
where
    T: PartialEq,
    F: Fn(usize, usize) -> T,
{
    if start_x >= width || start_y >= height {
        return Vec::new();
    }

    let target = get(start_x, start_y);
    let mut visited = vec![vec![false; width]; height];
    let mut queue = VecDeque::new();
    let mut result = Vec::new();

    visited[start_y][start_x] = true;
    queue.push_back((start_x, start_y));

    while let Some((x, y)) = queue.pop_front() {
        result.push((x, y));

        // left, right, up, down; clipped at the grid edges
        let neighbours = [
            x.checked_sub(1).map(|nx| (nx, y)),
            (x + 1 < width).then_some((x + 1, y)),
            y.checked_sub(1).map(|ny| (x, ny)),
            (y + 1 < height).then_some((x, y + 1)),
        ];

        for (nx, ny) in neighbours.into_iter().flatten() {
            if visited[ny][nx] {
                continue;
            }
            if get(nx, ny) == target {
                visited[ny][nx] = true;
                queue.push_back((nx, ny));
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn grid(rows: &[&str]) -> Vec<Vec<char>> {
        rows.iter().map(|r| r.chars().collect()).collect()
    }

    #[test]
    fn uniform_grid_is_one_region() {
        let g = grid(&["OOO", "OOO"]);
        let cells = region(1, 1, 3, 2, |x, y| g[y][x]);
        assert_eq!(cells.len(), 6);
    }

    #[test]
    fn diagonal_neighbours_are_not_connected() {
        let g = grid(&["AO", "OA"]);
        let cells = region(0, 0, 2, 2, |x, y| g[y][x]);
        assert_eq!(cells, vec![(0, 0)]);
    }

    #[test]
    fn wall_blocks_propagation() {
        let g = grid(&["OAO", "OAO", "OAO"]);
        let cells: HashSet<_> = region(2, 0, 3, 3, |x, y| g[y][x]).into_iter().collect();
        let expected: HashSet<_> = [(2, 0), (2, 1), (2, 2)].into_iter().collect();
        assert_eq!(cells, expected);
    }

    #[test]
    fn visits_each_cell_once() {
        let g = vec![vec!['O'; 250]; 250];
        let cells = region(125, 125, 250, 250, |x, y| g[y][x]);
        assert_eq!(cells.len(), 250 * 250);
        let unique: HashSet<_> = cells.into_iter().collect();
        assert_eq!(unique.len(), 250 * 250);
    }

    #[test]
    fn out_of_bounds_start_is_empty() {
        let cells = region(3, 0, 3, 3, |_, _| 'O');
        assert!(cells.is_empty());
    }
}
