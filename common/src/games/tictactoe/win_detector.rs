use super::types::{CELL_COUNT, Mark};

/// The eight winning lines, in the order they are checked.
pub const WIN_PATTERNS: [[usize; 3]; 8] = [
    [0, 1, 2],
    [0, 3, 6],
    [6, 7, 8],
    [2, 5, 8],
    [3, 4, 5],
    [1, 4, 7],
    [0, 4, 8],
    [2, 4, 6],
];

/// First completed pattern wins; within a pattern X is tested before O.
pub fn check_win(cells: &[Mark; CELL_COUNT]) -> Option<Mark> {
    for pattern in WIN_PATTERNS {
        for mark in [Mark::X, Mark::O] {
            if pattern.iter().all(|&index| cells[index] == mark) {
                return Some(mark);
            }
        }
    }
    None
}
