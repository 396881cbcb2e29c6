//! Distance estimation between a puzzle state and its goal.
//!
//! The estimate is the classic Manhattan-distance sum over all tiles plus a
//! weighted penalty for adjacent reversals (two neighboring tiles that sit
//! in each other's goal cells). A reversal costs extra slides beyond what
//! raw Manhattan distance accounts for, so penalizing it sharpens the
//! ordering of the informed search strategies.
use crate::engine::{GoalPositions, Grid, DIRECTIONS};

/// Weight applied to each counted reversal on top of Manhattan distance.
///
/// Each tile of a reversed pair counts once, so a single adjacent swap adds
/// `2 * REVERSAL_WEIGHT` to the estimate. The weight is uniform across every
/// strategy in a build.
pub const REVERSAL_WEIGHT: u32 = 2;

/// Estimates the remaining slide count from `state` to `goal`.
///
/// For every non-blank tile the Manhattan distance to its goal cell is
/// accumulated. A tile that is out of place is additionally checked against
/// its four current neighbors in the fixed left, right, up, down order: if
/// the tile sits where the neighbor belongs and the neighbor sits where the
/// tile belongs, one reversal is counted and the remaining directions are
/// skipped (at most one reversal per tile). The blank never participates in
/// a reversal, so a state one slide from the goal always evaluates to 1.
///
/// The result is `distance + REVERSAL_WEIGHT * reversals`; it is 0 exactly
/// when `state` equals `goal`.
///
/// # Arguments
/// * `state`: The state to evaluate.
/// * `goal`: The goal grid; must share dimensions with `state`.
/// * `goal_positions`: The table built by
///   [`generate_goal_positions`](crate::engine::generate_goal_positions)
///   for `goal`.
///
/// # Examples
/// ```
/// use npuzzle_solver::engine::{generate_goal_positions, Grid};
/// use npuzzle_solver::heuristics::heuristic;
///
/// let goal = Grid::from_rows(&[vec![1, 2, 3], vec![8, 0, 4], vec![7, 6, 5]]).unwrap();
/// let table = generate_goal_positions(&goal);
/// assert_eq!(heuristic(&goal, &goal, &table), 0);
/// ```
pub fn heuristic(state: &Grid, goal: &Grid, goal_positions: &GoalPositions) -> u32 {
    let mut distance = 0u32;
    let mut reversals = 0u32;

    for r in 0..state.height() {
        for c in 0..state.width() {
            let value = state.value_at(r, c);
            if value == 0 {
                continue;
            }

            let (goal_r, goal_c) = goal_positions.position_of(value);
            let diff = (r.abs_diff(goal_r) + c.abs_diff(goal_c)) as u32;
            distance += diff;

            if diff != 0 {
                for direction in DIRECTIONS {
                    let (dr, dc) = direction.offset();
                    let nr = r as isize + dr;
                    let nc = c as isize + dc;
                    if nr < 0
                        || nr >= state.height() as isize
                        || nc < 0
                        || nc >= state.width() as isize
                    {
                        continue;
                    }
                    let (nr, nc) = (nr as usize, nc as usize);
                    let neighbor = state.value_at(nr, nc);
                    // Both participants must be tiles; a swap with the blank
                    // is an ordinary single slide, not a reversal.
                    if neighbor != 0
                        && value == goal.value_at(nr, nc)
                        && neighbor == goal.value_at(r, c)
                    {
                        reversals += 1;
                        break;
                    }
                }
            }
        }
    }

    distance + REVERSAL_WEIGHT * reversals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::generate_goal_positions;

    fn classic_goal() -> Grid {
        Grid::from_rows(&[vec![1, 2, 3], vec![8, 0, 4], vec![7, 6, 5]]).unwrap()
    }

    #[test]
    fn test_heuristic_of_goal_is_zero() {
        let goal = classic_goal();
        let table = generate_goal_positions(&goal);
        assert_eq!(heuristic(&goal, &goal, &table), 0);
    }

    #[test]
    fn test_heuristic_one_slide_from_goal_is_one() {
        let goal = classic_goal();
        let table = generate_goal_positions(&goal);
        // Blank slid left out of the center: tile 4 is one step off and the
        // blank swap must not register as a reversal.
        let state = Grid::from_rows(&[vec![1, 2, 3], vec![8, 4, 0], vec![7, 6, 5]]).unwrap();
        assert_eq!(heuristic(&state, &goal, &table), 1);
    }

    #[test]
    fn test_heuristic_every_neighbor_of_goal_is_one() {
        let goal = classic_goal();
        let table = generate_goal_positions(&goal);
        for (_, _, state) in goal.successors(goal.blank_position()) {
            assert_eq!(
                heuristic(&state, &goal, &table),
                1,
                "One slide away must always evaluate to exactly 1"
            );
        }
    }

    #[test]
    fn test_heuristic_counts_reversal_per_tile() {
        let goal = classic_goal();
        let table = generate_goal_positions(&goal);
        // Tiles 1 and 2 sit in each other's goal cells: distance 2, and each
        // tile of the pair counts one reversal.
        let state = Grid::from_rows(&[vec![2, 1, 3], vec![8, 0, 4], vec![7, 6, 5]]).unwrap();
        assert_eq!(heuristic(&state, &goal, &table), 2 + 2 * REVERSAL_WEIGHT);
    }

    #[test]
    fn test_heuristic_two_slides_no_reversal() {
        let goal = classic_goal();
        let table = generate_goal_positions(&goal);
        // Blank walked left then up from the center; tiles 1 and 8 are each
        // one step off, neither pair is reversed.
        let state = Grid::from_rows(&[vec![0, 2, 3], vec![1, 8, 4], vec![7, 6, 5]]).unwrap();
        assert_eq!(heuristic(&state, &goal, &table), 2);
    }

    #[test]
    fn test_heuristic_row_major_goal() {
        let goal = Grid::from_rows(&[vec![1, 2], vec![3, 0]]).unwrap();
        let table = generate_goal_positions(&goal);
        let state = Grid::from_rows(&[vec![1, 2], vec![0, 3]]).unwrap();
        assert_eq!(heuristic(&state, &goal, &table), 1);
    }
}
