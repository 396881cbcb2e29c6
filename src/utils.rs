//! Parsing and console-rendering helpers around the core engine.
use crate::engine::Grid;

/// Parses an array of string slices into a [`Grid`].
///
/// Each string slice represents one board row, top to bottom, as
/// whitespace-separated non-negative integers with `0` marking the blank.
/// All validation of [`Grid::from_rows`] applies: the rows must be
/// rectangular and must hold each value of `0..height*width` exactly once.
///
/// # Arguments
/// * `rows`: One string per row, e.g. `["1 2 3", "8 0 4", "7 6 5"]`.
///
/// # Returns
/// * `Ok(Grid)` if parsing and validation succeed.
/// * `Err(String)` naming the offending row or token otherwise.
///
/// # Examples
/// ```
/// use npuzzle_solver::utils::grid_from_str_rows;
///
/// let grid = grid_from_str_rows(&["1 2 3", "8 0 4", "7 6 5"]).unwrap();
/// assert_eq!(grid.value_at(1, 0), 8);
///
/// assert!(grid_from_str_rows(&["1 2 3", "8 x 4", "7 6 5"]).is_err());
/// ```
pub fn grid_from_str_rows(rows: &[&str]) -> Result<Grid, String> {
    let mut parsed: Vec<Vec<u32>> = Vec::with_capacity(rows.len());
    for (r, row) in rows.iter().enumerate() {
        let mut values = Vec::new();
        for token in row.split_whitespace() {
            let value: u32 = token
                .parse()
                .map_err(|_| format!("Unrecognized value '{}' in row {}", token, r))?;
            values.push(value);
        }
        parsed.push(values);
    }
    Grid::from_rows(&parsed)
}

/// Renders an initial grid next to its goal for console output.
///
/// Rows are framed by dashed rules with cell values separated by `|`, the
/// two boards side by side under `Initial Puzzle` / `Goal Puzzle` headers.
/// Both grids must share dimensions.
pub fn side_by_side(initial: &Grid, goal: &Grid) -> String {
    debug_assert_eq!(initial.height(), goal.height());
    debug_assert_eq!(initial.width(), goal.width());

    let cell_width = (initial.cell_count() - 1).to_string().len();
    let render_row = |grid: &Grid, r: usize| -> String {
        (0..grid.width())
            .map(|c| format!(" {:>width$} ", grid.value_at(r, c), width = cell_width))
            .collect::<Vec<String>>()
            .join("|")
    };

    let rule = "-".repeat(render_row(goal, 0).chars().count());
    let mut output = String::new();
    output.push_str(&format!("{:<width$}\t{}\n", "Initial Puzzle", "Goal Puzzle", width = rule.len()));
    output.push_str(&format!("{}\t{}\n", rule, rule));
    for r in 0..initial.height() {
        output.push_str(&format!("{}\t{}\n", render_row(initial, r), render_row(goal, r)));
        output.push_str(&format!("{}\t{}\n", rule, rule));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_from_str_rows_valid() {
        let grid = grid_from_str_rows(&["1 2 3", "8 0 4", "7 6 5"]).unwrap();
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.value_at(0, 0), 1);
        assert_eq!(grid.blank_position(), (1, 1));
    }

    #[test]
    fn test_grid_from_str_rows_invalid_token() {
        let result = grid_from_str_rows(&["1 2 3", "8 x 4", "7 6 5"]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Unrecognized value 'x' in row 1"));
    }

    #[test]
    fn test_grid_from_str_rows_ragged() {
        let result = grid_from_str_rows(&["1 2 3", "8 0", "7 6 5"]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Row 1"));
    }

    #[test]
    fn test_grid_from_str_rows_duplicate_value() {
        let result = grid_from_str_rows(&["1 2 3", "8 0 4", "7 6 1"]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("more than once"));
    }

    #[test]
    fn test_grid_from_str_rows_extra_whitespace() {
        let grid = grid_from_str_rows(&["  1   2 3 ", "8 0 4", "7 6 5"]).unwrap();
        assert_eq!(grid.value_at(0, 1), 2);
    }

    #[test]
    fn test_side_by_side_layout() {
        let initial = grid_from_str_rows(&["1 2 3", "8 4 0", "7 6 5"]).unwrap();
        let goal = grid_from_str_rows(&["1 2 3", "8 0 4", "7 6 5"]).unwrap();
        let rendered = side_by_side(&initial, &goal);

        assert!(rendered.contains("Initial Puzzle"));
        assert!(rendered.contains("Goal Puzzle"));
        assert!(rendered.contains(" 1 | 2 | 3 "));
        // Header, top rule, then one value line and one rule per row.
        assert_eq!(rendered.lines().count(), 2 + 2 * goal.height());
    }
}
