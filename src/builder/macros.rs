//! Macros for ergonomic board construction.

/// Build a [`Board`](crate::core::Board) from a 3×3 picture.
///
/// `X` is mark A, `O` is mark B and `_` is an empty cell, listed in
/// row-major order. Anything other than nine cells fails to compile.
///
/// # Example
///
/// ```
/// use tictactoe_timeline::board;
/// use tictactoe_timeline::core::{detect, Mark};
///
/// let board = board![
///     X O _
///     _ X O
///     _ _ X
/// ];
///
/// assert_eq!(detect(&board).unwrap().winner, Mark::A);
/// ```
#[macro_export]
macro_rules! board {
    (@cell X) => {
        $crate::core::Cell::Marked($crate::core::Mark::A)
    };
    (@cell O) => {
        $crate::core::Cell::Marked($crate::core::Mark::B)
    };
    (@cell _) => {
        $crate::core::Cell::Empty
    };
    ($($cell:tt)*) => {
        $crate::core::Board::from_cells([$($crate::board!(@cell $cell)),*])
    };
}
