/// Row or column index. Boards never exceed ten cards per side.
pub type Coord = u8;

/// Card and pair counts.
pub type CellCount = u16;

/// Position on the board as `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Index into the `ndarray` grid backing a [`Board`](crate::Board).
pub(crate) const fn grid_index((row, col): Coord2) -> [usize; 2] {
    [row as usize, col as usize]
}
