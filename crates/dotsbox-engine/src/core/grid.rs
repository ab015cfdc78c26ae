/// Dense row-major 2D storage used for edge flags and box marks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T>
where
    T: Copy,
{
    pub(crate) fn filled(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            cells: vec![value; width * height],
        }
    }

    /// Builds a grid from nested rows.
    ///
    /// Returns `Err((width, height))` with the observed shape if the rows are ragged
    /// or do not match the expected dimensions.
    pub(crate) fn from_rows(
        rows: &[Vec<T>],
        width: usize,
        height: usize,
    ) -> Result<Self, (usize, usize)> {
        let observed_width = rows.first().map_or(0, Vec::len);
        let ragged = rows.iter().any(|row| row.len() != observed_width);
        if ragged || rows.len() != height || observed_width != width {
            return Err((observed_width, rows.len()));
        }
        Ok(Self {
            width,
            height,
            cells: rows.iter().flatten().copied().collect(),
        })
    }

    pub(crate) fn width(&self) -> usize {
        self.width
    }

    pub(crate) fn height(&self) -> usize {
        self.height
    }

    pub(crate) fn get(&self, x: usize, y: usize) -> Option<T> {
        (x < self.width && y < self.height).then(|| self.cells[y * self.width + x])
    }

    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid.
    pub(crate) fn set(&mut self, x: usize, y: usize, value: T) {
        assert!(x < self.width && y < self.height, "grid index out of range");
        self.cells[y * self.width + x] = value;
    }

    pub(crate) fn cells(&self) -> impl Iterator<Item = T> + '_ {
        self.cells.iter().copied()
    }

    pub(crate) fn to_rows(&self) -> Vec<Vec<T>> {
        self.cells
            .chunks(self.width.max(1))
            .map(<[T]>::to_vec)
            .collect()
    }
}
