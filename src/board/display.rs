use super::Board;

impl Board {
    /// Human-readable grid with rank 8 at the top.
    ///
    /// Cells are FEN letters, `.` when empty, separated by single spaces. The
    /// grid ends with a blank line.
    #[must_use]
    pub fn display(&self) -> String {
        let mut out = String::new();
        for row in self.cells.iter().rev() {
            let line: Vec<String> = row
                .iter()
                .map(|cell| cell.map_or('.', |p| p.to_fen_char()).to_string())
                .collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
        out.push('\n');
        out
    }
}
