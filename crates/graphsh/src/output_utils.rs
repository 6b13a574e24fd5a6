pub(crate) const RED_X: &str = "\u{274C}";

/// Lay out `header` and `rows` as left-aligned columns separated by a single
/// space. Every column but the last is padded to its widest cell.
pub(crate) fn format_table<const N: usize>(
    header: [&str; N],
    rows: impl IntoIterator<Item = [String; N]>,
) -> String {
    let rows: Vec<[String; N]> =
        std::iter::once(header.map(str::to_string))
            .chain(rows)
            .collect();

    let mut widths = [0usize; N];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    rows.iter()
        .map(|row| {
            let mut line = String::new();
            for (idx, cell) in row.iter().enumerate() {
                if idx + 1 == N {
                    line.push_str(cell);
                } else {
                    let padding = widths[idx] - cell.chars().count() + 1;
                    line.push_str(cell);
                    line.extend(std::iter::repeat_n(' ', padding));
                }
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}
