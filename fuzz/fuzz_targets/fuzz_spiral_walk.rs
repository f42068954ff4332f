//! Fuzz target: spiral traversal over byte-derived matrices.
//!
//! The first two bytes pick the dimensions (possibly ragged via the third);
//! the rest fill the cells. A valid matrix must yield every cell exactly once.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let [rows, columns, ragged, cells @ ..] = data else {
        return;
    };
    let rows = usize::from(rows % 32);
    let columns = usize::from(columns % 32);

    let mut values = cells.iter().map(|&b| i32::from(b as i8));
    let mut matrix: Vec<Vec<i32>> = (0..rows)
        .map(|_| (0..columns).map(|_| values.next().unwrap_or(0)).collect())
        .collect();
    if ragged % 7 == 0 {
        if let Some(last) = matrix.last_mut() {
            last.pop();
        }
    }

    if let Ok(mut out) = walker_core::walk(Some(matrix.clone())) {
        let mut cells: Vec<i32> = matrix.into_iter().flatten().collect();
        assert_eq!(out.len(), cells.len(), "every cell must be emitted");
        out.sort_unstable();
        cells.sort_unstable();
        assert_eq!(out, cells, "output must permute the input cells");
    }
});
