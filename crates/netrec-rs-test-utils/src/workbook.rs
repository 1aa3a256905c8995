use rust_xlsxwriter::Workbook;

/// Build an in-memory xlsx whose first sheet holds `rows` as strings.
///
/// Empty strings leave the cell blank.
pub fn workbook_bytes(rows: &[&[&str]]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, cell) in row.iter().enumerate() {
            if cell.is_empty() {
                continue;
            }
            sheet
                .write_string(row_idx as u32, col_idx as u16, *cell)
                .expect("write cell");
        }
    }
    workbook.save_to_buffer().expect("serialize workbook")
}
