/// Column-aligned table output for list commands. Widths are computed from
/// the widest cell so ids and names of any length line up.
pub(crate) fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = headers.iter().map(|header| header.len()).collect();
    for row in rows {
        for (index, value) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(index) {
                *width = (*width).max(value.len());
            }
        }
    }

    let header_line = headers
        .iter()
        .zip(widths.iter().copied())
        .map(|(header, width)| format!("{header:<width$}"))
        .collect::<Vec<String>>()
        .join("  ");
    println!("{}", header_line.trim_end());
    for row in rows {
        let line = row
            .iter()
            .zip(widths.iter().copied())
            .map(|(value, width)| format!("{value:<width$}"))
            .collect::<Vec<String>>()
            .join("  ");
        println!("{}", line.trim_end());
    }
}

pub(crate) fn cell(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

pub(crate) fn money_cell(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |amount| format!("{amount:.2}"))
}

pub(crate) fn number_cell<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |number| number.to_string())
}
