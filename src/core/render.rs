use crate::core::session::ViewerSession;
use crate::domain::model::{CostCenter, InventoryItem};

pub const HEADERS: [&str; 5] = ["Cost Center", "Inventory", "Equipment", "Area", "Code"];

pub const SELECT_PROMPT: &str = "Select a cost center to load its inventory.";
pub const NO_INVENTORY: &str = "No inventory loaded. Select a cost center.";
pub const NO_MATCH: &str = "No equipment matched the search term.";
pub const EMPTY_INDEX: &str = "The cost center index is empty; there is nothing to select.";

pub fn render_cost_centers(centers: &[CostCenter]) -> String {
    if centers.is_empty() {
        return EMPTY_INDEX.to_string();
    }

    let ids: Vec<String> = centers.iter().map(|cc| cc.to_string()).collect();
    format!(
        "Available cost centers ({}): {}",
        centers.len(),
        ids.join(", ")
    )
}

/// Text rendition of what the browser version put in the result table:
/// the filtered rows, or the message row for the empty states.
pub fn render_session(session: &ViewerSession) -> String {
    if session.loaded_len() == 0 {
        return NO_INVENTORY.to_string();
    }

    let visible = session.visible();
    if visible.is_empty() {
        return NO_MATCH.to_string();
    }

    render_table(&visible)
}

pub fn render_table(rows: &[&InventoryItem]) -> String {
    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in cells(row).iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(&HEADERS, &widths));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in rows {
        lines.push(format_row(&cells(row), &widths));
    }
    lines.join("\n")
}

fn cells(item: &InventoryItem) -> [&str; 5] {
    [
        &item.cost_center,
        &item.inventory,
        &item.equipment,
        &item.area,
        &item.inventory_code,
    ]
}

fn format_row(cells: &[&str], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(equipment: &str, code: &str) -> InventoryItem {
        InventoryItem {
            cost_center: "101".to_string(),
            inventory: "2024-01".to_string(),
            equipment: equipment.to_string(),
            area: "Oficina".to_string(),
            inventory_code: code.to_string(),
        }
    }

    #[test]
    fn test_render_cost_centers() {
        let centers = vec![CostCenter(101), CostCenter(205)];
        let out = render_cost_centers(&centers);
        assert_eq!(out, "Available cost centers (2): 101, 205");
    }

    #[test]
    fn test_render_empty_index() {
        assert_eq!(render_cost_centers(&[]), EMPTY_INDEX);
    }

    #[test]
    fn test_render_table_aligns_columns() {
        let a = item("Compressor de Ar", "INV-1");
        let b = item("Torno", "INV-22");
        let rows = vec![&a, &b];

        let out = render_table(&rows);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 4); // header, separator, two rows
        assert!(lines[0].starts_with("Cost Center"));
        assert!(lines[0].contains("Equipment"));
        assert!(lines[2].contains("Compressor de Ar"));
        assert!(lines[3].contains("INV-22"));

        // Equipment column is padded to the widest cell.
        let header_pos = lines[0].find("Area").unwrap();
        let row_pos = lines[2].find("Oficina").unwrap();
        assert_eq!(header_pos, row_pos);
    }

    #[test]
    fn test_render_session_states() {
        let mut session = ViewerSession::new();
        assert_eq!(render_session(&session), NO_INVENTORY);

        // A loaded but empty dataset reads the same as no dataset.
        session.load(CostCenter(101), vec![]);
        assert_eq!(render_session(&session), NO_INVENTORY);

        session.load(CostCenter(101), vec![item("Compressor", "INV-1")]);
        session.set_filter("empilhadeira");
        assert_eq!(render_session(&session), NO_MATCH);

        session.set_filter("compressor");
        assert!(render_session(&session).contains("Compressor"));
    }
}
