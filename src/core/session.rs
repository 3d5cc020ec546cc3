use crate::domain::model::{CostCenter, InventoryItem};

/// In-memory state for the current run: the selected cost center, its loaded
/// rows, and the active equipment search term. The dataset is replaced
/// wholesale on every selection and dropped on exit; nothing is cached
/// across runs.
#[derive(Debug, Default)]
pub struct ViewerSession {
    selection: Option<CostCenter>,
    items: Vec<InventoryItem>,
    filter: String,
}

impl ViewerSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> Option<CostCenter> {
        self.selection
    }

    pub fn is_loaded(&self) -> bool {
        self.selection.is_some()
    }

    pub fn loaded_len(&self) -> usize {
        self.items.len()
    }

    /// Replace the previous dataset wholesale. The search term survives
    /// reselection, matching how the search box keeps its value while the
    /// user switches cost centers.
    pub fn load(&mut self, cost_center: CostCenter, items: Vec<InventoryItem>) {
        self.selection = Some(cost_center);
        self.items = items;
    }

    /// Drop the selection and rows, used after a failed fetch.
    pub fn clear(&mut self) {
        self.selection = None;
        self.items.clear();
    }

    pub fn set_filter(&mut self, term: &str) {
        self.filter = term.trim().to_lowercase();
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Rows matching the active filter, in load order. Linear scan; the
    /// empty term matches every row.
    pub fn visible(&self) -> Vec<&InventoryItem> {
        self.items
            .iter()
            .filter(|item| item.matches_equipment(&self.filter))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(equipment: &str) -> InventoryItem {
        InventoryItem {
            cost_center: "101".to_string(),
            inventory: "2024-01".to_string(),
            equipment: equipment.to_string(),
            area: "Oficina".to_string(),
            inventory_code: "INV-1".to_string(),
        }
    }

    #[test]
    fn test_load_replaces_dataset_wholesale() {
        let mut session = ViewerSession::new();
        session.load(CostCenter(101), vec![item("Compressor"), item("Torno")]);
        assert_eq!(session.loaded_len(), 2);

        session.load(CostCenter(205), vec![item("Furadeira")]);
        assert_eq!(session.selection(), Some(CostCenter(205)));
        assert_eq!(session.loaded_len(), 1);
        assert_eq!(session.visible()[0].equipment, "Furadeira");
    }

    #[test]
    fn test_clear_drops_selection_and_rows() {
        let mut session = ViewerSession::new();
        session.load(CostCenter(101), vec![item("Compressor")]);
        session.clear();

        assert!(!session.is_loaded());
        assert_eq!(session.loaded_len(), 0);
        assert!(session.visible().is_empty());
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let mut session = ViewerSession::new();
        session.load(
            CostCenter(101),
            vec![item("Compressor de Ar"), item("Torno CNC"), item("Furadeira")],
        );

        session.set_filter("TORNO");
        let visible = session.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].equipment, "Torno CNC");
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let mut session = ViewerSession::new();
        session.load(CostCenter(101), vec![item("Compressor"), item("Torno")]);

        session.set_filter("");
        assert_eq!(session.visible().len(), 2);
    }

    #[test]
    fn test_filter_survives_reselection() {
        let mut session = ViewerSession::new();
        session.set_filter("torno");
        session.load(CostCenter(101), vec![item("Compressor"), item("Torno")]);
        assert_eq!(session.visible().len(), 1);

        session.load(CostCenter(205), vec![item("Torno Mecânico"), item("Prensa")]);
        let visible = session.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].equipment, "Torno Mecânico");
    }

    #[test]
    fn test_filter_matching_nothing() {
        let mut session = ViewerSession::new();
        session.load(CostCenter(101), vec![item("Compressor")]);

        session.set_filter("empilhadeira");
        assert!(session.visible().is_empty());
        assert_eq!(session.loaded_len(), 1);
    }
}
