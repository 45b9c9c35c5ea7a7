//! Table registry (桌台)

use shared::models::{DiningTable, TableStatus, TableSummary};
use shared::order::{EventPayload, StatusDisplay};
use shared::util::now_millis;

use super::OrderLedger;
use crate::orders::error::{LedgerError, LedgerResult, Resource, ValidationError};

/// Demo floor capacities, cycled by table number
const DEMO_CAPACITIES: [u32; 4] = [2, 4, 6, 8];

impl OrderLedger {
    fn qr_code_for(&self, number: u32) -> String {
        format!("{}?table={}", self.settings.menu_base_url, number)
    }

    /// Register a table. Numbers are unique and positive.
    pub fn add_table(&self, number: u32, capacity: u32, section: &str) -> LedgerResult<DiningTable> {
        if number == 0 {
            return Err(ValidationError::Invalid("Table number must be positive".to_string()).into());
        }
        if capacity == 0 {
            return Err(ValidationError::Invalid("Table capacity must be positive".to_string()).into());
        }

        let mut state = self.state.lock();
        if state.tables.values().any(|t| t.number == number) {
            return Err(ValidationError::Invalid(format!("Table {} already exists", number)).into());
        }

        let id = state.tables.keys().max().copied().unwrap_or(0) + 1;
        let table = DiningTable {
            id,
            number,
            capacity,
            status: TableStatus::Available,
            section: section.to_string(),
            current_order: None,
            qr_code: self.qr_code_for(number),
        };
        state.tables.insert(id, table.clone());
        tracing::info!(table_id = id, number, section = %section, "Table added");
        Ok(table)
    }

    /// Demo floor: tables 1-6 in the main hall, the rest on the veranda
    pub fn seed_tables(&self, count: u32) -> LedgerResult<()> {
        for number in 1..=count {
            let capacity = DEMO_CAPACITIES[(number as usize - 1) % DEMO_CAPACITIES.len()];
            let section = if number <= 6 { "Salão Principal" } else { "Varanda" };
            self.add_table(number, capacity, section)?;
        }
        Ok(())
    }

    /// All tables, sorted by number
    pub fn list_tables(&self) -> Vec<DiningTable> {
        let mut tables: Vec<DiningTable> = self.state.lock().tables.values().cloned().collect();
        tables.sort_by_key(|t| t.number);
        tables
    }

    pub fn get_table(&self, table_id: i64) -> LedgerResult<DiningTable> {
        self.state.lock().table(table_id).cloned()
    }

    /// Manual status change (host stand)
    ///
    /// Setting a table back to `available` clears its order reference.
    pub fn update_table_status(&self, table_id: i64, status: TableStatus) -> LedgerResult<DiningTable> {
        let now = now_millis();
        let mut state = self.state.lock();

        let table = state
            .tables
            .get_mut(&table_id)
            .ok_or_else(|| LedgerError::not_found(Resource::Table, table_id))?;
        let from = table.status;
        table.status = status;
        if status == TableStatus::Available {
            table.current_order = None;
        }
        let table = table.clone();

        if from != status {
            self.emit(
                &mut state,
                table.current_order.as_deref(),
                now,
                EventPayload::TableStatusChanged {
                    table_id,
                    table_number: table.number,
                    from,
                    to: status,
                },
            );
        }
        tracing::info!(
            table_id,
            number = table.number,
            from = from.as_str(),
            to = status.as_str(),
            "Table status changed"
        );
        Ok(table)
    }

    pub fn table_summary(&self) -> TableSummary {
        let state = self.state.lock();
        let mut summary = TableSummary::default();
        for table in state.tables.values() {
            summary.record(table.status);
        }
        summary
    }
}
