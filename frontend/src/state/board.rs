use leptos::*;

/// One employee pinned to the selection board, with how many times the same
/// card was pinned.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardItem {
    pub employee_id: i64,
    pub full_name: String,
    pub photo_url: Option<String>,
    pub quantity: u32,
}

/// Session-local multi-select list of employees. Pinning an employee that is
/// already on the board bumps its count instead of adding a duplicate row;
/// dropping a count to zero removes the row. Nothing here is persisted or
/// sent to a backend.
#[derive(Clone, Copy)]
pub struct BoardStore {
    items: RwSignal<Vec<BoardItem>>,
}

impl BoardStore {
    pub fn new() -> Self {
        Self {
            items: create_rw_signal(Vec::new()),
        }
    }

    pub fn items(&self) -> Signal<Vec<BoardItem>> {
        self.items.into()
    }

    pub fn add(&self, employee_id: i64, full_name: &str, photo_url: Option<String>) {
        self.items.update(|items| {
            if let Some(existing) = items.iter_mut().find(|i| i.employee_id == employee_id) {
                existing.quantity += 1;
                return;
            }
            items.push(BoardItem {
                employee_id,
                full_name: full_name.to_string(),
                photo_url,
                quantity: 1,
            });
        });
    }

    pub fn remove(&self, employee_id: i64) {
        self.items
            .update(|items| items.retain(|i| i.employee_id != employee_id));
    }

    pub fn set_quantity(&self, employee_id: i64, quantity: i64) {
        self.items.update(|items| {
            if quantity <= 0 {
                items.retain(|i| i.employee_id != employee_id);
                return;
            }
            if let Some(existing) = items.iter_mut().find(|i| i.employee_id == employee_id) {
                existing.quantity = quantity as u32;
            }
        });
    }

    pub fn increment(&self, employee_id: i64) {
        let current = self.quantity_of(employee_id);
        self.set_quantity(employee_id, current as i64 + 1);
    }

    pub fn decrement(&self, employee_id: i64) {
        let current = self.quantity_of(employee_id);
        self.set_quantity(employee_id, current as i64 - 1);
    }

    pub fn clear(&self) {
        self.items.update(|items| items.clear());
    }

    pub fn total_count(&self) -> u32 {
        self.items
            .with(|items| items.iter().map(|i| i.quantity).sum())
    }

    fn quantity_of(&self, employee_id: i64) -> u32 {
        self.items.with(|items| {
            items
                .iter()
                .find(|i| i.employee_id == employee_id)
                .map(|i| i.quantity)
                .unwrap_or(0)
        })
    }
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_board() {
    provide_context(BoardStore::new());
}

pub fn use_board() -> BoardStore {
    use_context::<BoardStore>().unwrap_or_else(BoardStore::new)
}
