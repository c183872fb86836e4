use ordex_core::OrderRecord;

use crate::source::LoadError;

/// Lifecycle of the order list shown to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PopupState {
    #[default]
    Idle,
    Loading,
    Ready(Vec<OrderRecord>),
    Error(String),
}

impl PopupState {
    /// Heading for the order list in this state.
    #[must_use]
    pub fn heading(&self) -> String {
        match self {
            PopupState::Loading => "Loading orders…".to_string(),
            PopupState::Ready(orders) => format!("Orders ({})", orders.len()),
            PopupState::Idle | PopupState::Error(_) => "Orders".to_string(),
        }
    }

    /// Orders currently loaded; empty unless ready.
    #[must_use]
    pub fn orders(&self) -> &[OrderRecord] {
        match self {
            PopupState::Ready(orders) => orders,
            _ => &[],
        }
    }

    /// Total line items across the loaded orders.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.orders().iter().map(OrderRecord::item_count).sum()
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, PopupState::Error(_))
    }
}

impl From<Result<Vec<OrderRecord>, LoadError>> for PopupState {
    fn from(result: Result<Vec<OrderRecord>, LoadError>) -> Self {
        match result {
            Ok(orders) => PopupState::Ready(orders),
            Err(err) => PopupState::Error(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_follow_state() {
        assert_eq!(PopupState::Idle.heading(), "Orders");
        assert_eq!(PopupState::Loading.heading(), "Loading orders…");
        assert_eq!(PopupState::Ready(vec![]).heading(), "Orders (0)");
        assert_eq!(
            PopupState::Ready(vec![OrderRecord::default(), OrderRecord::default()]).heading(),
            "Orders (2)"
        );
        assert_eq!(PopupState::Error("x".into()).heading(), "Orders");
    }

    #[test]
    fn failed_load_clears_orders() {
        let state = PopupState::from(Err(LoadError::NoResponse));
        assert!(state.is_error());
        assert!(state.orders().is_empty());
        assert_eq!(state, PopupState::Error("No response from content script.".into()));
    }
}
