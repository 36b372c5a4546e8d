//! Display names for items, currencies and fishing spots.

/// Oracle resolving ids to human-readable names and currency items.
///
/// Names only feed status text and presentation; a missing name is never an
/// error, callers fall back to the numeric id.
pub trait ItemOracle: Send + Sync {
    fn item_name(&self, item_id: u32) -> Option<String>;

    /// Inventory item that stores a reward currency.
    fn currency_item(&self, currency: u32) -> Option<u32>;

    /// Place name of a fishing or spearfishing spot.
    fn spot_name(&self, spot_id: u32, spearfish: bool) -> Option<String>;

    /// Item name or `#<id>` when unknown.
    fn item_label(&self, item_id: u32) -> String {
        self.item_name(item_id)
            .unwrap_or_else(|| format!("#{item_id}"))
    }

    /// Name of the inventory item backing a currency, or `currency <id>`.
    fn currency_label(&self, currency: u32) -> String {
        self.currency_item(currency)
            .and_then(|item| self.item_name(item))
            .unwrap_or_else(|| format!("currency {currency}"))
    }
}
