use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub quantity: u32,
    pub name: String,
}

impl Item {
    pub fn new(quantity: u32, name: impl Into<String>) -> Self {
        Self {
            quantity,
            name: name.into(),
        }
    }
}

/// 合併到貨清單：同名品項數量相加，新品項加入，最後依名稱排序
pub fn update_inventory(current: &[Item], delivery: &[Item]) -> Vec<Item> {
    let mut merged: Vec<Item> = current.to_vec();

    for incoming in delivery {
        match merged.iter_mut().find(|item| item.name == incoming.name) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(incoming.quantity);
            }
            None => merged.push(incoming.clone()),
        }
    }

    merged.sort_by(|a, b| a.name.cmp(&b.name));
    merged
}
