use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: Option<i64>,
    pub date: String,
    pub category: String,
    pub amount: Decimal,
    pub description: String,
}

impl Transaction {
    pub fn new(date: String, category: String, amount: Decimal, description: String) -> Self {
        Self {
            id: None,
            date,
            category,
            amount,
            description,
        }
    }
}
