//! Billing transaction model.

use shared::time::UNSET;

use super::FeeType;

/// Settlement state of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Unpaid,
    Paid,
    Overdue,
}

impl PaymentStatus {
    pub fn code(&self) -> i16 {
        match self {
            PaymentStatus::Unpaid => 0,
            PaymentStatus::Paid => 1,
            PaymentStatus::Overdue => 2,
        }
    }

    pub fn from_code(code: i16) -> Option<Self> {
        match code {
            0 => Some(PaymentStatus::Unpaid),
            1 => Some(PaymentStatus::Paid),
            2 => Some(PaymentStatus::Overdue),
            _ => None,
        }
    }
}

/// How a paid transaction was settled. `Cash` doubles as the placeholder on
/// unsettled rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Cash,
    Wechat,
    Alipay,
    BankTransfer,
}

impl PaymentMethod {
    pub fn code(&self) -> i16 {
        match self {
            PaymentMethod::Cash => 0,
            PaymentMethod::Wechat => 1,
            PaymentMethod::Alipay => 2,
            PaymentMethod::BankTransfer => 3,
        }
    }

    pub fn from_code(code: i16) -> Option<Self> {
        match code {
            0 => Some(PaymentMethod::Cash),
            1 => Some(PaymentMethod::Wechat),
            2 => Some(PaymentMethod::Alipay),
            3 => Some(PaymentMethod::BankTransfer),
            _ => None,
        }
    }
}

/// One month's bill for one owned asset. Exactly one of `room_id` and
/// `parking_id` is set; `user_id` is the owner of that asset.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub transaction_id: String,
    pub user_id: String,
    pub room_id: Option<String>,
    pub parking_id: Option<String>,
    pub fee_type: FeeType,
    /// Two decimal places.
    pub amount: f64,
    /// Epoch seconds; 0 while unsettled.
    pub payment_date: i64,
    /// Epoch seconds; always the period end.
    pub due_date: i64,
    pub payment_method: PaymentMethod,
    pub status: PaymentStatus,
    pub period_start: i64,
    pub period_end: i64,
}

impl Transaction {
    pub fn is_paid(&self) -> bool {
        self.payment_date != UNSET
    }
}
