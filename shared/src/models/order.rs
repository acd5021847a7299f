//! Order Model

use serde::{Deserialize, Serialize};

/// Order fulfilment status. Free-form axis: any value may replace any
/// other, there is no enforced transition graph.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(format!("unknown order status: {other}")),
        }
    }
}

/// Payment status. Independent axis from [`OrderStatus`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Failed => "failed",
        }
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "failed" => Ok(Self::Failed),
            other => Err(format!("unknown payment status: {other}")),
        }
    }
}

/// Payment method
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Card,
    Upi,
    BankTransfer,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Card => "card",
            Self::Upi => "upi",
            Self::BankTransfer => "bank_transfer",
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash" => Ok(Self::Cash),
            "card" => Ok(Self::Card),
            "upi" => Ok(Self::Upi),
            "bank_transfer" => Ok(Self::BankTransfer),
            other => Err(format!("unknown payment method: {other}")),
        }
    }
}

/// Order line item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub quantity: i32,
    /// Unit price in currency unit
    pub price: f64,
}

/// Shipping address (all fields optional free text)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ShippingAddress {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    /// Human-readable identifier (`ORD` + 6 digits, or timestamp
    /// fallback). Assigned once at creation, never reassigned.
    pub order_number: String,
    /// Reference into the customer directory; existence is not
    /// validated here.
    pub customer_id: i64,
    pub items: Vec<LineItem>,
    /// Derived: always `sum(quantity * price)` over `items` as of the
    /// last item mutation.
    pub total_amount: f64,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub payment_method: Option<PaymentMethod>,
    pub shipping_address: Option<ShippingAddress>,
    pub notes: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub customer_id: i64,
    pub items: Vec<LineItem>,
    pub status: Option<OrderStatus>,
    pub payment_status: Option<PaymentStatus>,
    pub payment_method: Option<PaymentMethod>,
    pub shipping_address: Option<ShippingAddress>,
    pub notes: Option<String>,
    /// Accepted for wire compatibility, always ignored: the total is
    /// derived from `items`.
    pub total_amount: Option<f64>,
}

/// Update order payload. Absent fields keep their stored value.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OrderUpdate {
    pub customer_id: Option<i64>,
    pub items: Option<Vec<LineItem>>,
    pub status: Option<OrderStatus>,
    pub payment_status: Option<PaymentStatus>,
    pub payment_method: Option<PaymentMethod>,
    pub shipping_address: Option<ShippingAddress>,
    pub notes: Option<String>,
    /// Ignored: `order_number` is immutable.
    pub order_number: Option<String>,
    /// Ignored: the total is derived from `items`.
    pub total_amount: Option<f64>,
}

/// List filter for order queries
#[derive(Debug, Clone, Deserialize, Default)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    pub payment_status: Option<PaymentStatus>,
    pub customer_id: Option<i64>,
}
