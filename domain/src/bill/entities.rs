//! Bill entities and their enumerations

use crate::core::error::DomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Expense categories an employee can file a bill under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseType {
    #[serde(rename = "Transports")]
    Transports,
    #[serde(rename = "Restaurants et bars")]
    RestaurantsEtBars,
    #[serde(rename = "Hôtel et logement")]
    HotelEtLogement,
    #[serde(rename = "Services en ligne")]
    ServicesEnLigne,
    #[serde(rename = "IT et électronique")]
    ItEtElectronique,
    #[serde(rename = "Equipement et matériel")]
    EquipementEtMateriel,
    #[serde(rename = "Fournitures de bureau")]
    FournituresDeBureau,
}

impl ExpenseType {
    pub const ALL: [ExpenseType; 7] = [
        ExpenseType::Transports,
        ExpenseType::RestaurantsEtBars,
        ExpenseType::HotelEtLogement,
        ExpenseType::ServicesEnLigne,
        ExpenseType::ItEtElectronique,
        ExpenseType::EquipementEtMateriel,
        ExpenseType::FournituresDeBureau,
    ];

    /// Label shown in the expense-type select and sent on the wire
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseType::Transports => "Transports",
            ExpenseType::RestaurantsEtBars => "Restaurants et bars",
            ExpenseType::HotelEtLogement => "Hôtel et logement",
            ExpenseType::ServicesEnLigne => "Services en ligne",
            ExpenseType::ItEtElectronique => "IT et électronique",
            ExpenseType::EquipementEtMateriel => "Equipement et matériel",
            ExpenseType::FournituresDeBureau => "Fournitures de bureau",
        }
    }
}

impl std::fmt::Display for ExpenseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for ExpenseType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ExpenseType::ALL
            .into_iter()
            .find(|t| t.label().to_lowercase() == wanted)
            .ok_or_else(|| DomainError::UnknownExpenseType(s.to_string()))
    }
}

/// Review status of a bill
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    #[default]
    Pending,
    Accepted,
    Refused,
}

impl BillStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillStatus::Pending => "pending",
            BillStatus::Accepted => "accepted",
            BillStatus::Refused => "refused",
        }
    }
}

impl std::fmt::Display for BillStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BillStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(BillStatus::Pending),
            "accepted" => Ok(BillStatus::Accepted),
            "refused" => Ok(BillStatus::Refused),
            _ => Err(DomainError::UnknownBillStatus(s.to_string())),
        }
    }
}

/// A single expense-report record (Entity)
///
/// Built from form input at submission time through
/// [`BillForm::assemble`](super::form::BillForm::assemble) and immutable
/// afterwards: fields are only readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    email: String,
    #[serde(rename = "type")]
    expense_type: ExpenseType,
    name: String,
    amount: i64,
    date: NaiveDate,
    vat: String,
    pct: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    commentary: Option<String>,
    file_url: Option<String>,
    file_name: Option<String>,
    status: BillStatus,
}

impl Bill {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn pending(
        email: String,
        expense_type: ExpenseType,
        name: String,
        amount: i64,
        date: NaiveDate,
        vat: String,
        pct: i64,
        commentary: Option<String>,
        file_url: Option<String>,
        file_name: Option<String>,
    ) -> Self {
        Self {
            email,
            expense_type,
            name,
            amount,
            date,
            vat,
            pct,
            commentary,
            file_url,
            file_name,
            status: BillStatus::Pending,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn expense_type(&self) -> ExpenseType {
        self.expense_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn vat(&self) -> &str {
        &self.vat
    }

    pub fn pct(&self) -> i64 {
        self.pct
    }

    pub fn commentary(&self) -> Option<&str> {
        self.commentary.as_deref()
    }

    pub fn file_url(&self) -> Option<&str> {
        self.file_url.as_deref()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn status(&self) -> BillStatus {
        self.status
    }

    /// JSON body sent to the bill store on update
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
