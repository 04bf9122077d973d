//! DGII classification code tables for Report 606.
//!
//! The code tables are regulatory constants. Names outside the tables fall
//! back to the `Other` variant, which reports the default code "01"; a
//! report row must never fail over an unrecognized name.

use serde::{Deserialize, Serialize};

/// Purchase document classification (NCF document type).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DocumentKind {
    /// Standard invoice with fiscal value.
    Invoice,
    /// Electronic consumption invoice.
    ElectronicConsumptionInvoice,
    /// Debit note.
    DebitNote,
    /// Credit note.
    CreditNote,
    /// Purchase voucher.
    PurchaseVoucher,
    /// Unique income record.
    UniqueIncomeRecord,
    /// Informal supplier record.
    InformalSupplierRecord,
    /// Minor expense record.
    MinorExpenseRecord,
    /// Foreign purchase voucher.
    ForeignPurchaseVoucher,
    /// Government voucher.
    GovernmentVoucher,
    /// Export voucher.
    ExportVoucher,
    /// Foreign payment voucher.
    ForeignPaymentVoucher,
    /// Any document name outside the DGII table.
    Other,
}

impl DocumentKind {
    /// Looks up a document type by its table name.
    ///
    /// Names not in the table map to [`DocumentKind::Other`]. Total function,
    /// no error case.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "Invoice" => Self::Invoice,
            "Electronic Consumption Invoice" => Self::ElectronicConsumptionInvoice,
            "Debit Note" => Self::DebitNote,
            "Credit Note" => Self::CreditNote,
            "Purchase Voucher" => Self::PurchaseVoucher,
            "Unique Income Record" => Self::UniqueIncomeRecord,
            "Informal Supplier Record" => Self::InformalSupplierRecord,
            "Minor Expense Record" => Self::MinorExpenseRecord,
            "Foreign Purchase Voucher" => Self::ForeignPurchaseVoucher,
            "Government Voucher" => Self::GovernmentVoucher,
            "Export Voucher" => Self::ExportVoucher,
            "Foreign Payment Voucher" => Self::ForeignPaymentVoucher,
            _ => Self::Other,
        }
    }

    /// Returns the table name for this document type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Invoice => "Invoice",
            Self::ElectronicConsumptionInvoice => "Electronic Consumption Invoice",
            Self::DebitNote => "Debit Note",
            Self::CreditNote => "Credit Note",
            Self::PurchaseVoucher => "Purchase Voucher",
            Self::UniqueIncomeRecord => "Unique Income Record",
            Self::InformalSupplierRecord => "Informal Supplier Record",
            Self::MinorExpenseRecord => "Minor Expense Record",
            Self::ForeignPurchaseVoucher => "Foreign Purchase Voucher",
            Self::GovernmentVoucher => "Government Voucher",
            Self::ExportVoucher => "Export Voucher",
            Self::ForeignPaymentVoucher => "Foreign Payment Voucher",
            Self::Other => "Other",
        }
    }

    /// Returns the two-digit DGII code for this document type.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Invoice => "01",
            Self::ElectronicConsumptionInvoice => "02",
            Self::DebitNote => "03",
            Self::CreditNote => "04",
            Self::PurchaseVoucher => "11",
            Self::UniqueIncomeRecord => "12",
            Self::InformalSupplierRecord => "13",
            Self::MinorExpenseRecord => "14",
            Self::ForeignPurchaseVoucher => "15",
            Self::GovernmentVoucher => "16",
            Self::ExportVoucher => "17",
            Self::ForeignPaymentVoucher => "18",
            Self::Other => "01",
        }
    }

    /// Returns every document type in the DGII table, excluding `Other`.
    #[must_use]
    pub const fn all() -> [Self; 12] {
        [
            Self::Invoice,
            Self::ElectronicConsumptionInvoice,
            Self::DebitNote,
            Self::CreditNote,
            Self::PurchaseVoucher,
            Self::UniqueIncomeRecord,
            Self::InformalSupplierRecord,
            Self::MinorExpenseRecord,
            Self::ForeignPurchaseVoucher,
            Self::GovernmentVoucher,
            Self::ExportVoucher,
            Self::ForeignPaymentVoucher,
        ]
    }
}

impl From<String> for DocumentKind {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<DocumentKind> for String {
    fn from(kind: DocumentKind) -> Self {
        kind.name().to_string()
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Payment method classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentMethod {
    /// Cash.
    Cash,
    /// Checks, transfers, or deposits.
    ChecksTransfersDeposit,
    /// Credit or debit card.
    CreditDebitCard,
    /// Purchase on credit.
    CreditPurchase,
    /// Exchange or barter.
    ExchangeBarter,
    /// Credit note.
    CreditNote,
    /// Mixed payment.
    Mixed,
    /// Any method name outside the DGII table.
    Other,
}

impl PaymentMethod {
    /// Looks up a payment method by its table name.
    ///
    /// Names not in the table map to [`PaymentMethod::Other`]. Total
    /// function, no error case.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "Cash" => Self::Cash,
            "Checks/Transfers/Deposit" => Self::ChecksTransfersDeposit,
            "Credit/Debit Card" => Self::CreditDebitCard,
            "Credit Purchase" => Self::CreditPurchase,
            "Exchange/Barter" => Self::ExchangeBarter,
            "Credit Note" => Self::CreditNote,
            "Mixed" => Self::Mixed,
            _ => Self::Other,
        }
    }

    /// Returns the table name for this payment method.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::ChecksTransfersDeposit => "Checks/Transfers/Deposit",
            Self::CreditDebitCard => "Credit/Debit Card",
            Self::CreditPurchase => "Credit Purchase",
            Self::ExchangeBarter => "Exchange/Barter",
            Self::CreditNote => "Credit Note",
            Self::Mixed => "Mixed",
            Self::Other => "Other",
        }
    }

    /// Returns the two-digit DGII code for this payment method.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Cash => "01",
            Self::ChecksTransfersDeposit => "02",
            Self::CreditDebitCard => "03",
            Self::CreditPurchase => "04",
            Self::ExchangeBarter => "05",
            Self::CreditNote => "06",
            Self::Mixed => "07",
            Self::Other => "01",
        }
    }

    /// Returns every payment method in the DGII table, excluding `Other`.
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::Cash,
            Self::ChecksTransfersDeposit,
            Self::CreditDebitCard,
            Self::CreditPurchase,
            Self::ExchangeBarter,
            Self::CreditNote,
            Self::Mixed,
        ]
    }
}

impl From<String> for PaymentMethod {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<PaymentMethod> for String {
    fn from(method: PaymentMethod) -> Self {
        method.name().to_string()
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
