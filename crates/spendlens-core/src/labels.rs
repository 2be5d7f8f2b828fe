//! Display labels for raw category names
//!
//! Raw labels are matched exactly against a closed set of known categories.
//! Each data shape has its own decoration table; anything not in the table is
//! returned unchanged so no row is ever dropped or renamed by accident.

use std::borrow::Cow;

use crate::models::DataShape;

/// Every raw category label either table knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownLabel {
    TopUps,
    TransfersIncoming,
    TransfersOutgoing,
    Transfers,
    TransfersAndTopUps,
    Fees,
    Other,
    Transport,
    TaxiYandexGo,
    Groceries,
    Education,
    Medicine,
    OnlineShopping,
    Rent,
    Shopping,
    Utilities,
    Entertainment,
    CashWithdrawal,
    Unspecified,
    Services,
    Clothing,
    // Old English labels from the first parser version
    LegacyTransferDeposit,
    LegacyPurchase,
    LegacyUtilities,
    LegacyCash,
}

impl KnownLabel {
    pub const ALL: [KnownLabel; 25] = [
        KnownLabel::TopUps,
        KnownLabel::TransfersIncoming,
        KnownLabel::TransfersOutgoing,
        KnownLabel::Transfers,
        KnownLabel::TransfersAndTopUps,
        KnownLabel::Fees,
        KnownLabel::Other,
        KnownLabel::Transport,
        KnownLabel::TaxiYandexGo,
        KnownLabel::Groceries,
        KnownLabel::Education,
        KnownLabel::Medicine,
        KnownLabel::OnlineShopping,
        KnownLabel::Rent,
        KnownLabel::Shopping,
        KnownLabel::Utilities,
        KnownLabel::Entertainment,
        KnownLabel::CashWithdrawal,
        KnownLabel::Unspecified,
        KnownLabel::Services,
        KnownLabel::Clothing,
        KnownLabel::LegacyTransferDeposit,
        KnownLabel::LegacyPurchase,
        KnownLabel::LegacyUtilities,
        KnownLabel::LegacyCash,
    ];

    /// The raw label as it appears in `category_stats`
    pub fn raw(&self) -> &'static str {
        match self {
            Self::TopUps => "Пополнения",
            Self::TransfersIncoming => "Переводы (входящие)",
            Self::TransfersOutgoing => "Переводы (исходящие)",
            Self::Transfers => "Переводы",
            Self::TransfersAndTopUps => "Переводы/Пополнения",
            Self::Fees => "Комиссии",
            Self::Other => "Прочее",
            Self::Transport => "Транспорт",
            Self::TaxiYandexGo => "Такси (YANDEX.GO)",
            Self::Groceries => "Продукты",
            Self::Education => "Образование",
            Self::Medicine => "Медицина",
            Self::OnlineShopping => "Покупки онлайн",
            Self::Rent => "Аренда",
            Self::Shopping => "Покупки",
            Self::Utilities => "Коммунальные услуги",
            Self::Entertainment => "Развлечения",
            Self::CashWithdrawal => "Банкомат/Снятие",
            Self::Unspecified => "Не указано",
            Self::Services => "Услуги",
            Self::Clothing => "Одежда",
            Self::LegacyTransferDeposit => "transfer/deposit",
            Self::LegacyPurchase => "purchase",
            Self::LegacyUtilities => "utilities",
            Self::LegacyCash => "cash",
        }
    }

    /// Exact, case-sensitive lookup
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|label| label.raw() == raw)
    }

    /// Decorated label for the legacy seed table
    pub fn seed_display(&self) -> Option<&'static str> {
        let display = match self {
            Self::TopUps => "💰 Пополнения",
            Self::TransfersIncoming => "💸 Переводы входящие",
            Self::TransfersOutgoing => "💸 Переводы исходящие",
            Self::Fees => "💳 Комиссии",
            Self::Other => "📋 Прочее",
            Self::Transport => "🚗 Транспорт",
            Self::Groceries => "🛒 Продукты",
            Self::Education => "🎓 Образование",
            Self::Medicine => "💊 Медицина",
            Self::OnlineShopping => "🛍️ Покупки онлайн",
            Self::Rent => "🏠 Аренда",
            Self::Shopping => "🛒 Покупки",
            Self::Utilities => "💡 Коммунальные услуги",
            Self::Entertainment => "🎉 Развлечения",
            Self::CashWithdrawal => "🏧 Банкомат",
            Self::Unspecified => "❓ Не указано",
            Self::Services => "⚙️ Услуги",
            Self::Clothing => "👔 Одежда",
            Self::TransfersAndTopUps | Self::Transfers | Self::LegacyTransferDeposit => "Переводы",
            Self::LegacyPurchase => "Покупки",
            Self::LegacyUtilities => "Коммунальные услуги",
            Self::LegacyCash => "Банкомат",
            Self::TaxiYandexGo => return None,
        };
        Some(display)
    }

    /// Decorated label for the upload-parser table
    pub fn new_upload_display(&self) -> Option<&'static str> {
        match self {
            Self::TopUps => Some("💵 Пополнения"),
            Self::Transfers => Some("💸 Переводы"),
            Self::TaxiYandexGo => Some("🚖 Такси (YANDEX.GO)"),
            Self::Groceries => Some("🛒 Продукты"),
            _ => None,
        }
    }

    pub fn display(&self, shape: DataShape) -> Option<&'static str> {
        match shape {
            DataShape::Seed => self.seed_display(),
            DataShape::NewUpload => self.new_upload_display(),
        }
    }
}

/// Decorated display name for a raw category label
///
/// Unknown labels come back unchanged.
pub fn display_name(category: &str, shape: DataShape) -> Cow<'_, str> {
    match KnownLabel::parse(category).and_then(|label| label.display(shape)) {
        Some(display) => Cow::Borrowed(display),
        None => Cow::Borrowed(category),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_labels_are_unique() {
        for (i, a) in KnownLabel::ALL.iter().enumerate() {
            for b in &KnownLabel::ALL[i + 1..] {
                assert_ne!(a.raw(), b.raw(), "{:?} and {:?} share a raw label", a, b);
            }
            assert_eq!(KnownLabel::parse(a.raw()), Some(*a));
        }
    }

    #[test]
    fn test_seed_table() {
        assert_eq!(display_name("Пополнения", DataShape::Seed), "💰 Пополнения");
        assert_eq!(display_name("Банкомат/Снятие", DataShape::Seed), "🏧 Банкомат");
        assert_eq!(display_name("purchase", DataShape::Seed), "Покупки");
        assert_eq!(display_name("Переводы/Пополнения", DataShape::Seed), "Переводы");
    }

    #[test]
    fn test_new_upload_table() {
        assert_eq!(display_name("Пополнения", DataShape::NewUpload), "💵 Пополнения");
        assert_eq!(
            display_name("Такси (YANDEX.GO)", DataShape::NewUpload),
            "🚖 Такси (YANDEX.GO)"
        );
        // Seed-only labels are not decorated in the upload table
        assert_eq!(display_name("Комиссии", DataShape::NewUpload), "Комиссии");
    }

    #[test]
    fn test_unknown_label_identity() {
        assert_eq!(display_name("Кафе", DataShape::Seed), "Кафе");
        assert_eq!(display_name("", DataShape::NewUpload), "");
        // Lookup is exact, not case-folded
        assert_eq!(display_name("пополнения", DataShape::Seed), "пополнения");
        assert_eq!(display_name("Такси (YANDEX.GO)", DataShape::Seed), "Такси (YANDEX.GO)");
    }
}
