//! Protected route table.

use std::fmt;

/// A view inside the protected area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`, the landing view (transactions).
    Home,
    /// `/transactions`
    Transactions,
    /// `/countries`
    Countries,
    /// `/currencies`
    Currencies,
    /// `/exchange-rates`
    ExchangeRates,
    /// `/fees`
    Fees,
    /// `/receiving-methods`
    ReceivingMethods,
    /// `/payment-methods`
    PaymentMethods,
    /// `/rates`
    Rates,
    /// `/users`
    Users,
    /// `/notifications`, reached from the badge.
    Notifications,
}

impl Route {
    /// Entries of the navigation bar, in display order.
    pub const NAVIGATION: [Self; 9] = [
        Self::Transactions,
        Self::Countries,
        Self::Currencies,
        Self::ExchangeRates,
        Self::Fees,
        Self::ReceivingMethods,
        Self::PaymentMethods,
        Self::Rates,
        Self::Users,
    ];

    /// Number of navigation entries shown directly; the rest sit under "More".
    pub const PRIMARY_COUNT: usize = 5;

    /// Match a path exactly. Unknown paths yield `None`.
    pub fn from_path(path: &str) -> Option<Self> {
        let route = match path {
            "/" => Self::Home,
            "/transactions" => Self::Transactions,
            "/countries" => Self::Countries,
            "/currencies" => Self::Currencies,
            "/exchange-rates" => Self::ExchangeRates,
            "/fees" => Self::Fees,
            "/receiving-methods" => Self::ReceivingMethods,
            "/payment-methods" => Self::PaymentMethods,
            "/rates" => Self::Rates,
            "/users" => Self::Users,
            "/notifications" => Self::Notifications,
            _ => return None,
        };
        Some(route)
    }

    /// Path of this route.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Transactions => "/transactions",
            Self::Countries => "/countries",
            Self::Currencies => "/currencies",
            Self::ExchangeRates => "/exchange-rates",
            Self::Fees => "/fees",
            Self::ReceivingMethods => "/receiving-methods",
            Self::PaymentMethods => "/payment-methods",
            Self::Rates => "/rates",
            Self::Users => "/users",
            Self::Notifications => "/notifications",
        }
    }

    /// Navigation label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home | Self::Transactions => "Transactions",
            Self::Countries => "Countries",
            Self::Currencies => "Currencies",
            Self::ExchangeRates => "Exchange rates",
            Self::Fees => "Fees",
            Self::ReceivingMethods => "Receiving",
            Self::PaymentMethods => "Payment",
            Self::Rates => "Rates",
            Self::Users => "Users",
            Self::Notifications => "Notifications",
        }
    }

    /// Whether the entry is shown directly in the navigation bar.
    pub fn is_primary(&self) -> bool {
        Self::NAVIGATION[..Self::PRIMARY_COUNT].contains(self)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_roundtrip() {
        for route in Route::NAVIGATION {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/"), Some(Route::Home));
        assert_eq!(Route::from_path("/notifications"), Some(Route::Notifications));
    }

    #[test]
    fn test_unknown_and_near_miss_paths() {
        assert_eq!(Route::from_path("/transactions/"), None);
        assert_eq!(Route::from_path("/Users"), None);
        assert_eq!(Route::from_path("/admin"), None);
    }

    #[test]
    fn test_primary_split() {
        assert!(Route::Fees.is_primary());
        assert!(!Route::ReceivingMethods.is_primary());
        assert!(!Route::Users.is_primary());
    }
}
