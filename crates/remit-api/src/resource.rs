//! Generic resource contract shared by every CRUD screen.

use std::fmt;
use std::str::FromStr;

use reqwest::Method;
use serde_json::Value;

use remit_core::error::AppError;
use remit_entity::session::Session;

use crate::client::ApiClient;

/// HTTP verb a resource uses for edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMethod {
    /// Full replacement.
    Put,
    /// Partial update.
    Patch,
}

impl UpdateMethod {
    fn method(&self) -> Method {
        match self {
            Self::Put => Method::PUT,
            Self::Patch => Method::PATCH,
        }
    }
}

/// A business entity exposed by the back office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Money transfers.
    Transactions,
    /// Supported countries.
    Countries,
    /// Currencies.
    Currencies,
    /// Currency-pair exchange rates.
    ExchangeRates,
    /// USD-based conversion table.
    Rates,
    /// Transfer fees per corridor.
    Fees,
    /// Ways a sender can pay.
    PaymentMethods,
    /// Ways a recipient can be paid.
    ReceivingMethods,
    /// Back-office and customer accounts.
    Users,
}

impl ResourceKind {
    /// Every resource, in navigation order.
    pub const ALL: [Self; 9] = [
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

    /// Command-line name.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Transactions => "transactions",
            Self::Countries => "countries",
            Self::Currencies => "currencies",
            Self::ExchangeRates => "exchange-rates",
            Self::Rates => "rates",
            Self::Fees => "fees",
            Self::PaymentMethods => "payment-methods",
            Self::ReceivingMethods => "receiving-methods",
            Self::Users => "users",
        }
    }

    /// Path of the list endpoint.
    pub fn list_path(&self) -> &'static str {
        match self {
            Self::Transactions => "/transactions",
            Self::Countries => "/country",
            Self::Currencies => "/currency/currencies",
            Self::ExchangeRates => "/exchange-rates",
            Self::Rates => "/currency/rates",
            Self::Fees => "/fees",
            Self::PaymentMethods => "/payment-type",
            Self::ReceivingMethods => "/receiving-type",
            Self::Users => "/users",
        }
    }

    /// Path of the create endpoint, if the resource can be created.
    pub fn create_path(&self) -> Option<&'static str> {
        match self {
            Self::Transactions | Self::Users => None,
            Self::Countries => Some("/country"),
            Self::Currencies => Some("/currency/"),
            Self::ExchangeRates => Some("/exchange-rates"),
            Self::Rates => Some("/currency/rate"),
            Self::Fees => Some("/fees"),
            Self::PaymentMethods => Some("/payment-type/"),
            Self::ReceivingMethods => Some("/receiving-type/type"),
        }
    }

    /// Verb and path of the update endpoint, if the resource can be edited.
    pub fn update_endpoint(&self, id: &str) -> Option<(UpdateMethod, String)> {
        match self {
            Self::Transactions | Self::Currencies | Self::Rates => None,
            Self::Countries => Some((UpdateMethod::Patch, format!("/country/{id}"))),
            Self::ExchangeRates => Some((UpdateMethod::Patch, format!("/exchange-rates/{id}"))),
            Self::Fees => Some((UpdateMethod::Put, format!("/fees/{id}"))),
            Self::PaymentMethods => Some((UpdateMethod::Patch, format!("/payment-type/{id}"))),
            Self::ReceivingMethods => Some((
                UpdateMethod::Patch,
                format!("/receiving-type/update/{id}"),
            )),
            Self::Users => Some((UpdateMethod::Patch, format!("/users/{id}"))),
        }
    }

    /// Path of the delete endpoint, if the resource can be deleted.
    pub fn delete_path(&self, id: &str) -> Option<String> {
        match self {
            Self::Transactions | Self::Rates => None,
            Self::Countries => Some(format!("/country/{id}")),
            Self::Currencies => Some(format!("/currency/{id}")),
            Self::ExchangeRates => Some(format!("/exchange-rates/{id}")),
            Self::Fees => Some(format!("/fees/{id}")),
            Self::PaymentMethods => Some(format!("/payment-type/{id}")),
            Self::ReceivingMethods => Some(format!("/receiving-type/{id}")),
            Self::Users => Some(format!("/users/{id}")),
        }
    }

    /// Whether list reads carry the bearer token.
    ///
    /// The back office only protects the user list; the other list
    /// endpoints are read anonymously and the console keeps it that way.
    pub fn list_requires_auth(&self) -> bool {
        matches!(self, Self::Users)
    }

    fn unsupported(&self, operation: &str) -> AppError {
        AppError::validation(format!("'{}' does not support {operation}", self.slug()))
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for ResourceKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.slug() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|k| k.slug()).collect();
                AppError::validation(format!(
                    "Unknown resource '{s}'. Expected one of: {}",
                    known.join(", ")
                ))
            })
    }
}

impl ApiClient {
    /// Fetch the list of a resource.
    ///
    /// The session is only attached where the back office requires it.
    pub async fn list(
        &self,
        kind: ResourceKind,
        session: Option<&Session>,
    ) -> Result<Vec<Value>, AppError> {
        let session = if kind.list_requires_auth() {
            Some(session.ok_or_else(|| AppError::session("No active session"))?)
        } else {
            None
        };

        let body = self
            .execute(self.request(Method::GET, kind.list_path(), session))
            .await?;

        match body {
            Value::Array(items) => Ok(items),
            Value::Null => Ok(Vec::new()),
            other => Ok(vec![other]),
        }
    }

    /// Create a record.
    pub async fn create(
        &self,
        kind: ResourceKind,
        payload: &Value,
        session: &Session,
    ) -> Result<Value, AppError> {
        let path = kind.create_path().ok_or_else(|| kind.unsupported("create"))?;
        tracing::info!("Creating {} record", kind);

        self.execute(self.request(Method::POST, path, Some(session)).json(payload))
            .await
    }

    /// Update a record with the resource's own verb.
    pub async fn update(
        &self,
        kind: ResourceKind,
        id: &str,
        payload: &Value,
        session: &Session,
    ) -> Result<Value, AppError> {
        let (method, path) = kind
            .update_endpoint(id)
            .ok_or_else(|| kind.unsupported("update"))?;
        tracing::info!("Updating {} record {}", kind, id);

        self.execute(
            self.request(method.method(), &path, Some(session))
                .json(payload),
        )
        .await
    }

    /// Delete a record.
    pub async fn delete(
        &self,
        kind: ResourceKind,
        id: &str,
        session: &Session,
    ) -> Result<(), AppError> {
        let path = kind.delete_path(id).ok_or_else(|| kind.unsupported("delete"))?;
        tracing::info!("Deleting {} record {}", kind, id);

        self.execute(self.request(Method::DELETE, &path, Some(session)))
            .await?;
        Ok(())
    }
}
