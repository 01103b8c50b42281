//! Translation of caller lookups into the vendor's request structure.

use serde::{Deserialize, Serialize};

use crate::{BlpError, HistoricalDefaults, Value};

/// Operation a request is sent as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestKind {
    /// Point and bulk reference lookups.
    ReferenceData,
    /// Historical time-series lookups.
    HistoricalData,
}

impl RequestKind {
    /// Name of the request operation on the service.
    #[must_use]
    pub const fn request_name(self) -> &'static str {
        match self {
            Self::ReferenceData => "ReferenceDataRequest",
            Self::HistoricalData => "HistoricalDataRequest",
        }
    }

    /// Declared type of the response messages to retain.
    #[must_use]
    pub const fn response_name(self) -> &'static str {
        match self {
            Self::ReferenceData => "ReferenceDataResponse",
            Self::HistoricalData => "HistoricalDataResponse",
        }
    }
}

/// Conversion of one-or-many identifiers into an owned list.
///
/// A single identifier is treated exactly like a one-element sequence.
pub trait IntoIdentifiers {
    /// Consume `self` and return the identifiers in order.
    fn into_identifiers(self) -> Vec<String>;
}

impl IntoIdentifiers for &str {
    fn into_identifiers(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoIdentifiers for String {
    fn into_identifiers(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoIdentifiers for &String {
    fn into_identifiers(self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl<S: AsRef<str>> IntoIdentifiers for &[S] {
    fn into_identifiers(self) -> Vec<String> {
        self.iter().map(|s| s.as_ref().to_string()).collect()
    }
}

impl<S: AsRef<str>, const N: usize> IntoIdentifiers for [S; N] {
    fn into_identifiers(self) -> Vec<String> {
        self.iter().map(|s| s.as_ref().to_string()).collect()
    }
}

impl<S: AsRef<str>> IntoIdentifiers for Vec<S> {
    fn into_identifiers(self) -> Vec<String> {
        self.iter().map(|s| s.as_ref().to_string()).collect()
    }
}

/// Ordered named options attached to a lookup.
///
/// Setting a name that already exists replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Options(Vec<(String, Value)>);

impl Options {
    /// Empty option set.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Insert or replace an option.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name, value)),
        }
    }

    /// Look up an option by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    /// Iterate options in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no options are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Options {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut out = Self::new();
        for (k, v) in iter {
            out.set(k, v);
        }
        out
    }
}

/// Field override sent with reference requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Override {
    /// Field being overridden.
    #[serde(rename = "fieldId")]
    pub field_id: String,
    /// Override value.
    pub value: Value,
}

/// A fully-encoded request, ready for [`Transport::send_request`](crate::Transport::send_request).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    kind: RequestKind,
    securities: Vec<String>,
    fields: Vec<String>,
    overrides: Vec<Override>,
    parameters: Options,
}

impl Request {
    /// Encode a reference (point or bulk) request.
    ///
    /// Options become field overrides in caller order.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no security or no field was given.
    pub fn reference(
        securities: impl IntoIdentifiers,
        fields: impl IntoIdentifiers,
        options: &Options,
    ) -> Result<Self, BlpError> {
        let (securities, fields) = Self::validate(securities, fields)?;
        let overrides = options
            .iter()
            .map(|(k, v)| Override {
                field_id: k.to_string(),
                value: v.clone(),
            })
            .collect();
        Ok(Self {
            kind: RequestKind::ReferenceData,
            securities,
            fields,
            overrides,
            parameters: Options::new(),
        })
    }

    /// Encode a historical request.
    ///
    /// Parameters are `startDate`, `endDate`, then `defaults`, then caller
    /// `options`, each later source replacing earlier values of the same name.
    /// Date-typed values are rendered `YYYYMMDD`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no security or no field was given.
    pub fn historical(
        securities: impl IntoIdentifiers,
        fields: impl IntoIdentifiers,
        start: impl Into<Value>,
        end: impl Into<Value>,
        options: &Options,
        defaults: &HistoricalDefaults,
    ) -> Result<Self, BlpError> {
        let (securities, fields) = Self::validate(securities, fields)?;
        let mut parameters = Options::new()
            .with("startDate", start)
            .with("endDate", end);
        for (k, v) in defaults.to_parameters() {
            parameters.set(k, v);
        }
        for (k, v) in options.iter() {
            parameters.set(k, v.clone());
        }
        let parameters = parameters
            .iter()
            .map(|(k, v)| (k, v.as_request_date()))
            .collect();
        Ok(Self {
            kind: RequestKind::HistoricalData,
            securities,
            fields,
            overrides: Vec::new(),
            parameters,
        })
    }

    fn validate(
        securities: impl IntoIdentifiers,
        fields: impl IntoIdentifiers,
    ) -> Result<(Vec<String>, Vec<String>), BlpError> {
        let securities = securities.into_identifiers();
        let fields = fields.into_identifiers();
        if securities.is_empty() {
            return Err(BlpError::InvalidArg("no securities requested".into()));
        }
        if fields.is_empty() {
            return Err(BlpError::InvalidArg("no fields requested".into()));
        }
        Ok((securities, fields))
    }

    /// Operation this request is sent as.
    #[must_use]
    pub const fn kind(&self) -> RequestKind {
        self.kind
    }

    /// Requested securities, in order.
    #[must_use]
    pub fn securities(&self) -> &[String] {
        &self.securities
    }

    /// Requested fields, in order.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Field overrides (reference requests only).
    #[must_use]
    pub fn overrides(&self) -> &[Override] {
        &self.overrides
    }

    /// Top-level request parameters (historical requests only).
    #[must_use]
    pub const fn parameters(&self) -> &Options {
        &self.parameters
    }

    /// Look up one top-level parameter.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&Value> {
        self.parameters.get(name)
    }
}
