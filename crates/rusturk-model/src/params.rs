//! Flattened request parameters.
//!
//! Every request is a flat `name -> value` mapping. Lists are spelled out with
//! 1-based indexed names: the first element of a requirement list becomes
//! `QualificationRequirement.1.QualificationTypeId`, the second
//! `QualificationRequirement.2.QualificationTypeId`, and so on.

use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::operations::MTurkOperation;
use crate::types::{Money, Paging, QualificationRequirement};

/// A flat, ordered set of request parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    inner: BTreeMap<String, String>,
}

impl Parameters {
    /// Create an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, replacing any earlier value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) -> &mut Self {
        self.inner.insert(key.into(), value.to_string());
        self
    }

    /// Set `key` only when `value` is present.
    pub fn insert_opt<V: ToString>(&mut self, key: impl Into<String>, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.insert(key, value);
        }
        self
    }

    /// Set an indexed list field.
    ///
    /// `position` is the 0-based position in the caller's list; the wire index
    /// is `position + 1`. With a `field` the key is `Prefix.N.Field`, without
    /// it the key is `Prefix.N`.
    pub fn insert_indexed(
        &mut self,
        prefix: &str,
        position: usize,
        field: Option<&str>,
        value: impl ToString,
    ) -> &mut Self {
        self.insert(indexed_key(prefix, position, field), value)
    }

    /// Look up a value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner.get(key).map(String::as_str)
    }

    /// Whether `key` is set.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether no parameters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate parameters in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.inner.iter()
    }

    /// Copy every entry of `other` into `self`, `other` winning on collisions.
    pub fn merge(&mut self, other: &Parameters) -> &mut Self {
        for (k, v) in other {
            self.inner.insert(k.clone(), v.clone());
        }
        self
    }

    /// Encode a monetary amount as `Prefix.1.Amount` and `Prefix.1.CurrencyCode`.
    pub fn insert_money(&mut self, prefix: &str, money: &Money) -> &mut Self {
        self.insert_indexed(prefix, 0, Some("Amount"), &money.amount);
        self.insert_indexed(prefix, 0, Some("CurrencyCode"), &money.currency_code)
    }

    /// Encode `PageSize` and `PageNumber`.
    pub fn insert_paging(&mut self, paging: Paging) -> &mut Self {
        self.insert("PageSize", paging.page_size);
        self.insert("PageNumber", paging.page_number)
    }

    /// Encode a qualification requirement list under `QualificationRequirement.N.*`.
    pub fn insert_requirements(&mut self, requirements: &[QualificationRequirement]) -> &mut Self {
        const PREFIX: &str = "QualificationRequirement";
        for (i, req) in requirements.iter().enumerate() {
            self.insert_indexed(
                PREFIX,
                i,
                Some("QualificationTypeId"),
                &req.qualification_type_id,
            );
            self.insert_indexed(PREFIX, i, Some("Comparator"), req.comparator);
            if let Some(value) = req.integer_value {
                self.insert_indexed(PREFIX, i, Some("IntegerValue"), value);
            }
            if let Some(country) = &req.locale_country {
                self.insert_indexed(PREFIX, i, Some("LocaleValue.Country"), country);
            }
            if let Some(preview) = req.required_to_preview {
                self.insert_indexed(PREFIX, i, Some("RequiredToPreview"), preview);
            }
        }
        self
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Parameters {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

/// Build `Prefix.N.Field` (or `Prefix.N`) for 0-based `position`.
#[must_use]
pub fn indexed_key(prefix: &str, position: usize, field: Option<&str>) -> String {
    let n = position + 1;
    match field {
        Some(field) => format!("{prefix}.{n}.{field}"),
        None => format!("{prefix}.{n}"),
    }
}

/// A typed request for one remote operation.
pub trait OperationInput {
    /// The typed result this request produces.
    type Output;

    /// The remote operation this input is sent as.
    const OPERATION: MTurkOperation;

    /// Flatten the input into wire parameters.
    fn to_parameters(&self) -> Parameters;
}
