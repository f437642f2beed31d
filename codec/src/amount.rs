//! # Amounts
//!
//! Ledger JSON spells an amount two ways and never labels which one you
//! got. A native amount is a bare string (occasionally a bare integer) of
//! drops: `"1000000"`. An issued amount is a three-field object:
//! `{"value": "0.5", "currency": "USD", "issuer": "r..."}`. The JSON
//! shape itself is the discriminator, so [`Amount`] is a sum type and its
//! deserializer is a visitor that branches on what the parser saw.
//!
//! There is no fallback between the arms. An object with a bad issuer is
//! a broken issued amount, not a native one; the error says what was
//! wrong instead of guessing.

use std::fmt;
use std::str::FromStr;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize};

use crate::account::Account;
use crate::currency::Currency;
use crate::error::CodecError;
use crate::value::Value;

/// An amount of money: drops of the native currency, or an issued value
/// bound to its currency and issuer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Amount {
    /// Drops of the native currency.
    Native(u64),
    /// An issued-currency amount.
    Issued {
        /// The canonicalized value.
        value: Value,
        /// What is owed.
        currency: Currency,
        /// Who owes it.
        issuer: Account,
    },
}

impl Amount {
    /// Parse native amount text: an unsigned drops count.
    pub fn from_drops_text(text: &str) -> Result<Self, CodecError> {
        Value::parse_native(text).map(|v| Amount::Native(v.mantissa()))
    }

    /// True for the native arm.
    pub fn is_native(&self) -> bool {
        matches!(self, Amount::Native(_))
    }

    /// The drop count, when native.
    pub fn drops(&self) -> Option<u64> {
        match self {
            Amount::Native(drops) => Some(*drops),
            Amount::Issued { .. } => None,
        }
    }

    /// The currency: [`Currency::NATIVE`] for drops, the issued code
    /// otherwise.
    pub fn currency(&self) -> Currency {
        match self {
            Amount::Native(_) => Currency::NATIVE,
            Amount::Issued { currency, .. } => *currency,
        }
    }
}

impl Default for Amount {
    /// Zero drops.
    fn default() -> Self {
        Amount::Native(0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Native(drops) => write!(f, "{}/XRP", drops),
            Amount::Issued {
                value,
                currency,
                issuer,
            } => write!(f, "{}/{}/{}", value, currency, issuer),
        }
    }
}

impl FromStr for Amount {
    type Err = CodecError;

    /// Parses the slash form: a bare drops count or `drops/XRP` for native
    /// amounts, `value/currency/issuer` for issued ones. An issued amount
    /// without the issuer part gets the zero account.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut parts = text.splitn(3, '/');
        let value = parts.next().unwrap_or("");
        let (currency, issuer) = (parts.next(), parts.next());
        let currency = match currency {
            Some(code) => code.parse::<Currency>()?,
            None => return Amount::from_drops_text(value),
        };
        if currency.is_native() {
            if issuer.is_some() {
                return Err(CodecError::Format {
                    kind: "Amount",
                    detail: "the native currency has no issuer".into(),
                });
            }
            return Amount::from_drops_text(value);
        }
        Ok(Amount::Issued {
            value: Value::parse_issued(value)?,
            currency,
            issuer: match issuer {
                Some(address) => address.parse()?,
                None => Account::default(),
            },
        })
    }
}

impl Serialize for Amount {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Amount::Native(drops) => serializer.serialize_str(&drops.to_string()),
            Amount::Issued {
                value,
                currency,
                issuer,
            } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("value", value)?;
                map.serialize_entry("currency", currency)?;
                map.serialize_entry("issuer", issuer)?;
                map.end()
            }
        }
    }
}

struct AmountVisitor;

impl<'de> Visitor<'de> for AmountVisitor {
    type Value = Amount;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a drops string or an issued amount object")
    }

    fn visit_str<E: serde::de::Error>(self, text: &str) -> Result<Amount, E> {
        Amount::from_drops_text(text).map_err(E::custom)
    }

    fn visit_u64<E: serde::de::Error>(self, drops: u64) -> Result<Amount, E> {
        Value::from_drops(drops).map_err(E::custom)?;
        Ok(Amount::Native(drops))
    }

    fn visit_i64<E: serde::de::Error>(self, drops: i64) -> Result<Amount, E> {
        let drops = u64::try_from(drops)
            .map_err(|_| E::custom("drops must be an unsigned integer"))?;
        self.visit_u64(drops)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Amount, A::Error> {
        let mut value: Option<String> = None;
        let mut currency: Option<Currency> = None;
        let mut issuer: Option<Account> = None;
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "value" => {
                    if value.is_some() {
                        return Err(serde::de::Error::duplicate_field("value"));
                    }
                    value = Some(map.next_value()?);
                }
                "currency" => {
                    if currency.is_some() {
                        return Err(serde::de::Error::duplicate_field("currency"));
                    }
                    currency = Some(map.next_value()?);
                }
                "issuer" => {
                    if issuer.is_some() {
                        return Err(serde::de::Error::duplicate_field("issuer"));
                    }
                    issuer = Some(map.next_value()?);
                }
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        let value = value.ok_or_else(|| serde::de::Error::missing_field("value"))?;
        let currency = currency.ok_or_else(|| serde::de::Error::missing_field("currency"))?;
        let issuer = issuer.ok_or_else(|| serde::de::Error::missing_field("issuer"))?;
        let value = Value::parse_issued(&value).map_err(serde::de::Error::custom)?;
        Ok(Amount::Issued {
            value,
            currency,
            issuer,
        })
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(AmountVisitor)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
