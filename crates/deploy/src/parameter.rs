//! Constructor parameter values for contract deployment.
//!
//! Parameters are supplied to the deployer in the exact order the contract
//! constructor expects them; no validation of their content happens at this
//! layer.

use base64::{engine::general_purpose, Engine as _};
use serde_json::json;
use std::fmt;

/// A constructor argument value supplied at contract creation time.
#[derive(Debug, Clone, PartialEq)]
pub enum ContractParameter {
    Boolean(bool),
    Integer(i64),
    ByteArray(Vec<u8>),
    String(String),
    Array(Vec<ContractParameter>),
}

impl ContractParameter {
    /// Creates a string parameter.
    pub fn string(value: impl Into<String>) -> Self {
        ContractParameter::String(value.into())
    }

    /// Creates a byte-array parameter.
    pub fn byte_array(value: impl Into<Vec<u8>>) -> Self {
        ContractParameter::ByteArray(value.into())
    }

    /// Converts the parameter to the JSON form the RPC interface expects.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            ContractParameter::Boolean(b) => json!({ "type": "Boolean", "value": b }),
            // Integers travel as strings on the wire
            ContractParameter::Integer(n) => json!({ "type": "Integer", "value": n.to_string() }),
            ContractParameter::ByteArray(bytes) => json!({
                "type": "ByteArray",
                "value": general_purpose::STANDARD.encode(bytes),
            }),
            ContractParameter::String(s) => json!({ "type": "String", "value": s }),
            ContractParameter::Array(items) => json!({
                "type": "Array",
                "value": items.iter().map(|item| item.to_json()).collect::<Vec<_>>(),
            }),
        }
    }
}

impl fmt::Display for ContractParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractParameter::Boolean(b) => write!(f, "{}", b),
            ContractParameter::Integer(n) => write!(f, "{}", n),
            ContractParameter::ByteArray(bytes) => write!(f, "0x{}", hex::encode(bytes)),
            ContractParameter::String(s) => write!(f, "\"{}\"", s),
            ContractParameter::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<&str> for ContractParameter {
    fn from(value: &str) -> Self {
        ContractParameter::String(value.to_string())
    }
}

impl From<String> for ContractParameter {
    fn from(value: String) -> Self {
        ContractParameter::String(value)
    }
}

impl From<i64> for ContractParameter {
    fn from(value: i64) -> Self {
        ContractParameter::Integer(value)
    }
}

impl From<bool> for ContractParameter {
    fn from(value: bool) -> Self {
        ContractParameter::Boolean(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_parameter_json_form() {
        let param = ContractParameter::string("Server NFT");
        assert_eq!(
            param.to_json(),
            json!({ "type": "String", "value": "Server NFT" })
        );
    }

    #[test]
    fn integer_travels_as_string() {
        let param = ContractParameter::Integer(42);
        assert_eq!(
            param.to_json(),
            json!({ "type": "Integer", "value": "42" })
        );
    }

    #[test]
    fn byte_array_is_base64_encoded() {
        let param = ContractParameter::byte_array(vec![0x01, 0x02, 0x03]);
        assert_eq!(
            param.to_json(),
            json!({ "type": "ByteArray", "value": "AQID" })
        );
    }

    #[test]
    fn array_nests_its_items() {
        let param = ContractParameter::Array(vec![
            ContractParameter::from(true),
            ContractParameter::from("NFT"),
        ]);
        let value = param.to_json();
        assert_eq!(value["type"], "Array");
        assert_eq!(value["value"][1]["value"], "NFT");
    }

    #[test]
    fn display_formats_for_logs() {
        let param = ContractParameter::Array(vec![
            ContractParameter::from("NFT"),
            ContractParameter::byte_array(vec![0xab]),
        ]);
        assert_eq!(param.to_string(), "[\"NFT\", 0xab]");
    }
}
