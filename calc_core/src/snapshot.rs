//! Calculator snapshot for deterministic parity testing

use crate::StateKind;
use serde::{Deserialize, Serialize};

/// Pending binary operation as seen from outside
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendingSnapshot {
    /// Key bound to the operator
    pub operator: char,
    #[serde(with = "special_float")]
    pub first_operand: f64,
}

/// Complete calculator state snapshot for parity testing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorSnapshot {
    pub state: StateKind,
    pub display: String,
    /// Empty unless a number is being typed
    pub accumulator: String,
    pub pending: Option<PendingSnapshot>,
    #[serde(with = "special_float")]
    pub memory: f64,
    /// Computed value is the second operand of `pending`
    pub operand: bool,
}

/// JSON has no infinities or NaN; those travel as the strings the display
/// renders (`Infinity`, `-Infinity`, `NaN`).
mod special_float {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if value.is_nan() {
            serializer.serialize_str("NaN")
        } else if value.is_infinite() && *value > 0.0 {
            serializer.serialize_str("Infinity")
        } else if value.is_infinite() {
            serializer.serialize_str("-Infinity")
        } else {
            serializer.serialize_f64(*value)
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(f64),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Text(text) => match text.as_str() {
                "NaN" => Ok(f64::NAN),
                "Infinity" => Ok(f64::INFINITY),
                "-Infinity" => Ok(f64::NEG_INFINITY),
                other => Err(D::Error::custom(format!("invalid number: {other}"))),
            },
        }
    }
}

impl CalculatorSnapshot {
    /// Compute a deterministic hash of the snapshot state
    /// This is used for fast comparison in parity tests
    #[cfg(test)]
    pub fn hash(&self) -> u64 {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();

        hasher.update([self.state as u8]);
        hasher.update(self.display.as_bytes());
        hasher.update(b"\n");
        hasher.update(self.accumulator.as_bytes());
        hasher.update(b"\n");

        match &self.pending {
            Some(pending) => {
                hasher.update([1]);
                hasher.update(pending.operator.to_string().as_bytes());
                hasher.update(pending.first_operand.to_bits().to_le_bytes());
            }
            None => hasher.update([0]),
        }

        hasher.update(self.memory.to_bits().to_le_bytes());
        hasher.update([self.operand as u8]);

        let result = hasher.finalize();
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&result[..8]);
        u64::from_le_bytes(bytes)
    }
}
