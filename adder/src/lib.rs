//! Integer addition and the record the host prints for it.

use serde::{Deserialize, Serialize};

mod error;
pub use error::{Error, Result};

/// Return the sum of two integers.
///
/// Meant for trusted operands. An overflowing sum panics in every build,
/// whatever the caller's `overflow-checks` setting. Use [`try_add`] for
/// operands that come from outside the program.
pub fn add(a: i64, b: i64) -> i64 {
    match a.checked_add(b) {
        Some(sum) => sum,
        None => panic!("{}", Error::Overflow { a, b }),
    }
}

/// Return the sum of two integers, or [`Error::Overflow`] if it does not fit.
pub fn try_add(a: i64, b: i64) -> Result<i64> {
    a.checked_add(b).ok_or(Error::Overflow { a, b })
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operands {
    pub a: i64,
    pub b: i64,
}

impl Operands {
    pub fn new(a: i64, b: i64) -> Self {
        Self { a, b }
    }

    pub fn sum(&self) -> Result<i64> {
        try_add(self.a, self.b)
    }
}

/// Operands together with their sum
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Addition {
    pub inputs: Operands,
    pub result: i64,
}

impl Addition {
    pub fn compute(inputs: Operands) -> Result<Self> {
        let result = inputs.sum()?;
        Ok(Self { inputs, result })
    }

    /// Recompute the sum and compare it with the recorded result.
    pub fn verify(&self) -> Result<()> {
        let computed = self.inputs.sum()?;
        if computed != self.result {
            return Err(Error::Mismatch {
                recorded: self.result,
                computed,
            });
        }
        Ok(())
    }

    pub fn check_expected(&self, expected: i64) -> Result<()> {
        if self.result != expected {
            return Err(Error::Unexpected {
                expected,
                actual: self.result,
            });
        }
        Ok(())
    }
}
