/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use super::prefix_trait::Prefix;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Binary (base 1024) prefixes
#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    PartialOrd,
    Eq,
    Ord,
    Hash,
    Clone,
    Copy,
    Debug,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum BinPrefix {
    Kibi,
    Mebi,
    Gibi,
    Tebi,
    Pebi,
    Exbi,
    Zebi,
    Yobi,
}

impl Prefix for BinPrefix {
    const BASE: u64 = 1024;
    const SCALE: &'static [Self] = &[
        Self::Kibi,
        Self::Mebi,
        Self::Gibi,
        Self::Tebi,
        Self::Pebi,
        Self::Exbi,
        Self::Zebi,
        Self::Yobi,
    ];

    fn power(&self) -> i64 {
        match self {
            BinPrefix::Kibi => 1,
            BinPrefix::Mebi => 2,
            BinPrefix::Gibi => 3,
            BinPrefix::Tebi => 4,
            BinPrefix::Pebi => 5,
            BinPrefix::Exbi => 6,
            BinPrefix::Zebi => 7,
            BinPrefix::Yobi => 8,
        }
    }

    fn prefix(&self) -> &'static str {
        match self {
            BinPrefix::Kibi => "Ki",
            BinPrefix::Mebi => "Mi",
            BinPrefix::Gibi => "Gi",
            BinPrefix::Tebi => "Ti",
            BinPrefix::Pebi => "Pi",
            BinPrefix::Exbi => "Ei",
            BinPrefix::Zebi => "Zi",
            BinPrefix::Yobi => "Yi",
        }
    }

    fn word(&self) -> &'static str {
        match self {
            BinPrefix::Kibi => "kibi",
            BinPrefix::Mebi => "mebi",
            BinPrefix::Gibi => "gibi",
            BinPrefix::Tebi => "tebi",
            BinPrefix::Pebi => "pebi",
            BinPrefix::Exbi => "exbi",
            BinPrefix::Zebi => "zebi",
            BinPrefix::Yobi => "yobi",
        }
    }

    /// Powers of two are exact, so the literals carry no rounding.
    fn multiplier(&self) -> f64 {
        match self {
            BinPrefix::Kibi => 1024.0,
            BinPrefix::Mebi => 1048576.0,
            BinPrefix::Gibi => 1073741824.0,
            BinPrefix::Tebi => 1099511627776.0,
            BinPrefix::Pebi => 1125899906842624.0,
            BinPrefix::Exbi => 1152921504606846976.0,
            BinPrefix::Zebi => 1180591620717411303424.0,
            BinPrefix::Yobi => 1208925819614629174706176.0,
        }
    }
}

impl Display for BinPrefix {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.prefix())
    }
}

#[cfg(test)]
mod tests {
    use super::{BinPrefix, Prefix};

    #[test]
    fn powers_of_two() {
        for p in BinPrefix::SCALE {
            assert_eq!(p.multiplier(), 1024f64.powi(p.power() as i32));
        }
    }
}
