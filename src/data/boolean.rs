use std::str::FromStr;

/// Two-input boolean functions with a fixed four-row truth table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanFunction {
    And,
    Or,
    Xor,
    Nand,
}

impl BooleanFunction {
    pub fn name(self) -> &'static str {
        match self {
            BooleanFunction::And => "and",
            BooleanFunction::Or => "or",
            BooleanFunction::Xor => "xor",
            BooleanFunction::Nand => "nand",
        }
    }

    pub fn eval(self, a: bool, b: bool) -> bool {
        match self {
            BooleanFunction::And => a && b,
            BooleanFunction::Or => a || b,
            BooleanFunction::Xor => a ^ b,
            BooleanFunction::Nand => !(a && b),
        }
    }

    /// Truth table as (inputs, ideals), rows ordered (0,0), (1,0), (0,1), (1,1).
    pub fn truth_table(self) -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
        let rows = [(false, false), (true, false), (false, true), (true, true)];
        let inputs = rows.iter()
            .map(|&(a, b)| vec![a as u8 as f64, b as u8 as f64])
            .collect();
        let ideals = rows.iter()
            .map(|&(a, b)| vec![self.eval(a, b) as u8 as f64])
            .collect();
        (inputs, ideals)
    }
}

impl FromStr for BooleanFunction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "and" => Ok(BooleanFunction::And),
            "or" => Ok(BooleanFunction::Or),
            "xor" => Ok(BooleanFunction::Xor),
            "nand" => Ok(BooleanFunction::Nand),
            other => Err(format!("unknown boolean function '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn and_table() {
        let (inputs, ideals) = BooleanFunction::And.truth_table();
        assert_eq!(inputs, vec![vec![0.0, 0.0], vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 1.0]]);
        assert_eq!(ideals, vec![vec![0.0], vec![0.0], vec![0.0], vec![1.0]]);
    }

    #[test]
    fn xor_table() {
        let (_, ideals) = BooleanFunction::Xor.truth_table();
        assert_eq!(ideals, vec![vec![0.0], vec![1.0], vec![1.0], vec![0.0]]);
    }

    #[test]
    fn parses_names() {
        for f in [BooleanFunction::And, BooleanFunction::Or, BooleanFunction::Xor, BooleanFunction::Nand] {
            assert_eq!(f.name().parse::<BooleanFunction>(), Ok(f));
        }
        assert!("nor".parse::<BooleanFunction>().is_err());
    }
}
