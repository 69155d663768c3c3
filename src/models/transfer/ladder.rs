//! Fixed one-way succession of departments for non-privileged transfers.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// Successor map `from -> to`. Every department has at most one successor and
/// at most one predecessor, and following successors never revisits a
/// department. Terminal departments have no entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferLadder {
    steps: BTreeMap<i64, i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LadderError {
    Branch { from: i64 },
    Merge { to: i64 },
    SelfLoop { at: i64 },
    Cycle { at: i64 },
    Parse(String),
}

impl fmt::Display for LadderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LadderError::Branch { from } => write!(f, "department {from} has more than one successor"),
            LadderError::Merge { to } => write!(f, "department {to} has more than one predecessor"),
            LadderError::SelfLoop { at } => write!(f, "department {at} transfers to itself"),
            LadderError::Cycle { at } => write!(f, "ladder cycles back to department {at}"),
            LadderError::Parse(s) => write!(f, "invalid ladder step '{s}', expected from:to"),
        }
    }
}

impl std::error::Error for LadderError {}

impl TransferLadder {
    pub fn new(steps: impl IntoIterator<Item = (i64, i64)>) -> Result<Self, LadderError> {
        let mut map = BTreeMap::new();
        let mut targets = HashSet::new();
        for (from, to) in steps {
            if from == to {
                return Err(LadderError::SelfLoop { at: from });
            }
            if map.insert(from, to).is_some() {
                return Err(LadderError::Branch { from });
            }
            if !targets.insert(to) {
                return Err(LadderError::Merge { to });
            }
        }
        for &start in map.keys() {
            let mut seen = HashSet::from([start]);
            let mut cur = start;
            while let Some(&next) = map.get(&cur) {
                if !seen.insert(next) {
                    return Err(LadderError::Cycle { at: next });
                }
                cur = next;
            }
        }
        Ok(Self { steps: map })
    }

    /// Parse `"2:1,1:3,3:4"`.
    pub fn parse(spec: &str) -> Result<Self, LadderError> {
        let mut steps = Vec::new();
        for part in spec.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (from, to) = part
                .split_once(':')
                .ok_or_else(|| LadderError::Parse(part.to_string()))?;
            let from = from.trim().parse().map_err(|_| LadderError::Parse(part.to_string()))?;
            let to = to.trim().parse().map_err(|_| LadderError::Parse(part.to_string()))?;
            steps.push((from, to));
        }
        Self::new(steps)
    }

    pub fn next_department(&self, from: i64) -> Option<i64> {
        self.steps.get(&from).copied()
    }

    pub fn steps(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.steps.iter().map(|(&f, &t)| (f, t))
    }
}

impl Default for TransferLadder {
    /// bar3me(2) → 2ashbal(1) → kashaf(3) → motakadam(4) → morsha7in gawala(5) → gawala(6)
    fn default() -> Self {
        Self {
            steps: BTreeMap::from([(2, 1), (1, 3), (3, 4), (4, 5), (5, 6)]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ladder_successors() {
        let ladder = TransferLadder::default();
        assert_eq!(ladder.next_department(2), Some(1));
        assert_eq!(ladder.next_department(1), Some(3));
        assert_eq!(ladder.next_department(5), Some(6));
        assert_eq!(ladder.next_department(6), None);
        assert_eq!(ladder.next_department(42), None);
    }

    #[test]
    fn default_ladder_passes_its_own_validation() {
        let rebuilt = TransferLadder::new(TransferLadder::default().steps()).unwrap();
        assert_eq!(rebuilt, TransferLadder::default());
    }

    #[test]
    fn rejects_branches_merges_and_cycles() {
        assert_eq!(TransferLadder::new([(1, 2), (1, 3)]), Err(LadderError::Branch { from: 1 }));
        assert_eq!(TransferLadder::new([(1, 3), (2, 3)]), Err(LadderError::Merge { to: 3 }));
        assert_eq!(TransferLadder::new([(4, 4)]), Err(LadderError::SelfLoop { at: 4 }));
        assert!(matches!(
            TransferLadder::new([(1, 2), (2, 3), (3, 1)]),
            Err(LadderError::Cycle { .. })
        ));
    }

    #[test]
    fn parses_config_string() {
        let ladder = TransferLadder::parse(" 2:1, 1:3 ,").unwrap();
        assert_eq!(ladder.next_department(2), Some(1));
        assert_eq!(ladder.next_department(3), None);
        assert!(matches!(TransferLadder::parse("2-1"), Err(LadderError::Parse(_))));
    }
}
