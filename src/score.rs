use crate::error::{PanelFitError, PfResult};
use crate::status::{ControlsStatus, StatusLattice};
use serde::Serialize;
use std::cmp::Ordering;

/// One dimension of a [`Score`]: a non-negative number or a nested score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ScoreValue {
    Num(u32),
    Nested(Score),
}

impl From<u32> for ScoreValue {
    fn from(val: u32) -> Self {
        ScoreValue::Num(val)
    }
}

impl From<ControlsStatus> for ScoreValue {
    fn from(status: ControlsStatus) -> Self {
        ScoreValue::Num(status.score_rank())
    }
}

impl From<Score> for ScoreValue {
    fn from(score: Score) -> Self {
        ScoreValue::Nested(score)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreDim {
    pub key: &'static str,
    pub val: ScoreValue,
}

/// An ordered, named, recursively-structured ranking key.
///
/// Dimension order encodes priority: comparison is lexicographic, earlier
/// dimensions win. Scores built from the same construction site always share
/// a shape; summing or comparing scores of different shapes is a programmer
/// error, not a ranking outcome.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Score {
    dims: Vec<ScoreDim>,
}

impl Score {
    /// A score with no dimensions. Acts as identity under [`Score::sum`] and
    /// compares lower than any non-empty score.
    pub fn empty() -> Self {
        Self { dims: Vec::new() }
    }

    pub fn of<const N: usize>(entries: [(&'static str, ScoreValue); N]) -> Self {
        Self {
            dims: entries
                .into_iter()
                .map(|(key, val)| ScoreDim { key, val })
                .collect(),
        }
    }

    pub fn dims(&self) -> &[ScoreDim] {
        &self.dims
    }

    pub fn is_empty(&self) -> bool {
        self.dims.is_empty()
    }

    /// Element-wise sum by position. Empty scores are treated as all-zero and
    /// skipped; the remaining scores must agree on dimension count and keys
    /// at every level.
    pub fn sum<'a, I>(scores: I) -> PfResult<Score>
    where
        I: IntoIterator<Item = &'a Score>,
    {
        let mut acc: Option<Score> = None;

        for score in scores {
            if score.is_empty() {
                continue;
            }
            match acc {
                None => acc = Some(score.clone()),
                Some(ref mut total) => total.add_in_place(score)?,
            }
        }

        Ok(acc.unwrap_or_else(Score::empty))
    }

    fn add_in_place(&mut self, other: &Score) -> PfResult<()> {
        if self.dims.len() != other.dims.len() {
            return Err(PanelFitError::ScoreStructure(format!(
                "adding scores of different sizes: {} dims vs {} dims",
                self.dims.len(),
                other.dims.len()
            )));
        }

        for (dim, other_dim) in self.dims.iter_mut().zip(&other.dims) {
            if dim.key != other_dim.key {
                return Err(PanelFitError::ScoreStructure(format!(
                    "adding scores with different structures: '{}' vs '{}'",
                    dim.key, other_dim.key
                )));
            }

            match (&mut dim.val, &other_dim.val) {
                (ScoreValue::Num(a), ScoreValue::Num(b)) => *a += b,
                // an empty nested score is identity, matching the top level
                (ScoreValue::Nested(_), ScoreValue::Nested(b)) if b.is_empty() => {}
                (ScoreValue::Nested(a), ScoreValue::Nested(b)) => {
                    if a.is_empty() {
                        *a = b.clone();
                    } else {
                        a.add_in_place(b)?;
                    }
                }
                _ => {
                    return Err(PanelFitError::ScoreStructure(format!(
                        "adding scores with different value kinds at '{}'",
                        dim.key
                    )))
                }
            }
        }

        Ok(())
    }

    /// Lexicographic comparison. An empty score always compares lower than a
    /// non-empty one.
    ///
    /// # Panics
    ///
    /// Panics when both scores are non-empty but have mismatched dimension
    /// counts, keys or value kinds. Scores of different shapes never compete
    /// for the same allocation; reaching this is a bug.
    pub fn compare(&self, other: &Score) -> Ordering {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {}
        }

        assert_eq!(
            self.dims.len(),
            other.dims.len(),
            "comparing scores of different sizes"
        );

        for (dim, other_dim) in self.dims.iter().zip(&other.dims) {
            assert_eq!(
                dim.key, other_dim.key,
                "comparing scores with different structures"
            );

            let ord = match (&dim.val, &other_dim.val) {
                (ScoreValue::Num(a), ScoreValue::Num(b)) => a.cmp(b),
                (ScoreValue::Nested(a), ScoreValue::Nested(b)) => a.compare(b),
                _ => panic!(
                    "comparing scores with different value kinds at '{}'",
                    dim.key
                ),
            };
            if ord != Ordering::Equal {
                return ord;
            }
        }

        Ordering::Equal
    }
}
