use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::problem::Problem;

pub const NUM_PEGS: usize = 3;
pub const GOAL_PEG: usize = 2;

/// Disks on each peg, listed bottom to top. Disk `n` is larger than disk `n - 1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HanoiState {
    pegs: [Vec<u32>; NUM_PEGS],
}

impl HanoiState {
    /// All `num_disks` disks stacked on `peg`.
    ///
    /// # Panics
    ///
    /// Panics if `peg >= NUM_PEGS`.
    pub fn stacked(num_disks: u32, peg: usize) -> Self {
        assert!(peg < NUM_PEGS, "peg {peg} out of range, expected < {NUM_PEGS}");
        let mut pegs: [Vec<u32>; NUM_PEGS] = Default::default();
        pegs[peg] = (1..=num_disks).rev().collect();
        HanoiState { pegs }
    }

    /// Returns `None` unless the pegs hold disks `1..=n` exactly once each,
    /// with no disk on top of a smaller one.
    pub fn from_pegs(pegs: [Vec<u32>; NUM_PEGS]) -> Option<Self> {
        let mut disks: Vec<u32> = pegs.iter().flatten().copied().collect();
        disks.sort_unstable();
        let complete = disks.iter().zip(1..).all(|(&disk, expected)| disk == expected);
        let ordered = pegs
            .iter()
            .all(|peg| peg.windows(2).all(|pair| pair[0] > pair[1]));
        (complete && ordered).then_some(HanoiState { pegs })
    }

    /// Every disk placed on a uniformly random peg. Any such placement is a
    /// legal configuration once each peg is sorted largest first.
    pub fn random<R: Rng + ?Sized>(num_disks: u32, rng: &mut R) -> Self {
        let mut pegs: [Vec<u32>; NUM_PEGS] = Default::default();
        for disk in (1..=num_disks).rev() {
            pegs[rng.gen_range(0..NUM_PEGS)].push(disk);
        }
        HanoiState { pegs }
    }

    pub fn pegs(&self) -> &[Vec<u32>; NUM_PEGS] {
        &self.pegs
    }

    pub fn num_disks(&self) -> usize {
        self.pegs.iter().map(Vec::len).sum()
    }

    fn top(&self, peg: usize) -> Option<u32> {
        self.pegs[peg].last().copied()
    }

    fn can_move(&self, from: usize, to: usize) -> Option<u32> {
        let disk = self.top(from)?;
        match self.top(to) {
            Some(target) if target < disk => None,
            _ => Some(disk),
        }
    }

    fn apply(&self, from: usize, to: usize) -> Self {
        let mut next = self.clone();
        if let Some(disk) = next.pegs[from].pop() {
            next.pegs[to].push(disk);
        }
        next
    }
}

impl fmt::Display for HanoiState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.pegs)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HanoiMove {
    pub disk: u32,
    pub from: usize,
    pub to: usize,
}

impl fmt::Display for HanoiMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Move disk {} from peg {} to peg {}",
            self.disk, self.from, self.to
        )
    }
}

impl FromStr for HanoiMove {
    type Err = SearchError;

    /// Parses the format produced by `Display`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let parse_error = || SearchError::ParseAction {
            input: input.to_string(),
        };
        match input.split_whitespace().collect::<Vec<_>>().as_slice() {
            ["Move", "disk", disk, "from", "peg", from, "to", "peg", to] => Ok(HanoiMove {
                disk: disk.parse().map_err(|_| parse_error())?,
                from: from.parse().map_err(|_| parse_error())?,
                to: to.parse().map_err(|_| parse_error())?,
            }),
            _ => Err(parse_error()),
        }
    }
}

/// Move every disk from its starting configuration onto peg 2.
#[derive(Debug, Clone)]
pub struct TowerOfHanoi {
    num_disks: u32,
    initial: HanoiState,
    goal: HanoiState,
}

impl TowerOfHanoi {
    /// The classic puzzle: all disks start on peg 0.
    pub fn new(num_disks: u32) -> Self {
        Self::with_initial(HanoiState::stacked(num_disks, 0))
    }

    pub fn with_initial(initial: HanoiState) -> Self {
        let num_disks = initial.num_disks() as u32;
        TowerOfHanoi {
            num_disks,
            initial,
            goal: HanoiState::stacked(num_disks, GOAL_PEG),
        }
    }

    pub fn num_disks(&self) -> u32 {
        self.num_disks
    }

    /// Length of the shortest solution from the classic starting position.
    /// Saturates at `u64::MAX` for 64 or more disks.
    pub fn optimal_moves(&self) -> u64 {
        1u64.checked_shl(self.num_disks).map_or(u64::MAX, |moves| moves - 1)
    }
}

impl Problem for TowerOfHanoi {
    type State = HanoiState;
    type Action = HanoiMove;

    fn initial_state(&self) -> &HanoiState {
        &self.initial
    }

    fn goal_state(&self) -> Option<&HanoiState> {
        Some(&self.goal)
    }

    fn successors(&self, state: &HanoiState) -> Vec<(HanoiMove, HanoiState)> {
        let mut successors = Vec::new();
        for from in 0..NUM_PEGS {
            for to in (0..NUM_PEGS).filter(|&to| to != from) {
                if let Some(disk) = state.can_move(from, to) {
                    successors.push((HanoiMove { disk, from, to }, state.apply(from, to)));
                }
            }
        }
        successors
    }

    fn result(&self, state: &HanoiState, action: &HanoiMove) -> Result<HanoiState, SearchError> {
        let invalid = |reason: &str| SearchError::InvalidAction {
            action: action.to_string(),
            state: state.to_string(),
            reason: reason.to_string(),
        };

        if action.from >= NUM_PEGS || action.to >= NUM_PEGS {
            return Err(invalid("peg out of range"));
        }
        if action.from == action.to {
            return Err(invalid("source and target peg are the same"));
        }
        match state.top(action.from) {
            None => return Err(invalid("source peg is empty")),
            Some(top) if top != action.disk => return Err(invalid("disk is not on top of the source peg")),
            Some(_) => {}
        }
        if state.can_move(action.from, action.to).is_none() {
            return Err(invalid("cannot place a disk on a smaller one"));
        }
        Ok(state.apply(action.from, action.to))
    }

    /// Every disk not yet on the goal peg needs at least one more move.
    fn heuristic(&self, state: &HanoiState) -> f64 {
        f64::from(self.num_disks) - state.pegs[GOAL_PEG].len() as f64
    }
}
