use crate::{HistoryError, engine::game_state::GameState};

/// Append-only, index-addressed sequence of snapshots from one analysis session.
///
/// Snapshots never point at their predecessor; the predecessor of the snapshot at
/// `index` is simply the one at `index - 1`. Timestamps are non-decreasing.
#[derive(Debug, Clone, Default)]
pub struct GameHistory {
    states: Vec<GameState>,
}

impl GameHistory {
    #[must_use]
    pub const fn new() -> Self {
        Self { states: Vec::new() }
    }

    pub fn from_states<I>(states: I) -> Result<Self, HistoryError>
    where
        I: IntoIterator<Item = GameState>,
    {
        let mut history = Self::new();
        for state in states {
            history.push(state)?;
        }
        Ok(history)
    }

    /// Appends a snapshot and returns its index.
    pub fn push(&mut self, state: GameState) -> Result<usize, HistoryError> {
        if let Some(last) = self
            .states
            .last()
            .filter(|last| state.timestamp() < last.timestamp())
        {
            return Err(HistoryError::NonMonotonicTimestamp {
                index: self.states.len(),
                previous: last.timestamp(),
                timestamp: state.timestamp(),
            });
        }
        self.states.push(state);
        Ok(self.states.len() - 1)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&GameState> {
        self.states.get(index)
    }

    #[must_use]
    pub fn states(&self) -> &[GameState] {
        &self.states
    }

    /// Snapshot at `index` together with its predecessor.
    #[must_use]
    pub fn frame(&self, index: usize) -> Option<Frame<'_>> {
        let state = self.states.get(index)?;
        let previous = index.checked_sub(1).and_then(|i| self.states.get(i));
        Some(Frame {
            index,
            state,
            previous,
        })
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<Frame<'_>> {
        self.frame(self.states.len().checked_sub(1)?)
    }

    /// All frames in chronological order.
    pub fn frames(&self) -> impl Iterator<Item = Frame<'_>> + '_ {
        (0..self.states.len()).filter_map(|index| self.frame(index))
    }
}

/// A snapshot viewed in the context of its session.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    index: usize,
    state: &'a GameState,
    previous: Option<&'a GameState>,
}

impl<'a> Frame<'a> {
    /// A frame with no predecessor, for evaluating a snapshot on its own.
    #[must_use]
    pub fn standalone(state: &'a GameState) -> Self {
        Self {
            index: 0,
            state,
            previous: None,
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn state(&self) -> &'a GameState {
        self.state
    }

    #[must_use]
    pub fn previous(&self) -> Option<&'a GameState> {
        self.previous
    }
}
