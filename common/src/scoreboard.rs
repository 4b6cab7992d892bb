use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::PlayerName;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    pub name: PlayerName,
    pub wins: u32,
}

#[derive(Debug, Default)]
struct ScoreTable {
    // first-appearance order, used to break ties
    entries: Vec<ScoreEntry>,
    positions: HashMap<PlayerName, usize>,
}

/// Process-wide win counter. Counts only ever grow; draws are never recorded.
#[derive(Debug, Default)]
pub struct Scoreboard {
    table: Mutex<ScoreTable>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_table(&self) -> MutexGuard<'_, ScoreTable> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the new total for `name`.
    pub fn record_win(&self, name: &PlayerName) -> u32 {
        let mut table = self.lock_table();

        let existing = table.positions.get(name).copied();
        let position = match existing {
            Some(position) => position,
            None => {
                let position = table.entries.len();
                table.entries.push(ScoreEntry {
                    name: name.clone(),
                    wins: 0,
                });
                table.positions.insert(name.clone(), position);
                position
            }
        };

        let entry = &mut table.entries[position];
        entry.wins = entry.wins.saturating_add(1);
        entry.wins
    }

    pub fn get(&self, name: &PlayerName) -> u32 {
        let table = self.lock_table();
        table
            .positions
            .get(name)
            .map(|&position| table.entries[position].wins)
            .unwrap_or(0)
    }

    /// Highest counts first; equal counts keep first-appearance order.
    pub fn top(&self, limit: usize) -> Vec<ScoreEntry> {
        let mut entries = self.lock_table().entries.clone();
        entries.sort_by(|a, b| b.wins.cmp(&a.wins));
        entries.truncate(limit);
        entries
    }

    pub fn is_empty(&self) -> bool {
        self.lock_table().entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> PlayerName {
        PlayerName::new(s)
    }

    #[test]
    fn test_unknown_name_scores_zero() {
        let scoreboard = Scoreboard::new();

        assert_eq!(scoreboard.get(&name("nobody")), 0);
        assert!(scoreboard.is_empty());
    }

    #[test]
    fn test_record_win_counts_up() {
        let scoreboard = Scoreboard::new();

        for expected in 1..=5 {
            assert_eq!(scoreboard.record_win(&name("alice")), expected);
        }

        assert_eq!(scoreboard.get(&name("alice")), 5);
    }

    #[test]
    fn test_record_win_leaves_other_names_alone() {
        let scoreboard = Scoreboard::new();
        scoreboard.record_win(&name("bob"));

        scoreboard.record_win(&name("alice"));
        scoreboard.record_win(&name("alice"));

        assert_eq!(scoreboard.get(&name("bob")), 1);
        assert_eq!(scoreboard.get(&name("alice")), 2);
    }

    #[test]
    fn test_top_sorts_descending() {
        let scoreboard = Scoreboard::new();
        scoreboard.record_win(&name("carol"));
        for _ in 0..3 {
            scoreboard.record_win(&name("alice"));
        }
        for _ in 0..2 {
            scoreboard.record_win(&name("bob"));
        }

        let top = scoreboard.top(10);

        let names: Vec<&str> = top.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["alice", "bob", "carol"]);
        assert_eq!(top[0].wins, 3);
    }

    #[test]
    fn test_top_ties_keep_first_appearance() {
        let scoreboard = Scoreboard::new();
        scoreboard.record_win(&name("zed"));
        scoreboard.record_win(&name("amy"));
        scoreboard.record_win(&name("mia"));
        scoreboard.record_win(&name("mia"));
        scoreboard.record_win(&name("amy"));

        let names: Vec<String> = scoreboard
            .top(10)
            .into_iter()
            .map(|e| e.name.into())
            .collect();

        assert_eq!(names, vec!["amy", "mia", "zed"]);
    }

    #[test]
    fn test_top_respects_limit() {
        let scoreboard = Scoreboard::new();
        for i in 0..15 {
            scoreboard.record_win(&name(&format!("player{}", i)));
        }

        assert_eq!(scoreboard.top(10).len(), 10);
        assert_eq!(scoreboard.top(0).len(), 0);
        assert_eq!(scoreboard.top(100).len(), 15);
    }
}
