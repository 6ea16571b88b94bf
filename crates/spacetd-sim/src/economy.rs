//! Coin balance and score, tracked by the engine.

use spacetd_core::constants::SCORE_PER_REWARD;

/// Running coin balance and score. Neither ever goes negative; score only grows.
#[derive(Debug, Clone, Default)]
pub struct Economy {
    pub coins: u32,
    pub score: u64,
    pub enemies_killed: u32,
    pub enemies_leaked: u32,
}

impl Economy {
    pub fn new(starting_coins: u32) -> Self {
        Self {
            coins: starting_coins,
            ..Default::default()
        }
    }

    /// Deduct `cost` if affordable. On failure returns the current balance
    /// and leaves it untouched.
    pub fn try_spend(&mut self, cost: u32) -> Result<(), u32> {
        match self.coins.checked_sub(cost) {
            Some(remaining) => {
                self.coins = remaining;
                Ok(())
            }
            None => Err(self.coins),
        }
    }

    /// Settle a kill: credit the reward and `reward * 10` score.
    pub fn credit_kill(&mut self, reward: u32) {
        self.coins = self.coins.saturating_add(reward);
        self.score = self
            .score
            .saturating_add(u64::from(reward) * SCORE_PER_REWARD);
        self.enemies_killed += 1;
    }
}
