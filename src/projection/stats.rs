//! Counting-stat categories and exact decimal stat lines.

use crate::storage::models::{BoxScore, MatchupTotals};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// The counting stats a projection carries. Percentages are derived from
/// these, never stored alongside them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stat {
    Fgm,
    Fga,
    Ftm,
    Fta,
    Fg3m,
    Pts,
    Reb,
    Ast,
    Stl,
    Blk,
    Tov,
}

impl Stat {
    pub const COUNT: usize = 11;

    pub const ALL: [Stat; Stat::COUNT] = [
        Stat::Fgm,
        Stat::Fga,
        Stat::Ftm,
        Stat::Fta,
        Stat::Fg3m,
        Stat::Pts,
        Stat::Reb,
        Stat::Ast,
        Stat::Stl,
        Stat::Blk,
        Stat::Tov,
    ];

    fn index(self) -> usize {
        self as usize
    }

    pub fn from_box_score(self, stats: &BoxScore) -> u32 {
        match self {
            Stat::Fgm => stats.fgm,
            Stat::Fga => stats.fga,
            Stat::Ftm => stats.ftm,
            Stat::Fta => stats.fta,
            Stat::Fg3m => stats.fg3m,
            Stat::Pts => stats.pts,
            Stat::Reb => stats.reb,
            Stat::Ast => stats.ast,
            Stat::Stl => stats.stl,
            Stat::Blk => stats.blk,
            Stat::Tov => stats.tov,
        }
    }
}

/// One decimal value per [`Stat`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatLine {
    values: [Decimal; Stat::COUNT],
}

impl StatLine {
    pub fn get(&self, stat: Stat) -> Decimal {
        self.values[stat.index()]
    }

    pub fn set(&mut self, stat: Stat, value: Decimal) {
        self.values[stat.index()] = value;
    }

    /// Every stat multiplied by `factor`.
    pub fn scaled(&self, factor: u32) -> StatLine {
        let factor = Decimal::from(factor);
        let mut out = *self;
        for v in out.values.iter_mut() {
            *v *= factor;
        }
        out
    }

    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|v| v.is_zero())
    }

    /// Made / attempted, `None` when nothing was attempted.
    pub fn ratio(&self, made: Stat, attempted: Stat) -> Option<Decimal> {
        let attempted = self.get(attempted);
        if attempted.is_zero() {
            None
        } else {
            Some(self.get(made) / attempted)
        }
    }

    /// Convert summed team totals into matchup columns, deriving FG% and FT%
    /// from the summed counts.
    pub fn to_matchup_totals(&self) -> MatchupTotals {
        let f = |d: Decimal| d.to_f64().unwrap_or_default();
        MatchupTotals {
            fgm: f(self.get(Stat::Fgm)),
            fga: f(self.get(Stat::Fga)),
            fg_pct: self.ratio(Stat::Fgm, Stat::Fga).map(f),
            ftm: f(self.get(Stat::Ftm)),
            fta: f(self.get(Stat::Fta)),
            ft_pct: self.ratio(Stat::Ftm, Stat::Fta).map(f),
            fg3m: f(self.get(Stat::Fg3m)),
            pts: f(self.get(Stat::Pts)),
            reb: f(self.get(Stat::Reb)),
            ast: f(self.get(Stat::Ast)),
            stl: f(self.get(Stat::Stl)),
            blk: f(self.get(Stat::Blk)),
            tov: f(self.get(Stat::Tov)),
        }
    }
}

impl AddAssign<&StatLine> for StatLine {
    fn add_assign(&mut self, rhs: &StatLine) {
        for (lhs, rhs) in self.values.iter_mut().zip(rhs.values.iter()) {
            *lhs += *rhs;
        }
    }
}
