//! SQL functions registered on every connection.
//!
//! SQLite has no standard deviation aggregate and knows nothing about overs
//! notation, both of which the analytics catalog relies on.

use rusqlite::functions::{Aggregate, Context, FunctionFlags};
use rusqlite::Connection;

pub(crate) fn register_functions(conn: &Connection) -> rusqlite::Result<()> {
    let flags = FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC;

    conn.create_aggregate_function("stddev", 1, flags, PopulationStdDev)?;
    conn.create_scalar_function("balls_from_overs", 1, flags, |ctx| {
        let overs: Option<f64> = ctx.get(0)?;
        Ok(overs.map(balls_from_overs))
    })?;

    Ok(())
}

/// Convert overs notation to balls: `4.3` is four overs and three balls.
pub fn balls_from_overs(overs: f64) -> i64 {
    let whole = overs.trunc();
    let part = ((overs - whole) * 10.0).round();
    whole as i64 * 6 + part as i64
}

/// Running mean/variance (Welford).
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Welford {
    count: u64,
    mean: f64,
    m2: f64,
}

impl Welford {
    pub(crate) fn push(&mut self, x: f64) {
        self.count += 1;
        let delta = x - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (x - self.mean);
    }

    pub(crate) fn population_stddev(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some((self.m2 / self.count as f64).sqrt())
        }
    }
}

/// `stddev(x)`: population standard deviation, NULLs ignored.
struct PopulationStdDev;

impl Aggregate<Welford, Option<f64>> for PopulationStdDev {
    fn init(&self, _ctx: &mut Context<'_>) -> rusqlite::Result<Welford> {
        Ok(Welford::default())
    }

    fn step(&self, ctx: &mut Context<'_>, acc: &mut Welford) -> rusqlite::Result<()> {
        if let Some(x) = ctx.get::<Option<f64>>(0)? {
            acc.push(x);
        }
        Ok(())
    }

    fn finalize(&self, _ctx: &mut Context<'_>, acc: Option<Welford>) -> rusqlite::Result<Option<f64>> {
        Ok(acc.and_then(|a| a.population_stddev()))
    }
}
