//! Linear weighted moving average difficulty retarget.
//!
//! The next target is the average of the last N targets scaled by the
//! recency-weighted sum of their solve times: the newest block's solve time
//! carries weight N, the oldest weight 1. Every step uses integer arithmetic
//! in a fixed order so that all nodes derive bit-identical results.

use log::{debug, trace};
use num_bigint::BigUint;
use num_traits::Zero;

use crate::compact::{bits_to_target, target_to_bits};
use crate::constants::{SOLVE_TIME_CLAMP_SPACINGS, TESTNET_RESET_SPACINGS};
use crate::error::{ErrorCode, LwmaError};
use crate::header::HeaderRecord;
use crate::params::LwmaParams;
use crate::window::HeaderSource;

/// Computes the compact difficulty bits for the block at `height` created at
/// `timestamp`.
///
/// `window` must hold every header in `[height - N - 1, height - 1]`. Nothing
/// is computed unless that whole range is present.
pub fn next_bits<S: HeaderSource + ?Sized>(
    height: u32,
    timestamp: u32,
    window: &S,
    params: &LwmaParams,
) -> Result<u32, LwmaError> {
    params.validate()?;

    let n = params.averaging_window;
    if window.len() <= n as usize {
        return Err(LwmaError::new(
            ErrorCode::RetargetErrWindowTooShort,
            format!(
                "LWMA needs the last {} blocks to determine the next target, got {}",
                u64::from(n) + 1,
                window.len()
            ),
        ));
    }

    let first = window_start(height, n)?;
    for h in first..height {
        if window.header_at(h).is_none() {
            return Err(LwmaError::missing_block(h));
        }
    }

    // Encoding drops precision: a target rebuilt from these bits differs from
    // the computed one.
    let target = lwma_target(height, timestamp, window, params)?;
    let bits = target_to_bits(&target);
    trace!(target: "lwma", "height {height}: next bits {bits:#010x}");
    Ok(bits)
}

/// Full-precision next target for the block at `height`.
pub fn lwma_target<S: HeaderSource + ?Sized>(
    height: u32,
    timestamp: u32,
    window: &S,
    params: &LwmaParams,
) -> Result<BigUint, LwmaError> {
    params.validate()?;

    let n = params.averaging_window;
    window_start(height, n)?;
    let prev = fetch(window, height - 1)?;

    if params.regtest {
        debug!(target: "lwma", "height {height}: regtest keeps parent bits {:#010x}", prev.bits);
        return Ok(bits_to_target(prev.bits));
    }

    let spacing = i64::from(params.pow_target_spacing);
    if params.testnet
        && i64::from(timestamp) > i64::from(prev.timestamp) + TESTNET_RESET_SPACINGS * spacing
    {
        debug!(
            target: "lwma",
            "height {height}: testnet gap {}s since parent, resetting to pow limit",
            i64::from(timestamp) - i64::from(prev.timestamp)
        );
        return Ok(params.pow_limit_target());
    }

    let solve_time_cap = SOLVE_TIME_CLAMP_SPACINGS * spacing;
    let divider = BigUint::from(params.adjust_weight) * n * n;

    let mut total = BigUint::zero();
    // Bounded by N * 2^32 * N^2 / 2, well inside i128.
    let mut t: i128 = 0;
    let mut j: i128 = 0;

    // N blocks ending at the parent; `height` itself is not part of the window.
    for i in (height - n)..height {
        let cur = fetch(window, i)?;
        let prior = fetch(window, i - 1)?;

        let mut solve_time = i64::from(cur.timestamp) - i64::from(prior.timestamp);
        if params.solve_time_limitation && solve_time > solve_time_cap {
            solve_time = solve_time_cap;
        }

        j += 1;
        t += i128::from(solve_time) * j;
        // Divide each target before summing; the truncation is consensus.
        total += bits_to_target(cur.bits) / &divider;
    }

    let min_t = i128::from(
        u64::from(n) * u64::from(params.adjust_weight) / u64::from(params.min_denominator),
    );
    if t < min_t {
        t = min_t;
    }
    trace!(target: "lwma", "height {height}: weighted solve time {t}, target sum {total:#x}");

    // t >= min_t >= 0 here.
    let mut next_target = total * t.unsigned_abs();
    let pow_limit = params.pow_limit_target();
    if next_target >= pow_limit {
        debug!(target: "lwma", "height {height}: target clamped to pow limit");
        next_target = pow_limit;
    }

    Ok(next_target)
}

/// Lowest height a retarget for `height` reads, i.e. `height - N - 1`.
fn window_start(height: u32, n: u32) -> Result<u32, LwmaError> {
    height
        .checked_sub(n)
        .and_then(|h| h.checked_sub(1))
        .ok_or_else(|| {
            LwmaError::at_height(
                ErrorCode::RetargetErrWindowTooShort,
                height,
                format!("height {height} has fewer than {} ancestors", u64::from(n) + 1),
            )
        })
}

fn fetch<S: HeaderSource + ?Sized>(window: &S, height: u32) -> Result<&HeaderRecord, LwmaError> {
    window
        .header_at(height)
        .ok_or_else(|| LwmaError::missing_block(height))
}
