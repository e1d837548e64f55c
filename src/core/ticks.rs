//! Round-number tick generation on the 1/2/5 ladder.

const E10: f64 = 7.071_067_811_865_475_5; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Returns `(first_index, last_index, increment)`.
///
/// A negative increment encodes `1 / -increment` so fractional steps stay exact.
fn tick_spec(start: f64, stop: f64, count: f64) -> Option<(f64, f64, f64)> {
    let step = (stop - start) / count.max(0.0);
    if !step.is_finite() || step <= 0.0 {
        return None;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, increment);
    if power < 0.0 {
        let inc = 10f64.powf(-power) / factor;
        i1 = js_round(start * inc);
        i2 = js_round(stop * inc);
        if i1 / inc < start {
            i1 += 1.0;
        }
        if i2 / inc > stop {
            i2 -= 1.0;
        }
        increment = -inc;
    } else {
        let inc = 10f64.powf(power) * factor;
        i1 = js_round(start / inc);
        i2 = js_round(stop / inc);
        if i1 * inc < start {
            i1 += 1.0;
        }
        if i2 * inc > stop {
            i2 -= 1.0;
        }
        increment = inc;
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    Some((i1, i2, increment))
}

/// Step between ticks, in the encoded form used by [`nice_domain`].
#[must_use]
pub fn tick_increment(start: f64, stop: f64, count: f64) -> f64 {
    tick_spec(start, stop, count).map_or(0.0, |(_, _, increment)| increment)
}

/// Approximately `count` round values spanning `[start, stop]`.
#[must_use]
pub fn ticks(start: f64, stop: f64, count: f64) -> Vec<f64> {
    if count <= 0.0 || !count.is_finite() || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (low, high) = if reverse { (stop, start) } else { (start, stop) };
    let Some((i1, i2, increment)) = tick_spec(low, high, count) else {
        return Vec::new();
    };
    if i2 < i1 {
        return Vec::new();
    }

    let n = (i2 - i1 + 1.0) as usize;
    let mut out: Vec<f64> = (0..n)
        .map(|offset| {
            let index = i1 + offset as f64;
            if increment < 0.0 {
                index / -increment
            } else {
                index * increment
            }
        })
        .collect();
    if reverse {
        out.reverse();
    }
    out
}

/// Extends a domain outward so both ends land on round tick values.
#[must_use]
pub fn nice_domain(domain_start: f64, domain_end: f64, count: f64) -> (f64, f64) {
    let reversed = domain_end < domain_start;
    let (mut start, mut stop) = if reversed {
        (domain_end, domain_start)
    } else {
        (domain_start, domain_end)
    };

    let mut previous_step = f64::NAN;
    for _ in 0..10 {
        let step = tick_increment(start, stop, count);
        if step == previous_step {
            break;
        }
        let (next_start, next_stop) = if step > 0.0 {
            ((start / step).floor() * step, (stop / step).ceil() * step)
        } else if step < 0.0 {
            ((start * step).ceil() / step, (stop * step).floor() / step)
        } else {
            break;
        };
        // Rounding outward past f64::MAX keeps the last finite bounds.
        if !next_start.is_finite() || !next_stop.is_finite() {
            break;
        }
        start = next_start;
        stop = next_stop;
        previous_step = step;
    }

    if reversed { (stop, start) } else { (start, stop) }
}

fn js_round(value: f64) -> f64 {
    (value + 0.5).floor()
}
