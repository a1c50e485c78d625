//! Primitive normalizers mapping raw scenario attributes onto a 0-100 scale.

pub(crate) fn clamp_0_100(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// Linear map of a 1-5 ordinal onto 0-100.
pub(crate) fn scale_ordinal5(value: f64) -> f64 {
    clamp_0_100((value - 1.0) / 4.0 * 100.0)
}

pub(crate) fn scale_binary(flag: u8) -> f64 {
    if flag == 1 {
        100.0
    } else {
        0.0
    }
}

/// 0 unclear, 1 partial, 2 or more clear.
pub(crate) fn scale_clarity(clarity: u8) -> f64 {
    match clarity {
        0 => 0.0,
        1 => 50.0,
        _ => 100.0,
    }
}

/// Reward cost/time reductions against the baseline, penalize increases.
///
/// Ratios below 1 are good. The 1.3/1.2 intercepts and 0.8/0.7 spans set how
/// much worsening is tolerated before a component bottoms out at 0 and how
/// much improvement saturates it at 100. Baselines are floored at 1 so the
/// ratios never divide by zero.
pub(crate) fn economic_score(
    cost_baseline: f64,
    cost_blockchain: f64,
    time_baseline: f64,
    time_blockchain: f64,
) -> f64 {
    let cost_ratio = cost_blockchain / cost_baseline.max(1.0);
    let time_ratio = time_blockchain / time_baseline.max(1.0);

    let cost_component = clamp_0_100((1.3 - cost_ratio) / 0.8 * 100.0);
    let time_component = clamp_0_100((1.2 - time_ratio) / 0.7 * 100.0);
    0.6 * cost_component + 0.4 * time_component
}

/// Many stakeholders, high trust asymmetry, frequent disputes, and sensitive
/// data all argue for a shared ledger with explicit governance.
pub(crate) fn use_case_fit(
    stakeholders: u32,
    trust_asymmetry: u8,
    dispute_frequency: u32,
    data_sensitivity: u8,
) -> f64 {
    let score = f64::from(stakeholders).min(30.0) / 30.0 * 30.0
        + scale_ordinal5(f64::from(trust_asymmetry)) * 0.25
        + f64::from(dispute_frequency).min(10.0) / 10.0 * 25.0
        + scale_ordinal5(f64::from(data_sensitivity)) * 0.20;
    clamp_0_100(score)
}
