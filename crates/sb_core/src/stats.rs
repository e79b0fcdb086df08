//! Rate-stat projections for the read side (leader boards, player pages).
//!
//! Deliberately branch-free: each function is a ratio plus scorebook
//! formatting. Averages print without the leading zero (".333"), ERA as a
//! plain two-decimal number, and zero denominators render as ".000" or
//! "0.00" rather than dividing.

use crate::models::DEFAULT_INNINGS;

/// Batting average, H / AB.
pub fn batting_avg(hits: u32, at_bats: u32) -> String {
    if at_bats == 0 {
        return ".000".to_string();
    }
    format_average(hits as f64 / at_bats as f64)
}

/// Slugging percentage, total bases / AB.
pub fn slugging(singles: u32, doubles: u32, triples: u32, home_runs: u32, at_bats: u32) -> String {
    if at_bats == 0 {
        return ".000".to_string();
    }
    let total_bases = singles + doubles * 2 + triples * 3 + home_runs * 4;
    format_average(total_bases as f64 / at_bats as f64)
}

/// On-base percentage, (H + BB + HBP) / (AB + BB + HBP + SF).
pub fn on_base_pct(
    hits: u32,
    walks: u32,
    hit_by_pitch: u32,
    at_bats: u32,
    sacrifice_flies: u32,
) -> String {
    let denominator = at_bats + walks + hit_by_pitch + sacrifice_flies;
    if denominator == 0 {
        return ".000".to_string();
    }
    format_average((hits + walks + hit_by_pitch) as f64 / denominator as f64)
}

/// OPS from already formatted OBP and SLG strings (the leader-board rows
/// carry the formatted values, not the raw ratios).
pub fn ops(obp: &str, slg: &str) -> String {
    let total = obp.parse::<f64>().unwrap_or(0.0) + slg.parse::<f64>().unwrap_or(0.0);
    if total >= 1.0 {
        format!("{total:.3}")
    } else {
        format_average(total)
    }
}

/// Earned-run average per regulation game (7 innings in this league).
pub fn era(earned_runs: u32, innings_pitched: f64) -> String {
    if innings_pitched == 0.0 {
        return "0.00".to_string();
    }
    format!("{:.2}", earned_runs as f64 / innings_pitched * DEFAULT_INNINGS as f64)
}

/// Winning percentage, W / (W + L).
pub fn win_pct(wins: u32, losses: u32) -> String {
    let total = wins + losses;
    if total == 0 {
        return ".000".to_string();
    }
    format_average(wins as f64 / total as f64)
}

/// Three decimals, leading zero stripped: 0.333 -> ".333", 4.0 -> "4.000".
fn format_average(value: f64) -> String {
    let formatted = format!("{value:.3}");
    formatted
        .strip_prefix('0')
        .map(str::to_string)
        .unwrap_or(formatted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batting_avg() {
        assert_eq!(batting_avg(0, 0), ".000");
        assert_eq!(batting_avg(1, 3), ".333");
        assert_eq!(batting_avg(3, 3), "1.000");
    }

    #[test]
    fn test_slugging_counts_total_bases() {
        // 2 singles + 1 double + 1 HR = 8 total bases over 8 AB.
        assert_eq!(slugging(2, 1, 0, 1, 8), "1.000");
        assert_eq!(slugging(0, 0, 0, 0, 4), ".000");
        assert_eq!(slugging(0, 0, 0, 0, 0), ".000");
    }

    #[test]
    fn test_on_base_pct() {
        assert_eq!(on_base_pct(0, 0, 0, 0, 0), ".000");
        // (1 + 1 + 0) / (3 + 1 + 0 + 0) = .500
        assert_eq!(on_base_pct(1, 1, 0, 3, 0), ".500");
    }

    #[test]
    fn test_ops_keeps_leading_digit_at_one_or_more() {
        assert_eq!(ops(".500", ".600"), "1.100");
        assert_eq!(ops(".300", ".400"), ".700");
        assert_eq!(ops(".000", ".000"), ".000");
    }

    #[test]
    fn test_era_is_per_seven_innings() {
        assert_eq!(era(0, 0.0), "0.00");
        assert_eq!(era(2, 7.0), "2.00");
        assert_eq!(era(3, 3.0), "7.00");
    }

    #[test]
    fn test_win_pct() {
        assert_eq!(win_pct(0, 0), ".000");
        assert_eq!(win_pct(1, 1), ".500");
        assert_eq!(win_pct(2, 0), "1.000");
    }
}
