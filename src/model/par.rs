use crate::model::score::format_relative;

pub const HOLES_PER_ROUND: usize = 18;

pub const PAR_TABLE: [i32; HOLES_PER_ROUND] = [4, 5, 4, 3, 4, 3, 4, 5, 4, 4, 4, 3, 5, 4, 5, 3, 4, 4];

const DEFAULT_PAR: i32 = 4;

/// Par of the first `holes_played` holes. Holes past the table count as par 4.
#[must_use]
pub fn partial_par(holes_played: usize) -> i32 {
    (0..holes_played)
        .map(|i| PAR_TABLE.get(i).copied().unwrap_or(DEFAULT_PAR))
        .sum()
}

#[must_use]
pub fn calculate_over_under_par(score: i32, holes_played: usize) -> String {
    format_relative(score - partial_par(holes_played))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_round_par_is_72() {
        assert_eq!(partial_par(HOLES_PER_ROUND), 72);
    }

    #[test]
    fn table_holds_only_real_pars() {
        assert!(PAR_TABLE.iter().all(|p| (3..=5).contains(p)));
    }
}
