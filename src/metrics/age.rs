//! Score-to-age lookup.
//!
//! A score rounds up to the next whole grade level before lookup. Grades 1
//! through 14 map to the upper bound of the matching age band; anything off
//! the table (including non-finite scores) maps to 0.

const AGE_TABLE: [u32; 14] = [6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 22];

/// Upper age bound understood to read at `score`, or 0 when off the table.
pub fn age_for_score(score: f64) -> u32 {
    let rounded = score.ceil() as i64;
    match rounded {
        1..=14 => AGE_TABLE[(rounded - 1) as usize],
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_grades_map_to_band_upper_bounds() {
        let expected = [6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 22];
        for (grade, age) in (1..=14).zip(expected) {
            assert_eq!(age_for_score(grade as f64), age, "grade {grade}");
        }
    }

    #[test]
    fn fractional_scores_round_up() {
        assert_eq!(age_for_score(0.5), 6);
        assert_eq!(age_for_score(3.2), 9);
        assert_eq!(age_for_score(13.5), 22);
    }

    #[test]
    fn off_table_scores_map_to_zero() {
        assert_eq!(age_for_score(0.0), 0);
        assert_eq!(age_for_score(-3.0), 0);
        assert_eq!(age_for_score(14.01), 0);
        assert_eq!(age_for_score(15.0), 0);
    }
}
