use crate::error::Error;
use crate::types::PrizeTier;

/// How many of `chosen` appear in `drawn`. Comparison is exact string
/// equality; a duplicated entry in `chosen` counts every time it appears.
pub fn count_hits(drawn: &[String], chosen: &[String]) -> usize {
    chosen
        .iter()
        .filter(|number| drawn.iter().any(|d| d == *number))
        .count()
}

/// Winnings in minor units for a hit combination. Looks up the tier named
/// `"{p}+{s} oikein"`; a missing tier means the combination pays nothing.
pub fn match_prize(tiers: &[PrizeTier], primary_hits: usize, secondary_hits: usize) -> i64 {
    let key = format!("{primary_hits}+{secondary_hits} oikein");
    tiers
        .iter()
        .find(|tier| tier.name == key)
        .map(|tier| tier.share_amount)
        .unwrap_or(0)
}

/// The tier with the largest nonzero payout, falling back to the first tier
/// (the top "5+2" bracket) when no tier has winners yet. A `share_amount` of
/// 0 on the returned tier means no winner has been announced.
pub fn biggest_prize_tier<'a>(tiers: &'a [PrizeTier], draw: &str) -> Result<&'a PrizeTier, Error> {
    let mut iter = tiers.iter();
    let first = iter.next().ok_or_else(|| Error::EmptyTierList {
        draw: draw.to_string(),
    })?;

    let mut biggest = first;
    for tier in iter {
        if tier.share_amount > biggest.share_amount {
            biggest = tier;
        }
    }
    Ok(biggest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn tier(name: &str, share_amount: i64) -> PrizeTier {
        PrizeTier {
            id: name.to_string(),
            name: name.to_string(),
            share_count: if share_amount > 0 { 1 } else { 0 },
            share_amount,
            additional_prize_tier: false,
        }
    }

    #[test]
    fn counts_chosen_numbers_present_in_drawn() {
        let drawn = strings(&["1", "2", "3", "4", "5"]);
        let chosen = strings(&["1", "2", "3", "18", "32"]);
        assert_eq!(count_hits(&drawn, &chosen), 3);
    }

    #[test]
    fn empty_inputs_give_zero_hits() {
        assert_eq!(count_hits(&[], &strings(&["1", "2"])), 0);
        assert_eq!(count_hits(&strings(&["1", "2"]), &[]), 0);
    }

    #[test]
    fn duplicate_chosen_numbers_count_each_time() {
        let drawn = strings(&["7"]);
        let chosen = strings(&["7", "7"]);
        assert_eq!(count_hits(&drawn, &chosen), 2);
    }

    #[test]
    fn matching_is_case_sensitive_exact_string_comparison() {
        let drawn = strings(&["07"]);
        let chosen = strings(&["7"]);
        assert_eq!(count_hits(&drawn, &chosen), 0);
    }

    #[test]
    fn prize_matches_exact_tier_name() {
        let tiers = vec![tier("5+2 oikein", 0), tier("3+1 oikein", 2340)];
        assert_eq!(match_prize(&tiers, 3, 1), 2340);
    }

    #[test]
    fn unmatched_combination_pays_nothing() {
        let tiers = vec![tier("5+2 oikein", 0)];
        assert_eq!(match_prize(&tiers, 1, 0), 0);
        assert_eq!(match_prize(&[], 5, 2), 0);
    }

    #[test]
    fn biggest_tier_is_the_largest_payout() {
        let tiers = vec![
            tier("5+2 oikein", 0),
            tier("5+1 oikein", 5000),
            tier("5+0 oikein", 0),
        ];
        let biggest = biggest_prize_tier(&tiers, "test").unwrap();
        assert_eq!(biggest.name, "5+1 oikein");
        assert_eq!(biggest.share_amount, 5000);
    }

    #[test]
    fn all_zero_tiers_fall_back_to_first() {
        let tiers = vec![tier("5+2 oikein", 0), tier("5+1 oikein", 0)];
        let biggest = biggest_prize_tier(&tiers, "test").unwrap();
        assert_eq!(biggest.name, "5+2 oikein");
        assert_eq!(biggest.share_amount, 0);
    }

    #[test]
    fn first_of_equal_payouts_wins() {
        let tiers = vec![tier("4+2 oikein", 300), tier("4+1 oikein", 300)];
        let biggest = biggest_prize_tier(&tiers, "test").unwrap();
        assert_eq!(biggest.name, "4+2 oikein");
    }

    #[test]
    fn empty_tier_list_is_an_error() {
        assert!(matches!(
            biggest_prize_tier(&[], "Eurojackpot"),
            Err(Error::EmptyTierList { .. })
        ));
    }
}
