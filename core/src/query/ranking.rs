use fragstat_types::RankingEntry;
use hashbrown::HashMap;

use crate::session::Match;

/// Kills summed per player across matches, highest first. Ties go to the
/// alphabetically smaller name.
pub fn player_rankings(matches: &[Match]) -> Vec<RankingEntry> {
    let mut totals: HashMap<&str, u32> = HashMap::new();
    for game in matches {
        for (player, kills) in game.kills() {
            *totals.entry(player.as_str()).or_insert(0) += kills;
        }
    }

    let mut rankings: Vec<RankingEntry> = totals
        .into_iter()
        .map(|(name, total_kills)| RankingEntry {
            name: name.to_string(),
            total_kills,
        })
        .collect();
    rankings.sort_by(|a, b| {
        b.total_kills
            .cmp(&a.total_kills)
            .then_with(|| a.name.cmp(&b.name))
    });
    rankings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(id: &str, kills: &[(&str, u32)]) -> Match {
        let mut m = Match::new(id);
        for (name, count) in kills {
            m.add_player(name);
            for _ in 0..*count {
                m.credit_kill(name);
            }
        }
        m
    }

    fn names(rankings: &[RankingEntry]) -> Vec<&str> {
        rankings.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_rankings_sum_and_sort() {
        let matches = [
            game("match_1", &[("Zeh", 3), ("Isgalamido", 1)]),
            game("match_2", &[("Isgalamido", 4), ("Mocinha", 0)]),
        ];

        let rankings = player_rankings(&matches);
        assert_eq!(names(&rankings), vec!["Isgalamido", "Zeh", "Mocinha"]);
        assert_eq!(rankings[0].total_kills, 5);
        assert_eq!(rankings[2].total_kills, 0);
    }

    #[test]
    fn test_rankings_ties_break_by_name() {
        let forward = [game("match_1", &[("Zeh", 2), ("Assasinu Credi", 2), ("Mal", 2)])];
        let backward = [game("match_1", &[("Mal", 2), ("Assasinu Credi", 2), ("Zeh", 2)])];

        let expected = vec!["Assasinu Credi", "Mal", "Zeh"];
        assert_eq!(names(&player_rankings(&forward)), expected);
        assert_eq!(names(&player_rankings(&backward)), expected);
    }
}
