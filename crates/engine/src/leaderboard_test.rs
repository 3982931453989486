#[cfg(test)]
mod tests {
    use crate::leaderboard::*;
    use chrono::Utc;
    use common::models::{Profile, Stats, User};
    use std::collections::HashMap;
    use uuid::Uuid;

    fn make_profile(email: &str) -> Profile {
        Profile::User(User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            display_name: email.split('@').next().unwrap().to_string(),
            custom_avatar: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        })
    }

    fn make_stats(email: &str) -> Stats {
        Stats::zero(email)
    }

    fn profile_map(emails: &[&str]) -> HashMap<String, Profile> {
        emails
            .iter()
            .map(|e| (e.to_string(), make_profile(e)))
            .collect()
    }

    fn keys(entries: &[Option<Profile>]) -> Vec<&str> {
        entries
            .iter()
            .map(|e| e.as_ref().map(|p| p.key()).unwrap_or("<none>"))
            .collect()
    }

    #[test]
    fn test_build_keeps_every_profile_for_small_input() {
        let emails = ["a@corp.example", "b@corp.example", "c@corp.example"];
        let stats: Vec<Stats> = emails.iter().map(|e| make_stats(e)).collect();

        let board = build(stats, &profile_map(&emails));

        assert_eq!(board.pins_posted.len(), 3);
        assert_eq!(board.connections.len(), 3);
    }

    #[test]
    fn test_build_caps_at_ten() {
        let emails: Vec<String> = (0..12).map(|i| format!("u{}@corp.example", i)).collect();
        let stats: Vec<Stats> = emails
            .iter()
            .enumerate()
            .map(|(i, e)| {
                let mut s = make_stats(e);
                s.pins_posted = i as i64;
                s
            })
            .collect();
        let email_refs: Vec<&str> = emails.iter().map(|e| e.as_str()).collect();

        let board = build(stats, &profile_map(&email_refs));

        assert_eq!(board.pins_posted.len(), LEADERBOARD_SIZE);
        // u11 posted the most, u2 closes the board, u1 and u0 fall off
        assert_eq!(keys(&board.pins_posted)[0], "u11@corp.example");
        assert_eq!(keys(&board.pins_posted)[9], "u2@corp.example");
    }

    #[test]
    fn test_build_ranks_descending() {
        let emails = ["a@corp.example", "b@corp.example", "c@corp.example"];
        let mut stats: Vec<Stats> = emails.iter().map(|e| make_stats(e)).collect();
        stats[0].comments_posted = 2;
        stats[1].comments_posted = 9;
        stats[2].comments_posted = 5;

        let board = build(stats, &profile_map(&emails));

        assert_eq!(
            keys(&board.comments_posted),
            vec!["b@corp.example", "c@corp.example", "a@corp.example"]
        );
    }

    #[test]
    fn test_missing_profile_kept_in_place_as_none() {
        let emails = ["a@corp.example", "ghost@corp.example"];
        let mut stats: Vec<Stats> = emails.iter().map(|e| make_stats(e)).collect();
        stats[0].pins_posted = 1;
        stats[1].pins_posted = 8; // tops the board but no longer resolves

        let board = build(stats, &profile_map(&["a@corp.example"]));

        assert!(board.pins_posted[0].is_none());
        assert_eq!(keys(&board.pins_posted)[1], "a@corp.example");

        // The hole survives serialization for downstream consumers to filter
        let json = serde_json::to_value(&board).unwrap();
        assert!(json["pins_posted"][0].is_null());
    }

    #[test]
    fn test_ties_keep_order_left_by_previous_sort() {
        let emails = ["a@corp.example", "b@corp.example"];
        let mut stats: Vec<Stats> = emails.iter().map(|e| make_stats(e)).collect();
        stats[0].pins_posted = 3;
        stats[1].pins_posted = 5;
        // comments_posted ties at zero for both

        let board = build(stats, &profile_map(&emails));

        // The comments ranking inherits the order the pins sort produced
        assert_eq!(
            keys(&board.comments_posted),
            vec!["b@corp.example", "a@corp.example"]
        );
    }

    #[test]
    fn test_every_ranked_counter_beats_the_cut() {
        let emails: Vec<String> = (0..15).map(|i| format!("u{}@corp.example", i)).collect();
        let stats: Vec<Stats> = emails
            .iter()
            .enumerate()
            .map(|(i, e)| {
                let mut s = make_stats(e);
                s.likes_received = ((i * 7) % 13) as i64;
                s
            })
            .collect();
        let by_key: HashMap<String, i64> = stats
            .iter()
            .map(|s| (s.profile_key.clone(), s.likes_received))
            .collect();
        let email_refs: Vec<&str> = emails.iter().map(|e| e.as_str()).collect();

        let board = build(stats, &profile_map(&email_refs));

        let ranked: Vec<i64> = board
            .likes_received
            .iter()
            .map(|p| by_key[p.as_ref().unwrap().key()])
            .collect();
        let cut = ranked.iter().min().unwrap();
        let excluded = by_key.len() - ranked.len();

        assert_eq!(ranked.len(), LEADERBOARD_SIZE);
        assert_eq!(excluded, 5);
        for (key, count) in &by_key {
            if !board
                .likes_received
                .iter()
                .any(|p| p.as_ref().map(|q| q.key()) == Some(key.as_str()))
            {
                assert!(count <= cut, "excluded {} outranks the board", key);
            }
        }
    }
}
