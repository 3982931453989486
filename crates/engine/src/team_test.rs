#[cfg(test)]
mod tests {
    use crate::team::*;
    use common::models::Stats;

    fn make_member(email: &str) -> Stats {
        Stats::zero(email)
    }

    // modulator tests

    #[test]
    fn test_modulator_small_teams_untouched() {
        assert_eq!(modulator(0), 1.0);
        assert_eq!(modulator(1), 1.0);
        assert_eq!(modulator(3), 1.0);
    }

    #[test]
    fn test_modulator_grows_past_three() {
        assert_eq!(modulator(4), 1.5);
        assert_eq!(modulator(5), 2.0);
        assert_eq!(modulator(7), 3.0);
    }

    // aggregate tests

    #[test]
    fn test_aggregate_sums_additive_counters() {
        let mut a = make_member("a@corp.example");
        a.pins_posted = 3;
        a.likes_posted = 7;
        a.comments_posted = 2;
        a.connections = 10;
        let mut b = make_member("b@corp.example");
        b.pins_posted = 5;
        b.likes_received = 4;
        b.comments_received = 9;
        b.saved_pins = 1;

        let aggregate = aggregate("design", &[a, b]);
        let stats = aggregate.stats;

        assert_eq!(stats.pins_posted, 8);
        assert_eq!(stats.likes_posted, 7);
        assert_eq!(stats.likes_received, 4);
        assert_eq!(stats.comments_posted, 2);
        assert_eq!(stats.comments_received, 9);
        assert_eq!(stats.saved_pins, 1);
        assert_eq!(stats.connections, 10);
        assert_eq!(aggregate.members, 2);
    }

    #[test]
    fn test_aggregate_takes_maximum_for_one_pin_counters() {
        let mut a = make_member("a@corp.example");
        a.likes_received_one_pin = 5;
        a.comments_received_one_pin = 2;
        let mut b = make_member("b@corp.example");
        b.likes_received_one_pin = 9;
        b.comments_received_one_pin = 1;

        let stats = aggregate("design", &[a, b]).stats;

        assert_eq!(stats.likes_received_one_pin, 9);
        assert_eq!(stats.comments_received_one_pin, 2);
    }

    #[test]
    fn test_aggregate_three_members_unmodulated() {
        let members: Vec<Stats> = (0..3)
            .map(|i| {
                let mut m = make_member(&format!("m{}@corp.example", i));
                m.pins_posted = 4;
                m
            })
            .collect();

        let stats = aggregate("design", &members).stats;
        assert_eq!(stats.pins_posted, 12);
    }

    #[test]
    fn test_aggregate_five_members_halved() {
        let members: Vec<Stats> = (0..5)
            .map(|i| {
                let mut m = make_member(&format!("m{}@corp.example", i));
                m.pins_posted = 3;
                m.likes_received_one_pin = 6;
                m
            })
            .collect();

        let stats = aggregate("design", &members).stats;

        // 15 summed pins over a factor of 2.0, truncated
        assert_eq!(stats.pins_posted, 7);
        // The per-pin maximum is never modulated
        assert_eq!(stats.likes_received_one_pin, 6);
    }

    #[test]
    fn test_aggregate_truncates_toward_zero() {
        let members: Vec<Stats> = (0..4)
            .map(|i| {
                let mut m = make_member(&format!("m{}@corp.example", i));
                m.comments_posted = 5;
                m
            })
            .collect();

        // 20 summed comments over a factor of 1.5 is 13.33
        let stats = aggregate("design", &members).stats;
        assert_eq!(stats.comments_posted, 13);
    }

    #[test]
    fn test_aggregate_counts_secret_members() {
        let mut a = make_member("a@corp.example");
        a.secret_count = 4;
        let mut b = make_member("b@corp.example");
        b.secret_count = 1;
        let c = make_member("c@corp.example");

        let stats = aggregate("design", &[a, b, c]).stats;

        // Two members found the secret, whatever their individual counts
        assert_eq!(stats.secret_count, 2);
    }

    #[test]
    fn test_aggregate_secret_count_unmodulated() {
        let members: Vec<Stats> = (0..5)
            .map(|i| {
                let mut m = make_member(&format!("m{}@corp.example", i));
                m.secret_count = 1;
                m
            })
            .collect();

        let stats = aggregate("design", &members).stats;
        assert_eq!(stats.secret_count, 5);
    }

    #[test]
    fn test_aggregate_marks_team_row() {
        let aggregate = aggregate("design", &[make_member("a@corp.example")]);

        assert_eq!(aggregate.stats.profile_key, "design");
        assert!(aggregate.stats.team);
        assert_eq!(aggregate.members, 1);
    }

    #[test]
    fn test_aggregate_empty_team() {
        let aggregate = aggregate("design", &[]);

        assert_eq!(aggregate.stats, {
            let mut zero = Stats::zero("design");
            zero.team = true;
            zero
        });
        assert_eq!(aggregate.members, 0);
    }
}
