#[cfg(test)]
mod tests {
    use crate::accumulate::*;
    use chrono::{TimeZone, Utc};
    use common::models::{Category, Stats};
    use db::pins::PinEngagement;
    use uuid::Uuid;

    fn make_engagement(comments: i64, likes: i64) -> PinEngagement {
        PinEngagement {
            pin_id: Uuid::new_v4(),
            comments,
            likes,
        }
    }

    fn make_snapshot(
        pin_engagement: Vec<PinEngagement>,
        comments_posted: i64,
        likes_posted: i64,
        saved_pins: i64,
    ) -> ActivitySnapshot {
        ActivitySnapshot {
            pin_engagement,
            comments_posted,
            likes_posted,
            saved_pins,
        }
    }

    // apply tests

    #[test]
    fn test_apply_counts_pins_and_engagement() {
        let snapshot = make_snapshot(
            vec![
                make_engagement(2, 5),
                make_engagement(7, 1),
                make_engagement(0, 0),
            ],
            4,
            12,
            3,
        );
        let stats = apply(&snapshot, &Stats::zero("amelie@corp.example"));

        assert_eq!(stats.pins_posted, 3);
        assert_eq!(stats.comments_received, 9);
        assert_eq!(stats.likes_received, 6);
        assert_eq!(stats.comments_received_one_pin, 7);
        assert_eq!(stats.likes_received_one_pin, 5);
        assert_eq!(stats.comments_posted, 4);
        assert_eq!(stats.likes_posted, 12);
        assert_eq!(stats.saved_pins, 3);
    }

    #[test]
    fn test_apply_empty_activity() {
        let snapshot = make_snapshot(vec![], 0, 0, 0);
        let stats = apply(&snapshot, &Stats::zero("amelie@corp.example"));

        assert_eq!(stats, Stats::zero("amelie@corp.example"));
    }

    #[test]
    fn test_apply_carries_over_tracked_counters() {
        let mut prev = Stats::zero("amelie@corp.example");
        prev.connections = 4;
        prev.secret_count = 2;
        prev.last_connection_at = Some(Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap());

        let snapshot = make_snapshot(vec![make_engagement(1, 1)], 0, 0, 0);
        let stats = apply(&snapshot, &prev);

        assert_eq!(stats.connections, 4);
        assert_eq!(stats.secret_count, 2);
        assert_eq!(stats.last_connection_at, prev.last_connection_at);
    }

    #[test]
    fn test_apply_overwrites_stale_counters() {
        // A deleted pin must pull the recomputed counters back down
        let mut prev = Stats::zero("amelie@corp.example");
        prev.pins_posted = 10;
        prev.comments_received = 40;
        prev.comments_received_one_pin = 12;

        let snapshot = make_snapshot(vec![make_engagement(3, 0)], 0, 0, 0);
        let stats = apply(&snapshot, &prev);

        assert_eq!(stats.pins_posted, 1);
        assert_eq!(stats.comments_received, 3);
        assert_eq!(stats.comments_received_one_pin, 3);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let snapshot = make_snapshot(vec![make_engagement(2, 8), make_engagement(5, 5)], 7, 9, 1);
        let first = apply(&snapshot, &Stats::zero("amelie@corp.example"));
        let second = apply(&snapshot, &first);

        assert_eq!(first, second);
    }

    #[test]
    fn test_apply_prolific_author() {
        // 51 pins, one of which drew all 71 comments and all 51 likes
        let mut engagement = vec![make_engagement(71, 51)];
        for _ in 0..50 {
            engagement.push(make_engagement(0, 0));
        }
        let snapshot = make_snapshot(engagement, 71, 0, 0);
        let stats = apply(&snapshot, &Stats::zero("amelie@corp.example"));

        assert_eq!(stats.pins_posted, 51);
        assert_eq!(stats.comments_posted, 71);
        assert_eq!(stats.comments_received, 71);
        assert_eq!(stats.comments_received_one_pin, 71);
        assert_eq!(stats.likes_received, 51);
        assert_eq!(stats.likes_received_one_pin, 51);
    }

    // crossed_milestones tests

    #[test]
    fn test_crossed_milestones_fires_on_milestone_rise() {
        let prev = Stats::zero("amelie@corp.example");
        let mut next = prev.clone();
        next.pins_posted = 10; // 50 points, level 3

        let crossed = crossed_milestones(&prev, &next);
        assert_eq!(crossed, vec![(Category::PinsPosted, 3)]);
    }

    #[test]
    fn test_crossed_milestones_skips_non_milestone_rise() {
        let prev = Stats::zero("amelie@corp.example");
        let mut next = prev.clone();
        next.pins_posted = 1; // 5 points, level 1

        assert!(crossed_milestones(&prev, &next).is_empty());
    }

    #[test]
    fn test_crossed_milestones_requires_a_rise() {
        let mut prev = Stats::zero("amelie@corp.example");
        prev.pins_posted = 10;
        let next = prev.clone();

        assert!(crossed_milestones(&prev, &next).is_empty());

        // A drop back below the milestone announces nothing either
        let mut dropped = prev.clone();
        dropped.pins_posted = 9;
        assert!(crossed_milestones(&prev, &dropped).is_empty());
    }

    #[test]
    fn test_crossed_milestones_reports_every_category() {
        let prev = Stats::zero("amelie@corp.example");
        let mut next = prev.clone();
        next.pins_posted = 10; // level 3
        next.saved_pins = 13; // 260 points, level 5

        let crossed = crossed_milestones(&prev, &next);
        assert_eq!(crossed.len(), 2);
        assert!(crossed.contains(&(Category::PinsPosted, 3)));
        assert!(crossed.contains(&(Category::SavedPins, 5)));
    }

    #[test]
    fn test_crossed_milestones_ignores_connections() {
        // Connections move through the connection tracker, not the recompute
        let prev = Stats::zero("amelie@corp.example");
        let mut next = prev.clone();
        next.connections = 25; // 50 points, level 3

        assert!(crossed_milestones(&prev, &next).is_empty());
    }
}
