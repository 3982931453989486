#[cfg(test)]
mod tests {
    use crate::levels::*;
    use common::models::Category;

    // level tests

    #[test]
    fn test_level_zero_points() {
        assert_eq!(level(0.0), 0);
    }

    #[test]
    fn test_level_at_each_threshold() {
        for (i, threshold) in THRESHOLDS.iter().enumerate() {
            assert_eq!(level(*threshold), i as i16 + 1);
        }
    }

    #[test]
    fn test_level_just_below_each_threshold() {
        for (i, threshold) in THRESHOLDS.iter().enumerate() {
            assert_eq!(level(threshold - 1.0), i as i16);
        }
    }

    #[test]
    fn test_level_monotonic() {
        let mut prev = level(0.0);
        for points in [0.5, 1.0, 9.0, 10.0, 76.5, 255.0, 497.0, 5000.0, 20000.0] {
            let lvl = level(points);
            assert!(lvl >= prev, "level({}) dropped below level of smaller input", points);
            prev = lvl;
        }
    }

    #[test]
    fn test_level_beyond_top_threshold() {
        assert_eq!(level(10000.0), MAX_LEVEL);
        assert_eq!(level(1_000_000.0), MAX_LEVEL);
    }

    // percent_to_next tests

    #[test]
    fn test_percent_is_100_at_max_level() {
        assert_eq!(percent_to_next(10000.0), 100);
        assert_eq!(percent_to_next(99999.0), 100);
    }

    #[test]
    fn test_percent_below_first_threshold_measures_against_one() {
        // Below level 1 the percentage is points * 100, capped at 100
        assert_eq!(percent_to_next(0.0), 0);
        assert_eq!(percent_to_next(0.5), 50);
        assert_eq!(percent_to_next(0.996), 100);
    }

    #[test]
    fn test_percent_mid_level_window() {
        // 76.5 points sits at level 3, 53% of the way from 50 to 100
        assert_eq!(level(76.5), 3);
        assert_eq!(percent_to_next(76.5), 53);
    }

    #[test]
    fn test_percent_at_threshold_is_zero() {
        // Landing exactly on a threshold starts the next window
        assert_eq!(percent_to_next(50.0), 0);
        assert_eq!(percent_to_next(250.0), 0);
    }

    #[test]
    fn test_percent_bounded_for_mid_levels() {
        for points in [1.0, 5.0, 49.0, 76.5, 213.0, 497.0, 4999.0, 9999.0] {
            let pct = percent_to_next(points);
            assert!(pct <= 100, "percent_to_next({}) = {} out of range", points, pct);
        }
    }

    // weighted level tests

    #[test]
    fn test_points_applies_category_weight() {
        assert_eq!(points(Category::SavedPins, 2), 40.0);
        assert_eq!(points(Category::LikesPosted, 10), 15.0);
        assert_eq!(points(Category::PinsPosted, 51), 255.0);
    }

    #[test]
    fn test_weighted_level_per_category() {
        // 51 pins at weight 5 = 255 points
        assert_eq!(weighted_level(Category::PinsPosted, 51), 5);
        // 51 likes received at weight 1.5 = 76.5 points
        assert_eq!(weighted_level(Category::LikesReceived, 51), 3);
        // 71 comments on one pin at weight 7 = 497 points, just shy of 500
        assert_eq!(weighted_level(Category::CommentsReceivedOnePin, 71), 5);
    }

    #[test]
    fn test_weighted_level_zero_count() {
        for category in Category::SCORABLE {
            assert_eq!(weighted_level(category, 0), 0);
        }
    }

    // milestone tests

    #[test]
    fn test_milestone_levels() {
        for lvl in MILESTONES {
            assert!(is_milestone(lvl));
        }
        for lvl in [0, 1, 2, 4, 6, 8, 9] {
            assert!(!is_milestone(lvl));
        }
    }
}
