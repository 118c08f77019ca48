//! Unit tests for gm-rank.

#[cfg(test)]
mod mock {
    use gm_catalog::Candidate;
    use gm_core::ImageId;

    use crate::{MockScorer, SimilarityScorer};

    fn candidate(id: u32) -> Candidate {
        Candidate::new(ImageId(id), None)
    }

    #[test]
    fn deterministic_per_seed_and_candidate() {
        let a = MockScorer::new(42);
        let b = MockScorer::new(42);
        for id in 0..20 {
            assert_eq!(
                a.score(&candidate(id)).unwrap(),
                b.score(&candidate(id)).unwrap()
            );
        }
    }

    #[test]
    fn adjacent_candidates_diverge() {
        let scorer = MockScorer::new(1);
        let s0 = scorer.score(&candidate(0)).unwrap();
        let s1 = scorer.score(&candidate(1)).unwrap();
        assert_ne!(s0, s1, "seeds for adjacent candidates should diverge");
    }

    #[test]
    fn different_seeds_change_scores() {
        let s0 = MockScorer::new(7).score(&candidate(3)).unwrap();
        let s1 = MockScorer::new(8).score(&candidate(3)).unwrap();
        assert_ne!(s0, s1);
    }

    #[test]
    fn range_and_precision() {
        let scorer = MockScorer::new(99);
        for id in 0..200 {
            let c = scorer.score(&candidate(id)).unwrap();
            assert!((0.70..=0.95).contains(&c), "confidence {c} out of range");
            let thousandths = c * 1000.0;
            assert!(
                (thousandths - thousandths.round()).abs() < 1e-9,
                "confidence {c} not rounded to three decimals"
            );
        }
    }
}

#[cfg(test)]
mod ranker {
    use gm_catalog::Candidate;
    use gm_core::{GeoPoint, ImageId};

    use crate::{MockScorer, RankError, RankResult, Ranker, SimilarityScorer};

    /// Scores each candidate by indexing its id into a fixed table.
    struct FixedScorer(Vec<f64>);

    impl SimilarityScorer for FixedScorer {
        fn score(&self, candidate: &Candidate) -> RankResult<f64> {
            Ok(self.0[candidate.id.index()])
        }
    }

    struct FailingScorer;

    impl SimilarityScorer for FailingScorer {
        fn score(&self, candidate: &Candidate) -> RankResult<f64> {
            Err(RankError::Scorer {
                id: candidate.id,
                reason: "model offline".into(),
            })
        }
    }

    struct OutOfRangeScorer(f64);

    impl SimilarityScorer for OutOfRangeScorer {
        fn score(&self, _candidate: &Candidate) -> RankResult<f64> {
            Ok(self.0)
        }
    }

    fn located(id: u32, lat: f64, lon: f64) -> Candidate {
        Candidate::new(ImageId(id), Some(GeoPoint::new(lat, lon).unwrap()))
    }

    fn unlocated(id: u32) -> Candidate {
        Candidate::new(ImageId(id), None)
    }

    fn grid_catalog(n: u32) -> Vec<Candidate> {
        (0..n).map(|i| located(i, i as f64, i as f64)).collect()
    }

    #[test]
    fn default_top_k_caps_results() {
        let scores = (0..8).map(|i| 0.1 * i as f64).collect();
        let ranker = Ranker::new(FixedScorer(scores));
        let matches = ranker.rank(None, &grid_catalog(8)).unwrap();
        assert_eq!(matches.len(), 5);
    }

    #[test]
    fn top_k_past_catalog_returns_all_sorted() {
        let ranker = Ranker::new(FixedScorer(vec![0.2, 0.9, 0.5])).with_top_k(10);
        let matches = ranker.rank(None, &grid_catalog(3)).unwrap();
        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0].id, ImageId(1));
        assert_eq!(matches[1].id, ImageId(2));
        assert_eq!(matches[2].id, ImageId(0));
    }

    #[test]
    fn top_k_zero_yields_empty() {
        let ranker = Ranker::new(FixedScorer(vec![0.5])).with_top_k(0);
        assert!(ranker.rank(None, &grid_catalog(1)).unwrap().is_empty());
    }

    #[test]
    fn empty_catalog_is_not_an_error() {
        let ranker = Ranker::new(FixedScorer(vec![]));
        assert!(ranker.rank(None, &[]).unwrap().is_empty());
    }

    #[test]
    fn confidences_non_increasing() {
        let scores = vec![0.3, 0.9, 0.1, 0.7, 0.5, 0.8, 0.2];
        let ranker = Ranker::new(FixedScorer(scores)).with_top_k(7);
        let matches = ranker.rank(None, &grid_catalog(7)).unwrap();
        for pair in matches.windows(2) {
            assert!(pair[0].confidence >= pair[1].confidence);
        }
    }

    #[test]
    fn ties_keep_catalog_order() {
        let scores = vec![0.8, 0.9, 0.8, 0.9, 0.8];
        let ranker = Ranker::new(FixedScorer(scores)).with_top_k(5);
        let ids: Vec<_> = ranker
            .rank(None, &grid_catalog(5))
            .unwrap()
            .iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(
            ids,
            [ImageId(1), ImageId(3), ImageId(0), ImageId(2), ImageId(4)]
        );
    }

    #[test]
    fn unlocated_candidates_stay_in_ranking() {
        let user = GeoPoint::new(38.8719, -77.0563).unwrap();
        let catalog = vec![located(0, 27.9881, 86.9250), unlocated(1)];
        let ranker = Ranker::new(FixedScorer(vec![0.5, 0.9]));
        let matches = ranker.rank(Some(user), &catalog).unwrap();

        assert_eq!(matches.len(), 2, "unlocated candidate must not be dropped");
        let bare = matches.iter().find(|m| m.id == ImageId(1)).unwrap();
        assert!(bare.relative.is_none());
        assert!(bare.polar.is_none());
    }

    #[test]
    fn annotations_match_direct_math() {
        let user = GeoPoint::new(38.8719, -77.0563).unwrap();
        let everest = GeoPoint::new(27.9881, 86.9250).unwrap();
        let ranker = Ranker::new(FixedScorer(vec![0.8]));
        let matches = ranker
            .rank(Some(user), &[Candidate::new(ImageId(0), Some(everest))])
            .unwrap();

        let m = &matches[0];
        let rel = m.relative.unwrap();
        assert_eq!(rel.distance_km, user.distance_km(everest));
        assert_eq!(rel.bearing_deg, user.initial_bearing_deg(everest));
        assert_eq!(m.polar.unwrap(), everest.polar_distances());
    }

    #[test]
    fn missing_user_point_drops_relative_keeps_polar() {
        let ranker = Ranker::new(FixedScorer(vec![0.8]));
        let matches = ranker.rank(None, &[located(0, 10.0, 20.0)]).unwrap();
        assert!(matches[0].relative.is_none());
        assert!(matches[0].polar.is_some());
    }

    #[test]
    fn scorer_failure_propagates() {
        let ranker = Ranker::new(FailingScorer);
        let err = ranker.rank(None, &grid_catalog(3)).unwrap_err();
        assert!(matches!(err, RankError::Scorer { .. }));
    }

    #[test]
    fn out_of_range_confidence_rejected() {
        let ranker = Ranker::new(OutOfRangeScorer(1.5));
        let err = ranker.rank(None, &grid_catalog(1)).unwrap_err();
        assert!(matches!(err, RankError::ConfidenceOutOfRange { .. }));

        let ranker = Ranker::new(OutOfRangeScorer(f64::NAN));
        assert!(ranker.rank(None, &grid_catalog(1)).is_err());
    }

    #[test]
    fn mock_ranking_is_reproducible() {
        let user = GeoPoint::new(51.5007, -0.1246).unwrap();
        let catalog = grid_catalog(8);
        let first = Ranker::new(MockScorer::new(42)).rank(Some(user), &catalog).unwrap();
        let second = Ranker::new(MockScorer::new(42)).rank(Some(user), &catalog).unwrap();
        assert_eq!(first, second);
    }
}
