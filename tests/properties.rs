//! Property tests shared by every optimizer: results stay inside the box
//! and the reported value is the objective at the reported point.

use proptest::prelude::*;
use u_localsearch::objective::sphere;
use u_localsearch::random::create_rng;
use u_localsearch::{
    Bounds, HillClimbConfig, HillClimbRunner, RandomSearchConfig, RandomSearchRunner, SaConfig,
    SaRunner,
};

fn box_strategy() -> impl Strategy<Value = Bounds> {
    prop::collection::vec((-10.0f64..10.0, 0.0f64..10.0), 1..5).prop_map(|intervals| {
        let intervals = intervals
            .into_iter()
            .map(|(lo, width)| (lo, lo + width))
            .collect();
        Bounds::new(intervals).unwrap()
    })
}

/// Rastrigin: many local minima, global minimum 0 at the origin.
fn rastrigin(x: &[f64]) -> f64 {
    let a = 10.0;
    a * x.len() as f64
        + x.iter()
            .map(|&xi| xi * xi - a * (2.0 * std::f64::consts::PI * xi).cos())
            .sum::<f64>()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_samples_stay_in_box(bounds in box_strategy(), seed in any::<u64>()) {
        let mut rng = create_rng(seed);
        for _ in 0..20 {
            let point = bounds.sample(&mut rng);
            prop_assert!(bounds.contains(&point));
        }
    }

    #[test]
    fn prop_clamp_lands_in_box(
        bounds in box_strategy(),
        raw in prop::collection::vec(-1e6f64..1e6, 4),
    ) {
        let mut point = raw[..bounds.dim()].to_vec();
        bounds.clamp(&mut point);
        prop_assert!(bounds.contains(&point));
    }

    #[test]
    fn prop_hc_result_in_box(
        bounds in box_strategy(),
        step_size in 0.0f64..20.0,
        seed in any::<u64>(),
    ) {
        let config = HillClimbConfig::default()
            .with_max_iterations(100)
            .with_epsilon(0.0)
            .with_step_size(step_size)
            .with_seed(seed);

        let result = HillClimbRunner::run(&rastrigin, &bounds, &config).unwrap();

        prop_assert!(bounds.contains(&result.best));
        prop_assert_eq!(result.best_value, rastrigin(&result.best));
    }

    #[test]
    fn prop_rls_result_in_box(bounds in box_strategy(), seed in any::<u64>()) {
        let config = RandomSearchConfig::default()
            .with_max_iterations(100)
            .with_epsilon(0.0)
            .with_seed(seed);

        let result = RandomSearchRunner::run(&rastrigin, &bounds, &config).unwrap();

        prop_assert!(bounds.contains(&result.best));
        prop_assert_eq!(result.best_value, rastrigin(&result.best));
    }

    #[test]
    fn prop_sa_result_in_box(bounds in box_strategy(), seed in any::<u64>()) {
        let config = SaConfig::default().with_max_iterations(200).with_seed(seed);

        let result = SaRunner::run(&rastrigin, &bounds, &config).unwrap();

        prop_assert!(bounds.contains(&result.best));
        prop_assert_eq!(result.best_value, rastrigin(&result.best));
    }

    #[test]
    fn prop_best_never_worse_than_start(seed in any::<u64>()) {
        let bounds = Bounds::uniform(2, -5.0, 5.0).unwrap();
        let start = sphere(&bounds.sample(&mut create_rng(seed)));

        let rls = RandomSearchRunner::run(
            &sphere,
            &bounds,
            &RandomSearchConfig::default().with_epsilon(0.0).with_seed(seed),
        )
        .unwrap();
        prop_assert!(rls.best_value <= start);

        let sa = SaRunner::run(&sphere, &bounds, &SaConfig::default().with_seed(seed)).unwrap();
        prop_assert!(sa.best_value <= start);

        let hc = HillClimbRunner::run(
            &sphere,
            &bounds,
            &HillClimbConfig::default().with_seed(seed),
        )
        .unwrap();
        prop_assert!(hc.best_value <= start);
    }
}
