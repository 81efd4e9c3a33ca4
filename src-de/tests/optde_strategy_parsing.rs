use devo_de::{Crossover, DEConfig, DEConfigBuilder, DEError, Scheme, Strategy};

#[test]
fn test_every_scheme_round_trips_through_notation() {
    for strategy in [
        Strategy::Rand1,
        Strategy::Best1,
        Strategy::TargetToBest1,
        Strategy::Best2,
        Strategy::Rand2,
        Strategy::Rand2Dir,
    ] {
        for crossover in [Crossover::Exponential, Crossover::Binomial] {
            let scheme = Scheme { strategy, crossover };
            let parsed: Scheme = scheme.to_string().parse().unwrap();
            assert_eq!(parsed, scheme);
        }
    }
}

#[test]
fn test_parse_aliases() {
    assert_eq!("currenttobest1".parse::<Strategy>().unwrap(), Strategy::TargetToBest1);
    assert_eq!("Rand2Dir".parse::<Strategy>().unwrap(), Strategy::Rand2Dir);
    assert_eq!("exponential".parse::<Crossover>().unwrap(), Crossover::Exponential);
    assert_eq!(" BIN ".parse::<Crossover>().unwrap(), Crossover::Binomial);
    assert!("uniform".parse::<Crossover>().is_err());
    assert!("DE/worst/1/bin".parse::<Scheme>().is_err());
}

#[test]
fn test_population_requirement_per_strategy() {
    let cases = [
        (Strategy::Best1, 2),
        (Strategy::TargetToBest1, 2),
        (Strategy::Rand1, 3),
        (Strategy::Rand2Dir, 3),
        (Strategy::Best2, 4),
        (Strategy::Rand2, 5),
    ];
    for (strategy, required) in cases {
        let base = DEConfigBuilder::new()
            .iter(1)
            .recombination(0.5)
            .mutation(0.5)
            .strategy(strategy);
        assert!(base.clone().npop(required).build().is_ok());
        let err = base.npop(required - 1).build().unwrap_err();
        assert!(err.is_config_error());
        assert!(matches!(err, DEError::PopulationTooSmall { .. }));
    }
}

#[test]
fn test_config_serializes_to_json() {
    let config = DEConfigBuilder::new()
        .npop(50)
        .iter(1000)
        .recombination(0.2)
        .mutation(0.6)
        .seed(7)
        .strategy(Strategy::Best2)
        .crossover(Crossover::Binomial)
        .build()
        .unwrap();
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"strategy\":\"best2\""));
    let back: DEConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}
