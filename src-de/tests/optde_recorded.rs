use devo_de::{DEConfigBuilder, RecordError, run_recorded_differential_evolution};
use devo_de::plot::plot_convergence;
use devo_testfunctions::{ackley, sphere};

#[test]
fn test_de_recorded_sphere_csv() {
    let dir = tempfile::tempdir().unwrap();
    let bounds = vec![(-5.0, 5.0); 2];
    let config = DEConfigBuilder::new()
        .seed(42)
        .npop(15)
        .iter(60)
        .recombination(0.9)
        .mutation(0.5)
        .build()
        .unwrap();

    let (report, csv_path) =
        run_recorded_differential_evolution("sphere", sphere, &bounds, config, dir.path()).unwrap();

    assert_eq!(csv_path, dir.path().join("sphere.csv"));
    let mut reader = csv::Reader::from_path(&csv_path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["iteration", "x0", "x1", "best_result", "convergence", "is_improvement"]
    );

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 60);
    assert_eq!(&rows[0][0], "1");
    assert_eq!(&rows[59][0], "60");

    let best: Vec<f64> = rows.iter().map(|r| r[3].parse().unwrap()).collect();
    assert!(best.windows(2).all(|w| w[1] <= w[0]));
    let last = best[59];
    assert!((last - report.best_fitness).abs() <= 1e-12 * (1.0 + report.best_fitness.abs()));

    let x0: f64 = rows[59][1].parse().unwrap();
    assert!((x0 - report.best_solution[0]).abs() < 1e-12);
}

#[test]
fn test_de_recorded_invalid_bounds_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = DEConfigBuilder::new()
        .npop(10)
        .iter(5)
        .recombination(0.9)
        .mutation(0.5)
        .build()
        .unwrap();

    let result =
        run_recorded_differential_evolution("ackley", ackley, &[(1.0, -1.0)], config, dir.path());
    assert!(matches!(result, Err(RecordError::Optimizer(ref e)) if e.is_bounds_error()));
    assert!(!dir.path().join("ackley.csv").exists());
}

#[test]
fn test_de_convergence_chart() {
    let dir = tempfile::tempdir().unwrap();
    let bounds = vec![(-32.768, 32.768); 2];
    let config = DEConfigBuilder::new()
        .seed(1)
        .npop(20)
        .iter(50)
        .recombination(0.9)
        .mutation(0.5)
        .build()
        .unwrap();

    let mut trace: Vec<f64> = Vec::new();
    devo_de::differential_evolution_with_sink(&ackley, &bounds, config.clone(), &mut trace).unwrap();
    let path = dir.path().join("ackley_DE_rand_1_exp.html");
    plot_convergence(&trace, &config.scheme().to_string(), &path).unwrap();

    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.contains("Global optimal value"));
}
