use azimuth::*;

const OBJECTS: [&str; 4] = ["bus", "car", "chair", "sofa"];

/// sofa has no back classes, chair has only a front class
fn taxonomy() -> Taxonomy {
    let labels = OBJECTS
        .iter()
        .flat_map(|o| Direction::all().iter().map(move |d| (*o, *d)))
        .filter(|(o, d)| !(*o == "sofa" && *d == Direction::Back))
        .filter(|(o, d)| *o != "chair" || *d == Direction::Front)
        .map(|(o, d)| format!("{}_{}", o, d))
        .collect::<Vec<String>>();
    Taxonomy::build(ClassIndex::new(labels).expect("valid labels")).expect("valid taxonomy")
}

fn peaked(t: &Taxonomy, hot: &str, id: &str, truth: Option<&str>) -> Sample {
    let hot = t.index().position(hot).expect("known label");
    let scores = (0..t.n_classes())
        .map(|c| if c == hot { 6.0 } else { 0.0 })
        .collect::<Vec<Score>>();
    Sample::new(id, truth.map(String::from), scores)
}

fn batch(t: &Taxonomy) -> Vec<Sample> {
    vec![
        peaked(t, "bus_front", "val/bus_front/0.jpg", None),
        peaked(t, "bus_side", "val/bus_frontside/1.jpg", None),
        peaked(t, "car_back", "val/bus_back/2.jpg", None),
        peaked(t, "sofa_side", "x/3.jpg", Some("sofa_side")),
        peaked(t, "chair_front", "val/chair_front/4.jpg", None),
        peaked(t, "car_front", "val/tram_front/5.jpg", None),
    ]
}

#[test]
fn summary_counts_every_scope() {
    let t = taxonomy();
    let summary = Evaluator::par_run(&t, &batch(&t)).expect("well-formed samples");
    let text = summary.to_string();
    assert!(text.starts_with("Object\tDirection\t#Samples\tTOP1 (%)\tTOP5 (%)\n"));
    assert!(text.contains("bus\tfront\t1\t100.00\t100.00\n"));
    assert!(text.contains("bus\tfrontside\t1\t0.00\t100.00\n"));
    // car_back outranks every bus sector, but bus_back is still populated
    assert!(text.contains("bus\tback\t1\t0.00\t100.00\n"));
    assert!(text.contains("sofa\tside\t1\t100.00\t100.00\n"));
    assert!(text.contains("sofa\tback\t0\tnan\tnan\n"));
    // chair's lone sector cascades to nothing, so it never ranks first
    assert!(text.contains("chair\tfront\t1\t0.00\t0.00\n"));
    assert!(text.contains("bus: TOP1 = 2/3 (66.67%), TOP5 = 3/3 (100.00%)\n"));
    assert!(text.contains("chair: TOP1 = 0/1 (0.00%), TOP5 = 1/1 (100.00%)\n"));
    assert!(text.contains("car: TOP1 = 0/0 (nan%), TOP5 = 0/0 (nan%)\n"));
    assert!(text.contains("tram: TOP1 = 0/1 (0.00%), TOP5 = 0/1 (0.00%)\n"));
    assert!(text.contains("TOP1: 3/6 (50.00%)\nTOP5: 5/6 (83.33%)\n"));
}

#[test]
fn global_equals_sum_of_objects() {
    let t = taxonomy();
    let samples = (0..500)
        .map(|i| {
            let scores = (0..t.n_classes())
                .map(|_| rand::random::<Score>() * 4.0 - 2.0)
                .collect::<Vec<Score>>();
            let truth = t.label(rand::random_range(0..t.n_classes())).to_string();
            Sample::new(format!("{}", i), Some(truth), scores)
        })
        .collect::<Vec<Sample>>();
    let summary = Evaluator::par_run(&t, &samples).expect("well-formed samples");
    let sum = summary.objects().iter().map(|row| *row.accuracy()).sum::<Accuracy>();
    assert_eq!(*summary.overall(), sum);
    let cells = summary.cells().iter().map(|row| row.accuracy().total()).sum::<usize>();
    assert_eq!(cells, 500);
}

#[test]
fn repeated_runs_are_identical() {
    let t = taxonomy();
    let samples = batch(&t);
    let first = Evaluator::par_run(&t, &samples).expect("well-formed samples");
    let again = Evaluator::new(&t)
        .run(samples.into_iter().map(Ok), std::io::sink())
        .expect("well-formed samples");
    assert_eq!(first.to_string(), again.to_string());
}

#[cfg(feature = "cli")]
#[test]
fn command_line_writes_reports() {
    use clap::Parser;
    let t = taxonomy();
    let root = std::env::temp_dir().join(format!("azimuth-cli-{}", std::process::id()));
    std::fs::create_dir_all(&root).expect("temp dir");
    let classes = root.join("classes.txt");
    let scores = root.join("val.jsonl");
    std::fs::write(&classes, t.index().labels().collect::<Vec<_>>().join("\n")).expect("write");
    std::fs::write(
        &scores,
        batch(&t)
            .iter()
            .map(|s| serde_json::to_string(s).expect("serialize"))
            .collect::<Vec<_>>()
            .join("\n"),
    )
    .expect("write");
    let output = root.join("out");
    let argv: Vec<std::ffi::OsString> = vec![
        "evaluate".into(),
        "--classes".into(),
        classes.into_os_string(),
        "--scores".into(),
        scores.into_os_string(),
        "--output".into(),
        output.clone().into_os_string(),
        "--json".into(),
    ];
    let summary = cli::Args::parse_from(argv).run().expect("run succeeds");
    let run = std::fs::read_dir(&output)
        .expect("output exists")
        .next()
        .expect("one run directory")
        .expect("readable entry")
        .path();
    let text = std::fs::read_to_string(run.join(SUMMARY_FILE)).expect("summary written");
    assert_eq!(text, summary.to_string());
    let detail = std::fs::read_to_string(run.join(DETAIL_FILE)).expect("detail written");
    assert_eq!(detail.matches("[Image: ").count(), 6);
    assert!(run.join(SUMMARY_JSON).exists());
    assert!(run.join(ARGS_FILE).exists());
    std::fs::remove_dir_all(&root).expect("cleanup");
}
