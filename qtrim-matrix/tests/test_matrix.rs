use std::io::{BufRead, Write};
use std::path::Path;

use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::*;
use tempfile::tempdir;

use qtrim_core::export::export_matrix;
use qtrim_core::models::criterion::{reaches_mean, within_percent};
use qtrim_core::simulate::simulate_fastq_file;
use qtrim_core::utils::{get_dynamic_reader, get_dynamic_writer};
use qtrim_core::{
    Classifier, CountMatrix, Criterion, InMemoryRows, InputFormat, Row, TrimConfig, TrimSettings,
    open_rows,
};
use qtrim_matrix::{MatrixBuilder, compute_matrix, compute_sequential, find_max_area};

#[fixture]
fn path_to_example_fastq() -> &'static str {
    "../tests/data/example.fastq"
}

#[fixture]
fn path_to_example_lines() -> &'static str {
    "../tests/data/example.txt"
}

#[fixture]
fn path_to_run_config() -> &'static str {
    "../tests/data/run.toml"
}

/// Count every window of every row directly against the criterion.
fn brute_force(rows: &[Vec<u8>], classifier: Classifier, criterion: Criterion) -> CountMatrix {
    let length = classifier.length();
    let mut matrix = CountMatrix::new(length);
    for data in rows {
        for left in 0..length {
            let mut bad = 0usize;
            let mut sum = 0i64;
            for right in left..length {
                if !classifier.is_good(data[right]) {
                    bad += 1;
                }
                sum += classifier.value(data[right]) as i64;
                let width = right - left + 1;
                let feasible = match criterion {
                    Criterion::ExactGood => bad == 0,
                    Criterion::KBadAllowed(k) => bad <= k,
                    Criterion::PercentBadAllowed(p) => within_percent(bad, width, p),
                    Criterion::MeanAtLeast(m) => reaches_mean(sum, width, m),
                };
                if feasible {
                    matrix.increment(left, right);
                }
            }
        }
    }
    matrix
}

fn random_grid(rng: &mut StdRng, rows: usize, length: usize, good: f64) -> Vec<Vec<u8>> {
    (0..rows)
        .map(|_| {
            (0..length)
                .map(|_| if rng.random_bool(good) { b'1' } else { b'0' })
                .collect()
        })
        .collect()
}

fn random_digits(rng: &mut StdRng, rows: usize, length: usize) -> Vec<Vec<u8>> {
    (0..rows)
        .map(|_| (0..length).map(|_| rng.random_range(b'0'..=b'9')).collect())
        .collect()
}

fn sequential(rows: &[Vec<u8>], classifier: Classifier, criterion: Criterion) -> CountMatrix {
    let settings = TrimSettings::new(rows.len(), classifier, criterion);
    compute_sequential(InMemoryRows::new(rows.to_vec()), &settings, false).unwrap()
}

#[rstest]
#[case(Criterion::ExactGood, 0.8)]
#[case(Criterion::ExactGood, 0.3)]
#[case(Criterion::KBadAllowed(0), 0.7)]
#[case(Criterion::KBadAllowed(1), 0.7)]
#[case(Criterion::KBadAllowed(3), 0.5)]
#[case(Criterion::KBadAllowed(40), 0.5)]
#[case(Criterion::PercentBadAllowed(0.0), 0.8)]
#[case(Criterion::PercentBadAllowed(0.25), 0.8)]
#[case(Criterion::PercentBadAllowed(0.5), 0.5)]
#[case(Criterion::PercentBadAllowed(1.0), 0.2)]
fn test_flag_criteria_match_brute_force(#[case] criterion: Criterion, #[case] good: f64) {
    let mut rng = StdRng::seed_from_u64(7);
    let rows = random_grid(&mut rng, 60, 23, good);
    let classifier = Classifier::grid(23);

    let expected = brute_force(&rows, classifier, criterion);
    assert_eq!(sequential(&rows, classifier, criterion), expected);
}

#[rstest]
#[case(0.0)]
#[case(3.5)]
#[case(4.5)]
#[case(7.0)]
#[case(10.0)]
fn test_mean_matches_brute_force(#[case] mean: f64) {
    let mut rng = StdRng::seed_from_u64(11);
    let rows = random_digits(&mut rng, 60, 19);
    let classifier = Classifier::new(19, None, b'0' as i32);
    let criterion = Criterion::MeanAtLeast(mean);

    let expected = brute_force(&rows, classifier, criterion);
    assert_eq!(sequential(&rows, classifier, criterion), expected);
}

#[rstest]
#[case(0.0)]
#[case(0.5)]
#[case(2.0)]
fn test_mean_with_negative_values_matches_brute_force(#[case] mean: f64) {
    // shifting by '5' maps the digits onto -5..=4
    let mut rng = StdRng::seed_from_u64(13);
    let rows = random_digits(&mut rng, 60, 21);
    let classifier = Classifier::new(21, None, b'5' as i32);
    let criterion = Criterion::MeanAtLeast(mean);

    let expected = brute_force(&rows, classifier, criterion);
    assert!(expected.iter().any(|(_, _, c)| c > 0));
    assert_eq!(sequential(&rows, classifier, criterion), expected);
}

#[rstest]
fn test_threshold_classifier_matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(3);
    let rows: Vec<Vec<u8>> = (0..40)
        .map(|_| (0..30).map(|_| rng.random_range(44u8..74)).collect())
        .collect();
    let classifier = Classifier::new(30, Some(20), 33);

    for criterion in [
        Criterion::ExactGood,
        Criterion::KBadAllowed(2),
        Criterion::PercentBadAllowed(0.1),
    ] {
        let expected = brute_force(&rows, classifier, criterion);
        assert_eq!(sequential(&rows, classifier, criterion), expected);
    }
}

#[rstest]
#[case(Criterion::ExactGood, 1, 1)]
#[case(Criterion::ExactGood, 4, 3)]
#[case(Criterion::KBadAllowed(2), 2, 1)]
#[case(Criterion::KBadAllowed(2), 8, 100)]
#[case(Criterion::PercentBadAllowed(0.3), 3, 2)]
#[case(Criterion::PercentBadAllowed(0.3), 1, 1000)]
fn test_parallel_equals_sequential(
    #[case] criterion: Criterion,
    #[case] threads: usize,
    #[case] capacity: usize,
) {
    let mut rng = StdRng::seed_from_u64(42);
    let rows = random_grid(&mut rng, 500, 17, 0.75);
    let classifier = Classifier::grid(17);

    let settings = TrimSettings::new(rows.len(), classifier, criterion)
        .with_threads(threads)
        .with_queue_capacity(capacity);
    let parallel = compute_matrix(InMemoryRows::new(rows.clone()), &settings, false).unwrap();

    assert_eq!(parallel, sequential(&rows, classifier, criterion));
}

#[rstest]
fn test_parallel_mean_equals_sequential() {
    let mut rng = StdRng::seed_from_u64(5);
    let rows = random_digits(&mut rng, 300, 12);
    let classifier = Classifier::new(12, None, b'0' as i32);
    let criterion = Criterion::MeanAtLeast(4.0);

    let settings = TrimSettings::new(rows.len(), classifier, criterion).with_threads(3);
    let parallel = compute_matrix(InMemoryRows::new(rows.clone()), &settings, false).unwrap();

    assert_eq!(parallel, sequential(&rows, classifier, criterion));
}

#[rstest]
#[case(Criterion::ExactGood)]
#[case(Criterion::KBadAllowed(2))]
fn test_hereditary_counts_shrink_outwards(#[case] criterion: Criterion) {
    let mut rng = StdRng::seed_from_u64(19);
    let rows = random_grid(&mut rng, 100, 15, 0.7);
    let matrix = sequential(&rows, Classifier::grid(15), criterion);

    for (left, right, count) in matrix.iter() {
        if left > 0 {
            assert!(matrix[(left - 1, right)] <= count);
        }
        if right + 1 < matrix.len() {
            assert!(matrix[(left, right + 1)] <= count);
        }
    }
}

#[rstest]
fn test_counts_are_additive_over_row_sets() {
    let mut rng = StdRng::seed_from_u64(23);
    let first = random_grid(&mut rng, 40, 10, 0.6);
    let second = random_grid(&mut rng, 70, 10, 0.6);
    let classifier = Classifier::grid(10);
    let criterion = Criterion::KBadAllowed(1);

    let mut merged = sequential(&first, classifier, criterion);
    merged
        .merge(&sequential(&second, classifier, criterion))
        .unwrap();

    let all: Vec<Vec<u8>> = first.into_iter().chain(second).collect();
    assert_eq!(sequential(&all, classifier, criterion), merged);
}

#[rstest]
fn test_builder_accepts_rows_out_of_order() {
    let rows = ["0111", "1101", "1111", "1000"];
    let classifier = Classifier::grid(4);

    let mut forward = MatrixBuilder::new(&Criterion::ExactGood, classifier);
    let mut backward = MatrixBuilder::new(&Criterion::ExactGood, classifier);
    for (i, r) in rows.iter().enumerate() {
        forward.push_row(&Row::new(i, r.as_bytes().to_vec())).unwrap();
    }
    for (i, r) in rows.iter().enumerate().rev() {
        backward.push_row(&Row::new(i, r.as_bytes().to_vec())).unwrap();
    }
    assert_eq!(forward.finish(), backward.finish());
}

#[rstest]
#[case(0)]
#[case(2)]
fn test_example_fastq_end_to_end(path_to_example_fastq: &str, #[case] threads: usize) {
    let rows = open_rows(Path::new(path_to_example_fastq), InputFormat::Fastq).unwrap();
    let settings = TrimSettings::new(2, Classifier::new(4, Some(1), 48), Criterion::ExactGood)
        .with_threads(threads);

    let matrix = compute_matrix(rows, &settings, false).unwrap();
    let cells: Vec<u32> = matrix.iter().map(|(_, _, c)| c).collect();
    assert_eq!(cells, vec![2, 2, 1, 1, 2, 1, 1, 1, 1, 2]);

    let best = find_max_area(&matrix, settings.rows).unwrap();
    assert_eq!(
        (best.area, best.left, best.right, best.width, best.rows),
        (4, 0, 1, 2, 2)
    );
}

#[rstest]
fn test_example_lines_match_fastq(path_to_example_fastq: &str, path_to_example_lines: &str) {
    let settings = TrimSettings::new(2, Classifier::grid(4), Criterion::KBadAllowed(0));
    let lines = open_rows(Path::new(path_to_example_lines), InputFormat::Lines).unwrap();
    let fastq = open_rows(Path::new(path_to_example_fastq), InputFormat::Fastq).unwrap();

    assert_eq!(
        compute_matrix(lines, &settings, false).unwrap(),
        compute_matrix(fastq, &settings, false).unwrap()
    );
}

#[rstest]
fn test_run_config_end_to_end(path_to_run_config: &str, path_to_example_fastq: &str) {
    let config = TrimConfig::try_from(Path::new(path_to_run_config)).unwrap();
    let settings = config.validate().unwrap();
    assert_eq!(settings.criterion, Criterion::KBadAllowed(1));

    let rows = open_rows(Path::new(path_to_example_fastq), config.format).unwrap();
    let matrix = compute_matrix(rows, &settings, false).unwrap();

    // one bad position per read, so every window of both reads survives
    assert!(matrix.iter().all(|(_, _, c)| c == 2));
    let best = find_max_area(&matrix, settings.rows).unwrap();
    assert_eq!((best.left, best.right, best.area), (0, 3, 8));
}

#[rstest]
fn test_gzipped_input() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("reads.txt.gz");
    {
        let mut writer = get_dynamic_writer(&path).unwrap();
        writer.write_all(b"1101\n1111\n").unwrap();
        writer.flush().unwrap();
    }

    let rows = open_rows(&path, InputFormat::Lines).unwrap();
    let settings = TrimSettings::new(2, Classifier::grid(4), Criterion::ExactGood);
    let matrix = compute_matrix(rows, &settings, false).unwrap();
    assert_eq!(matrix.row(0), &[2, 2, 1, 1]);
}

#[rstest]
fn test_simulated_reads_through_parallel_pipeline() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("random.fastq");
    let mut rng = StdRng::seed_from_u64(1);
    simulate_fastq_file(&path, 250, 40, &mut rng).unwrap();

    let classifier = Classifier::new(40, Some(20), 33);
    let criterion = Criterion::KBadAllowed(3);
    let settings = TrimSettings::new(250, classifier, criterion);

    let sequential = compute_matrix(
        open_rows(&path, InputFormat::Fastq).unwrap(),
        &settings,
        false,
    )
    .unwrap();
    let parallel = compute_matrix(
        open_rows(&path, InputFormat::Fastq).unwrap(),
        &settings.with_threads(4).with_queue_capacity(16),
        false,
    )
    .unwrap();
    assert_eq!(parallel, sequential);
}

#[rstest]
fn test_export_round_trip() {
    let rows = InMemoryRows::from(&["1101", "1111"][..]);
    let settings = TrimSettings::new(2, Classifier::grid(4), Criterion::ExactGood);
    let matrix = compute_matrix(rows, &settings, false).unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("matrix.csv.gz");
    export_matrix(&matrix, &path).unwrap();

    let lines: Vec<String> = get_dynamic_reader(&path)
        .unwrap()
        .lines()
        .map(|l| l.unwrap())
        .collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "0; 0; 2;");
    assert_eq!(lines[3], "0; 3; 1;");
    assert_eq!(lines[9], "3; 3; 2;");
}
