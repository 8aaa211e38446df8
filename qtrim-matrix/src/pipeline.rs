//! Sequential and parallel drivers that read rows and build the count matrix.
//!
//! In parallel mode one reader thread fills a bounded [`WorkQueue`] and `threads` workers
//! drain it, each into its own [`MatrixBuilder`]. Rows are independent and their
//! contributions are plain sums, so the merged matrix equals the sequential one exactly,
//! whatever order the workers happened to take the rows in. The first failing row, on
//! either side of the queue, stops the reader and every worker.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};

use qtrim_core::{CountMatrix, Result, Row, RowSource, TrimError, TrimSettings};

use crate::builder::MatrixBuilder;
use crate::queue::{QueueConsumer, QueueProducer, WorkQueue};

const PROGRESS_UPDATE_EVERY: usize = 10_000;

///
/// Compute the count matrix for `settings.rows` rows of `source`.
///
/// Runs on the calling thread when `settings.threads` is zero, otherwise through the
/// reader/worker pipeline.
///
pub fn compute_matrix<S>(source: S, settings: &TrimSettings, progress: bool) -> Result<CountMatrix>
where
    S: RowSource + Send,
{
    let start = Instant::now();
    info!(
        "Counting {} windows for {} reads of length {} ({} worker threads)",
        settings.criterion, settings.rows, settings.length, settings.threads
    );

    let matrix = if settings.threads == 0 {
        compute_sequential(source, settings, progress)?
    } else {
        compute_parallel(source, settings, progress)?
    };

    info!("Count matrix done in {:.2?}", start.elapsed());
    Ok(matrix)
}

fn make_spinner(progress: bool) -> ProgressBar {
    if !progress {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .template("{spinner:.green} [{elapsed}] {msg} ({per_sec})")
    {
        spinner.set_style(style.tick_strings(&["-", "\\", "|", "/"]));
    }
    spinner.set_message("Processing reads...");
    spinner
}

fn tick(spinner: &ProgressBar) {
    spinner.inc(1);
    let processed = spinner.position();
    if processed % PROGRESS_UPDATE_EVERY as u64 == 0 {
        spinner.set_message(format!("Processed {} reads", processed));
    }
}

///
/// Pull row `index` out of `source`; running dry before `expected` rows is an error.
///
fn read_row<S: RowSource>(source: &mut S, index: usize, expected: usize) -> Result<Row> {
    match source.next_row()? {
        Some(data) => Ok(Row::new(index, data)),
        None => Err(TrimError::MissingRows {
            expected,
            found: index,
        }),
    }
}

pub fn compute_sequential<S: RowSource>(
    mut source: S,
    settings: &TrimSettings,
    progress: bool,
) -> Result<CountMatrix> {
    let spinner = make_spinner(progress);
    let mut builder = MatrixBuilder::new(&settings.criterion, settings.classifier);

    for index in 0..settings.rows {
        let row = read_row(&mut source, index, settings.rows)?;
        builder.push_row(&row)?;
        tick(&spinner);
    }

    spinner.finish_and_clear();
    Ok(builder.finish())
}

///
/// Reader half of the pipeline. Returns the number of rows handed to the workers.
///
/// Stops early, without error, when `stop` is raised or every worker has gone; the
/// workers' own errors explain why. Raises `stop` itself when reading fails.
///
fn read_into_queue<S: RowSource>(
    source: &mut S,
    producer: QueueProducer<Row>,
    rows: usize,
    stop: &AtomicBool,
) -> Result<usize> {
    for index in 0..rows {
        if stop.load(Ordering::Relaxed) {
            return Ok(index);
        }
        let row = match read_row(source, index, rows) {
            Ok(row) => row,
            Err(e) => {
                stop.store(true, Ordering::Relaxed);
                return Err(e);
            }
        };
        if producer.push(row).is_err() {
            return Ok(index);
        }
    }
    // dropping the producer tells the workers that the input is complete
    producer.close();
    Ok(rows)
}

///
/// Worker half of the pipeline. The first failing row raises `stop` for everyone.
///
fn run_worker(
    id: usize,
    consumer: QueueConsumer<Row>,
    settings: &TrimSettings,
    stop: &AtomicBool,
    spinner: &ProgressBar,
) -> Result<CountMatrix> {
    let mut builder = MatrixBuilder::new(&settings.criterion, settings.classifier);
    for row in consumer {
        if stop.load(Ordering::Relaxed) {
            break;
        }
        if let Err(e) = builder.push_row(&row) {
            stop.store(true, Ordering::Relaxed);
            return Err(e);
        }
        tick(spinner);
    }
    debug!("Worker {} processed {} reads", id, builder.rows());
    Ok(builder.finish())
}

pub fn compute_parallel<S>(
    mut source: S,
    settings: &TrimSettings,
    progress: bool,
) -> Result<CountMatrix>
where
    S: RowSource + Send,
{
    let spinner = make_spinner(progress);
    let matrix = run_pipeline(&mut source, settings, &spinner);
    spinner.finish_and_clear();
    matrix
}

fn run_pipeline<S>(
    source: &mut S,
    settings: &TrimSettings,
    spinner: &ProgressBar,
) -> Result<CountMatrix>
where
    S: RowSource + Send,
{
    let workers = settings.threads.max(1);
    let stop = AtomicBool::new(false);
    let (producer, consumer) = WorkQueue::bounded::<Row>(settings.queue_capacity);

    let (read, partials) = thread::scope(|s| {
        let stop = &stop;
        let handles: Vec<_> = (0..workers)
            .map(|id| {
                let consumer = consumer.clone();
                s.spawn(move || run_worker(id, consumer, settings, stop, spinner))
            })
            .collect();
        // only the workers may hold the receiving side, otherwise a reader facing dead
        // workers would wait forever on a full queue
        drop(consumer);

        let reader = s.spawn(move || read_into_queue(source, producer, settings.rows, stop));

        let read = reader.join().unwrap_or_else(|_| Err(TrimError::WorkerPanicked));
        let partials: Vec<Result<CountMatrix>> = handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|_| Err(TrimError::WorkerPanicked)))
            .collect();
        (read, partials)
    });

    let read = read?;
    debug!("Reader queued {} reads for {} workers", read, workers);

    let mut matrix = CountMatrix::new(settings.length);
    for partial in partials {
        matrix.merge(&partial?)?;
    }
    Ok(matrix)
}
