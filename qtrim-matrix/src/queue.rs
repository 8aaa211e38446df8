//! Bounded queue between the reader thread and the workers.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Reader         │───>│  WorkQueue      │───>│  Worker 1..N    │
//! │  (producer)     │    │  (bounded)      │    │  (consumers)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Both sides block instead of polling: the producer while the queue is full, a consumer
//! while it is empty. Closing the producer marks the end of input. A consumer sees the end
//! only after every item pushed before the close has been taken, so no worker can quit
//! while rows are still queued.

use crossbeam_channel::{Receiver, Sender, bounded};

pub struct WorkQueue;

impl WorkQueue {
    ///
    /// Create a queue holding at most `capacity` items.
    ///
    pub fn bounded<T>(capacity: usize) -> (QueueProducer<T>, QueueConsumer<T>) {
        let (tx, rx) = bounded(capacity);
        (QueueProducer { sender: tx }, QueueConsumer { receiver: rx })
    }
}

/// Sending half. Dropping it (or calling [`QueueProducer::close`]) ends the input.
pub struct QueueProducer<T> {
    sender: Sender<T>,
}

/// Receiving half. Clone it once per worker.
#[derive(Clone)]
pub struct QueueConsumer<T> {
    receiver: Receiver<T>,
}

impl<T> QueueProducer<T> {
    ///
    /// Enqueue `item`, waiting while the queue is full.
    ///
    /// Hands the item back if every consumer is gone.
    ///
    pub fn push(&self, item: T) -> Result<(), T> {
        self.sender.send(item).map_err(|e| e.into_inner())
    }

    pub fn len(&self) -> usize {
        self.sender.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sender.is_empty()
    }

    /// Signal that no further items will arrive.
    pub fn close(self) {
        drop(self);
    }
}

impl<T> QueueConsumer<T> {
    ///
    /// Take the next item, waiting while the queue is empty.
    ///
    /// Returns `None` once the producer is closed and the queue is drained.
    ///
    pub fn pop(&self) -> Option<T> {
        self.receiver.recv().ok()
    }

    /// Take the next item if one is queued right now.
    pub fn try_pop(&self) -> Option<T> {
        self.receiver.try_recv().ok()
    }
}

impl<T> Iterator for QueueConsumer<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::thread;

    #[rstest]
    fn test_fifo_order() {
        let (producer, consumer) = WorkQueue::bounded(4);
        for i in 0..4 {
            producer.push(i).unwrap();
        }
        assert_eq!(producer.len(), 4);
        producer.close();
        assert_eq!(consumer.collect::<Vec<i32>>(), vec![0, 1, 2, 3]);
    }

    #[rstest]
    fn test_closed_queue_is_drained_before_end() {
        let (producer, consumer) = WorkQueue::bounded(8);
        producer.push("a").unwrap();
        producer.push("b").unwrap();
        producer.close();
        assert_eq!(consumer.pop(), Some("a"));
        assert_eq!(consumer.pop(), Some("b"));
        assert_eq!(consumer.pop(), None);
    }

    #[rstest]
    fn test_try_pop_on_empty_open_queue() {
        let (producer, consumer) = WorkQueue::bounded::<u8>(1);
        assert_eq!(consumer.try_pop(), None);
        assert!(producer.is_empty());
    }

    #[rstest]
    fn test_push_fails_without_consumers() {
        let (producer, consumer) = WorkQueue::bounded(1);
        drop(consumer);
        assert_eq!(producer.push(5), Err(5));
    }

    #[rstest]
    fn test_backpressure_with_many_consumers() {
        let (producer, consumer) = WorkQueue::bounded(2);
        let total: u64 = thread::scope(|s| {
            let handles: Vec<_> = (0..3)
                .map(|_| {
                    let consumer = consumer.clone();
                    s.spawn(move || consumer.sum::<u64>())
                })
                .collect();
            drop(consumer);
            for i in 1..=1000u64 {
                producer.push(i).unwrap();
            }
            producer.close();
            handles.into_iter().map(|h| h.join().unwrap()).sum()
        });
        assert_eq!(total, 500_500);
    }
}
