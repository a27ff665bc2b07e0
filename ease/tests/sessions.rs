use std::{
  sync::{Arc, Mutex},
  thread,
  time::{Duration, Instant},
};

use ribir_ease::prelude::*;

type Log = Arc<Mutex<Vec<f64>>>;

fn log_writer() -> (Log, impl FnMut(f64) + Send + 'static) {
  let log = Log::default();
  let sink = log.clone();
  (log, move |v| sink.lock().unwrap().push(v))
}

#[test]
fn cancelling_one_session_leaves_the_other_alone() {
  let (kept, write_kept) = log_writer();
  let (stopped, write_stopped) = log_writer();

  let a = tween(write_kept, 0., 100., Duration::from_millis(150), &IN_OUT_SINE).unwrap();
  let b = tween(write_stopped, 100., 0., Duration::from_millis(150), &IN_OUT_SINE).unwrap();
  thread::sleep(Duration::from_millis(40));
  b.cancel();
  b.wait();
  a.wait();

  let kept = kept.lock().unwrap().clone();
  assert_eq!(kept.first(), Some(&0.));
  assert_eq!(kept.last(), Some(&100.));
  assert!(kept.windows(2).all(|w| w[0] <= w[1]), "{kept:?}");
  assert!(kept.iter().all(|v| (0. ..=100.).contains(v)), "{kept:?}");

  let stopped = stopped.lock().unwrap().clone();
  assert_eq!(stopped.first(), Some(&100.));
  assert!(stopped.last().is_some_and(|v| *v > 0.), "{stopped:?}");
  assert!(stopped.len() < kept.len());
}

#[test]
fn sessions_share_catalog_curves_across_threads() {
  let runs: Vec<_> = Curve::ALL
    .into_iter()
    .map(|curve| {
      thread::spawn(move || {
        let (log, write) = log_writer();
        tween(write, 1., 2., Duration::from_millis(80), curve)
          .unwrap()
          .wait();
        let values = log.lock().unwrap().clone();
        (curve.name(), values)
      })
    })
    .collect();

  for run in runs {
    let (name, values) = run.join().unwrap();
    assert_eq!(values.first(), Some(&1.), "{name}");
    assert_eq!(values.last(), Some(&2.), "{name}");
    assert!(values.len() >= 3, "{name}: {values:?}");
  }
}

#[test]
fn dropping_the_handle_keeps_the_session_running() {
  let (log, write) = log_writer();
  let waiter = {
    let handle = tween(write, 0., 1., Duration::from_millis(50), &LINEAR).unwrap();
    let waiter = handle.clone();
    drop(handle);
    waiter
  };
  waiter.wait();
  assert_eq!(log.lock().unwrap().last(), Some(&1.));
}

#[test]
fn curves_resolve_by_name_for_a_session() {
  let curve: Curve = "OutCubic".parse().unwrap();
  let (log, write) = log_writer();
  let handle = tween(write, 0., 8., Duration::from_millis(40), curve).unwrap();
  handle.wait();
  assert_eq!(log.lock().unwrap().last(), Some(&8.));
  assert!("outcubic".parse::<Curve>().is_err());
}

fn slow_writer() -> impl FnMut(f64) + Send + 'static {
  |_| thread::sleep(Duration::from_millis(40))
}

fn timed_linear_run() -> Duration {
  let (log, write) = log_writer();
  let started = Instant::now();
  tween(write, 0., 1., Duration::from_millis(100), &LINEAR)
    .unwrap()
    .wait();
  assert_eq!(log.lock().unwrap().last(), Some(&1.));
  started.elapsed()
}

#[test]
fn slow_writes_do_not_delay_other_sessions() {
  let slow: Vec<_> = (0..thread::available_parallelism().map_or(4, |n| n.get()) + 1)
    .map(|_| tween(slow_writer(), 0., 1., Duration::from_millis(400), &LINEAR).unwrap())
    .collect();

  let took = timed_linear_run();
  assert!(took < Duration::from_millis(300), "100ms tween took {took:?}");

  slow.iter().for_each(TweenHandle::cancel);
  slow.iter().for_each(TweenHandle::wait);
}

#[tokio::test]
async fn slow_writes_do_not_delay_sessions_started_from_async_code() {
  let slow = tween(slow_writer(), 0., 1., Duration::from_millis(400), &LINEAR).unwrap();

  let (log, write) = log_writer();
  let started = Instant::now();
  tween(write, 0., 1., Duration::from_millis(100), &LINEAR)
    .unwrap()
    .finished()
    .await;
  let took = started.elapsed();
  assert!(took < Duration::from_millis(300), "100ms tween took {took:?}");
  assert_eq!(log.lock().unwrap().last(), Some(&1.));

  slow.cancel();
  slow.finished().await;
}
