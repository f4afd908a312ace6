//! Integration tests: bootstrap → host task spawner → running activities.
//!
//! Uses the real host [`RtosSpawner`] (plain threads) with simulated clocks
//! so the activities run a bounded number of cycles and then park.

use super::mock_hw::{BudgetDelay, MockPin, RecordingSink, SimClock};

use std::process::Command;
use std::time::{Duration, Instant};

use healthmon::adapters::spawner::RtosSpawner;
use healthmon::adapters::time::{RtosClock, RtosDelay};
use healthmon::app::blink::BlinkActivity;
use healthmon::app::bootstrap::{announce, launch};
use healthmon::app::events::{Level, MonitorEvent};
use healthmon::app::heartbeat::HeartbeatActivity;
use healthmon::app::ports::{EventSink, TaskEntry, TaskSpawner, TaskSpec};
use healthmon::config::MonitorConfig;
use healthmon::error::{Error, Result};

/// Delegates to the host spawner but fails the n-th call.
struct FlakySpawner {
    inner: RtosSpawner,
    calls: usize,
    fail_at: usize,
}

impl TaskSpawner for FlakySpawner {
    fn spawn(&mut self, spec: TaskSpec, entry: TaskEntry) -> Result<()> {
        let call = self.calls;
        self.calls += 1;
        if call == self.fail_at {
            return Err(Error::Spawn(spec.name));
        }
        self.inner.spawn(spec, entry)
    }
}

fn wait_for(mut done: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if done() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    false
}

#[test]
fn launch_runs_both_activities_on_their_own_threads() {
    let config = MonitorConfig::default();
    let pin = MockPin::default();
    let blink_sink = RecordingSink::default();
    let hb_sink = RecordingSink::default();

    let blink_clock = SimClock::at(0);
    let hb_clock = SimClock::at(0);
    let blink = BlinkActivity::new(
        pin.clone(),
        blink_clock.clone(),
        BudgetDelay::new(&blink_clock, 4),
        blink_sink.clone(),
        config.blink_half_period_ms,
    );
    let heartbeat = HeartbeatActivity::new(
        hb_clock.clone(),
        BudgetDelay::new(&hb_clock, 3),
        hb_sink.clone(),
        config.theme,
        config.heartbeat_period_ms,
    );

    let mut spawner = RtosSpawner::new();
    launch(&mut spawner, &config, blink, heartbeat).unwrap();
    assert_eq!(spawner.spawned(), 2);

    assert!(wait_for(|| blink_sink.len() == 4 && hb_sink.len() == 3));

    let levels: Vec<Level> = blink_sink.blinks().iter().map(|r| r.level).collect();
    assert_eq!(levels, [Level::On, Level::Off, Level::On, Level::Off]);
    assert_eq!(pin.history(), [true, false, true, false]);

    let uptimes: Vec<u32> = hb_sink.heartbeats().iter().map(|r| r.uptime_ms).collect();
    assert_eq!(uptimes, [0, 10_000, 20_000]);
}

#[test]
fn failed_second_spawn_leaves_no_activity_running() {
    let config = MonitorConfig::default();
    let pin = MockPin::default();
    let sink = RecordingSink::default();
    let clock = SimClock::at(0);

    let blink = BlinkActivity::new(
        pin.clone(),
        clock.clone(),
        BudgetDelay::new(&clock, 4),
        sink.clone(),
        config.blink_half_period_ms,
    );
    let heartbeat = HeartbeatActivity::new(
        clock.clone(),
        BudgetDelay::new(&clock, 3),
        sink.clone(),
        config.theme,
        config.heartbeat_period_ms,
    );

    let mut spawner = FlakySpawner { inner: RtosSpawner::new(), calls: 0, fail_at: 1 };
    let err = launch(&mut spawner, &config, blink, heartbeat).unwrap_err();

    assert_eq!(err, Error::Spawn("print_task"));
    // The blink thread exists but was released as cancelled.
    assert_eq!(spawner.inner.spawned(), 1);
    std::thread::sleep(Duration::from_millis(100));
    assert!(pin.history().is_empty(), "LED must not blink alone");
    assert_eq!(sink.len(), 0);
}

#[test]
fn startup_record_describes_configuration() {
    let mut sink = RecordingSink::default();
    announce(&mut sink, &MonitorConfig::default());

    let events = sink.events.lock().unwrap();
    let [MonitorEvent::Startup(record)] = &events[..] else {
        panic!("expected exactly one startup record, got {:?}", *events);
    };
    assert_eq!(record.theme, "Audio System Health Monitor");
    assert_eq!(record.led_gpio, 2);
    assert!((record.blink_rate_hz - 2.0).abs() < f32::EPSILON);
    assert_eq!(record.heartbeat_period_ms, 10_000);
}

// ── Fatal errors end the process ──────────────────────────────

const FATAL_CHILD_ENV: &str = "HEALTHMON_FATAL_CHILD";
const FATAL_TEST: &str = "bootstrap_tests::fatal_error_in_one_activity_ends_the_process";

/// Prints heartbeats so the parent can see whether the peer kept running.
struct StdoutSink;

impl EventSink for StdoutSink {
    fn emit(&mut self, event: &MonitorEvent) {
        println!("{event}");
    }
}

/// Runs inside the child process: the blink pin fails on its first write
/// while the heartbeat ticks every 20 ms.  Exits cleanly only if nothing
/// took the process down.
fn run_blink_failure_with_live_heartbeat() -> ! {
    let config = MonitorConfig::default();
    let blink_clock = SimClock::at(0);
    let blink = BlinkActivity::new(
        MockPin::failing(),
        blink_clock.clone(),
        BudgetDelay::new(&blink_clock, 4),
        RecordingSink::default(),
        config.blink_half_period_ms,
    );
    let heartbeat = HeartbeatActivity::new(RtosClock::new(), RtosDelay, StdoutSink, config.theme, 20);

    launch(&mut RtosSpawner::new(), &config, blink, heartbeat).unwrap();
    std::thread::sleep(Duration::from_secs(3));
    std::process::exit(0);
}

#[test]
fn fatal_error_in_one_activity_ends_the_process() {
    if std::env::var_os(FATAL_CHILD_ENV).is_some() {
        run_blink_failure_with_live_heartbeat();
    }

    let started = Instant::now();
    let output = Command::new(std::env::current_exe().unwrap())
        .args([FATAL_TEST, "--exact", "--nocapture", "--test-threads=1"])
        .env(FATAL_CHILD_ENV, "1")
        .output()
        .unwrap();

    assert!(
        !output.status.success(),
        "heartbeat outlived the failed blink task: {}",
        String::from_utf8_lossy(&output.stdout)
    );
    assert!(started.elapsed() < Duration::from_secs(3), "process was not torn down promptly");

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        assert_eq!(output.status.signal(), Some(6), "expected SIGABRT, got {:?}", output.status);
    }
}
