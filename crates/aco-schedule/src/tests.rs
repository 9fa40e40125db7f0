//! Unit tests for aco-schedule.

#[cfg(test)]
mod helpers {
    use aco_core::{AgentId, MoveParams, SimTime};

    use crate::Event;

    pub const PARAMS: MoveParams = MoveParams { alpha: 1.0, beta: 1.0, delta: 0.5, gamma: 2.0 };

    pub fn move_at(t: f64, agent: u32) -> Event {
        Event::movement(SimTime(t), AgentId(agent), PARAMS, SimTime(100.0))
    }
}

// ── Events ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod event {
    use aco_core::{AgentId, NodeId, SimTime};

    use super::helpers::{PARAMS, move_at};
    use crate::{Event, EventKind, MoveEvent};

    #[test]
    fn rescheduled_keeps_payload() {
        let e = move_at(1.0, 3).rescheduled(2.5);
        assert_eq!(e.time, SimTime(3.5));
        assert_eq!(
            e.kind,
            EventKind::Move(MoveEvent { agent: AgentId(3), params: PARAMS, horizon: SimTime(100.0) })
        );
    }

    #[test]
    fn move_rearms_strictly_before_horizon() {
        let EventKind::Move(m) = move_at(0.0, 0).kind else { unreachable!() };
        assert!(m.rearms_at(SimTime(99.9)));
        assert!(!m.rearms_at(SimTime(100.0)));
        assert!(!m.rearms_at(SimTime(120.0)));
    }

    #[test]
    fn evaporation_rearms_only_on_positive_level() {
        let e = Event::evaporation(SimTime(1.0), NodeId(1), NodeId(2), 0.5, 3.0);
        let EventKind::Evaporation(ev) = e.kind else { unreachable!() };
        assert!(ev.rearms_with(0.25));
        assert!(!ev.rearms_with(0.0));
    }

    #[test]
    fn labels() {
        assert_eq!(move_at(0.0, 0).label(), "move");
        assert_eq!(Event::notification(SimTime(5.0), 1).label(), "notification");
        assert_eq!(
            Event::evaporation(SimTime(1.0), NodeId(1), NodeId(2), 0.5, 3.0).label(),
            "evaporation"
        );
    }
}

// ── Queue ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod queue {
    use aco_core::{AgentId, SimTime};

    use super::helpers::move_at;
    use crate::{Event, EventKind, EventQueue};

    fn agent_of(e: &Event) -> AgentId {
        match e.kind {
            EventKind::Move(m) => m.agent,
            _ => panic!("expected a move event"),
        }
    }

    #[test]
    fn pops_earliest_first() {
        let mut q = EventQueue::new();
        q.insert(move_at(3.0, 0));
        q.insert(move_at(1.0, 1));
        q.insert(move_at(2.0, 2));

        assert_eq!(q.len(), 3);
        assert_eq!(q.peek_time(), Some(SimTime(1.0)));
        assert_eq!(agent_of(&q.pop_min().unwrap()), AgentId(1));
        assert_eq!(agent_of(&q.pop_min().unwrap()), AgentId(2));
        assert_eq!(agent_of(&q.pop_min().unwrap()), AgentId(0));
        assert!(q.pop_min().is_none());
    }

    #[test]
    fn equal_times_pop_in_insertion_order() {
        let mut q = EventQueue::new();
        for agent in [4, 1, 3, 0, 2] {
            q.insert(move_at(5.0, agent));
        }
        let order: Vec<u32> = std::iter::from_fn(|| q.pop_min()).map(|e| agent_of(&e).0).collect();
        assert_eq!(order, [4, 1, 3, 0, 2]);
    }

    #[test]
    fn reinserted_event_goes_behind_equal_times() {
        let mut q = EventQueue::new();
        q.insert(move_at(1.0, 0));
        q.insert(move_at(2.0, 1));
        let first = q.pop_min().unwrap();
        q.insert(first.rescheduled(1.0));

        assert_eq!(agent_of(&q.pop_min().unwrap()), AgentId(1));
        assert_eq!(agent_of(&q.pop_min().unwrap()), AgentId(0));
    }

    #[test]
    fn clear_empties() {
        let mut q = EventQueue::new();
        q.insert(move_at(1.0, 0));
        q.insert(Event::notification(SimTime(2.0), 1));
        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.peek_time(), None);
    }
}

// ── Intervals ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod interval {
    use aco_core::SimRng;

    use crate::{Exponential, ExponentialFamily, IntervalFamily, RandomInterval, ScheduleError};

    #[test]
    fn rejects_bad_means() {
        assert!(matches!(Exponential::new(0.0), Err(ScheduleError::InvalidMean(_))));
        assert!(matches!(Exponential::new(-1.0), Err(ScheduleError::InvalidMean(_))));
        assert!(Exponential::new(f64::NAN).is_err());
        assert!(Exponential::new(f64::INFINITY).is_err());
        assert!(ExponentialFamily.with_mean(0.0).is_err());
    }

    #[test]
    fn draws_are_non_negative_and_deterministic() {
        let exp = ExponentialFamily.with_mean(2.0).unwrap();
        assert_eq!(exp.mean(), 2.0);
        let mut a = SimRng::new(9);
        let mut b = SimRng::new(9);
        for _ in 0..100 {
            let x = exp.draw(a.inner());
            assert!(x >= 0.0 && x.is_finite());
            assert_eq!(x, exp.draw(b.inner()));
        }
    }

    #[test]
    fn sample_mean_tracks_mean() {
        let mut rng = SimRng::new(1234);
        let n = 20_000;
        let total: f64 = (0..n)
            .map(|_| ExponentialFamily.draw_with_mean(3.0, rng.inner()).unwrap())
            .sum();
        let sample_mean = total / n as f64;
        assert!((sample_mean - 3.0).abs() < 0.15, "sample mean {sample_mean}");
    }
}

// ── Property tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use super::helpers::move_at;
    use crate::EventQueue;

    proptest! {
        #[test]
        fn popped_times_are_sorted(times in prop::collection::vec(0.0f64..1_000.0, 0..200)) {
            let mut q = EventQueue::new();
            for (i, &t) in times.iter().enumerate() {
                q.insert(move_at(t, i as u32));
            }
            prop_assert_eq!(q.len(), times.len());

            let mut last = f64::NEG_INFINITY;
            while let Some(e) = q.pop_min() {
                prop_assert!(e.time.0 >= last);
                last = e.time.0;
            }
        }

        #[test]
        fn interleaved_inserts_never_pop_backwards(
            ops in prop::collection::vec((0.0f64..10.0, any::<bool>()), 1..300),
        ) {
            // Mimic the event loop: pops advance a clock and re-arms land later.
            let mut q = EventQueue::new();
            let mut clock = 0.0;
            for (i, &(delay, pop)) in ops.iter().enumerate() {
                q.insert(move_at(clock + delay, i as u32));
                if pop {
                    let e = q.pop_min().unwrap();
                    prop_assert!(e.time.0 >= clock);
                    clock = e.time.0;
                }
            }
        }
    }
}
