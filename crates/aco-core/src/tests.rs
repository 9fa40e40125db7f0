//! Unit tests for aco-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, NodeId};

    #[test]
    fn node_slot_roundtrip() {
        assert_eq!(NodeId(1).slot(), 0);
        assert_eq!(NodeId(7).slot(), 6);
        assert_eq!(NodeId::from_slot(6), NodeId(7));
    }

    #[test]
    fn all_nodes_ascending_from_one() {
        let nodes: Vec<NodeId> = NodeId::all(4).collect();
        assert_eq!(nodes, vec![NodeId(1), NodeId(2), NodeId(3), NodeId(4)]);
    }

    #[test]
    fn display_is_bare_number() {
        assert_eq!(NodeId(12).to_string(), "12");
        assert_eq!(AgentId(3).to_string(), "3");
    }

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }
}

#[cfg(test)]
mod time {
    use crate::SimTime;

    #[test]
    fn arithmetic() {
        let t = SimTime(1.5);
        assert_eq!(t + 2.0, SimTime(3.5));
        assert_eq!(t.after(0.5), SimTime(2.0));
        assert_eq!(SimTime(4.0) - SimTime(1.0), 3.0);

        let mut u = SimTime::ZERO;
        u += 0.25;
        assert_eq!(u.as_f64(), 0.25);
    }

    #[test]
    fn ordering() {
        assert!(SimTime(0.1) < SimTime(0.2));
        assert!(SimTime::ZERO <= SimTime(0.0));
    }
}

#[cfg(test)]
mod params {
    use crate::{AcoError, NodeId, SimParams, SimTime};

    fn base() -> SimParams {
        SimParams {
            nest:         NodeId(1),
            alpha:        1.0,
            beta:         1.0,
            delta:        0.2,
            eta:          2.0,
            rho:          10.0,
            gamma:        0.5,
            colony_size:  3,
            horizon:      100.0,
            seed:         7,
            observations: 20,
        }
    }

    #[test]
    fn valid_params_pass() {
        assert!(base().validate(5).is_ok());
    }

    #[test]
    fn nest_out_of_range() {
        let p = SimParams { nest: NodeId(6), ..base() };
        assert!(matches!(p.validate(5), Err(AcoError::NestOutOfRange { .. })));
        let p = SimParams { nest: NodeId(0), ..base() };
        assert!(p.validate(5).is_err());
    }

    #[test]
    fn rejects_degenerate_values() {
        assert!(SimParams { colony_size: 0, ..base() }.validate(5).is_err());
        assert!(SimParams { delta: 0.0, ..base() }.validate(5).is_err());
        assert!(SimParams { eta: -1.0, ..base() }.validate(5).is_err());
        assert!(SimParams { horizon: f64::NAN, ..base() }.validate(5).is_err());
        assert!(SimParams { alpha: -0.1, ..base() }.validate(5).is_err());
        assert!(SimParams { observations: 0, ..base() }.validate(5).is_err());
        assert!(base().validate(1).is_err());
    }

    #[test]
    fn observation_schedule() {
        let p = base();
        assert_eq!(p.observation_time(1), SimTime(5.0));
        assert_eq!(p.observation_time(20), SimTime(100.0));
        assert_eq!(p.end_time(), SimTime(100.0));
    }

    #[test]
    fn move_params_subset() {
        let m = base().move_params();
        assert_eq!((m.alpha, m.beta, m.delta, m.gamma), (1.0, 1.0, 0.2, 0.5));
    }
}

#[cfg(test)]
mod rng {
    use rand::Rng;

    use crate::{AgentId, AgentRng, SimRng};

    #[test]
    fn agent_rng_deterministic_per_id() {
        let mut a = AgentRng::new(9, AgentId(2));
        let mut b = AgentRng::new(9, AgentId(2));
        for _ in 0..16 {
            assert_eq!(a.unit(), b.unit());
        }
    }

    #[test]
    fn agent_rngs_differ_across_ids() {
        let mut a = AgentRng::new(9, AgentId(0));
        let mut b = AgentRng::new(9, AgentId(1));
        let xs: Vec<f64> = (0..8).map(|_| a.unit()).collect();
        let ys: Vec<f64> = (0..8).map(|_| b.unit()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn first_agent_does_not_share_the_sim_stream() {
        let mut a = AgentRng::new(9, AgentId(0));
        let mut s = SimRng::new(9);
        let xs: Vec<f64> = (0..8).map(|_| a.unit()).collect();
        let ys: Vec<f64> = (0..8).map(|_| s.inner().r#gen::<f64>()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn unit_draws_in_half_open_interval() {
        let mut r = AgentRng::new(1, AgentId(0));
        for _ in 0..1_000 {
            let u = r.unit();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn shuffle_is_permutation() {
        let mut r = SimRng::new(3);
        let mut v: Vec<u32> = (0..10).collect();
        r.shuffle(&mut v);
        v.sort_unstable();
        assert_eq!(v, (0..10).collect::<Vec<_>>());
    }
}
