//! Unit tests for fd-mcts.

use fd_core::{Cell, DispatchConfig, RequestId, SimRng, Tick, VehicleId};
use fd_engine::TransitionEngine;
use fd_model::{Action, JointAction, Request, Vehicle, WorldState};
use fd_policy::{Policy, PolicyError, RewardWeights};

use crate::{MctsConfig, MctsError, MctsPlanner, Node, NodeId, SearchTree, legal_actions};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn quiet_engine() -> TransitionEngine {
    TransitionEngine::new(DispatchConfig {
        grid_size:            5,
        vehicle_count:        1,
        request_rate:         0.0,
        cancellation_prob:    0.0,
        cancellation_slope:   0.0,
        traffic_delay_factor: 0.0,
        traffic_noise:        0.0,
        ..DispatchConfig::default()
    })
    .unwrap()
}

fn planner(iterations: u32) -> MctsPlanner {
    let config = MctsConfig { iterations, ..MctsConfig::default() };
    MctsPlanner::new(config, quiet_engine(), RewardWeights::default()).unwrap()
}

/// One vehicle at (0,0); one request (1,0) → (3,0).
fn one_ride_state() -> WorldState {
    WorldState::new(
        vec![Vehicle::idle(VehicleId(0), Cell::new(0, 0))],
        vec![Request::new(RequestId(0), Cell::new(1, 0), Cell::new(3, 0), Tick(0))],
        Tick(0),
    )
}

fn take_ride() -> JointAction {
    JointAction::single(VehicleId(0), Action::Assign(RequestId(0)))
}

// ── Config ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod config {
    use super::*;

    #[test]
    fn defaults() {
        let c = MctsConfig::default();
        assert_eq!(c.iterations, 200);
        assert_eq!(c.exploration, 1.4);
        assert_eq!(c.rollout_depth, 20);
        assert_eq!(c.distance_cutoff, 10);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_invalid() {
        for bad in [
            MctsConfig { exploration: f64::NAN, ..Default::default() },
            MctsConfig { exploration: -1.0, ..Default::default() },
            MctsConfig { rollout_depth: 0, ..Default::default() },
            MctsConfig { distance_cutoff: 0, ..Default::default() },
        ] {
            assert!(matches!(bad.validate(), Err(MctsError::InvalidConfig { .. })));
        }
        let weights = RewardWeights { profit_per_ride: f64::NAN, ..Default::default() };
        assert!(MctsPlanner::new(MctsConfig::default(), quiet_engine(), weights).is_err());
    }

    #[test]
    fn zero_iterations_is_valid() {
        assert!(MctsConfig { iterations: 0, ..Default::default() }.validate().is_ok());
    }

    #[test]
    fn converts_into_policy_error() {
        let e: PolicyError = MctsError::InvalidConfig { msg: "x".into() }.into();
        assert!(matches!(e, PolicyError::Config(m) if m == "x"));
    }
}

// ── Node & tree ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod tree {
    use super::*;

    #[test]
    fn unvisited_ucb_is_infinite() {
        let n = Node::root(one_ride_state());
        assert_eq!(n.ucb(10, 1.4), f64::INFINITY);
        assert_eq!(n.mean_value(), 0.0);
    }

    #[test]
    fn ucb_formula() {
        let mut n = Node::root(one_ride_state());
        n.visits = 4;
        n.value = 8.0;
        let expected = 2.0 + 1.4 * ((16f64).ln() / 4.0).sqrt();
        assert!((n.ucb(16, 1.4) - expected).abs() < 1e-12);
        // ln(1) = 0: pure exploitation.
        assert_eq!(n.ucb(1, 1.4), 2.0);
    }

    #[test]
    fn backpropagate_reaches_root() {
        let mut t = SearchTree::new(Node::root(one_ride_state()));
        let a = t.push(Node::child(one_ride_state(), JointAction::all_idle(), NodeId::ROOT, 1));
        t.get_mut(NodeId::ROOT).children.push(a);
        let b = t.push(Node::child(one_ride_state(), take_ride(), a, 2));
        t.get_mut(a).children.push(b);

        t.backpropagate(b, 3.0);
        t.backpropagate(a, -1.0);
        assert_eq!(t.get(b).visits, 1);
        assert_eq!(t.get(a).visits, 2);
        assert_eq!(t.root().visits, 2);
        assert_eq!(t.root().value, 2.0);
        assert_eq!(t.max_depth(), 2);
    }

    #[test]
    fn most_visited_prefers_first_on_ties() {
        let mut t = SearchTree::new(Node::root(one_ride_state()));
        let a = t.push(Node::child(one_ride_state(), JointAction::all_idle(), NodeId::ROOT, 1));
        let b = t.push(Node::child(one_ride_state(), take_ride(), NodeId::ROOT, 1));
        t.get_mut(NodeId::ROOT).children.extend([a, b]);
        t.get_mut(a).visits = 3;
        t.get_mut(b).visits = 3;
        assert_eq!(t.most_visited_child(NodeId::ROOT), Some(a));
        t.get_mut(b).visits = 4;
        assert_eq!(t.most_visited_child(NodeId::ROOT), Some(b));
        assert_eq!(t.most_visited_child(a), None);
    }
}

// ── Legal actions ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod legal {
    use super::*;

    #[test]
    fn all_idle_first_then_pairs_in_order() {
        let s = WorldState::new(
            vec![
                Vehicle::idle(VehicleId(0), Cell::new(0, 0)),
                Vehicle::idle(VehicleId(1), Cell::new(4, 4)),
            ],
            vec![
                Request::new(RequestId(0), Cell::new(1, 0), Cell::new(2, 0), Tick(0)),
                Request::new(RequestId(1), Cell::new(4, 3), Cell::new(0, 0), Tick(0)),
            ],
            Tick(0),
        );
        let actions = legal_actions(&s, 3);
        assert!(actions[0].is_all_idle());
        let pairs: Vec<_> = actions[1..]
            .iter()
            .map(|a| {
                let (v, act) = a.iter().next().unwrap();
                (v, act)
            })
            .collect();
        assert_eq!(
            pairs,
            [
                (VehicleId(0), Action::Assign(RequestId(0))),
                (VehicleId(1), Action::Assign(RequestId(1))),
            ],
            "distance cutoff 3 drops the far pairs"
        );
        assert_eq!(legal_actions(&s, 10).len(), 5);
    }

    #[test]
    fn busy_vehicles_and_claimed_requests_excluded() {
        let mut s = WorldState::new(
            vec![
                Vehicle::idle(VehicleId(0), Cell::new(0, 0)),
                Vehicle::idle(VehicleId(1), Cell::new(1, 1)),
            ],
            vec![
                Request::new(RequestId(0), Cell::new(1, 0), Cell::new(2, 0), Tick(0)),
                Request::new(RequestId(1), Cell::new(2, 2), Cell::new(0, 0), Tick(0)),
            ],
            Tick(0),
        );
        let r0 = s.requests[0].clone();
        s.vehicles[0].begin_pickup(r0);
        let actions = legal_actions(&s, 10);
        assert_eq!(
            actions,
            [
                JointAction::all_idle(),
                JointAction::single(VehicleId(1), Action::Assign(RequestId(1))),
            ]
        );
    }

    #[test]
    fn empty_world_only_idles() {
        let s = WorldState::new(vec![Vehicle::idle(VehicleId(0), Cell::new(0, 0))], Vec::new(), Tick(0));
        assert_eq!(legal_actions(&s, 10), [JointAction::all_idle()]);
    }
}

// ── Search ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod search {
    use super::*;

    #[test]
    fn zero_iterations_returns_all_idle() {
        let out = planner(0).search(&one_ride_state(), &mut SimRng::new(0)).unwrap();
        assert!(out.best_action.is_all_idle());
        assert_eq!(out.tree.len(), 1);
        assert_eq!(out.stats.root_visits, 0);
    }

    #[test]
    fn single_iteration_has_no_children() {
        let out = planner(1).search(&one_ride_state(), &mut SimRng::new(0)).unwrap();
        assert!(out.best_action.is_all_idle());
        assert_eq!(out.stats.root_visits, 1);
        assert_eq!(out.stats.best_visits, 0);
    }

    #[test]
    fn visit_counts_add_up() {
        let out = planner(120).search(&one_ride_state(), &mut SimRng::new(3)).unwrap();
        assert_eq!(out.stats.root_visits, 120);
        let child_visits: u32 = out.root_children().map(|(_, v, _)| v).sum();
        assert_eq!(child_visits, 119);

        for i in 1..out.tree.len() {
            let id = NodeId(i as u32);
            let node = out.tree.get(id);
            let parent = node.parent.unwrap();
            assert!(out.tree.get(parent).children.contains(&id));
            assert_eq!(node.depth, out.tree.get(parent).depth + 1);
            assert!(node.visits <= out.tree.get(parent).visits);
        }
    }

    #[test]
    fn root_expands_into_every_legal_action() {
        let out = planner(50).search(&one_ride_state(), &mut SimRng::new(1)).unwrap();
        let actions: Vec<_> = out.root_children().map(|(a, _, _)| a.clone()).collect();
        assert_eq!(actions, [JointAction::all_idle(), take_ride()]);
    }

    #[test]
    fn prefers_serving_the_nearby_request() {
        let out = planner(300).search(&one_ride_state(), &mut SimRng::new(42)).unwrap();
        let visits = |target: &JointAction| {
            out.root_children().find(|(a, _, _)| *a == target).map(|(_, v, _)| v).unwrap()
        };
        assert!(visits(&take_ride()) > visits(&JointAction::all_idle()));
        assert_eq!(out.best_action, take_ride());
    }

    #[test]
    fn select_action_matches_search() {
        let p = planner(300);
        let a = p.select_action(&one_ride_state(), &mut SimRng::new(42)).unwrap();
        assert_eq!(a, take_ride());
        assert_eq!(p.name(), "mcts");
    }

    #[test]
    fn same_seed_same_decision() {
        let p = planner(80);
        let a = p.search(&one_ride_state(), &mut SimRng::new(5)).unwrap();
        let b = p.search(&one_ride_state(), &mut SimRng::new(5)).unwrap();
        assert_eq!(a.best_action, b.best_action);
        assert_eq!(a.stats, b.stats);
    }

    #[test]
    fn root_state_is_untouched() {
        let state = one_ride_state();
        let before = state.clone();
        let _ = planner(60).search(&state, &mut SimRng::new(9)).unwrap();
        assert_eq!(state, before);
    }

    #[test]
    fn empty_world_idles() {
        let state = WorldState::new(vec![Vehicle::idle(VehicleId(0), Cell::new(2, 2))], Vec::new(), Tick(0));
        let out = planner(30).search(&state, &mut SimRng::new(0)).unwrap();
        assert!(out.best_action.is_all_idle());
    }
}
