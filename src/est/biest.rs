use crate::est::goal::GoalRegion;
use crate::est::neighbors::NearestNeighbors;
use crate::est::planner_data::{PlannerData, PlannerDataEdge};
use crate::est::sampling::{UniformValidStateSampler, ValidStateSampler};
use crate::est::state::{RealVectorBounds, RealVectorState};
use crate::est::termination::TerminationCondition;
use crate::est::tree::TreeData;
use crate::est::validity_checker::ValidityChecker;
use num_traits::Float;
use rand::distributions::uniform::SampleUniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The outcome of a solve attempt.
///
/// Only `ExactSolution` and `Timeout` are normal outcomes; the remaining
/// variants report precondition failures. Per-iteration failures (rejected
/// samples, invalid edges, failed connection candidates) are absorbed inside
/// the planner and never surface here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlannerStatus {
    /// A collision-free path from a start to the goal region was found.
    ExactSolution,
    /// The termination condition fired before the trees connected.
    Timeout,
    /// No usable start configuration was provided.
    InvalidStart,
    /// The goal region cannot produce any sample.
    InvalidGoal,
    /// The goal cannot act as a sampleable region.
    UnrecognizedGoalType,
    /// Goal sampling never yielded a usable configuration during the run.
    GoalTreeSeedFailure,
}

/// A reconstructed solution path plus its metadata.
#[derive(Clone, Debug)]
pub struct PlannerSolution<F: Float, const N: usize> {
    /// The path, from a start root to a goal root.
    pub path: Vec<RealVectorState<F, N>>,
    /// Whether the path reaches the goal exactly (this planner only reports
    /// exact solutions).
    pub exact: bool,
    /// The total Euclidean length of the path.
    pub length: F,
    /// The name of the producing planner.
    pub planner: &'static str,
}

/// A bidirectional Expansive Space Trees (EST) planner.
///
/// Grows one tree from the start states and one from the goal region. Each
/// iteration selects a motion of the active tree from a density-weighted PDF,
/// samples a nearby candidate state, keeps it only with probability inversely
/// proportional to the local motion density, and on a valid extension probes
/// the opposite tree for a direct collision-free connection. The trees strictly
/// alternate whenever a candidate survived the density test.
///
/// Template Parameters:
/// - `F`: The floating-point type.
/// - `N`: The dimension of the space.
/// - `NN`: The nearest neighbors data structure.
pub struct BiEst<F: Float, const N: usize, NN: NearestNeighbors<F, N>> {
    bounds: RealVectorBounds<F, N>,
    goal: Box<dyn GoalRegion<F, N>>,
    validity_checker: Box<dyn ValidityChecker<F, N>>,
    /// The local sampler; a default is allocated on first solve if unset.
    sampler: Option<Box<dyn ValidStateSampler<F, N>>>,
    /// The maximum extension distance; also the connection-probe radius.
    max_distance: F,
    /// Always max_distance / 3. Kept smaller than the sampling range to keep
    /// acceptance probabilities of the rejection sampling relatively high.
    nbrhood_radius: F,
    /// Start states provided but not yet inserted into the start tree.
    pending_starts: Vec<RealVectorState<F, N>>,
    start_tree: TreeData<F, N, NN>,
    goal_tree: TreeData<F, N, NN>,
    /// How many goal samples have been drawn so far (valid or not).
    sampled_goal_count: usize,
    /// The states at the seam of the two trees: (start side, goal side).
    connection_point: Option<(RealVectorState<F, N>, RealVectorState<F, N>)>,
    solution: Option<PlannerSolution<F, N>>,
    rng: StdRng,
}

impl<F: Float + SampleUniform + 'static, const N: usize, NN: NearestNeighbors<F, N>> BiEst<F, N, NN> {
    const PLANNER_NAME: &'static str = "BiEST";
    /// Fraction of the space diagonal used when the range is self-configured.
    const DEFAULT_RANGE_FRACTION: f64 = 0.2;

    /// Constructs a new planner.
    ///
    /// Parameters:
    /// - `bounds`: The bounds of the configuration space.
    /// - `goal`: The goal region to plan towards.
    /// - `validity_checker`: Checks states and edges for collisions.
    pub fn new(
        bounds: RealVectorBounds<F, N>,
        goal: Box<dyn GoalRegion<F, N>>,
        validity_checker: Box<dyn ValidityChecker<F, N>>,
    ) -> Self {
        Self {
            bounds,
            goal,
            validity_checker,
            sampler: None,
            max_distance: F::zero(),
            nbrhood_radius: F::zero(),
            pending_starts: Vec::new(),
            start_tree: TreeData::new(),
            goal_tree: TreeData::new(),
            sampled_goal_count: 0,
            connection_point: None,
            solution: None,
            rng: StdRng::from_entropy(),
        }
    }

    /// Queues a start configuration. It is validated and inserted into the
    /// start tree at the beginning of the next solve call; once inserted it
    /// stays cached across resumed solves until `clear`.
    pub fn add_start(&mut self, state: RealVectorState<F, N>) {
        self.pending_starts.push(state);
    }

    /// Sets the maximum extension distance. If left unset, a default is
    /// derived from the workspace at the start of the next solve call.
    pub fn set_range(&mut self, range: F) {
        assert!(range > F::zero(), "The planner range must be positive.");
        self.max_distance = range;
    }

    /// Returns the maximum extension distance (zero until configured).
    pub fn range(&self) -> F {
        self.max_distance
    }

    /// Seeds the planner's random number generator for reproducible runs.
    pub fn set_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Replaces the local sampler used to generate candidate states.
    pub fn set_sampler(&mut self, sampler: Box<dyn ValidStateSampler<F, N>>) {
        self.sampler = Some(sampler);
    }

    /// Returns true if a solution was found.
    pub fn solved(&self) -> bool {
        self.solution.is_some()
    }

    /// Returns the solution of the last solve call, if one was found.
    pub fn solution(&self) -> Option<&PlannerSolution<F, N>> {
        self.solution.as_ref()
    }

    /// Returns the states at the seam of the two trees, if connected.
    pub fn connection_point(
        &self,
    ) -> Option<&(RealVectorState<F, N>, RealVectorState<F, N>)> {
        self.connection_point.as_ref()
    }

    pub fn start_tree_len(&self) -> usize {
        self.start_tree.len()
    }

    pub fn goal_tree_len(&self) -> usize {
        self.goal_tree.len()
    }

    /// Discards both trees, the recorded solution, any queued start states
    /// and the sampler; the configured range and RNG state are kept. Safe to
    /// call repeatedly.
    pub fn clear(&mut self) {
        self.start_tree.clear();
        self.goal_tree.clear();
        self.pending_starts.clear();
        self.sampled_goal_count = 0;
        self.connection_point = None;
        self.solution = None;
        self.sampler = None;
    }

    /// Attempts to find a path from a start state to the goal region.
    ///
    /// Runs until the trees connect or the termination condition fires. May be
    /// called again with a fresh termination condition to resume a previous
    /// attempt; both trees are kept across calls unless `clear` is invoked.
    pub fn solve<T: TerminationCondition>(&mut self, termination: &mut T) -> PlannerStatus {
        self.setup();

        if !self.goal.is_sampleable() {
            log::error!("{}: Unknown type of goal", Self::PLANNER_NAME);
            return PlannerStatus::UnrecognizedGoalType;
        }

        // Drain newly provided start states into the start tree.
        let pending = std::mem::take(&mut self.pending_starts);
        for state in pending {
            if !self.validity_checker.is_state_valid(&state) {
                log::warn!("{}: Skipping invalid start state", Self::PLANNER_NAME);
                continue;
            }
            let neighbors = self.start_tree.neighbors_within(&state, self.nbrhood_radius);
            self.start_tree.add_motion(state, None, &neighbors);
        }

        if self.start_tree.is_empty() {
            log::error!("{}: There are no valid initial states!", Self::PLANNER_NAME);
            return PlannerStatus::InvalidStart;
        }

        if !self.goal.could_sample() {
            log::error!(
                "{}: Insufficient states in sampleable goal region",
                Self::PLANNER_NAME
            );
            return PlannerStatus::InvalidGoal;
        }

        if self.sampler.is_none() {
            self.sampler = Some(Box::new(UniformValidStateSampler::new(self.bounds.clone())));
        }

        log::info!(
            "{}: Starting planning with {} states already in datastructure",
            Self::PLANNER_NAME,
            self.start_tree.len() + self.goal_tree.len()
        );

        let mut start_tree_active = true;
        let mut connection: Option<(usize, usize)> = None;
        let mut seed_failure = false;

        while !termination.evaluate() && connection.is_none() {
            // Make sure the goal tree has at least one motion, and keep
            // feeding it fresh goal samples while it is still small.
            if self.goal_tree.is_empty()
                || self.sampled_goal_count < self.goal_tree.len() / 2
            {
                let state = if self.goal_tree.is_empty() {
                    self.next_goal_blocking(termination)
                } else {
                    self.next_goal()
                };
                if let Some(state) = state {
                    let neighbors =
                        self.goal_tree.neighbors_within(&state, self.nbrhood_radius);
                    self.goal_tree.add_motion(state, None, &neighbors);
                }
                if self.goal_tree.is_empty() {
                    log::error!(
                        "{}: Unable to sample any valid states for goal tree",
                        Self::PLANNER_NAME
                    );
                    seed_failure = true;
                    break;
                }
            }

            let max_distance = self.max_distance;
            let nbrhood_radius = self.nbrhood_radius;
            let Self {
                start_tree,
                goal_tree,
                rng,
                sampler,
                validity_checker,
                goal,
                ..
            } = &mut *self;
            let sampler = sampler.as_mut().expect("sampler is allocated before the main loop");
            let (tree, other) = if start_tree_active {
                (start_tree, &*goal_tree)
            } else {
                (goal_tree, &*start_tree)
            };

            // Select a motion to expand from, biased towards sparse regions.
            let existing = tree.select(rng.gen::<f64>());
            let existing_state = *tree.motion(existing).state();

            // Sample a candidate state in its neighborhood. Failure here does
            // not use up the turn; the same tree stays active.
            let candidate = match sampler.sample_near(
                rng,
                &**validity_checker,
                &existing_state,
                max_distance,
            ) {
                Some(state) => state,
                None => continue,
            };

            // Compute the neighborhood of the candidate state.
            let neighbors = tree.neighbors_within(&candidate, nbrhood_radius);

            // Reject the candidate with probability proportional to the local
            // motion density; an empty neighborhood is always accepted.
            if !neighbors.is_empty() {
                let p = 1.0 - 1.0 / neighbors.len() as f64;
                if rng.gen::<f64>() < p {
                    continue;
                }
            }

            // A candidate that failed the edge check still uses up the turn;
            // the trees swap either way.
            if validity_checker.is_edge_valid(&existing_state, &candidate) {
                let new_index = tree.add_motion(candidate, Some(existing), &neighbors);
                let new_root = tree.motion(new_index).root();
                let new_root_state = *tree.motion(new_root).state();

                // Try to connect to the other tree: scan everything within a
                // max_distance ball (bigger than the "neighborhood" ball),
                // nearest candidates first.
                for other_index in other.neighbors_within_sorted(&candidate, max_distance) {
                    let other_motion = other.motion(other_index);
                    let other_root_state = *other.motion(other_motion.root()).state();
                    if goal.is_start_goal_pair_valid(&new_root_state, &other_root_state)
                        && validity_checker.is_edge_valid(&candidate, other_motion.state())
                    {
                        connection = Some(if start_tree_active {
                            (new_index, other_index)
                        } else {
                            (other_index, new_index)
                        });
                        break;
                    }
                }
            }

            // Swap trees for the next iteration.
            start_tree_active = !start_tree_active;
        }

        log::info!(
            "{}: Created {} states ({} start + {} goal)",
            Self::PLANNER_NAME,
            self.start_tree.len() + self.goal_tree.len(),
            self.start_tree.len(),
            self.goal_tree.len()
        );

        if let Some((start_index, goal_index)) = connection {
            self.connection_point = Some((
                *self.start_tree.motion(start_index).state(),
                *self.goal_tree.motion(goal_index).state(),
            ));
            let path = self.reconstruct_path(start_index, goal_index);
            let length = path
                .windows(2)
                .fold(F::zero(), |acc, pair| acc + pair[0].euclidean_distance(&pair[1]));
            self.solution = Some(PlannerSolution {
                path,
                exact: true,
                length,
                planner: Self::PLANNER_NAME,
            });
            PlannerStatus::ExactSolution
        } else if seed_failure {
            PlannerStatus::GoalTreeSeedFailure
        } else {
            PlannerStatus::Timeout
        }
    }

    /// Flattens both trees into a vertex/edge report.
    pub fn planner_data(&self) -> PlannerData<F, N> {
        let mut data = PlannerData::new();

        for motion in self.start_tree.motions() {
            match motion.parent() {
                None => data.start_vertices.push(*motion.state()),
                Some(parent) => data.edges.push(PlannerDataEdge {
                    from: *self.start_tree.motion(parent).state(),
                    to: *motion.state(),
                }),
            }
        }

        for motion in self.goal_tree.motions() {
            match motion.parent() {
                None => data.goal_vertices.push(*motion.state()),
                // The edges in the goal tree are reversed to be consistent
                // with the start tree.
                Some(parent) => data.edges.push(PlannerDataEdge {
                    from: *motion.state(),
                    to: *self.goal_tree.motion(parent).state(),
                }),
            }
        }

        data.connection = self
            .connection_point
            .map(|(from, to)| PlannerDataEdge { from, to });
        data
    }

    /// Configures the derived range parameters. Invoked at the start of every
    /// solve call; cheap when already set up.
    fn setup(&mut self) {
        if self.max_distance < F::from(1e-3).unwrap() {
            self.max_distance =
                self.bounds.max_extent() * F::from(Self::DEFAULT_RANGE_FRACTION).unwrap();
        }
        // Keep the neighborhood radius smaller than the sampling range to
        // keep probabilities relatively high for rejection sampling.
        self.nbrhood_radius = self.max_distance / F::from(3.0).unwrap();
    }

    /// Draws one goal sample, counting the attempt and discarding samples
    /// that fail the validity check.
    fn next_goal(&mut self) -> Option<RealVectorState<F, N>> {
        let state = self.goal.sample_goal(&mut self.rng)?;
        self.sampled_goal_count += 1;
        if self.validity_checker.is_state_valid(&state) {
            Some(state)
        } else {
            None
        }
    }

    /// Draws goal samples until one is usable or the termination condition
    /// fires. This is the planner's only blocking wait, used while the goal
    /// tree is still empty.
    fn next_goal_blocking<T: TerminationCondition>(
        &mut self,
        termination: &mut T,
    ) -> Option<RealVectorState<F, N>> {
        loop {
            if let Some(state) = self.next_goal() {
                return Some(state);
            }
            if termination.evaluate() {
                return None;
            }
        }
    }

    /// Concatenates the two half-paths met at a connection event: the
    /// start-side parent chain reversed (root to seam), then the goal-side
    /// chain walked towards its root (seam to goal).
    fn reconstruct_path(
        &self,
        start_index: usize,
        goal_index: usize,
    ) -> Vec<RealVectorState<F, N>> {
        let mut path = Vec::new();

        let mut current = Some(start_index);
        while let Some(index) = current {
            path.push(*self.start_tree.motion(index).state());
            current = self.start_tree.motion(index).parent();
        }
        path.reverse();

        let mut current = Some(goal_index);
        while let Some(index) = current {
            path.push(*self.goal_tree.motion(index).state());
            current = self.goal_tree.motion(index).parent();
        }

        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::est::goal::{GoalRegion, GoalStates};
    use crate::est::neighbors::KdTreeNearestNeighbors;
    use crate::est::termination::MaxIterations;
    use crate::est::validity_checker::AlwaysValid;
    use crate::obstacles::{AnalyticValidityChecker, StaticRectangularObstacle};

    type Planner = BiEst<f64, 2, KdTreeNearestNeighbors<f64, 2>>;

    fn unit_bounds() -> RealVectorBounds<f64, 2> {
        RealVectorBounds::new(
            RealVectorState::new([-1.0, -1.0]),
            RealVectorState::new([1.0, 1.0]),
        )
    }

    /// A goal that could sample in principle but never produces a state.
    struct BarrenGoal;

    impl GoalRegion<f64, 2> for BarrenGoal {
        fn could_sample(&self) -> bool {
            true
        }

        fn sample_goal(&mut self, _rng: &mut StdRng) -> Option<RealVectorState<f64, 2>> {
            None
        }
    }

    /// A goal that refuses to be paired with one particular start state.
    struct PairRestrictedGoal {
        inner: GoalStates<f64, 2>,
        rejected_start: RealVectorState<f64, 2>,
    }

    impl GoalRegion<f64, 2> for PairRestrictedGoal {
        fn could_sample(&self) -> bool {
            self.inner.could_sample()
        }

        fn sample_goal(&mut self, rng: &mut StdRng) -> Option<RealVectorState<f64, 2>> {
            self.inner.sample_goal(rng)
        }

        fn is_start_goal_pair_valid(
            &self,
            root_a: &RealVectorState<f64, 2>,
            root_b: &RealVectorState<f64, 2>,
        ) -> bool {
            *root_a != self.rejected_start && *root_b != self.rejected_start
        }
    }

    /// A goal wrapper that cannot act as a sampleable region.
    struct OpaqueGoal;

    impl GoalRegion<f64, 2> for OpaqueGoal {
        fn is_sampleable(&self) -> bool {
            false
        }

        fn could_sample(&self) -> bool {
            false
        }

        fn sample_goal(&mut self, _rng: &mut StdRng) -> Option<RealVectorState<f64, 2>> {
            None
        }
    }

    #[test]
    fn coincident_start_and_goal_solve_quickly() {
        let state = RealVectorState::new([0.0, 0.0]);
        let mut planner = Planner::new(
            unit_bounds(),
            Box::new(GoalStates::single(state)),
            Box::new(AlwaysValid::new()),
        );
        planner.set_seed(1);
        planner.add_start(state);

        let status = planner.solve(&mut MaxIterations::new(100));
        assert_eq!(status, PlannerStatus::ExactSolution);

        let solution = planner.solution().unwrap();
        assert!(solution.exact);
        assert_eq!(solution.path.first(), Some(&state));
        assert_eq!(solution.path.last(), Some(&state));
        assert!(solution.path.len() >= 2);
    }

    #[test]
    fn empty_goal_region_is_invalid() {
        let mut planner = Planner::new(
            unit_bounds(),
            Box::new(GoalStates::new(Vec::new())),
            Box::new(AlwaysValid::new()),
        );
        planner.set_seed(1);
        planner.add_start(RealVectorState::new([0.0, 0.0]));

        let status = planner.solve(&mut MaxIterations::new(100));
        assert_eq!(status, PlannerStatus::InvalidGoal);
        assert_eq!(planner.goal_tree_len(), 0);
    }

    #[test]
    fn unsampleable_goal_type_is_rejected() {
        let mut planner = Planner::new(
            unit_bounds(),
            Box::new(OpaqueGoal),
            Box::new(AlwaysValid::new()),
        );
        planner.add_start(RealVectorState::new([0.0, 0.0]));

        let status = planner.solve(&mut MaxIterations::new(100));
        assert_eq!(status, PlannerStatus::UnrecognizedGoalType);
    }

    #[test]
    fn missing_start_states_are_invalid() {
        let goal = RealVectorState::new([0.5, 0.5]);
        let mut planner = Planner::new(
            unit_bounds(),
            Box::new(GoalStates::single(goal)),
            Box::new(AlwaysValid::new()),
        );

        let status = planner.solve(&mut MaxIterations::new(100));
        assert_eq!(status, PlannerStatus::InvalidStart);
    }

    #[test]
    fn immediate_termination_times_out_without_expanding() {
        let goal = RealVectorState::new([0.5, 0.5]);
        let mut planner = Planner::new(
            unit_bounds(),
            Box::new(GoalStates::single(goal)),
            Box::new(AlwaysValid::new()),
        );
        planner.set_seed(1);
        planner.add_start(RealVectorState::new([-0.5, -0.5]));

        let status = planner.solve(&mut MaxIterations::new(0));
        assert_eq!(status, PlannerStatus::Timeout);
        // The start state was inserted, but the main loop never ran.
        assert_eq!(planner.start_tree_len(), 1);
        assert_eq!(planner.goal_tree_len(), 0);
    }

    #[test]
    fn barren_goal_region_fails_the_run() {
        let mut planner = Planner::new(
            unit_bounds(),
            Box::new(BarrenGoal),
            Box::new(AlwaysValid::new()),
        );
        planner.set_seed(1);
        planner.add_start(RealVectorState::new([0.0, 0.0]));

        let status = planner.solve(&mut MaxIterations::new(50));
        assert_eq!(status, PlannerStatus::GoalTreeSeedFailure);
        assert_eq!(planner.goal_tree_len(), 0);
        // The start tree is retained for diagnostics.
        assert_eq!(planner.start_tree_len(), 1);
    }

    #[test]
    fn sealed_wall_is_never_crossed() {
        // A wall spanning the full height of the space.
        let wall = StaticRectangularObstacle::new(
            RealVectorState::new([-0.05, -1.5]),
            RealVectorState::new([0.05, 1.5]),
        );

        for seed in 0..3 {
            let mut planner = Planner::new(
                unit_bounds(),
                Box::new(GoalStates::single(RealVectorState::new([0.5, 0.0]))),
                Box::new(AnalyticValidityChecker::new(vec![wall.clone()])),
            );
            planner.set_seed(seed);
            planner.add_start(RealVectorState::new([-0.5, 0.0]));

            let status = planner.solve(&mut MaxIterations::new(3_000));
            assert_eq!(status, PlannerStatus::Timeout);
            assert!(!planner.solved());
        }
    }

    #[test]
    fn gap_in_wall_is_found_and_path_is_valid() {
        // A wall with an opening in the upper half of the space.
        let wall = StaticRectangularObstacle::new(
            RealVectorState::new([-0.05, -1.5]),
            RealVectorState::new([0.05, 0.3]),
        );
        let checker = AnalyticValidityChecker::new(vec![wall.clone()]);
        let start = RealVectorState::new([-0.5, -0.5]);
        let goal = RealVectorState::new([0.5, -0.5]);

        let mut planner = Planner::new(
            unit_bounds(),
            Box::new(GoalStates::single(goal)),
            Box::new(AnalyticValidityChecker::new(vec![wall])),
        );
        planner.set_seed(42);
        planner.add_start(start);

        let status = planner.solve(&mut MaxIterations::new(500_000));
        assert_eq!(status, PlannerStatus::ExactSolution);

        let solution = planner.solution().unwrap();
        assert_eq!(solution.path.first(), Some(&start));
        assert_eq!(solution.path.last(), Some(&goal));
        assert!(solution.length > 0.0);
        for pair in solution.path.windows(2) {
            assert!(checker.is_edge_valid(&pair[0], &pair[1]));
        }
        assert!(planner.connection_point().is_some());
    }

    #[test]
    fn rejected_start_goal_pairing_is_never_connected() {
        let start = RealVectorState::new([-0.5, 0.0]);
        let goal = RealVectorState::new([0.5, 0.0]);
        let mut planner = Planner::new(
            unit_bounds(),
            Box::new(PairRestrictedGoal {
                inner: GoalStates::single(goal),
                rejected_start: start,
            }),
            Box::new(AlwaysValid::new()),
        );
        planner.set_seed(7);
        planner.add_start(start);

        // The free space offers plenty of connection opportunities, but every
        // one of them pairs the rejected roots.
        let status = planner.solve(&mut MaxIterations::new(3_000));
        assert_eq!(status, PlannerStatus::Timeout);
        assert!(!planner.solved());
        assert!(planner.connection_point().is_none());
    }

    #[test]
    fn admissible_start_is_chosen_over_a_rejected_one() {
        let rejected = RealVectorState::new([-0.5, 0.2]);
        let allowed = RealVectorState::new([-0.5, -0.2]);
        let goal = RealVectorState::new([0.5, 0.0]);
        let mut planner = Planner::new(
            unit_bounds(),
            Box::new(PairRestrictedGoal {
                inner: GoalStates::single(goal),
                rejected_start: rejected,
            }),
            Box::new(AlwaysValid::new()),
        );
        planner.set_seed(11);
        planner.add_start(rejected);
        planner.add_start(allowed);

        let status = planner.solve(&mut MaxIterations::new(200_000));
        assert_eq!(status, PlannerStatus::ExactSolution);

        // Only the admissible lineage may carry the solution.
        let solution = planner.solution().unwrap();
        assert_eq!(solution.path.first(), Some(&allowed));
        assert_eq!(solution.path.last(), Some(&goal));
    }

    #[test]
    fn solve_can_be_resumed_with_a_fresh_termination_condition() {
        let goal = RealVectorState::new([0.8, 0.8]);
        let mut planner = Planner::new(
            unit_bounds(),
            Box::new(GoalStates::single(goal)),
            Box::new(AlwaysValid::new()),
        );
        planner.set_seed(3);
        planner.set_range(0.2);
        planner.add_start(RealVectorState::new([-0.8, -0.8]));

        // A tiny budget is unlikely to reach across the whole space.
        let first = planner.solve(&mut MaxIterations::new(2));
        assert_eq!(first, PlannerStatus::Timeout);
        let grown = planner.start_tree_len() + planner.goal_tree_len();
        assert!(grown > 0);

        // Resuming keeps the trees and eventually succeeds.
        let second = planner.solve(&mut MaxIterations::new(500_000));
        assert_eq!(second, PlannerStatus::ExactSolution);
        assert!(planner.start_tree_len() + planner.goal_tree_len() >= grown);
    }

    #[test]
    fn clear_is_idempotent_and_empties_both_trees() {
        let state = RealVectorState::new([0.0, 0.0]);
        let mut planner = Planner::new(
            unit_bounds(),
            Box::new(GoalStates::single(state)),
            Box::new(AlwaysValid::new()),
        );
        planner.set_seed(1);
        planner.add_start(state);
        let status = planner.solve(&mut MaxIterations::new(100));
        assert_eq!(status, PlannerStatus::ExactSolution);

        planner.clear();
        planner.clear();
        assert_eq!(planner.start_tree_len(), 0);
        assert_eq!(planner.goal_tree_len(), 0);
        assert!(!planner.solved());
        assert!(planner.connection_point().is_none());

        // A cleared planner has no start states left.
        let status = planner.solve(&mut MaxIterations::new(100));
        assert_eq!(status, PlannerStatus::InvalidStart);
    }

    #[test]
    fn planner_data_reports_roots_edges_and_connection() {
        let start = RealVectorState::new([-0.3, 0.0]);
        let goal = RealVectorState::new([0.3, 0.0]);
        let mut planner = Planner::new(
            unit_bounds(),
            Box::new(GoalStates::single(goal)),
            Box::new(AlwaysValid::new()),
        );
        planner.set_seed(2);
        planner.add_start(start);

        let status = planner.solve(&mut MaxIterations::new(10_000));
        assert_eq!(status, PlannerStatus::ExactSolution);

        let data = planner.planner_data();
        assert_eq!(data.start_vertices, vec![start]);
        // Every goal draw seeds a fresh root, all at the single goal state.
        assert!(!data.goal_vertices.is_empty());
        assert!(data.goal_vertices.iter().all(|v| *v == goal));
        // Every non-root motion contributes exactly one edge.
        let non_roots = planner.start_tree_len() + planner.goal_tree_len()
            - data.start_vertices.len()
            - data.goal_vertices.len();
        assert_eq!(data.edges.len(), non_roots);
        let connection = data.connection.expect("solved run records a connection");
        let (from_start, from_goal) = planner.connection_point().unwrap();
        assert_eq!(&connection.from, from_start);
        assert_eq!(&connection.to, from_goal);
    }
}
