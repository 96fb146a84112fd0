pub mod biest;
pub mod goal;
pub mod neighbors;
pub mod pdf;
pub mod planner_data;
pub mod sampling;
pub mod state;
pub mod termination;
pub mod tree;
pub mod validity_checker;

pub use biest::{BiEst, PlannerSolution, PlannerStatus};
pub use goal::{GoalBall, GoalRegion, GoalStates};
pub use neighbors::{KdTreeNearestNeighbors, LinearNearestNeighbors, NearestNeighbors};
pub use pdf::Pdf;
pub use planner_data::{PlannerData, PlannerDataEdge};
pub use sampling::{UniformValidStateSampler, ValidStateSampler};
pub use state::{RealVectorBounds, RealVectorState};
pub use termination::{MaxIterations, TerminationCondition, Timeout};
pub use tree::{Motion, TreeData};
pub use validity_checker::{AlwaysValid, ValidityChecker};
