pub mod activity_source;
pub mod dashboard;
pub mod nutrition;
pub mod progress;

pub use activity_source::{ActivitySource, SimulatedActivitySource};
pub use dashboard::{dashboard, DashboardStats, DashboardSummary, DayCalories, GoalProgress, RecentActivity};
pub use nutrition::{nutrition, MacroQuota, NutritionSummary};
pub use progress::{progress, Achievement, ProgressSummary, WeightPoint, WorkoutTypeCount};
