// Core algorithm exports
pub mod aggregator;
pub mod catalog;
pub mod matcher;
pub mod resolver;
pub mod transforms;

pub use aggregator::{aggregate, AggregateError, AggregateScore, WelfareScheme};
pub use catalog::{Catalog, CatalogError};
pub use matcher::{check_override_venues, GroupMatcher, MatchError, MatchResult, Participant};
pub use resolver::{base_value, ResolverParams, UtilityResolver};
