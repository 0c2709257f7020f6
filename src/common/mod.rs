pub mod collection;
pub mod decode;
pub mod entity;
pub mod types;

pub use collection::{
    get_collection, list_referenced, CollectionError, CollectionFetcher, CollectionResult,
};
pub use decode::{Divergence, Schema};
pub use entity::{Entity, Identity, Resource, Snapshot, WritableField};
pub use types::{
    Health, IndicatorLed, Link, Location, PartLocation, PhysicalContext, Placement, State, Status,
};
