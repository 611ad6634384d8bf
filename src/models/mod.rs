pub mod catalog;
pub mod comparison;
pub mod credit;
pub mod insights;
pub mod user_list;

pub use catalog::{
    AggregateCastMember, AggregateCredits, AggregateCrewMember, AggregateJob, AggregateRole,
    CastMember, CatalogTaggedImage, CombinedCredits, CrewMember, Genre, PersonDetail,
    ProductionCredits, ProductionDetail, TaggedImagePage, TaggedMedia,
};
pub use comparison::{ComparedProduction, Comparison, SharedGroups, SharedPerson};
pub use credit::{CastCredit, Credit, CreditKey, CreditedProduction, CrewCredit, MediaKind};
pub use insights::{
    GenreYearStat, KnownForEntry, PredictionEntry, PredictionResult, TaggedImage, WatchEntry,
};
pub use user_list::{ListEntry, ListKind, ListQuery, ListSort, NewListEntry, SortOrder};
