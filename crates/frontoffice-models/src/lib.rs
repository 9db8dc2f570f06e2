pub mod campaign;
pub mod config;
pub mod news;
pub mod pick;
pub mod roster;
pub mod store_schema;
pub mod trade;

pub use campaign::{Campaign, SETTING_DEADLINE_PASSED, SETTING_DEADLINE_WARNED};
pub use config::{DeadlineConfig, FrontofficeConfig, StoreConfig, TradeConfig};
pub use news::{Announcement, AnnouncementKind};
pub use pick::{DraftPick, PickView};
pub use roster::{Position, RosterEntry, StandingRow, Team, DEFAULT_AGE, DEFAULT_RATING};
pub use trade::{
    AssetRef, Direction, Evaluation, Need, ProposalStatus, TradeOffer, TradeProposal, Verdict,
};
